// Scales: mapping scale degrees to MIDI pitches and note names.
//
// A `Scale` is eight pitches, one octave from the root up to the root an
// octave higher, built from one of the seven-note church modes. The default
// is C Ionian from middle C, i.e. the C major scale C4..C5.
//
// Degrees fold into the single octave with `degree % 8`. Degree 7 is the
// upper tonic (C5 in the default scale); degree 8 and above wrap back to the
// bottom of the scale, so a pattern that climbs past the octave is flattened
// into one octave of output.

use crate::corpus::Degree;
use serde::{Deserialize, Serialize};

/// Number of pitches in a scale (seven mode degrees plus the octave).
pub const SCALE_LEN: usize = 8;

/// The church modes, each defined by their interval pattern from the final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// C D E F G A B C (major)
    Ionian,
    /// Natural minor with raised 6th
    Dorian,
    /// Half-step from 1 to 2
    Phrygian,
    /// Raised 4th
    Lydian,
    /// Major with lowered 7th
    Mixolydian,
    /// Natural minor
    Aeolian,
}

impl Mode {
    /// Semitone intervals from the final to degrees 1-7.
    pub fn intervals(self) -> [u8; 7] {
        match self {
            Mode::Ionian => [0, 2, 4, 5, 7, 9, 11],
            Mode::Dorian => [0, 2, 3, 5, 7, 9, 10],
            Mode::Phrygian => [0, 1, 3, 5, 7, 8, 10],
            Mode::Lydian => [0, 2, 4, 6, 7, 9, 11],
            Mode::Mixolydian => [0, 2, 4, 5, 7, 9, 10],
            Mode::Aeolian => [0, 2, 3, 5, 7, 8, 10],
        }
    }

    /// Parse a mode by name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Mode> {
        match name.to_lowercase().as_str() {
            "ionian" | "major" => Some(Mode::Ionian),
            "dorian" => Some(Mode::Dorian),
            "phrygian" => Some(Mode::Phrygian),
            "lydian" => Some(Mode::Lydian),
            "mixolydian" => Some(Mode::Mixolydian),
            "aeolian" | "minor" => Some(Mode::Aeolian),
            _ => None,
        }
    }
}

/// Eight MIDI pitches with their note names. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scale {
    pitches: [u8; SCALE_LEN],
    names: [&'static str; SCALE_LEN],
}

impl Scale {
    /// C major from C4 (60) to C5 (72).
    pub fn c_major() -> Self {
        Scale::from_mode(Mode::Ionian, 60)
    }

    /// Build a scale from a mode and a root MIDI pitch.
    ///
    /// `root` must leave room for the octave: `root <= 115`.
    pub fn from_mode(mode: Mode, root: u8) -> Self {
        let root = root.min(115);
        let intervals = mode.intervals();
        let mut pitches = [root + 12; SCALE_LEN];
        let mut names = [pitch_name(root); SCALE_LEN];
        for (i, &iv) in intervals.iter().enumerate() {
            pitches[i] = root + iv;
            names[i] = pitch_name(root + iv);
        }
        Scale { pitches, names }
    }

    pub fn pitches(&self) -> &[u8; SCALE_LEN] {
        &self.pitches
    }

    /// MIDI pitch of a degree, folded into the octave.
    pub fn pitch_of(&self, degree: Degree) -> u8 {
        self.pitches[degree as usize % SCALE_LEN]
    }

    /// Note name of a degree, folded into the octave.
    pub fn name_of(&self, degree: Degree) -> &'static str {
        self.names[degree as usize % SCALE_LEN]
    }

    /// Map a melody to MIDI pitches.
    pub fn to_pitches(&self, melody: &[Degree]) -> Vec<u8> {
        melody.iter().map(|&d| self.pitch_of(d)).collect()
    }

    /// Map a melody to note names.
    pub fn note_names(&self, melody: &[Degree]) -> Vec<&'static str> {
        melody.iter().map(|&d| self.name_of(d)).collect()
    }
}

/// Pitch-class name of a MIDI pitch.
pub fn pitch_name(pitch: u8) -> &'static str {
    match pitch % 12 {
        0 => "C", 1 => "C#", 2 => "D", 3 => "Eb",
        4 => "E", 5 => "F", 6 => "F#", 7 => "G",
        8 => "Ab", 9 => "A", 10 => "Bb", _ => "B",
    }
}
