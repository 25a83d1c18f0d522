// Markov Melody Generator
//
// Generates short monophonic melodies with a first-order Markov chain trained
// on a few melodic patterns, and writes them as Standard MIDI Files.
//
// Architecture:
// - corpus.rs: Training patterns (scale-degree sequences), built-in or JSON
// - markov.rs: Transition table construction and random-walk sampling
// - mode.rs: Modes and the 8-note scale; degree -> pitch / note-name folding
// - midi.rs: Note events and single-track SMF output via `midly`
// - input.rs: Bounded-integer validation for the interactive prompts
// - error.rs: Library error type
//
// The generator is deterministic given a seed (see `melody_prng`).

pub mod corpus;
pub mod error;
pub mod input;
pub mod markov;
pub mod midi;
pub mod mode;

use corpus::Degree;
use markov::TransitionTable;
use melody_prng::MelodyRng;
use mode::Scale;

/// Lowest and highest output file numbers (`ai_melody_NNNN.mid`).
pub const FILE_NUMBER_RANGE: (u32, u32) = (1000, 9999);

/// A sampled melody together with its rendered pitches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Melody {
    pub degrees: Vec<Degree>,
    pub pitches: Vec<u8>,
}

impl Melody {
    /// Sample a melody of `length` notes and map it through `scale`.
    pub fn generate(
        table: &TransitionTable,
        scale: &Scale,
        length: usize,
        rng: &mut MelodyRng,
    ) -> Self {
        let degrees = table.sample(length, rng);
        let pitches = scale.to_pitches(&degrees);
        Melody { degrees, pitches }
    }

    /// Note names joined with " - ", e.g. "C - E - G".
    pub fn note_line(&self, scale: &Scale) -> String {
        scale.note_names(&self.degrees).join(" - ")
    }

    /// Degrees formatted as a list, e.g. "[0, 2, 4]".
    pub fn pattern_line(&self) -> String {
        format!("{:?}", self.degrees)
    }
}

/// Random output file name, `ai_melody_<1000..=9999>.mid`.
pub fn output_file_name(rng: &mut MelodyRng) -> String {
    let (lo, hi) = FILE_NUMBER_RANGE;
    format!("ai_melody_{}.mid", rng.range_u32_inclusive(lo, hi))
}

#[cfg(test)]
mod tests {
    use super::*;
    use corpus::TrainingCorpus;

    #[test]
    fn test_generate_maps_pitches() {
        let table = TransitionTable::build(&TrainingCorpus::default_corpus());
        let scale = Scale::c_major();
        let melody = Melody::generate(&table, &scale, 16, &mut MelodyRng::new(5));
        assert_eq!(melody.degrees.len(), 16);
        assert_eq!(melody.pitches, scale.to_pitches(&melody.degrees));
    }

    #[test]
    fn test_display_lines() {
        let melody = Melody {
            degrees: vec![0, 2, 4, 2, 0],
            pitches: vec![60, 64, 67, 64, 60],
        };
        let scale = Scale::c_major();
        assert_eq!(melody.note_line(&scale), "C - E - G - E - C");
        assert_eq!(melody.pattern_line(), "[0, 2, 4, 2, 0]");
    }

    #[test]
    fn test_output_file_name_format() {
        let mut rng = MelodyRng::new(11);
        for _ in 0..100 {
            let name = output_file_name(&mut rng);
            let number: u32 = name
                .strip_prefix("ai_melody_")
                .and_then(|s| s.strip_suffix(".mid"))
                .and_then(|s| s.parse().ok())
                .unwrap();
            assert!((1000..=9999).contains(&number), "bad name {name}");
        }
    }
}
