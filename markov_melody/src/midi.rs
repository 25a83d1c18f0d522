// MIDI output for generated melodies.
//
// A melody becomes one `NoteEvent` per note: note `i` starts on beat `i`,
// lasts one beat, velocity 100, channel 0. The events are written as a
// single-track Standard MIDI File (SMF Format 0) with a track name and a
// tempo meta event at tick 0.
//
// Uses the `midly` crate for MIDI encoding.

use crate::error::{MelodyError, Result};
use midly::{
    Format, Header, MetaMessage, MidiMessage, Smf, Timing, Track, TrackEvent, TrackEventKind,
    num::{u4, u7, u15, u24, u28},
};
use std::path::Path;

/// Ticks per quarter note (one beat) in MIDI output.
pub const TICKS_PER_BEAT: u16 = 480;

pub const TRACK_NAME: &str = "AI Generated Melody";
pub const NOTE_VELOCITY: u8 = 100;

/// A single note to be rendered, timed in beats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteEvent {
    pub channel: u8,
    pub pitch: u8,
    pub start_beat: u32,
    pub duration_beats: u32,
    pub velocity: u8,
}

/// One note per pitch, back to back, one beat each.
pub fn melody_events(pitches: &[u8]) -> Vec<NoteEvent> {
    pitches
        .iter()
        .enumerate()
        .map(|(i, &pitch)| NoteEvent {
            channel: 0,
            pitch,
            start_beat: i as u32,
            duration_beats: 1,
            velocity: NOTE_VELOCITY,
        })
        .collect()
}

/// Convert pitches to MIDI and write to a file.
pub fn write_midi(pitches: &[u8], tempo_bpm: u32, path: &Path) -> Result<()> {
    let buf = render_midi(&melody_events(pitches), tempo_bpm)?;
    std::fs::write(path, &buf)?;
    Ok(())
}

/// Encode note events as SMF bytes.
pub fn render_midi(events: &[NoteEvent], tempo_bpm: u32) -> Result<Vec<u8>> {
    let smf = events_to_smf(events, tempo_bpm)?;
    let mut buf = Vec::new();
    smf.write(&mut buf)
        .map_err(|e| MelodyError::Midi(e.to_string()))?;
    Ok(buf)
}

/// Build an in-memory single-track SMF.
fn events_to_smf(events: &[NoteEvent], tempo_bpm: u32) -> Result<Smf<'static>> {
    let tempo_us = tempo_microseconds(tempo_bpm)?;

    let mut smf = Smf::new(Header::new(
        Format::SingleTrack,
        Timing::Metrical(u15::new(TICKS_PER_BEAT)),
    ));

    let mut track: Track<'static> = Vec::new();
    track.push(TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Meta(MetaMessage::TrackName(TRACK_NAME.as_bytes())),
    });
    track.push(TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Meta(MetaMessage::Tempo(u24::new(tempo_us))),
    });

    // (tick, is_note_on, event). Offs sort before ons at the same tick so
    // back-to-back notes of equal pitch don't cut each other short.
    let mut timeline: Vec<(u32, bool, NoteEvent)> = Vec::with_capacity(events.len() * 2);
    for ev in events {
        if ev.pitch > 127 || ev.velocity > 127 || ev.channel > 15 {
            return Err(MelodyError::OutOfRange(format!("{ev:?}")));
        }
        let start = beats_to_ticks(ev.start_beat)?;
        let end = beats_to_ticks(ev.start_beat.saturating_add(ev.duration_beats))?;
        timeline.push((start, true, *ev));
        timeline.push((end, false, *ev));
    }
    timeline.sort_by_key(|&(tick, is_on, _)| (tick, is_on));

    let mut last_tick: u32 = 0;
    for (tick, is_on, ev) in timeline {
        let message = if is_on {
            MidiMessage::NoteOn {
                key: u7::new(ev.pitch),
                vel: u7::new(ev.velocity),
            }
        } else {
            MidiMessage::NoteOff {
                key: u7::new(ev.pitch),
                vel: u7::new(0),
            }
        };
        track.push(TrackEvent {
            delta: u28::new(tick - last_tick),
            kind: TrackEventKind::Midi {
                channel: u4::new(ev.channel),
                message,
            },
        });
        last_tick = tick;
    }

    track.push(TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
    });
    smf.tracks.push(track);

    Ok(smf)
}

/// Microseconds per quarter note for a tempo in BPM.
fn tempo_microseconds(tempo_bpm: u32) -> Result<u32> {
    const MAX_U24: u32 = 0x00FF_FFFF;
    if tempo_bpm == 0 || 60_000_000 / tempo_bpm > MAX_U24 {
        return Err(MelodyError::OutOfRange(format!("tempo {tempo_bpm} BPM")));
    }
    Ok(60_000_000 / tempo_bpm)
}

fn beats_to_ticks(beats: u32) -> Result<u32> {
    const MAX_U28: u32 = 0x0FFF_FFFF;
    beats
        .checked_mul(u32::from(TICKS_PER_BEAT))
        .filter(|&t| t <= MAX_U28)
        .ok_or_else(|| MelodyError::OutOfRange(format!("beat {beats}")))
}
