// Error type shared by the library's fallible operations.
//
// Only two things can fail: reading/decoding a training corpus file and
// encoding/writing the MIDI output. Prompt input never produces an error; it
// falls back to defaults (see input.rs).

use thiserror::Error;

/// Errors from corpus loading and MIDI output.
#[derive(Debug, Error)]
pub enum MelodyError {
    /// Filesystem read or write failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A corpus file was not valid JSON or did not match the expected shape.
    #[error("invalid corpus JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// `midly` rejected the track while encoding.
    #[error("MIDI encoding failed: {0}")]
    Midi(String),

    /// A value does not fit in its MIDI field (pitch > 127, zero tempo, ...).
    #[error("value out of MIDI range: {0}")]
    OutOfRange(String),
}

pub type Result<T> = std::result::Result<T, MelodyError>;
