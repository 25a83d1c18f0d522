// Validation of the interactive prompt answers.
//
// Melody length and tempo are read as free text. Anything that is not an
// integer in the allowed range is replaced by the default, and the caller
// gets back a notice to print. Bad input never fails the run.

use std::num::IntErrorKind;

/// A bounded integer setting with a fallback value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedSetting {
    /// Noun used in the prompt, e.g. "melody length".
    pub prompt_noun: &'static str,
    /// Noun used in notices, e.g. "length".
    pub label: &'static str,
    /// Unit appended to the default in notices, e.g. "notes".
    pub unit: &'static str,
    pub min: u32,
    pub max: u32,
    pub default: u32,
}

pub const MELODY_LENGTH: BoundedSetting = BoundedSetting {
    prompt_noun: "melody length",
    label: "length",
    unit: "notes",
    min: 8,
    max: 32,
    default: 16,
};

pub const TEMPO_BPM: BoundedSetting = BoundedSetting {
    prompt_noun: "tempo",
    label: "tempo",
    unit: "BPM",
    min: 60,
    max: 180,
    default: 120,
};

/// How a prompt answer was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// The answer was used as given.
    Accepted(u32),
    /// The answer was an integer outside the range.
    OutOfRange(u32),
    /// The answer was not an integer.
    Invalid(u32),
}

impl Resolved {
    /// The effective value.
    pub fn value(&self) -> u32 {
        match *self {
            Resolved::Accepted(v) | Resolved::OutOfRange(v) | Resolved::Invalid(v) => v,
        }
    }
}

impl BoundedSetting {
    /// Prompt text, e.g. "Enter melody length (8-32 notes): ".
    pub fn prompt(&self) -> String {
        format!(
            "Enter {} ({}-{} {}): ",
            self.prompt_noun, self.min, self.max, self.unit
        )
    }

    /// Resolve raw prompt text (surrounding whitespace ignored).
    pub fn resolve(&self, raw: &str) -> Resolved {
        match raw.trim().parse::<i64>() {
            Ok(v) if (i64::from(self.min)..=i64::from(self.max)).contains(&v) => {
                Resolved::Accepted(v as u32)
            }
            Ok(_) => Resolved::OutOfRange(self.default),
            // Too big for i64 is still an integer, just out of range.
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                Resolved::OutOfRange(self.default)
            }
            Err(_) => Resolved::Invalid(self.default),
        }
    }

    /// Console notice for a fallback, or `None` if the answer was accepted.
    pub fn notice(&self, resolved: &Resolved) -> Option<String> {
        let fallback = format!("default {} of {} {}", self.label, self.default, self.unit);
        match resolved {
            Resolved::Accepted(_) => None,
            Resolved::OutOfRange(_) => Some(format!("Using {fallback}")),
            Resolved::Invalid(_) => Some(format!("Invalid input. Using {fallback}")),
        }
    }
}
