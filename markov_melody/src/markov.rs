// First-order Markov chain over scale degrees.
//
// The transition table maps each degree to the list of degrees that followed
// it anywhere in the training corpus, in the order they were seen and with
// repeats. Repeats are the weights: sampling uniformly from the list picks a
// successor with probability proportional to how often it followed.
//
// The table is built once from a `TrainingCorpus` (corpus.rs) and is
// read-only afterwards. Keys are kept in a BTreeMap so that, for a fixed
// seed, the initial-key choice is reproducible.

use crate::corpus::{Degree, TrainingCorpus};
use melody_prng::MelodyRng;
use std::collections::BTreeMap;
use std::path::Path;

/// Degree -> successors observed in training (with repetition).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTable {
    transitions: BTreeMap<Degree, Vec<Degree>>,
}

impl TransitionTable {
    /// Build the table from every adjacent pair in every pattern.
    ///
    /// Single-element and empty patterns contribute nothing. A degree that
    /// only ever appears last in a pattern never becomes a key.
    pub fn build(corpus: &TrainingCorpus) -> Self {
        let mut transitions: BTreeMap<Degree, Vec<Degree>> = BTreeMap::new();
        for pattern in &corpus.patterns {
            for pair in pattern.windows(2) {
                transitions.entry(pair[0]).or_default().push(pair[1]);
            }
        }
        TransitionTable { transitions }
    }

    /// Build from a corpus file, or from the built-in corpus when `path` is
    /// `None`.
    ///
    /// A file that can't be read or parsed, or one that yields no transitions,
    /// falls back to the built-in corpus. The returned notice describes what
    /// was loaded or why the fallback happened.
    pub fn from_corpus_path(path: Option<&Path>) -> (Self, Option<String>) {
        let default_table = || TransitionTable::build(&TrainingCorpus::default_corpus());
        let Some(path) = path else {
            return (default_table(), None);
        };

        match TrainingCorpus::load(path) {
            Ok(corpus) => {
                let table = TransitionTable::build(&corpus);
                if table.is_empty() {
                    let notice = "No transitions in corpus. Using default patterns.".to_string();
                    (default_table(), Some(notice))
                } else {
                    let notice = format!("Loaded {} patterns.", corpus.patterns.len());
                    (table, Some(notice))
                }
            }
            Err(e) => {
                let notice = format!("Failed to load: {}. Using default patterns.", e);
                (default_table(), Some(notice))
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Number of distinct source degrees.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Successors of `degree`, or `None` if it was never followed by anything.
    pub fn successors(&self, degree: Degree) -> Option<&[Degree]> {
        self.transitions.get(&degree).map(Vec::as_slice)
    }

    /// All source degrees in ascending order.
    pub fn keys(&self) -> Vec<Degree> {
        self.transitions.keys().copied().collect()
    }

    /// Iterate `(degree, successors)` in ascending degree order.
    pub fn iter(&self) -> impl Iterator<Item = (Degree, &[Degree])> {
        self.transitions.iter().map(|(&k, v)| (k, v.as_slice()))
    }

    /// Random walk of exactly `length` degrees.
    ///
    /// Starts from a uniformly random key. At each step a successor is drawn
    /// uniformly from the current degree's list; a degree with no recorded
    /// successors restarts the walk from a fresh random key. An empty table
    /// yields an empty melody regardless of `length`.
    pub fn sample(&self, length: usize, rng: &mut MelodyRng) -> Vec<Degree> {
        let keys = self.keys();
        let Some(&first) = rng.choose(&keys) else {
            return Vec::new();
        };
        if length == 0 {
            return Vec::new();
        }

        let mut melody = Vec::with_capacity(length);
        melody.push(first);
        let mut current = first;

        for _ in 1..length {
            let next = match self.successors(current).and_then(|s| rng.choose(s)) {
                Some(&next) => next,
                // Restart: `keys` is non-empty here.
                None => keys[rng.range_usize(0, keys.len())],
            };
            melody.push(next);
            current = next;
        }

        melody
    }
}
