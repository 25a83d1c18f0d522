// Training corpus: the melodic patterns the Markov chain learns from.
//
// Each pattern is a sequence of scale-degree indices (0 = tonic, 7 = octave
// above). The built-in corpus is five short patterns; an alternate corpus
// with the same shape can be loaded from JSON:
//
//   {"patterns": [[0, 2, 4, 2, 0], [4, 2, 0]]}
//
// The corpus is plain configuration handed to `TransitionTable::build`
// (markov.rs); nothing else holds training data.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A scale-degree index. Values may exceed 7; see `Scale::pitch_of`.
pub type Degree = u32;

/// An ordered list of training patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingCorpus {
    pub patterns: Vec<Vec<Degree>>,
}

impl TrainingCorpus {
    pub fn new(patterns: Vec<Vec<Degree>>) -> Self {
        TrainingCorpus { patterns }
    }

    /// The five built-in patterns.
    pub fn default_corpus() -> Self {
        TrainingCorpus {
            patterns: vec![
                vec![0, 2, 4, 2, 0],          // C-E-G-E-C
                vec![0, 0, 4, 4, 5, 5, 4],    // twinkle
                vec![4, 4, 5, 7, 7, 5, 4, 2], // rising and falling
                vec![0, 2, 4, 5, 4, 2, 0],    // up and down the scale
                vec![4, 2, 0, 2, 4, 4, 4],
            ],
        }
    }

    /// Load from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    /// Parse from a JSON string.
    pub fn from_json(data: &str) -> Result<Self> {
        let corpus: TrainingCorpus = serde_json::from_str(data)?;
        Ok(corpus)
    }

    /// Total number of adjacent (current, next) pairs across all patterns.
    pub fn transition_count(&self) -> usize {
        self.patterns
            .iter()
            .map(|p| p.len().saturating_sub(1))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MelodyError;

    #[test]
    fn test_default_corpus_shape() {
        let corpus = TrainingCorpus::default_corpus();
        assert_eq!(corpus.patterns.len(), 5);
        assert_eq!(corpus.patterns[2], vec![4, 4, 5, 7, 7, 5, 4, 2]);
        // 4 + 6 + 7 + 6 + 6
        assert_eq!(corpus.transition_count(), 29);
    }

    #[test]
    fn test_from_json() {
        let corpus = TrainingCorpus::from_json(r#"{"patterns": [[0, 1], [9]]}"#).unwrap();
        assert_eq!(corpus, TrainingCorpus::new(vec![vec![0, 1], vec![9]]));
        assert_eq!(corpus.transition_count(), 1);
    }

    #[test]
    fn test_from_json_rejects_negative_degrees() {
        let err = TrainingCorpus::from_json(r#"{"patterns": [[0, -1]]}"#).unwrap_err();
        assert!(matches!(err, MelodyError::Json(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = TrainingCorpus::load(Path::new("/nonexistent/corpus.json")).unwrap_err();
        assert!(matches!(err, MelodyError::Io(_)));
    }
}
