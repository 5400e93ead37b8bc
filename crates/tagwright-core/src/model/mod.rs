//! # Trained Model
//!
//! The three tables produced by a training pass. A `Model` is built once and
//! only read afterwards; taggers borrow it.

pub mod freq;
pub mod vocab;

pub use freq::{ConditionalFreq, FreqDist};
pub use vocab::VocabularyIndex;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Emission, vocabulary and tag-transition statistics of a training corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    /// tag → word → count.
    emissions: ConditionalFreq,
    /// word → tags in encounter order.
    vocabulary: VocabularyIndex,
    /// previous tag → next tag → count.
    transitions: ConditionalFreq,
}

/// Size figures of a trained model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSummary {
    /// Distinct training words.
    pub vocabulary_size: usize,
    /// Distinct tags with at least one emission.
    pub tag_count: usize,
    /// Tagged training tokens.
    pub token_count: u64,
    /// Observed tag bigrams.
    pub transition_count: u64,
}

impl Model {
    /// Assemble a model from its tables.
    #[must_use]
    pub fn from_parts(
        emissions: ConditionalFreq,
        vocabulary: VocabularyIndex,
        transitions: ConditionalFreq,
    ) -> Self {
        Self {
            emissions,
            vocabulary,
            transitions,
        }
    }

    pub fn emissions(&self) -> &ConditionalFreq {
        &self.emissions
    }

    pub fn vocabulary(&self) -> &VocabularyIndex {
        &self.vocabulary
    }

    pub fn transitions(&self) -> &ConditionalFreq {
        &self.transitions
    }

    /// Training tags of `word`, `None` if it never occurred.
    pub fn candidates(&self, word: &str) -> Option<&[String]> {
        self.vocabulary.candidates(word)
    }

    /// `P(word | tag)`.
    pub fn emission_prob(&self, word: &str, tag: &str) -> f64 {
        self.emissions.freq(tag, word)
    }

    /// `P(tag | previous)`.
    pub fn transition_prob(&self, previous: &str, tag: &str) -> f64 {
        self.transitions.freq(previous, tag)
    }

    #[must_use]
    pub fn summary(&self) -> ModelSummary {
        ModelSummary {
            vocabulary_size: self.vocabulary.len(),
            tag_count: self.emissions.len(),
            token_count: self.emissions.total(),
            transition_count: self.transitions.total(),
        }
    }

    /// Serialize the model to a JSON snapshot.
    ///
    /// # Errors
    ///
    /// Returns `TaggerError::Snapshot` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Load a model from a snapshot written by [`Model::to_json`].
    ///
    /// # Errors
    ///
    /// Returns `TaggerError::Snapshot` if the snapshot is not valid JSON or
    /// does not describe a model.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
impl Model {
    /// Build a model from `(word, tag)` pairs in corpus order.
    pub(crate) fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut emissions = ConditionalFreq::new();
        let mut vocabulary = VocabularyIndex::new();
        let mut transitions = ConditionalFreq::new();
        for &(word, tag) in pairs {
            emissions.increment(tag, word);
            vocabulary.push(word, tag);
        }
        for window in pairs.windows(2) {
            transitions.increment(window[0].1, window[1].1);
        }
        Self::from_parts(emissions, vocabulary, transitions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TaggerError;

    fn sample_model() -> Model {
        Model::from_pairs(&[("the", "DT"), ("old", "JJ"), ("board", "NN")])
    }

    #[test]
    fn test_probabilities() {
        let model = sample_model();
        assert_eq!(model.emission_prob("old", "JJ"), 1.0);
        assert_eq!(model.emission_prob("old", "NN"), 0.0);
        assert_eq!(model.transition_prob("DT", "JJ"), 1.0);
        assert_eq!(model.transition_prob("NN", "DT"), 0.0);
        assert_eq!(model.candidates("board").unwrap(), ["NN"]);
        assert!(model.candidates("chairman").is_none());
    }

    #[test]
    fn test_summary_counts() {
        let summary = sample_model().summary();
        assert_eq!(summary.vocabulary_size, 3);
        assert_eq!(summary.tag_count, 3);
        assert_eq!(summary.token_count, 3);
        assert_eq!(summary.transition_count, 2);
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let model = sample_model();
        let json = model.to_json().unwrap();
        let back = Model::from_json(&json).unwrap();
        assert_eq!(model, back);
    }

    #[test]
    fn test_invalid_snapshot_errors() {
        assert!(matches!(
            Model::from_json("{\"emissions\": 3}"),
            Err(TaggerError::Snapshot(_))
        ));
    }
}
