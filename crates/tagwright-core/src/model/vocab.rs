use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Maps each training word to the tags it was seen with.
///
/// Tags are kept in encounter order with one entry per occurrence: a word
/// seen as `NN`, `VB`, `NN` stores `[NN, VB, NN]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VocabularyIndex {
    entries: BTreeMap<String, Vec<String>>,
}

impl VocabularyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one occurrence of `word` tagged `tag`.
    pub fn push(&mut self, word: &str, tag: &str) {
        match self.entries.get_mut(word) {
            Some(tags) => tags.push(tag.to_string()),
            None => {
                self.entries.insert(word.to_string(), vec![tag.to_string()]);
            }
        }
    }

    /// Candidate tags for `word`, or `None` if the word is unknown.
    pub fn candidates(&self, word: &str) -> Option<&[String]> {
        self.entries
            .get(word)
            .map(Vec::as_slice)
            .filter(|tags| !tags.is_empty())
    }

    /// Returns `true` if `word` occurred in training.
    pub fn contains(&self, word: &str) -> bool {
        self.candidates(word).is_some()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of recorded occurrences.
    pub fn occurrences(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}
