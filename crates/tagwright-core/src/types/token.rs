use serde::{Deserialize, Serialize};

/// One whitespace-separated token of a corpus line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Opening bracket marker.
    Open,
    /// Closing bracket marker.
    Close,
    /// Anything else: a bare word in test text, `word/TAG` in training text.
    Word(&'a str),
}

impl Token<'_> {
    /// Returns `true` for either bracket marker.
    pub fn is_marker(&self) -> bool {
        matches!(self, Token::Open | Token::Close)
    }
}

/// A word with the tag it was annotated with in a training corpus.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaggedPair {
    pub word: String,
    pub tag: String,
}

impl TaggedPair {
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
        }
    }
}
