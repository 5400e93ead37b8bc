use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building a model or tagging text.
#[derive(Debug, Error)]
pub enum TaggerError {
    /// A training token has no word/tag delimiter.
    #[error("malformed training token {token:?} at position {position}: missing delimiter")]
    MalformedToken {
        /// The offending token.
        token: String,
        /// 0-based index of the token in the training stream.
        position: usize,
    },

    /// A training token has nothing before the delimiter.
    #[error("malformed training token {token:?} at position {position}: empty word")]
    EmptyWord { token: String, position: usize },

    /// A training token has nothing after the delimiter.
    #[error("malformed training token {token:?} at position {position}: empty tag")]
    EmptyTag { token: String, position: usize },

    /// An input file could not be opened or read. Files that are not valid
    /// UTF-8 are reported here too, with the decoding error as `source`.
    #[error("cannot read input file {}: {source}", path.display())]
    MissingInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A model snapshot could not be written or read back.
    #[error("model snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// The corpus format or tagger configuration is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for tagwright operations.
pub type Result<T> = std::result::Result<T, TaggerError>;
