pub mod format;
pub mod output;
pub mod tag;
pub mod token;

pub use format::{CorpusFormat, split_lines};
pub use output::{OutputToken, TagSource, TaggedDocument, TaggedLine, TaggedWord};
pub use tag::{FallbackTag, INITIAL_TAG};
pub use token::{TaggedPair, Token};
