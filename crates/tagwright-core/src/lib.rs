//! # Tagwright Core
//!
//! The tagging engine of tagwright: the trained model tables, the shape rules
//! for unknown words, and the greedy left-to-right decoder that assigns one
//! part-of-speech tag per word using `P(word | tag) * P(tag | previous tag)`.
//!
//! Models are produced by `tagwright-trainer`; this crate only reads them.
//!
//! ## Quick Start
//!
//! ```rust
//! use tagwright_core::model::{ConditionalFreq, VocabularyIndex};
//! use tagwright_core::{Model, Tagger};
//!
//! let mut emissions = ConditionalFreq::new();
//! let mut vocabulary = VocabularyIndex::new();
//! let mut transitions = ConditionalFreq::new();
//! for (word, tag) in [("the", "DT"), ("board", "NN")] {
//!     emissions.increment(tag, word);
//!     vocabulary.push(word, tag);
//! }
//! transitions.increment("DT", "NN");
//!
//! let model = Model::from_parts(emissions, vocabulary, transitions);
//! let tagger = Tagger::with_defaults(&model);
//! let doc = tagger.tag_text("[ the board ] approved");
//!
//! assert_eq!(doc.to_string(), "[ the/DT board/NN ]approved/VBN \n\n");
//! ```
pub mod error;
pub mod evaluation;
pub mod model;
pub mod tagger;
pub mod types;

// Re-export primary API
pub use error::{Result, TaggerError};
pub use evaluation::{Evaluation, evaluate_gold};
pub use model::{Model, ModelSummary};
pub use tagger::{
    Decision, GreedyDecoder, Tagger, TaggerConfig, TaggingSession, UnknownWordHeuristic,
};
pub use types::{
    CorpusFormat, FallbackTag, OutputToken, TagSource, TaggedDocument, TaggedLine, TaggedPair,
    TaggedWord, Token,
};
