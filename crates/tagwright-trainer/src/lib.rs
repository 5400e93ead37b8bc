//! # Tagwright Trainer
//!
//! Builds a [`Model`](tagwright_core::Model) from a part-of-speech tagged
//! corpus in one pass: per-tag word counts, the tags seen for every word, and
//! tag bigram counts across the whole token stream.
//!
//! ```rust
//! use tagwright_core::{CorpusFormat, Tagger};
//! use tagwright_trainer::build_model;
//!
//! let corpus = "[ the/DT board/NN ] will/MD join/VB";
//! let model = build_model(corpus, &CorpusFormat::default()).unwrap();
//! let tagger = Tagger::with_defaults(&model);
//! assert_eq!(tagger.tag_text("the board").to_string(), "the/DT board/NN \n\n");
//! ```

pub mod builder;
pub mod data;

pub use builder::{ModelBuilder, build_model};
pub use data::{read_corpus, train_from_path};
