//! Corpus loading from disk.

use std::fs;
use std::path::Path;

use tagwright_core::{CorpusFormat, Model, Result, TaggerError};
use tracing::debug;

use crate::builder::build_model;

/// Read a whole corpus file into memory.
///
/// # Errors
///
/// Returns `TaggerError::MissingInput` naming the path when the file cannot
/// be opened or is not valid UTF-8.
pub fn read_corpus<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| TaggerError::MissingInput {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "corpus loaded");
    Ok(text)
}

/// Read a training corpus file and build a model from it.
///
/// # Errors
///
/// Any error of [`read_corpus`] or [`build_model`].
pub fn train_from_path<P: AsRef<Path>>(path: P, format: &CorpusFormat) -> Result<Model> {
    let text = read_corpus(path)?;
    build_model(&text, format)
}
