//! Tagwright command-line tagger.
//!
//! Trains a model on a tagged corpus and tags a second, untagged file,
//! writing `word/TAG` text to stdout.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tagwright_core::{CorpusFormat, Tagger};
use tagwright_trainer::{build_model, read_corpus};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// CLI arguments
#[derive(Parser)]
#[command(name = "tagwright")]
#[command(about = "Train a part-of-speech tagger on one file and tag another")]
#[command(version)]
struct Cli {
    /// Tagged training corpus (`word/TAG` tokens, `[` `]` chunk markers)
    training: PathBuf,

    /// Untagged text to tag, one sentence fragment per line
    test: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let training = read_corpus(&cli.training).context("Failed to read training corpus")?;
    let test = read_corpus(&cli.test).context("Failed to read test input")?;

    let format = CorpusFormat::default();
    let model = build_model(&training, &format).with_context(|| {
        format!("Failed to build model from {}", cli.training.display())
    })?;

    let summary = model.summary();
    info!(
        words = summary.vocabulary_size,
        tags = summary.tag_count,
        tokens = summary.token_count,
        "Model trained"
    );

    let tagger = Tagger::with_defaults(&model);
    let document = tagger.tag_text(&test);
    info!(
        lines = document.lines.len(),
        unknown = document.unknown_count(),
        "Tagging complete"
    );

    let mut stdout = io::stdout().lock();
    write!(stdout, "{document}").context("Failed to write output")?;
    stdout.flush().context("Failed to flush output")?;

    Ok(())
}
