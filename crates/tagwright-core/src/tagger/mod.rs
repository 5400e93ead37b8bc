//! # Sequential Tagger
//!
//! Streams over test text left to right, carrying the previously assigned
//! tag from word to word and from line to line.

pub mod decoder;
pub mod heuristic;

pub use decoder::{Decision, GreedyDecoder};
pub use heuristic::UnknownWordHeuristic;

use tracing::debug;

use crate::error::{Result, TaggerError};
use crate::model::Model;
use crate::types::{
    CorpusFormat, INITIAL_TAG, OutputToken, TaggedDocument, TaggedLine, TaggedWord, Token,
    split_lines,
};

/// Configuration for the tagger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggerConfig {
    /// Markers and word/tag delimiter used when reading and rendering.
    pub format: CorpusFormat,
    /// History assumed before the first word of a session.
    pub initial_tag: String,
}

impl Default for TaggerConfig {
    fn default() -> Self {
        Self {
            format: CorpusFormat::default(),
            initial_tag: INITIAL_TAG.to_string(),
        }
    }
}

impl TaggerConfig {
    /// Create a new tagger configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the corpus format.
    pub fn with_format(mut self, format: CorpusFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the tag assumed before the first word.
    pub fn with_initial_tag(mut self, tag: impl Into<String>) -> Self {
        self.initial_tag = tag.into();
        self
    }

    /// # Errors
    ///
    /// Returns `TaggerError::InvalidConfig` for an unusable format or a blank
    /// initial tag.
    pub fn validate(&self) -> Result<()> {
        self.format.validate()?;
        if self.initial_tag.trim().is_empty() {
            return Err(TaggerError::InvalidConfig(
                "initial tag must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Tags text with a borrowed model.
#[derive(Debug, Clone)]
pub struct Tagger<'m> {
    decoder: GreedyDecoder<'m>,
    config: TaggerConfig,
}

impl<'m> Tagger<'m> {
    /// Create a tagger over `model`.
    ///
    /// # Errors
    ///
    /// Returns `TaggerError::InvalidConfig` if `config` does not validate.
    pub fn new(model: &'m Model, config: TaggerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            decoder: GreedyDecoder::new(model),
            config,
        })
    }

    /// Create a tagger with the default configuration.
    pub fn with_defaults(model: &'m Model) -> Self {
        Self {
            decoder: GreedyDecoder::new(model),
            config: TaggerConfig::default(),
        }
    }

    pub fn config(&self) -> &TaggerConfig {
        &self.config
    }

    pub fn decoder(&self) -> &GreedyDecoder<'m> {
        &self.decoder
    }

    /// Start a run: the previous tag is seeded with the initial tag.
    pub fn session(&self) -> TaggingSession<'_, 'm> {
        TaggingSession {
            tagger: self,
            previous_tag: self.config.initial_tag.clone(),
        }
    }

    /// Tag every line with one session, so context carries across lines.
    ///
    /// # Examples
    /// ```
    /// use tagwright_core::Model;
    /// use tagwright_core::tagger::Tagger;
    ///
    /// let model = Model::default();
    /// let tagger = Tagger::with_defaults(&model);
    /// let doc = tagger.tag_lines(["[ Friday ]", "tables"]);
    /// assert_eq!(doc.to_string(), "[ Friday/NNP ]\ntables/NNS \n\n");
    /// ```
    pub fn tag_lines<I, S>(&self, lines: I) -> TaggedDocument
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut session = self.session();
        let lines: Vec<TaggedLine> = lines
            .into_iter()
            .map(|line| session.tag_line(line.as_ref()))
            .collect();

        let document = TaggedDocument { lines };
        debug!(
            lines = document.lines.len(),
            unknown = document.unknown_count(),
            "tagged document"
        );
        document
    }

    /// Tag a whole text, one output line per input line.
    ///
    /// Lines end at `\n`, `\r\n` or a lone `\r`.
    pub fn tag_text(&self, text: &str) -> TaggedDocument {
        self.tag_lines(split_lines(text))
    }
}

/// The state of one left-to-right run: the tag given to the last word.
///
/// Markers and line breaks leave it untouched.
#[derive(Debug, Clone)]
pub struct TaggingSession<'t, 'm> {
    tagger: &'t Tagger<'m>,
    previous_tag: String,
}

impl TaggingSession<'_, '_> {
    /// The tag the next word will be conditioned on.
    pub fn previous_tag(&self) -> &str {
        &self.previous_tag
    }

    /// Tag one token and advance the state if it was a word.
    pub fn tag_token(&mut self, token: Token<'_>) -> OutputToken {
        let tagger = self.tagger;
        let format = &tagger.config.format;
        match token {
            Token::Open => OutputToken::Open(format.open_marker.clone()),
            Token::Close => OutputToken::Close(format.close_marker.clone()),
            Token::Word(word) => {
                let decision = tagger.decoder.decide(word, &self.previous_tag);
                let tag = decision.tag().to_string();
                self.previous_tag.clone_from(&tag);
                OutputToken::Word(TaggedWord {
                    word: word.to_string(),
                    tag,
                    source: decision.source(),
                })
            }
        }
    }

    /// Tag one whitespace-separated line.
    pub fn tag_line(&mut self, line: &str) -> TaggedLine {
        let tagger = self.tagger;
        let format = &tagger.config.format;
        let mut tagged = TaggedLine::new(format.delimiter);
        for token in format.tokens(line) {
            tagged.tokens.push(self.tag_token(token));
        }
        tagged
    }
}
