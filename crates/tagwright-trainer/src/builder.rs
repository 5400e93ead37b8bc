//! Single-pass construction of the model tables.

use tagwright_core::model::{ConditionalFreq, VocabularyIndex};
use tagwright_core::{CorpusFormat, Model, Result, TaggedPair, Token};
use tracing::debug;

/// Accumulates emission, vocabulary and bigram counts from a tagged corpus.
///
/// Tokens are fed in corpus order. Bracket markers are skipped and do not
/// interrupt the tag sequence, nor do line breaks. After a feeding error the
/// builder holds a partial corpus and should be dropped.
#[derive(Debug, Clone)]
pub struct ModelBuilder {
    format: CorpusFormat,
    emissions: ConditionalFreq,
    vocabulary: VocabularyIndex,
    transitions: ConditionalFreq,
    previous_tag: Option<String>,
    position: usize,
}

impl Default for ModelBuilder {
    fn default() -> Self {
        Self::with_valid_format(CorpusFormat::default())
    }
}

impl ModelBuilder {
    /// Create a builder reading tokens in `format`.
    ///
    /// # Errors
    ///
    /// Returns `TaggerError::InvalidConfig` if the format does not validate.
    pub fn new(format: CorpusFormat) -> Result<Self> {
        format.validate()?;
        Ok(Self::with_valid_format(format))
    }

    fn with_valid_format(format: CorpusFormat) -> Self {
        Self {
            format,
            emissions: ConditionalFreq::new(),
            vocabulary: VocabularyIndex::new(),
            transitions: ConditionalFreq::new(),
            previous_tag: None,
            position: 0,
        }
    }

    pub fn format(&self) -> &CorpusFormat {
        &self.format
    }

    /// Number of raw tokens fed so far, markers included.
    pub fn tokens_seen(&self) -> usize {
        self.position
    }

    /// Feed one raw training token: a marker or `word<DELIM>tag`.
    ///
    /// # Errors
    ///
    /// `MalformedToken`, `EmptyWord` or `EmptyTag`, carrying the token's
    /// position in the stream.
    pub fn push_token(&mut self, raw: &str) -> Result<()> {
        let position = self.position;
        self.position += 1;
        match self.format.classify(raw) {
            Token::Open | Token::Close => Ok(()),
            Token::Word(raw) => {
                let pair = self.format.parse_pair(raw, position)?;
                self.push_pair(&pair);
                Ok(())
            }
        }
    }

    /// Record one already parsed pair.
    pub fn push_pair(&mut self, pair: &TaggedPair) {
        self.vocabulary.push(&pair.word, &pair.tag);
        self.emissions.increment(&pair.tag, &pair.word);
        if let Some(previous) = &self.previous_tag {
            self.transitions.increment(previous, &pair.tag);
        }
        self.previous_tag = Some(pair.tag.clone());
    }

    /// Feed every whitespace-separated token of `text`.
    ///
    /// # Errors
    ///
    /// Stops at the first malformed token.
    pub fn feed_text(&mut self, text: &str) -> Result<()> {
        for raw in text.split_whitespace() {
            self.push_token(raw)?;
        }
        Ok(())
    }

    /// Freeze the counts into a read-only model.
    pub fn build(self) -> Model {
        let model = Model::from_parts(self.emissions, self.vocabulary, self.transitions);
        let summary = model.summary();
        debug!(
            words = summary.vocabulary_size,
            tags = summary.tag_count,
            tokens = summary.token_count,
            bigrams = summary.transition_count,
            "model built"
        );
        model
    }
}

/// Build a model from a whole training corpus.
///
/// # Errors
///
/// Fails on an invalid format or on the first malformed token; no model is
/// returned in that case.
///
/// # Examples
/// ```
/// use tagwright_core::CorpusFormat;
/// use tagwright_trainer::build_model;
///
/// let model = build_model("[ the/DT board/NN ] will/MD", &CorpusFormat::default()).unwrap();
/// assert_eq!(model.candidates("board").unwrap(), ["NN"]);
/// assert_eq!(model.transition_prob("NN", "MD"), 1.0);
/// ```
pub fn build_model(text: &str, format: &CorpusFormat) -> Result<Model> {
    let mut builder = ModelBuilder::new(format.clone())?;
    builder.feed_text(text)?;
    Ok(builder.build())
}
