use std::fmt;

use serde::{Deserialize, Serialize};

use super::tag::FallbackTag;

/// Where a word's tag came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TagSource {
    /// Picked from the word's training candidates with the given
    /// `P(word | tag) * P(tag | previous)` score.
    Model { score: f64 },
    /// Guessed by an unknown-word rule.
    Heuristic(FallbackTag),
}

/// A word of the input together with its assigned tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedWord {
    pub word: String,
    pub tag: String,
    pub source: TagSource,
}

impl TaggedWord {
    /// Returns `true` if the word was present in the training vocabulary.
    #[must_use]
    pub fn is_known(&self) -> bool {
        matches!(self.source, TagSource::Model { .. })
    }
}

/// One rendered unit of a tagged line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OutputToken {
    /// Opening marker, passed through verbatim.
    Open(String),
    /// Closing marker, passed through verbatim.
    Close(String),
    Word(TaggedWord),
}

/// The tagged counterpart of one input line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedLine {
    /// Character written between each word and its tag.
    pub delimiter: char,
    pub tokens: Vec<OutputToken>,
}

impl TaggedLine {
    /// Creates an empty line rendered with `delimiter`.
    #[must_use]
    pub fn new(delimiter: char) -> Self {
        Self {
            delimiter,
            tokens: Vec::new(),
        }
    }

    /// Iterates over the tagged words, skipping markers.
    pub fn words(&self) -> impl Iterator<Item = &TaggedWord> {
        self.tokens.iter().filter_map(|token| match token {
            OutputToken::Word(word) => Some(word),
            _ => None,
        })
    }
}

/// Renders `word/TAG ` per word, `[ ` for an opening marker and a bare `]`
/// for a closing one. No newline.
impl fmt::Display for TaggedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            match token {
                OutputToken::Open(marker) => write!(f, "{marker} ")?,
                OutputToken::Close(marker) => f.write_str(marker)?,
                OutputToken::Word(w) => write!(f, "{}{}{} ", w.word, self.delimiter, w.tag)?,
            }
        }
        Ok(())
    }
}

/// All tagged lines of one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaggedDocument {
    pub lines: Vec<TaggedLine>,
}

impl TaggedDocument {
    /// Iterates over every tagged word of the document in order.
    pub fn words(&self) -> impl Iterator<Item = &TaggedWord> {
        self.lines.iter().flat_map(TaggedLine::words)
    }

    /// Number of words the heuristics had to tag.
    #[must_use]
    pub fn unknown_count(&self) -> usize {
        self.words().filter(|w| !w.is_known()).count()
    }
}

/// Every line followed by a newline, then one blank line.
impl fmt::Display for TaggedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(word: &str, tag: &str, source: TagSource) -> OutputToken {
        OutputToken::Word(TaggedWord {
            word: word.into(),
            tag: tag.into(),
            source,
        })
    }

    fn sample_line() -> TaggedLine {
        let mut line = TaggedLine::new('/');
        line.tokens.push(OutputToken::Open("[".into()));
        line.tokens.push(word("the", "DT", TagSource::Model { score: 0.5 }));
        line.tokens.push(word(
            "Exchange",
            "NNP",
            TagSource::Heuristic(FallbackTag::ProperNoun),
        ));
        line.tokens.push(OutputToken::Close("]".into()));
        line
    }

    #[test]
    fn test_line_display_spacing() {
        assert_eq!(sample_line().to_string(), "[ the/DT Exchange/NNP ]");

        let mut line = TaggedLine::new('/');
        line.tokens.push(word("No", "DT", TagSource::Model { score: 1.0 }));
        line.tokens.push(word(",", ",", TagSource::Model { score: 1.0 }));
        assert_eq!(line.to_string(), "No/DT ,/, ");
    }

    #[test]
    fn test_document_display_ends_with_blank_line() {
        let doc = TaggedDocument {
            lines: vec![sample_line(), TaggedLine::new('/')],
        };
        assert_eq!(doc.to_string(), "[ the/DT Exchange/NNP ]\n\n\n");
        assert_eq!(TaggedDocument::default().to_string(), "\n");
    }

    #[test]
    fn test_words_skip_markers() {
        let doc = TaggedDocument {
            lines: vec![sample_line()],
        };
        let words: Vec<_> = doc.words().map(|w| w.word.as_str()).collect();
        assert_eq!(words, vec!["the", "Exchange"]);
        assert_eq!(doc.unknown_count(), 1);
    }

    #[test]
    fn test_tagged_line_serialization_roundtrip() {
        let line = sample_line();
        let json = serde_json::to_string(&line).unwrap();
        let back: TaggedLine = serde_json::from_str(&json).unwrap();
        assert_eq!(line, back);
    }
}
