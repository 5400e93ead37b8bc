use serde::{Deserialize, Serialize};

use crate::error::{Result, TaggerError};
use crate::types::token::{TaggedPair, Token};

/// Lexical conventions shared by training corpora, test text and output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusFormat {
    /// Separates the word from its tag (`old/JJ`).
    pub delimiter: char,
    /// Separates alternative tags of an ambiguous annotation (`JJ|VBN`).
    /// Only the first alternative is kept.
    pub alternative_separator: Option<char>,
    /// Token opening a bracketed span.
    pub open_marker: String,
    /// Token closing a bracketed span.
    pub close_marker: String,
}

impl Default for CorpusFormat {
    fn default() -> Self {
        Self {
            delimiter: '/',
            alternative_separator: Some('|'),
            open_marker: "[".to_string(),
            close_marker: "]".to_string(),
        }
    }
}

impl CorpusFormat {
    /// Create the default format: `word/TAG`, `|` alternatives, `[` and `]` markers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the word/tag delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set or disable the ambiguous-tag separator.
    pub fn with_alternative_separator(mut self, separator: Option<char>) -> Self {
        self.alternative_separator = separator;
        self
    }

    /// Set the bracket markers.
    pub fn with_markers(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.open_marker = open.into();
        self.close_marker = close.into();
        self
    }

    /// Checks that the format can be applied to whitespace-separated text.
    ///
    /// # Errors
    ///
    /// Returns `TaggerError::InvalidConfig` for whitespace delimiters and for
    /// markers that are empty, contain whitespace, or are identical.
    pub fn validate(&self) -> Result<()> {
        if self.delimiter.is_whitespace() {
            return Err(TaggerError::InvalidConfig(
                "delimiter must not be whitespace".into(),
            ));
        }
        if self.alternative_separator.is_some_and(char::is_whitespace) {
            return Err(TaggerError::InvalidConfig(
                "alternative tag separator must not be whitespace".into(),
            ));
        }
        for marker in [&self.open_marker, &self.close_marker] {
            if marker.is_empty() || marker.chars().any(char::is_whitespace) {
                return Err(TaggerError::InvalidConfig(format!(
                    "marker {marker:?} must be a non-empty token without whitespace"
                )));
            }
        }
        if self.open_marker == self.close_marker {
            return Err(TaggerError::InvalidConfig(
                "open and close markers must differ".into(),
            ));
        }
        Ok(())
    }

    /// Classify one whitespace-separated token.
    pub fn classify<'a>(&self, raw: &'a str) -> Token<'a> {
        if raw == self.open_marker {
            Token::Open
        } else if raw == self.close_marker {
            Token::Close
        } else {
            Token::Word(raw)
        }
    }

    /// Split a line on whitespace and classify every token.
    pub fn tokens<'a>(&'a self, line: &'a str) -> impl Iterator<Item = Token<'a>> + 'a {
        line.split_whitespace().map(|raw| self.classify(raw))
    }

    /// Parse a `word<DELIM>tag` training token.
    ///
    /// The token is split once, on the first delimiter. When an alternative
    /// separator is configured and differs from the delimiter, the tag is cut
    /// at its first occurrence. Tags are upper-cased, so `old/jj` and
    /// `old/JJ` train the same tag.
    ///
    /// # Errors
    ///
    /// `MalformedToken` when the delimiter is missing, `EmptyWord` or
    /// `EmptyTag` when either side is empty. `position` is echoed back in the
    /// error so callers can point at the offending token.
    pub fn parse_pair(&self, raw: &str, position: usize) -> Result<TaggedPair> {
        let Some((word, rest)) = raw.split_once(self.delimiter) else {
            return Err(TaggerError::MalformedToken {
                token: raw.to_string(),
                position,
            });
        };

        let tag = match self.alternative_separator {
            Some(sep) if sep != self.delimiter => rest.split(sep).next().unwrap_or(rest),
            _ => rest,
        };

        if word.is_empty() {
            return Err(TaggerError::EmptyWord {
                token: raw.to_string(),
                position,
            });
        }
        if tag.is_empty() {
            return Err(TaggerError::EmptyTag {
                token: raw.to_string(),
                position,
            });
        }

        Ok(TaggedPair::new(word, tag.to_uppercase()))
    }
}

/// Split text into lines on `\n`, `\r\n` or a lone `\r`.
///
/// A trailing line break does not produce an empty final line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\n', '\r']) {
            Some(end) => {
                let line = &rest[..end];
                let width = if rest[end..].starts_with("\r\n") {
                    2
                } else {
                    1
                };
                rest = &rest[end + width..];
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_handles_every_break() {
        let lines: Vec<_> = split_lines("a b\nc\r\nd\re\n").collect();
        assert_eq!(lines, vec!["a b", "c", "d", "e"]);

        let lines: Vec<_> = split_lines("\n\r\nx").collect();
        assert_eq!(lines, vec!["", "", "x"]);

        assert_eq!(split_lines("").count(), 0);
        assert_eq!(split_lines("a\r").collect::<Vec<_>>(), vec!["a"]);
    }

    #[test]
    fn test_default_format() {
        let format = CorpusFormat::default();
        assert_eq!(format.delimiter, '/');
        assert_eq!(format.alternative_separator, Some('|'));
        assert!(format.validate().is_ok());
    }

    #[test]
    fn test_classify_markers_and_words() {
        let format = CorpusFormat::new();
        let tokens: Vec<_> = format.tokens("[ the board ]").collect();
        assert_eq!(
            tokens,
            vec![
                Token::Open,
                Token::Word("the"),
                Token::Word("board"),
                Token::Close
            ]
        );
        // Brackets glued to a word are ordinary words.
        assert_eq!(format.classify("[the"), Token::Word("[the"));
    }

    #[test]
    fn test_parse_pair_splits_on_first_delimiter() {
        let format = CorpusFormat::new();
        let pair = format.parse_pair("old/JJ", 0).unwrap();
        assert_eq!(pair.word, "old");
        assert_eq!(pair.tag, "JJ");

        let pair = format.parse_pair("1/2/CD", 0).unwrap();
        assert_eq!(pair.word, "1");
        assert_eq!(pair.tag, "2/CD");
    }

    #[test]
    fn test_parse_pair_keeps_first_alternative_tag() {
        let format = CorpusFormat::new();
        let pair = format.parse_pair("estimated/VBN|JJ", 3).unwrap();
        assert_eq!(pair.tag, "VBN");

        let format = CorpusFormat::new().with_alternative_separator(None);
        let pair = format.parse_pair("estimated/VBN|JJ", 3).unwrap();
        assert_eq!(pair.tag, "VBN|JJ");
    }

    #[test]
    fn test_parse_pair_upper_cases_tags() {
        let format = CorpusFormat::new();
        let pair = format.parse_pair("old/jj", 0).unwrap();
        assert_eq!(pair.word, "old");
        assert_eq!(pair.tag, "JJ");

        let pair = format.parse_pair("Vinken/Nnp|nn", 0).unwrap();
        assert_eq!(pair.word, "Vinken");
        assert_eq!(pair.tag, "NNP");
    }

    #[test]
    fn test_pipe_delimiter_disables_alternatives() {
        let format = CorpusFormat::new().with_delimiter('|');
        let pair = format.parse_pair("old|JJ", 0).unwrap();
        assert_eq!(pair.word, "old");
        assert_eq!(pair.tag, "JJ");
    }

    #[test]
    fn test_parse_pair_rejects_malformed_tokens() {
        let format = CorpusFormat::new();
        assert!(matches!(
            format.parse_pair("board", 4),
            Err(TaggerError::MalformedToken { position: 4, .. })
        ));
        assert!(matches!(
            format.parse_pair("/NN", 1),
            Err(TaggerError::EmptyWord { .. })
        ));
        assert!(matches!(
            format.parse_pair("old/", 2),
            Err(TaggerError::EmptyTag { .. })
        ));
        assert!(matches!(
            format.parse_pair("old/|JJ", 2),
            Err(TaggerError::EmptyTag { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_formats() {
        assert!(CorpusFormat::new().with_delimiter(' ').validate().is_err());
        assert!(CorpusFormat::new().with_markers("", "]").validate().is_err());
        assert!(CorpusFormat::new().with_markers("[", "[").validate().is_err());
        assert!(
            CorpusFormat::new()
                .with_alternative_separator(Some('\t'))
                .validate()
                .is_err()
        );
    }
}
