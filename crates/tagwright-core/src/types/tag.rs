//! # Fallback Tags
//!
//! The closed set of Penn Treebank tags that the unknown-word rules can
//! produce, plus the tag assumed before the first word of a run.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tag assumed as history for the very first word: a verb context.
pub const INITIAL_TAG: &str = "VB";

/// Tags assigned to words that never occurred in training.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FallbackTag {
    /// `NNS`
    PluralNoun,
    /// `VBN`
    PastParticiple,
    /// `NNP`
    ProperNoun,
    /// `JJ`
    Adjective,
    /// `NN`
    Noun,
}

impl FallbackTag {
    /// Total number of fallback tags.
    pub const NUM_TAGS: usize = 5;

    /// All fallback tags, in rule order.
    pub fn all_tags() -> &'static [FallbackTag] {
        &[
            FallbackTag::PluralNoun,
            FallbackTag::PastParticiple,
            FallbackTag::ProperNoun,
            FallbackTag::Adjective,
            FallbackTag::Noun,
        ]
    }

    /// The Penn Treebank spelling of the tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackTag::PluralNoun => "NNS",
            FallbackTag::PastParticiple => "VBN",
            FallbackTag::ProperNoun => "NNP",
            FallbackTag::Adjective => "JJ",
            FallbackTag::Noun => "NN",
        }
    }

    /// Look a fallback tag up by its Treebank spelling.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::all_tags().iter().copied().find(|t| t.as_str() == tag)
    }
}

impl fmt::Display for FallbackTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
