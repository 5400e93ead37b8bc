//! # Greedy Decoding
//!
//! Picks a tag for one word given only the tag chosen for the word before
//! it. Nothing is ever revisited and there is no path search.

use tracing::trace;

use crate::model::Model;
use crate::tagger::heuristic::UnknownWordHeuristic;
use crate::types::{FallbackTag, TagSource};

/// Outcome of tagging a single word.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decision<'m> {
    /// The word is in the vocabulary; `tag` is its best candidate.
    Known { tag: &'m str, score: f64 },
    /// The word is unknown and was tagged by shape.
    Unknown(FallbackTag),
}

impl Decision<'_> {
    /// The chosen tag.
    pub fn tag(&self) -> &str {
        match self {
            Decision::Known { tag, .. } => *tag,
            Decision::Unknown(fallback) => fallback.as_str(),
        }
    }

    pub fn source(&self) -> TagSource {
        match *self {
            Decision::Known { score, .. } => TagSource::Model { score },
            Decision::Unknown(fallback) => TagSource::Heuristic(fallback),
        }
    }
}

/// Per-word decision rule over a trained model.
#[derive(Debug, Clone, Copy)]
pub struct GreedyDecoder<'m> {
    model: &'m Model,
    heuristic: UnknownWordHeuristic,
}

impl<'m> GreedyDecoder<'m> {
    pub fn new(model: &'m Model) -> Self {
        Self {
            model,
            heuristic: UnknownWordHeuristic::new(),
        }
    }

    /// Tag `word` given the tag of the preceding word.
    pub fn decide(&self, word: &str, previous: &str) -> Decision<'m> {
        let model: &'m Model = self.model;
        let best = model
            .candidates(word)
            .and_then(|candidates| self.best_candidate(word, candidates, previous));

        match best {
            Some((tag, score)) => Decision::Known { tag, score },
            None => {
                let fallback = self.heuristic.guess(word);
                trace!(word, tag = %fallback, "unknown word tagged by shape");
                Decision::Unknown(fallback)
            }
        }
    }

    /// `P(word | tag) * P(tag | previous)`.
    pub fn score(&self, word: &str, tag: &str, previous: &str) -> f64 {
        self.model.emission_prob(word, tag) * self.model.transition_prob(previous, tag)
    }

    /// Scan the candidates in stored order, duplicates included.
    ///
    /// The running best starts at zero and is replaced whenever a score is
    /// `>=` it, so the last candidate reaching the maximum is kept, and with
    /// all-zero scores the last candidate wins.
    fn best_candidate(
        &self,
        word: &str,
        candidates: &'m [String],
        previous: &str,
    ) -> Option<(&'m str, f64)> {
        let mut best = None;
        let mut best_score = 0.0;
        for tag in candidates {
            let score = self.score(word, tag, previous);
            if score >= best_score {
                best_score = score;
                best = Some(tag.as_str());
            }
        }
        best.map(|tag| (tag, best_score))
    }
}
