use crate::types::FallbackTag;

/// Shape rules for words that never occurred in training.
///
/// The guess depends on the spelling of the word only, never on the model.
/// Rules are tried in order and the first match wins:
///
/// 1. ends in `s` → `NNS`
/// 2. ends in `ed` → `VBN`
/// 3. starts with an uppercase letter → `NNP`
/// 4. ends in `able` or contains a hyphen → `JJ`
/// 5. anything else → `NN`
#[derive(Debug, Clone, Copy, Default)]
pub struct UnknownWordHeuristic;

impl UnknownWordHeuristic {
    pub fn new() -> Self {
        Self
    }

    /// Guess the tag of an unknown word.
    ///
    /// # Examples
    /// ```
    /// use tagwright_core::tagger::UnknownWordHeuristic;
    /// use tagwright_core::types::FallbackTag;
    ///
    /// let heuristic = UnknownWordHeuristic::new();
    /// assert_eq!(heuristic.guess("Friday"), FallbackTag::ProperNoun);
    /// assert_eq!(heuristic.guess("apart"), FallbackTag::Noun);
    /// ```
    pub fn guess(&self, word: &str) -> FallbackTag {
        if word.ends_with('s') {
            FallbackTag::PluralNoun
        } else if word.ends_with("ed") {
            FallbackTag::PastParticiple
        } else if word.chars().next().is_some_and(char::is_uppercase) {
            FallbackTag::ProperNoun
        } else if word.ends_with("able") || word.contains('-') {
            FallbackTag::Adjective
        } else {
            FallbackTag::Noun
        }
    }
}
