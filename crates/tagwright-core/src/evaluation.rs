//! # Evaluation
//!
//! Scores a tagger against a gold-tagged corpus written in the training
//! format: tags are stripped, the bare words are tagged, and the result is
//! compared position by position.

use std::collections::BTreeMap;
use std::fmt;
use std::iter::zip;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::tagger::Tagger;
use crate::types::{OutputToken, TaggedPair, TaggedWord, Token, split_lines};

/// Per-tag counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelMeasure {
    /// Number of correct predictions.
    pub num_correct: usize,
    /// Occurrences of the tag in the gold data.
    pub num_observation: usize,
    /// Number of predictions of the tag.
    pub num_prediction: usize,
}

impl LabelMeasure {
    pub fn precision(&self) -> f64 {
        ratio(self.num_correct, self.num_prediction)
    }

    pub fn recall(&self) -> f64 {
        ratio(self.num_correct, self.num_observation)
    }

    pub fn fmeasure(&self) -> f64 {
        let (p, r) = (self.precision(), self.recall());
        if p + r > 0.0 {
            2.0 * p * r / (p + r)
        } else {
            0.0
        }
    }
}

/// Macro-averaged scores over the tags present in the gold data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimation {
    pub precision: f64,
    pub recall: f64,
    pub fmeasure: f64,
}

/// Accumulated comparison of predicted and gold tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    labels: BTreeMap<String, LabelMeasure>,
    item_total: usize,
    line_correct: usize,
    line_total: usize,
    unknown_correct: usize,
    unknown_total: usize,
}

impl Evaluation {
    /// Compare one line of predictions against its reference.
    pub fn accumulate(&mut self, reference: &[TaggedPair], prediction: &[TaggedWord]) {
        let mut matched = 0;
        for (gold, predicted) in zip(reference, prediction) {
            self.labels.entry(gold.tag.clone()).or_default().num_observation += 1;
            self.labels
                .entry(predicted.tag.clone())
                .or_default()
                .num_prediction += 1;

            let correct = gold.tag == predicted.tag;
            if correct {
                self.labels.entry(gold.tag.clone()).or_default().num_correct += 1;
                matched += 1;
            }
            if !predicted.is_known() {
                self.unknown_total += 1;
                self.unknown_correct += usize::from(correct);
            }
            self.item_total += 1;
        }

        if matched == reference.len() {
            self.line_correct += 1;
        }
        self.line_total += 1;
    }

    /// Share of words tagged correctly.
    pub fn item_accuracy(&self) -> f64 {
        ratio(self.item_correct(), self.item_total)
    }

    /// Share of lines with every word tagged correctly.
    pub fn line_accuracy(&self) -> f64 {
        ratio(self.line_correct, self.line_total)
    }

    /// Accuracy restricted to words the heuristics had to tag.
    pub fn unknown_accuracy(&self) -> f64 {
        ratio(self.unknown_correct, self.unknown_total)
    }

    pub fn item_total(&self) -> usize {
        self.item_total
    }

    pub fn item_correct(&self) -> usize {
        self.labels.values().map(|m| m.num_correct).sum()
    }

    /// Counts for one tag.
    pub fn label(&self, tag: &str) -> Option<&LabelMeasure> {
        self.labels.get(tag)
    }

    /// Macro averages over tags that occur in the gold data.
    pub fn macro_average(&self) -> Estimation {
        let observed: Vec<&LabelMeasure> = self
            .labels
            .values()
            .filter(|m| m.num_observation > 0)
            .collect();
        if observed.is_empty() {
            return Estimation {
                precision: 0.0,
                recall: 0.0,
                fmeasure: 0.0,
            };
        }
        let n = observed.len() as f64;
        Estimation {
            precision: observed.iter().map(|m| m.precision()).sum::<f64>() / n,
            recall: observed.iter().map(|m| m.recall()).sum::<f64>() / n,
            fmeasure: observed.iter().map(|m| m.fmeasure()).sum::<f64>() / n,
        }
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Performance by tag (#match, #model, #ref) (precision, recall, F1):"
        )?;
        for (tag, m) in &self.labels {
            if m.num_observation == 0 {
                writeln!(
                    f,
                    "\t{tag}: ({}, {}, {}) (******, ******, ******)",
                    m.num_correct, m.num_prediction, m.num_observation
                )?;
            } else {
                writeln!(
                    f,
                    "\t{tag}: ({}, {}, {}) ({:.4}, {:.4}, {:.4})",
                    m.num_correct,
                    m.num_prediction,
                    m.num_observation,
                    m.precision(),
                    m.recall(),
                    m.fmeasure()
                )?;
            }
        }
        let avg = self.macro_average();
        writeln!(
            f,
            "Macro-average precision, recall, F1: ({:.4}, {:.4}, {:.4})",
            avg.precision, avg.recall, avg.fmeasure
        )?;
        writeln!(
            f,
            "Item accuracy: {}/{} => {:.4}",
            self.item_correct(),
            self.item_total,
            self.item_accuracy()
        )?;
        writeln!(
            f,
            "Unknown-word accuracy: {}/{} => {:.4}",
            self.unknown_correct,
            self.unknown_total,
            self.unknown_accuracy()
        )?;
        writeln!(
            f,
            "Line accuracy: {}/{} => {:.4}",
            self.line_correct,
            self.line_total,
            self.line_accuracy()
        )
    }
}

/// Tag the words of a gold corpus and compare with its annotations.
///
/// One tagging session spans the whole corpus, as in a normal run.
///
/// # Errors
///
/// Returns the same malformed-token errors as training when a gold token
/// cannot be parsed.
pub fn evaluate_gold(tagger: &Tagger<'_>, gold_text: &str) -> Result<Evaluation> {
    let format = &tagger.config().format;
    let mut session = tagger.session();
    let mut evaluation = Evaluation::default();
    let mut position = 0;

    for line in split_lines(gold_text) {
        let mut reference = Vec::new();
        let mut prediction = Vec::new();
        for raw in line.split_whitespace() {
            if let Token::Word(raw) = format.classify(raw) {
                let pair = format.parse_pair(raw, position)?;
                if let OutputToken::Word(word) = session.tag_token(Token::Word(&pair.word)) {
                    prediction.push(word);
                }
                reference.push(pair);
            }
            position += 1;
        }
        if !reference.is_empty() {
            evaluation.accumulate(&reference, &prediction);
        }
    }

    Ok(evaluation)
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}
