//! # Frequency Distributions
//!
//! Plain counting maps with a derived relative-frequency accessor. These back
//! both the emission table (tag → word counts) and the tag bigram table
//! (previous tag → next tag counts).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Counts of samples observed under a single condition.
///
/// Serialized as the bare `sample -> count` map; the total is recomputed on
/// load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, u64>", into = "BTreeMap<String, u64>")]
pub struct FreqDist {
    counts: BTreeMap<String, u64>,
    total: u64,
}

impl FreqDist {
    /// Record one more observation of `sample`.
    pub fn increment(&mut self, sample: &str) {
        match self.counts.get_mut(sample) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(sample.to_string(), 1);
            }
        }
        self.total += 1;
    }

    /// Number of times `sample` was observed.
    pub fn count(&self, sample: &str) -> u64 {
        self.counts.get(sample).copied().unwrap_or(0)
    }

    /// Total number of observations.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Relative frequency of `sample`, `0.0` for an empty distribution.
    pub fn freq(&self, sample: &str) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(sample) as f64 / self.total as f64
    }

    /// Number of distinct samples.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Samples and their counts in lexical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(sample, &count)| (sample.as_str(), count))
    }
}

impl From<BTreeMap<String, u64>> for FreqDist {
    fn from(mut counts: BTreeMap<String, u64>) -> Self {
        counts.retain(|_, count| *count > 0);
        let total = counts.values().sum();
        Self { counts, total }
    }
}

impl From<FreqDist> for BTreeMap<String, u64> {
    fn from(dist: FreqDist) -> Self {
        dist.counts
    }
}

/// One `FreqDist` per condition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionalFreq {
    conditions: BTreeMap<String, FreqDist>,
}

impl ConditionalFreq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one observation of `sample` under `condition`.
    pub fn increment(&mut self, condition: &str, sample: &str) {
        match self.conditions.get_mut(condition) {
            Some(dist) => dist.increment(sample),
            None => {
                let mut dist = FreqDist::default();
                dist.increment(sample);
                self.conditions.insert(condition.to_string(), dist);
            }
        }
    }

    /// The distribution observed under `condition`, if any.
    pub fn get(&self, condition: &str) -> Option<&FreqDist> {
        self.conditions.get(condition)
    }

    /// Count of `sample` under `condition`.
    pub fn count(&self, condition: &str, sample: &str) -> u64 {
        self.get(condition).map_or(0, |dist| dist.count(sample))
    }

    /// `P(sample | condition)`; `0.0` for an unseen condition or sample.
    pub fn freq(&self, condition: &str, sample: &str) -> f64 {
        self.get(condition).map_or(0.0, |dist| dist.freq(sample))
    }

    /// Number of conditions.
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Total number of observations across all conditions.
    pub fn total(&self) -> u64 {
        self.conditions.values().map(FreqDist::total).sum()
    }

    /// Conditions in lexical order.
    pub fn conditions(&self) -> impl Iterator<Item = &str> {
        self.conditions.keys().map(String::as_str)
    }
}
