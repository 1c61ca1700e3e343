//! Measurement histograms and execution results.
//!
//! # Bitstring convention
//!
//! Character `i` of a histogram key is the outcome of classical bit `i`:
//! clbit 0 is the leftmost character. All analysis code in the workspace
//! relies on this ordering.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A histogram of measured bitstrings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts(FxHashMap<String, u64>);

impl Counts {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate `count` occurrences of a bitstring.
    pub fn insert(&mut self, bitstring: impl Into<String>, count: u64) {
        *self.0.entry(bitstring.into()).or_insert(0) += count;
    }

    /// Number of occurrences of a bitstring (zero if absent).
    pub fn get(&self, bitstring: &str) -> u64 {
        self.0.get(bitstring).copied().unwrap_or(0)
    }

    /// Total number of recorded outcomes.
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    /// Number of distinct bitstrings observed.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no outcomes were recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The most frequent outcome, if any.
    ///
    /// Ties are broken toward the lexicographically smaller bitstring so the
    /// result is deterministic.
    pub fn most_frequent(&self) -> Option<(&str, u64)> {
        self.0
            .iter()
            .max_by(|(ka, va), (kb, vb)| va.cmp(vb).then_with(|| kb.cmp(ka)))
            .map(|(k, v)| (k.as_str(), *v))
    }

    /// Empirical probability of a bitstring.
    pub fn probability(&self, bitstring: &str) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.get(bitstring) as f64 / total as f64
    }

    /// Iterate over (bitstring, count) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Entries sorted by descending count (ties by bitstring), for display.
    pub fn sorted(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|(ka, va), (kb, vb)| vb.cmp(va).then_with(|| ka.cmp(kb)));
        entries
    }
}

impl FromIterator<(String, u64)> for Counts {
    fn from_iter<T: IntoIterator<Item = (String, u64)>>(iter: T) -> Self {
        let mut counts = Counts::new();
        for (k, v) in iter {
            counts.insert(k, v);
        }
        counts
    }
}

/// The outcome of executing a circuit for a number of shots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Histogram of measured bitstrings.
    pub counts: Counts,
    /// Number of shots executed.
    pub shots: u32,
    /// Wall-clock execution time in milliseconds, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_time_ms: Option<u64>,
}

impl ExecutionResult {
    /// Create a new execution result.
    pub fn new(counts: Counts, shots: u32) -> Self {
        Self {
            counts,
            shots,
            execution_time_ms: None,
        }
    }

    /// Attach the execution time.
    pub fn with_execution_time(mut self, millis: u64) -> Self {
        self.execution_time_ms = Some(millis);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_accumulates() {
        let mut counts = Counts::new();
        counts.insert("00", 1);
        counts.insert("00", 1);
        counts.insert("11", 3);

        assert_eq!(counts.get("00"), 2);
        assert_eq!(counts.get("11"), 3);
        assert_eq!(counts.get("01"), 0);
        assert_eq!(counts.total(), 5);
    }

    #[test]
    fn test_most_frequent() {
        let mut counts = Counts::new();
        counts.insert("10", 900);
        counts.insert("00", 60);
        counts.insert("11", 40);

        assert_eq!(counts.most_frequent(), Some(("10", 900)));
    }

    #[test]
    fn test_most_frequent_tie_is_deterministic() {
        let mut counts = Counts::new();
        counts.insert("01", 500);
        counts.insert("10", 500);

        assert_eq!(counts.most_frequent(), Some(("01", 500)));
    }

    #[test]
    fn test_most_frequent_empty() {
        assert_eq!(Counts::new().most_frequent(), None);
    }

    #[test]
    fn test_probability() {
        let mut counts = Counts::new();
        counts.insert("000", 950);
        counts.insert("101", 50);

        assert!((counts.probability("000") - 0.95).abs() < 1e-12);
        assert_eq!(counts.probability("111"), 0.0);
    }

    #[test]
    fn test_sorted_order() {
        let mut counts = Counts::new();
        counts.insert("01", 10);
        counts.insert("00", 80);
        counts.insert("11", 10);

        let sorted = counts.sorted();
        assert_eq!(sorted[0], ("00", 80));
        assert_eq!(sorted[1], ("01", 10));
        assert_eq!(sorted[2], ("11", 10));
    }
}
