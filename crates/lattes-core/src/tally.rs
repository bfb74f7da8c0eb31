//! Insertion-ordered frequency counts

use indexmap::IndexMap;
use serde::Serialize;

/// Counts keyed by value, iterated in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tally {
    counts: IndexMap<String, usize>,
}

/// One tallied value with its share of the total
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TallyEntry {
    pub value: String,
    pub count: usize,
    pub percentage: f64,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: impl Into<String>) {
        *self.counts.entry(value.into()).or_insert(0) += 1;
    }

    /// Fold another tally in; new values are appended in its order
    pub fn merge(&mut self, other: &Tally) {
        for (value, count) in &other.counts {
            *self.counts.entry(value.clone()).or_insert(0) += count;
        }
    }

    pub fn get(&self, value: &str) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Sum of every count
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Entries in first-seen order, with `count / total * 100` (0 for an
    /// empty tally)
    pub fn entries(&self) -> Vec<TallyEntry> {
        let total = self.total();
        self.counts
            .iter()
            .map(|(value, &count)| TallyEntry {
                value: value.clone(),
                count,
                percentage: if total == 0 {
                    0.0
                } else {
                    count as f64 / total as f64 * 100.0
                },
            })
            .collect()
    }

    /// Entries by descending count; ties keep first-seen order
    pub fn ranked(&self) -> Vec<TallyEntry> {
        let mut entries = self.entries();
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries
    }
}

impl<S: Into<String>> FromIterator<S> for Tally {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tally = Tally::new();
        for value in iter {
            tally.add(value);
        }
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_first_seen_order() {
        let tally: Tally = ["b", "a", "b", "c"].into_iter().collect();
        let values: Vec<String> = tally.entries().into_iter().map(|e| e.value).collect();
        assert_eq!(values, vec!["b", "a", "c"]);
        assert_eq!(tally.get("b"), 2);
        assert_eq!(tally.get("z"), 0);
        assert_eq!(tally.total(), 4);
    }

    #[test]
    fn test_percentages() {
        let tally: Tally = ["x", "x", "x", "y"].into_iter().collect();
        let entries = tally.entries();
        assert_eq!(entries[0].percentage, 75.0);
        assert_eq!(entries[1].percentage, 25.0);
        assert!(Tally::new().entries().is_empty());
    }

    #[test]
    fn test_ranked_is_stable() {
        let tally: Tally = ["a", "b", "c", "c"].into_iter().collect();
        let values: Vec<String> = tally.ranked().into_iter().map(|e| e.value).collect();
        assert_eq!(values, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_merge_appends_new_values() {
        let mut first: Tally = ["a", "b"].into_iter().collect();
        let second: Tally = ["c", "a"].into_iter().collect();
        first.merge(&second);
        assert_eq!(first.get("a"), 2);
        assert_eq!(first.distinct(), 3);
    }
}
