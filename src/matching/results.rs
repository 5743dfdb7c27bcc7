use std::collections::HashMap;

use serde::Serialize;

/// Helper function to convert usize count to f64 with explicit precision loss allowance
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Queries paired with their unique library match
///
/// Keys are query sequences, so repeated query lines collapse to one entry.
/// Values always satisfy the distance predicate against their key.
#[derive(Debug, Clone, Default)]
pub struct MatchMapping {
    pairs: HashMap<String, String>,

    /// Number of queries considered (including duplicates)
    total_queries: usize,

    /// Queries dropped because no library sequence was close
    unmatched: usize,

    /// Queries dropped because several library sequences were close
    ambiguous: usize,
}

impl MatchMapping {
    /// Empty mapping for a run over `total_queries` queries
    #[must_use]
    pub fn for_queries(total_queries: usize) -> Self {
        Self {
            pairs: HashMap::with_capacity(total_queries),
            total_queries,
            unmatched: 0,
            ambiguous: 0,
        }
    }

    /// Record a unique match, replacing any earlier value for the same query
    pub fn insert(&mut self, query: String, matched: String) {
        self.pairs.insert(query, matched);
    }

    pub(crate) fn set_dropped(&mut self, unmatched: usize, ambiguous: usize) {
        self.unmatched = unmatched;
        self.ambiguous = ambiguous;
    }

    /// Matched library sequence for `query`, if it had a unique match
    #[must_use]
    pub fn get(&self, query: &str) -> Option<&str> {
        self.pairs.get(query).map(String::as_str)
    }

    /// All `(query, matched)` pairs in unspecified order
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(q, m)| (q.as_str(), m.as_str()))
    }

    /// Number of entries in the mapping
    #[must_use]
    pub fn matched(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn total_queries(&self) -> usize {
        self.total_queries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    #[must_use]
    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            matched: self.matched(),
            total: self.total_queries,
            unmatched: self.unmatched,
            ambiguous: self.ambiguous,
        }
    }
}

/// Counts reported at the end of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    /// Entries in the mapping
    pub matched: usize,
    /// Queries considered
    pub total: usize,
    /// Queries with no close library sequence
    pub unmatched: usize,
    /// Queries with more than one close library sequence
    pub ambiguous: usize,
}

impl MatchSummary {
    /// Fraction of queries that were matched (0.0 when there were none)
    #[must_use]
    pub fn match_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        count_to_f64(self.matched) / count_to_f64(self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut mapping = MatchMapping::for_queries(3);
        mapping.insert("ACGT".to_string(), "ACGG".to_string());

        assert_eq!(mapping.get("ACGT"), Some("ACGG"));
        assert_eq!(mapping.get("TTTT"), None);
        assert_eq!(mapping.matched(), 1);
        assert_eq!(mapping.total_queries(), 3);
    }

    #[test]
    fn test_duplicate_query_collapses() {
        let mut mapping = MatchMapping::for_queries(2);
        mapping.insert("ACGT".to_string(), "ACGG".to_string());
        mapping.insert("ACGT".to_string(), "ACGG".to_string());

        assert_eq!(mapping.matched(), 1);
        assert_eq!(mapping.pairs().count(), 1);
    }

    #[test]
    fn test_summary() {
        let mut mapping = MatchMapping::for_queries(4);
        mapping.insert("AAAA".to_string(), "AAAT".to_string());
        mapping.set_dropped(2, 1);

        let summary = mapping.summary();
        assert_eq!(summary.matched, 1);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.unmatched, 2);
        assert_eq!(summary.ambiguous, 1);
        assert!((summary.match_rate() - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_summary() {
        let summary = MatchMapping::default().summary();
        assert_eq!(summary.total, 0);
        assert!(summary.match_rate().abs() < f64::EPSILON);
    }
}
