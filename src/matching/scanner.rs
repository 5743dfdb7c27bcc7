//! One-against-all scan of a query over the library.

use crate::core::types::{MatchOutcome, MismatchPolicy};
use crate::matching::distance::is_close;

/// Indices of every library sequence close to `query`, in library order
#[must_use]
pub fn scan(
    query: &str,
    library: &[String],
    max_mismatches: usize,
    policy: MismatchPolicy,
) -> Vec<usize> {
    library
        .iter()
        .enumerate()
        .filter(|(_, candidate)| is_close(query, candidate, max_mismatches, policy))
        .map(|(index, _)| index)
        .collect()
}

/// Scan and classify in one step
#[must_use]
pub fn classify(
    query: &str,
    library: &[String],
    max_mismatches: usize,
    policy: MismatchPolicy,
) -> MatchOutcome {
    MatchOutcome::from_candidates(&scan(query, library, max_mismatches, policy))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library(seqs: &[&str]) -> Vec<String> {
        seqs.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_scan_returns_indices_in_library_order() {
        let lib = library(&["ACGA", "GGGG", "ACGC", "ACGT", "TCGT"]);
        let hits = scan("ACGT", &lib, 1, MismatchPolicy::ExactlyOne);
        assert_eq!(hits, vec![0, 2, 4]);
    }

    #[test]
    fn test_scan_count_matches_predicate() {
        let lib = library(&["AAAA", "AAAT", "AATT", "TTTT", "AAA", "CAAA"]);
        let hits = scan("AAAA", &lib, 1, MismatchPolicy::ExactlyOne);
        let expected = lib
            .iter()
            .filter(|s| is_close("AAAA", s, 1, MismatchPolicy::ExactlyOne))
            .count();
        assert_eq!(hits.len(), expected);
        assert_eq!(hits, vec![1, 5]);
    }

    #[test]
    fn test_scan_empty_library() {
        assert!(scan("ACGT", &[], 1, MismatchPolicy::ExactlyOne).is_empty());
    }

    #[test]
    fn test_classify() {
        let lib = library(&["ACGT", "ACGG", "GGGG"]);
        assert_eq!(
            classify("ACGT", &lib, 1, MismatchPolicy::ExactlyOne),
            MatchOutcome::Unique(1)
        );
        assert_eq!(
            classify("ACGA", &lib, 1, MismatchPolicy::ExactlyOne),
            MatchOutcome::Ambiguous(2)
        );
        assert_eq!(
            classify("TTTT", &lib, 1, MismatchPolicy::ExactlyOne),
            MatchOutcome::NoMatch
        );
    }
}
