use serde::Serialize;

/// Rule deciding which mismatch counts count as "close"
///
/// The mismatch threshold always bounds how far a comparison runs before it
/// gives up. The policy decides which of the surviving counts are accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum MismatchPolicy {
    /// Accept only pairs differing at exactly one position
    #[default]
    ExactlyOne,
    /// Accept pairs differing at 1..=threshold positions
    UpToMax,
}

impl MismatchPolicy {
    /// Whether a completed comparison with `mismatches` differences is accepted
    #[must_use]
    pub fn accepts(self, mismatches: usize, max_mismatches: usize) -> bool {
        match self {
            Self::ExactlyOne => mismatches == 1,
            Self::UpToMax => mismatches >= 1 && mismatches <= max_mismatches,
        }
    }
}

impl std::fmt::Display for MismatchPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExactlyOne => write!(f, "exactly-one"),
            Self::UpToMax => write!(f, "up-to-max"),
        }
    }
}

/// Classification of a single query's candidate set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// No library sequence was close
    NoMatch,
    /// Exactly one library sequence was close, at this index
    Unique(usize),
    /// More than one library sequence was close
    Ambiguous(usize),
}

impl MatchOutcome {
    #[must_use]
    pub fn from_candidates(candidates: &[usize]) -> Self {
        match candidates {
            [] => Self::NoMatch,
            [index] => Self::Unique(*index),
            many => Self::Ambiguous(many.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_ignores_threshold() {
        let policy = MismatchPolicy::ExactlyOne;
        assert!(policy.accepts(1, 1));
        assert!(policy.accepts(1, 4));
        assert!(!policy.accepts(0, 4));
        assert!(!policy.accepts(2, 4));
    }

    #[test]
    fn test_up_to_max_range() {
        let policy = MismatchPolicy::UpToMax;
        assert!(!policy.accepts(0, 3));
        assert!(policy.accepts(1, 3));
        assert!(policy.accepts(3, 3));
        assert!(!policy.accepts(4, 3));
    }

    #[test]
    fn test_outcome_from_candidates() {
        assert_eq!(MatchOutcome::from_candidates(&[]), MatchOutcome::NoMatch);
        assert_eq!(MatchOutcome::from_candidates(&[7]), MatchOutcome::Unique(7));
        assert_eq!(
            MatchOutcome::from_candidates(&[1, 2, 9]),
            MatchOutcome::Ambiguous(3)
        );
    }
}
