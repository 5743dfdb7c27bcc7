//! Mismatch-count predicate between two equal-length sequences.

use crate::core::types::MismatchPolicy;

/// Decide whether two sequences are close under `policy`
///
/// Sequences of different byte length are never close. Otherwise the byte at the
/// start of each character of `a` is compared with the byte at the same offset
/// in `b`, and the comparison stops as soon as more than `max_mismatches`
/// differences have been seen. A differing multi-byte character counts once.
#[must_use]
pub fn is_close(a: &str, b: &str, max_mismatches: usize, policy: MismatchPolicy) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let (a_bytes, b_bytes) = (a.as_bytes(), b.as_bytes());
    let mut mismatches = 0usize;
    for (offset, _) in a.char_indices() {
        if a_bytes[offset] != b_bytes[offset] {
            mismatches += 1;
            if mismatches > max_mismatches {
                return false;
            }
        }
    }

    policy.accepts(mismatches, max_mismatches)
}

/// [`is_close`] with the default exactly-one-mismatch rule
#[must_use]
pub fn is_close_exactly_one(a: &str, b: &str, max_mismatches: usize) -> bool {
    is_close(a, b, max_mismatches, MismatchPolicy::ExactlyOne)
}
