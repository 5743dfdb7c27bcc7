//! Core data types shared by the matching engine.
//!
//! Sequences themselves are plain `String`s: nothing about their content is
//! interpreted beyond byte-wise equality, so no wrapper type is needed.
//!
//! - [`MismatchPolicy`]: which mismatch counts are accepted as "close"
//! - [`MatchOutcome`]: how a query's candidate set is classified
//!
//! ## Mismatch policies
//!
//! | Policy        | Accepted mismatch counts |
//! |---------------|--------------------------|
//! | `exactly-one` | 1                        |
//! | `up-to-max`   | 1 ..= threshold          |
//!
//! Zero mismatches (an exact match) is never accepted.

pub mod types;

pub use types::{MatchOutcome, MismatchPolicy};
