//! Sequence matching engine.
//!
//! This module provides the comparison kernel:
//!
//! - [`distance`]: mismatch-count predicate between two sequences
//! - [`scanner`]: one query against every library sequence
//! - [`MatchingEngine`]: all queries in parallel, keeping unique matches
//! - [`MatchMapping`]: the resulting query → match mapping and its summary
//!
//! ## Matching Rule
//!
//! A query is paired with a library sequence only when that sequence is the
//! *only* close one. A pair is close when both sequences have the same length
//! and differ at a number of positions accepted by the [`MismatchPolicy`]
//! (exactly one by default). Identical sequences are never close.
//!
//! ## Example
//!
//! ```rust
//! use fuzzy_pairs::{MatchingConfig, MatchingEngine};
//!
//! let library = vec!["ACGT".to_string(), "GGGG".to_string()];
//! let queries = vec!["ACGA".to_string(), "TTTT".to_string()];
//!
//! let engine = MatchingEngine::with_config(&library, MatchingConfig::default());
//! let mapping = engine.run(&queries).unwrap();
//!
//! assert_eq!(mapping.get("ACGA"), Some("ACGT"));
//! assert_eq!(mapping.summary().matched, 1);
//! ```
//!
//! [`MismatchPolicy`]: crate::core::types::MismatchPolicy

pub mod distance;
pub mod engine;
pub mod results;
pub mod scanner;

pub use engine::{MatchError, MatchingConfig, MatchingEngine};
pub use results::{MatchMapping, MatchSummary};
