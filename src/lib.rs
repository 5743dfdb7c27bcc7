//! # fuzzy-pairs
//!
//! A library for pairing query sequences with a near-identical library sequence.
//!
//! Barcode and primer lists often contain entries that differ from a known
//! sequence by a single substitution. `fuzzy-pairs` finds, for each query,
//! the library sequence that is exactly one mismatch away, and keeps the pair
//! only when that neighbour is unique.
//!
//! ## Features
//!
//! - **Hamming matching**: Equal-length, substitution-only comparison with early exit
//! - **Uniqueness filter**: Queries with zero or several neighbours are dropped
//! - **Parallel scan**: Queries are scanned on a per-run worker pool
//! - **Gzip input**: `.gz` query and library lists are read transparently
//!
//! ## Example
//!
//! ```rust
//! use fuzzy_pairs::MatchingEngine;
//!
//! let library = vec!["ACGT".to_string(), "ACGG".to_string(), "GGGG".to_string()];
//! let queries = vec!["ACGT".to_string(), "ACGA".to_string(), "TTTT".to_string()];
//!
//! let mapping = MatchingEngine::new(&library).run(&queries).unwrap();
//!
//! for (query, matched) in mapping.pairs() {
//!     println!("{query}\t{matched}");
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Shared types such as the mismatch policy
//! - [`matching`]: Distance predicate, scanner, and parallel engine
//! - [`parsing`]: Sequence list loading and pair output
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::types::*;
pub use matching::engine::{MatchingConfig, MatchingEngine};
pub use matching::results::{MatchMapping, MatchSummary};
