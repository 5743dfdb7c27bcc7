//! Input loading and output writing for sequence lists.
//!
//! - **Sequence lists**: newline-delimited text, optionally gzip-compressed
//! - **Pair output**: tab-separated `query\tmatch` lines
//!
//! ## Example
//!
//! ```rust,no_run
//! use fuzzy_pairs::parsing::lines::load_sequences;
//! use std::path::Path;
//!
//! let queries = load_sequences(Path::new("queries.txt")).unwrap();
//! let library = load_sequences(Path::new("library.txt.gz")).unwrap();
//! ```

pub mod lines;
pub mod output;

pub use lines::ParseError;
pub use output::OutputError;
