//! Command-line interface for fuzzy-pairs.
//!
//! ## Usage
//!
//! ```text
//! # Pair queries with their unique single-mismatch library neighbour
//! fuzzy-pairs queries.txt library.txt pairs.tsv
//!
//! # Abort comparisons after 2 mismatches, use at most 4 threads
//! fuzzy-pairs queries.txt library.txt pairs.tsv 2 4
//!
//! # Accept anything from 1 to 2 mismatches, report as JSON
//! fuzzy-pairs queries.txt library.txt pairs.tsv 2 --policy up-to-max --format json
//! ```

use clap::Parser;

pub mod pairs;

#[derive(Parser)]
#[command(name = "fuzzy-pairs")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Pair query sequences with their unique near-identical library sequence")]
#[command(
    long_about = "fuzzy-pairs compares every query sequence against every library sequence.\n\nA query is reported, with its library neighbour, when exactly one library sequence of the same length differs from it by a single substitution. Exact matches never count, and queries with several neighbours are dropped."
)]
pub struct Cli {
    #[command(flatten)]
    pub args: pairs::PairsArgs,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Summary output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
