use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::builder::RangedU64ValueParser;
use clap::Args;
use tracing::info;

use crate::cli::OutputFormat;
use crate::core::types::MismatchPolicy;
use crate::matching::engine::{MatchingConfig, MatchingEngine, DEFAULT_MAX_MISMATCHES};
use crate::matching::results::MatchSummary;
use crate::parsing::lines::load_sequences;
use crate::parsing::output::{ensure_writable, write_pairs};

#[derive(Args)]
pub struct PairsArgs {
    /// Query sequences, one per line (.gz accepted)
    #[arg(required = true, value_name = "QUERY_FILE")]
    pub query_file: PathBuf,

    /// Library sequences, one per line (.gz accepted)
    #[arg(required = true, value_name = "LIBRARY_FILE")]
    pub library_file: PathBuf,

    /// Output file for tab-separated query/match pairs
    #[arg(required = true, value_name = "OUT_FILE")]
    pub out_file: PathBuf,

    /// Mismatches after which a comparison is abandoned
    #[arg(value_name = "MAX_MISMATCHES", default_value_t = DEFAULT_MAX_MISMATCHES)]
    pub max_mismatches: usize,

    /// Upper bound on worker threads; can only lower the platform default
    #[arg(value_name = "MAX_PARALLELISM", value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub max_parallelism: Option<usize>,

    /// Which mismatch counts are accepted as a match
    #[arg(long, value_enum, default_value = "exactly-one")]
    pub policy: MismatchPolicy,
}

impl PairsArgs {
    #[must_use]
    pub fn matching_config(&self) -> MatchingConfig {
        MatchingConfig {
            max_mismatches: self.max_mismatches,
            policy: self.policy,
            max_parallelism: self.max_parallelism,
        }
    }
}

/// Execute the pairing run
///
/// # Errors
///
/// Returns an error if an input cannot be read, the output cannot be created
/// or written, or the worker pool cannot be built.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: PairsArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let start = Instant::now();

    let queries = load_sequences(&args.query_file).with_context(|| {
        format!("Failed to load query file {}", args.query_file.display())
    })?;
    let library = load_sequences(&args.library_file).with_context(|| {
        format!("Failed to load library file {}", args.library_file.display())
    })?;

    if verbose {
        eprintln!(
            "Loaded {} query and {} library sequences",
            queries.len(),
            library.len()
        );
    }

    // Fail before the comparison if the output can't be written
    ensure_writable(&args.out_file)?;

    let engine = MatchingEngine::with_config(&library, args.matching_config());
    let mapping = engine.run(&queries)?;

    let written = write_pairs(&args.out_file, &mapping)?;
    info!("Wrote {written} pairs to {}", args.out_file.display());

    let elapsed = start.elapsed().as_secs();
    let summary = mapping.summary();

    match format {
        OutputFormat::Text => print_text_summary(&summary, elapsed),
        OutputFormat::Json => print_json_summary(&args, &summary, elapsed)?,
    }

    Ok(())
}

fn print_text_summary(summary: &MatchSummary, elapsed: u64) {
    println!(
        "Query seqs matched to similar: {} of {}",
        summary.matched, summary.total
    );
    println!("Seconds elapsed: {elapsed}");
}

fn print_json_summary(
    args: &PairsArgs,
    summary: &MatchSummary,
    elapsed: u64,
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "query_file": args.query_file.display().to_string(),
        "library_file": args.library_file.display().to_string(),
        "out_file": args.out_file.display().to_string(),
        "max_mismatches": args.max_mismatches,
        "policy": args.policy,
        "summary": summary,
        "match_rate": summary.match_rate(),
        "elapsed_seconds": elapsed,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    use crate::cli::Cli;

    #[test]
    fn test_parse_minimal_args() {
        let cli = Cli::try_parse_from(["fuzzy-pairs", "q.txt", "l.txt", "out.tsv"]).unwrap();
        assert_eq!(cli.args.max_mismatches, 1);
        assert_eq!(cli.args.max_parallelism, None);
        assert_eq!(cli.args.policy, MismatchPolicy::ExactlyOne);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_all_positionals() {
        let cli =
            Cli::try_parse_from(["fuzzy-pairs", "q.txt", "l.txt", "out.tsv", "2", "4"]).unwrap();
        let config = cli.args.matching_config();
        assert_eq!(config.max_mismatches, 2);
        assert_eq!(config.max_parallelism, Some(4));
    }

    #[test]
    fn test_parse_policy() {
        let cli = Cli::try_parse_from([
            "fuzzy-pairs",
            "q.txt",
            "l.txt",
            "out.tsv",
            "--policy",
            "up-to-max",
        ])
        .unwrap();
        assert_eq!(cli.args.policy, MismatchPolicy::UpToMax);
    }

    #[test]
    fn test_too_few_args_rejected() {
        assert!(Cli::try_parse_from(["fuzzy-pairs", "q.txt", "l.txt"]).is_err());
    }

    #[test]
    fn test_malformed_numbers_rejected() {
        assert!(Cli::try_parse_from(["fuzzy-pairs", "q", "l", "o", "one"]).is_err());
        assert!(Cli::try_parse_from(["fuzzy-pairs", "q", "l", "o", "1", "0"]).is_err());
        assert!(Cli::try_parse_from(["fuzzy-pairs", "q", "l", "o", "-1"]).is_err());
    }
}
