use clap::Parser;
use tracing_subscriber::EnvFilter;

use fuzzy_pairs::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("fuzzy_pairs=debug,info")
    } else {
        EnvFilter::new("fuzzy_pairs=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    cli::pairs::run(cli.args, cli.format, cli.verbose)?;

    Ok(())
}
