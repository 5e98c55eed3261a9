use clap::Parser;
use tracing_subscriber::EnvFilter;

use assembly_stats::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("assembly_stats=debug,info")
    } else {
        EnvFilter::new("assembly_stats=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    cli::run::run(&cli)
}
