use std::io::Write;

use anyhow::Context;
use tracing::debug;

use crate::cli::{report, Cli};
use crate::core::assembly::AssemblyAnalyzer;
use crate::parsing::fasta::FastaSource;

/// Execute the statistics run for a parsed command line
///
/// # Errors
///
/// Returns an error if the assembly cannot be read or parsed, if it holds
/// no records, or if writing to stdout fails.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let source = FastaSource::open(&cli.assembly)?;

    let mut analyzer = AssemblyAnalyzer::new();
    analyzer.ingest_all(source)?;

    debug!(
        "Parsed {} scaffolds ({} contigs) from {}",
        analyzer.scaffold_count(),
        analyzer.contig_count(),
        cli.assembly.display()
    );

    let stats = analyzer
        .finalize()
        .with_context(|| format!("No sequences found in {}", cli.assembly.display()))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report::write(&mut out, &cli.assembly, &stats, cli.format)?;
    out.flush()?;

    Ok(())
}
