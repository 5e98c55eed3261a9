//! Command-line interface for assembly-stats.
//!
//! ## Usage
//!
//! ```text
//! # Summarise an assembly
//! assembly-stats assembly.fa
//!
//! # Compressed input works directly
//! assembly-stats assembly.fna.gz
//!
//! # Pipe from another tool
//! zcat assembly.fa.gz | assembly-stats -
//!
//! # JSON output for scripting
//! assembly-stats assembly.fa --format json
//! ```

use std::path::PathBuf;

use clap::Parser;

pub mod report;
pub mod run;

#[derive(Parser)]
#[command(name = "assembly-stats")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Compute size, N50/L50 and gap statistics for a genome assembly")]
#[command(
    long_about = "assembly-stats reads a genome assembly in FASTA format and reports:\n- Total assembly size\n- Scaffold and contig N50 and L50 (contigs are scaffolds split at runs of N)\n- Total number of ambiguous (N) bases\n\nL50 values are zero-based: 0 means the single longest sequence covers half the assembly."
)]
pub struct Cli {
    /// Assembly FASTA file (plain, .gz or .bgz); use '-' for stdin
    #[arg(required = true)]
    pub assembly: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["assembly-stats", "asm.fa"]).unwrap();
        assert_eq!(cli.assembly, PathBuf::from("asm.fa"));
        assert!(!cli.verbose);
        assert!(matches!(cli.format, OutputFormat::Text));
    }

    #[test]
    fn test_parse_format_and_stdin() {
        let cli = Cli::try_parse_from(["assembly-stats", "-", "-f", "json", "-v"]).unwrap();
        assert_eq!(cli.assembly, PathBuf::from("-"));
        assert!(cli.verbose);
        assert!(matches!(cli.format, OutputFormat::Json));
    }

    #[test]
    fn test_missing_assembly_rejected() {
        assert!(Cli::try_parse_from(["assembly-stats"]).is_err());
    }
}
