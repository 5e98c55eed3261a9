//! # assembly-stats
//!
//! A library for summarising genome assemblies stored as FASTA.
//!
//! Given an assembly, `assembly-stats` reports its total size, the N50 and
//! L50 of both the scaffold and the contig length distributions, and the
//! number of ambiguous (`N`) bases. Contigs are obtained by splitting each
//! scaffold at every run of `N`.
//!
//! ## Features
//!
//! - **Streaming input**: records are read one at a time; only lengths are kept
//! - **Compressed input**: gzip and bgzip FASTA are read directly
//! - **Exact thresholds**: the half-total cutoff never rounds
//! - **Explicit failure**: an empty assembly is an error, not a zero
//!
//! ## Example
//!
//! ```rust
//! use assembly_stats::{AssemblyAnalyzer, Record};
//!
//! let mut analyzer = AssemblyAnalyzer::new();
//! analyzer.ingest(&Record::new("scaffold_1", "ACGTNNNNACGT"));
//!
//! let stats = analyzer.finalize().unwrap();
//! assert_eq!(stats.assembly_size, 12);
//! assert_eq!(stats.contig_n50, 4);
//! assert_eq!(stats.n_count, 4);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Records, contig splitting, N50/L50 and the analyzer
//! - [`parsing`]: FASTA record source
//! - [`cli`]: Command-line interface implementation

use std::io::BufRead;
use std::path::Path;

pub mod cli;
pub mod core;
pub mod parsing;

// Re-export commonly used types for convenience
pub use crate::core::assembly::{AnalysisError, AssemblyAnalyzer};
pub use crate::core::n50::{StatsError, N50};
pub use crate::core::record::Record;
pub use crate::core::stats::AssemblyStats;
pub use crate::parsing::fasta::{FastaSource, ParseError};

/// Compute statistics for the FASTA file at `path` (`-` reads stdin)
///
/// # Errors
///
/// Returns `AnalysisError::Parse` if the file is missing, unreadable or not
/// FASTA, and `AnalysisError::Stats` if it contains no records.
pub fn analyze_path(path: &Path) -> Result<AssemblyStats, AnalysisError> {
    analyze_source(FastaSource::open(path)?)
}

/// Compute statistics for uncompressed FASTA text from any buffered reader
///
/// # Errors
///
/// Returns `AnalysisError::Parse` if the input is not FASTA, and
/// `AnalysisError::Stats` if it contains no records.
pub fn analyze_reader<R: BufRead + 'static>(reader: R) -> Result<AssemblyStats, AnalysisError> {
    analyze_source(FastaSource::from_reader(reader))
}

fn analyze_source(source: FastaSource) -> Result<AssemblyStats, AnalysisError> {
    let mut analyzer = AssemblyAnalyzer::new();
    analyzer.ingest_all(source)?;
    Ok(analyzer.finalize()?)
}
