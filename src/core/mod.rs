//! Core data types and algorithms for assembly statistics.
//!
//! - [`Record`]: one scaffold as read from the input
//! - [`contig`]: splitting scaffolds into contigs at runs of `N`
//! - [`N50`]: the N50/L50 calculator
//! - [`AssemblyAnalyzer`]: accumulates lengths and produces [`AssemblyStats`]
//!
//! ## Scaffolds and contigs
//!
//! A scaffold is one FASTA record and may contain gaps written as runs of
//! ambiguous bases. Splitting a scaffold at every maximal run yields its
//! contigs:
//!
//! | Scaffold       | Contig lengths |
//! |----------------|----------------|
//! | `ACGTACGT`     | 8              |
//! | `ACGTNNNNACGT` | 4, 4           |
//! | `NNACGT`       | 0, 4           |
//! | `NNNN`         | 0, 0           |
//!
//! Zero-length contigs from boundary gaps are kept.

pub mod assembly;
pub mod contig;
pub mod n50;
pub mod record;
pub mod stats;

pub use assembly::{AnalysisError, AssemblyAnalyzer};
pub use n50::{StatsError, N50};
pub use record::Record;
pub use stats::AssemblyStats;
