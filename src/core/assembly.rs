use thiserror::Error;
use tracing::{debug, warn};

use crate::core::contig::extend_contig_lengths;
use crate::core::n50::{StatsError, N50};
use crate::core::record::Record;
use crate::core::stats::AssemblyStats;
use crate::parsing::fasta::ParseError;

/// Any failure on the way from an assembly file to its statistics
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Stats(#[from] StatsError),
}

/// Accumulates scaffold and contig lengths from a stream of records.
///
/// Records may arrive in any order. Only lengths are retained, so memory
/// grows with the number of scaffolds and contigs rather than with the
/// number of bases.
#[derive(Debug, Default)]
pub struct AssemblyAnalyzer {
    scaffold_lengths: Vec<u64>,
    contig_lengths: Vec<u64>,
}

impl AssemblyAnalyzer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one scaffold: its full length, plus the length of every contig
    /// left after splitting at runs of ambiguous bases.
    pub fn ingest(&mut self, record: &Record) {
        self.scaffold_lengths.push(record.len() as u64);
        extend_contig_lengths(&record.sequence, &mut self.contig_lengths);
    }

    /// Drain a record source into the analyzer, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first error yielded by `source`.
    pub fn ingest_all<I, E>(&mut self, source: I) -> Result<(), E>
    where
        I: IntoIterator<Item = Result<Record, E>>,
    {
        for record in source {
            self.ingest(&record?);
        }
        Ok(())
    }

    #[must_use]
    pub fn scaffold_count(&self) -> usize {
        self.scaffold_lengths.len()
    }

    /// Number of contig entries, zero-length ones included
    #[must_use]
    pub fn contig_count(&self) -> usize {
        self.contig_lengths.len()
    }

    /// Compute the final statistics.
    ///
    /// # Errors
    ///
    /// Returns `StatsError::EmptyInput` if no record was ingested.
    pub fn finalize(mut self) -> Result<AssemblyStats, StatsError> {
        let scaffold = N50::calculate(&mut self.scaffold_lengths)?;
        let contig = N50::calculate(&mut self.contig_lengths)?;

        let assembly_size: u64 = self.scaffold_lengths.iter().sum();
        let contig_total: u64 = self.contig_lengths.iter().sum();
        // Contigs are the scaffold bases minus the gap bases, never more.
        let n_count = assembly_size - contig_total;

        debug!(
            "Analyzed {} scaffolds, {} contigs, {} bp",
            self.scaffold_lengths.len(),
            self.contig_lengths.len(),
            assembly_size
        );
        if contig_total == 0 {
            warn!("Assembly contains no unambiguous bases");
        }

        Ok(AssemblyStats {
            assembly_size,
            contig_n50: contig.n50,
            scaffold_n50: scaffold.n50,
            contig_l50: contig.l50 as u64,
            scaffold_l50: scaffold.l50 as u64,
            n_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(records: &[Record]) -> Result<AssemblyStats, StatsError> {
        let mut analyzer = AssemblyAnalyzer::new();
        for record in records {
            analyzer.ingest(record);
        }
        analyzer.finalize()
    }

    #[test]
    fn test_finalize_without_records_fails() {
        assert_eq!(
            AssemblyAnalyzer::new().finalize(),
            Err(StatsError::EmptyInput)
        );
    }

    #[test]
    fn test_single_gapless_scaffold() {
        let stats = analyze(&[Record::new("s1", "ACGTACGT")]).unwrap();
        assert_eq!(
            stats,
            AssemblyStats {
                assembly_size: 8,
                contig_n50: 8,
                scaffold_n50: 8,
                contig_l50: 0,
                scaffold_l50: 0,
                n_count: 0,
            }
        );
    }

    #[test]
    fn test_single_gapped_scaffold() {
        let stats = analyze(&[Record::new("s1", "ACGTNNNNACGT")]).unwrap();
        assert_eq!(
            stats,
            AssemblyStats {
                assembly_size: 12,
                contig_n50: 4,
                scaffold_n50: 12,
                contig_l50: 0,
                scaffold_l50: 0,
                n_count: 4,
            }
        );
    }

    #[test]
    fn test_two_scaffolds() {
        let stats = analyze(&[
            Record::new("s1", "A".repeat(100)),
            Record::new("s2", "C".repeat(50)),
        ])
        .unwrap();
        assert_eq!(stats.assembly_size, 150);
        assert_eq!(stats.n_count, 0);
        assert_eq!(stats.scaffold_n50, 100);
        assert_eq!(stats.scaffold_l50, 0);
        assert_eq!(stats.contig_n50, 100);
    }

    #[test]
    fn test_all_gap_scaffold() {
        let stats = analyze(&[Record::new("gap", "NNNN")]).unwrap();
        assert_eq!(stats.assembly_size, 4);
        assert_eq!(stats.n_count, 4);
        assert_eq!(stats.contig_n50, 0);
        assert_eq!(stats.contig_l50, 0);
        assert_eq!(stats.scaffold_n50, 4);
    }

    #[test]
    fn test_lowercase_gaps_counted() {
        let stats = analyze(&[Record::new("s1", "acgtnnacgt")]).unwrap();
        assert_eq!(stats.n_count, 2);
        assert_eq!(stats.contig_n50, 4);
    }

    #[test]
    fn test_ingest_order_invariant() {
        let records = vec![
            Record::new("a", "ACGTNNNNNNACGTACGTAC"),
            Record::new("b", "GGGGGGGGGGGGGGGGGGGGGGGGGGGGGG"),
            Record::new("c", "NNATNNNCCN"),
            Record::new("d", "T"),
        ];
        let forward = analyze(&records).unwrap();
        let mut reversed = records.clone();
        reversed.reverse();
        assert_eq!(forward, analyze(&reversed).unwrap());
        assert_eq!(forward.assembly_size, 61);
    }

    #[test]
    fn test_counts_and_invariants() {
        let records = [
            Record::new("a", "ACGTNNACGT"),
            Record::new("b", "NAAN"),
            Record::new("c", ""),
        ];
        let mut analyzer = AssemblyAnalyzer::new();
        for record in &records {
            analyzer.ingest(record);
        }
        assert_eq!(analyzer.scaffold_count(), 3);
        // [4, 4] + [0, 2, 0] + [0]
        assert_eq!(analyzer.contig_count(), 6);

        let stats = analyzer.finalize().unwrap();
        assert_eq!(stats.assembly_size, 14);
        assert_eq!(stats.n_count, 4);
        assert_eq!(stats.scaffold_n50, 10);
        // contigs sorted: [4, 4, 2, 0, 0, 0]; half of 10 reached at index 1
        assert_eq!(stats.contig_n50, 4);
        assert_eq!(stats.contig_l50, 1);
    }

    #[test]
    fn test_ingest_all_propagates_error() {
        let source: Vec<Result<Record, &str>> = vec![
            Ok(Record::new("a", "ACGT")),
            Err("broken"),
            Ok(Record::new("b", "ACGT")),
        ];
        let mut analyzer = AssemblyAnalyzer::new();
        assert_eq!(analyzer.ingest_all(source), Err("broken"));
        assert_eq!(analyzer.scaffold_count(), 1);
    }
}
