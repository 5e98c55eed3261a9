use serde::{Deserialize, Serialize};

/// Summary statistics for one assembly.
///
/// L50 values are zero-based (see [`crate::core::n50`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblyStats {
    /// Total scaffold length, ambiguous bases included
    pub assembly_size: u64,
    pub contig_n50: u64,
    pub scaffold_n50: u64,
    pub contig_l50: u64,
    pub scaffold_l50: u64,
    /// Number of ambiguous (`N`) bases
    pub n_count: u64,
}

impl AssemblyStats {
    /// Statistic names, in output order
    pub const KEYS: [&'static str; 6] = [
        "assembly_size",
        "contig_n50",
        "scaffold_n50",
        "contig_l50",
        "scaffold_l50",
        "n_count",
    ];

    /// Flat name to value mapping, in the order of [`Self::KEYS`]
    #[must_use]
    pub fn entries(&self) -> [(&'static str, u64); 6] {
        [
            ("assembly_size", self.assembly_size),
            ("contig_n50", self.contig_n50),
            ("scaffold_n50", self.scaffold_n50),
            ("contig_l50", self.contig_l50),
            ("scaffold_l50", self.scaffold_l50),
            ("n_count", self.n_count),
        ]
    }

    /// Look up a statistic by name
    #[must_use]
    pub fn get(&self, key: &str) -> Option<u64> {
        self.entries()
            .into_iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value)
    }
}
