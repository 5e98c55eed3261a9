//! N50/L50 over a length distribution.
//!
//! Lengths are sorted longest first and accumulated until the running sum
//! covers at least half of the total. The length at that position is the
//! N50; the position itself is the L50.
//!
//! ## L50 convention
//!
//! L50 is reported **zero-based**: it is the index into the descending
//! length list, i.e. the number of sequences needed to reach half the total
//! minus one. Tools such as QUAST report the one-based count instead; add
//! one to compare.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    #[error("Empty input: no sequences to compute statistics from")]
    EmptyInput,
}

/// N50 and zero-based L50 of a length distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct N50 {
    pub n50: u64,
    pub l50: usize,
}

impl N50 {
    /// Compute N50/L50, sorting `lengths` in place.
    ///
    /// The half-total threshold is evaluated exactly: `running >= total / 2`
    /// over the reals is checked as `running >= total - running`, so odd
    /// totals never round down.
    ///
    /// # Errors
    ///
    /// Returns `StatsError::EmptyInput` if `lengths` is empty.
    pub fn calculate(lengths: &mut [u64]) -> Result<Self, StatsError> {
        if lengths.is_empty() {
            return Err(StatsError::EmptyInput);
        }

        lengths.sort_unstable_by(|a, b| b.cmp(a));
        let total: u64 = lengths.iter().sum();

        let mut running: u64 = 0;
        // The full prefix always satisfies the threshold, so the fallback
        // only covers the last index.
        let l50 = lengths
            .iter()
            .position(|&length| {
                running += length;
                running >= total - running
            })
            .unwrap_or(lengths.len() - 1);

        Ok(Self {
            n50: lengths[l50],
            l50,
        })
    }
}
