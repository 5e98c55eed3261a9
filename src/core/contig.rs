//! Contig extraction: splitting scaffolds at runs of ambiguous bases.

/// Returns true for the ambiguous base symbol (`N` or `n`)
#[inline]
#[must_use]
pub fn is_ambiguous(base: u8) -> bool {
    base.eq_ignore_ascii_case(&b'N')
}

/// Split a scaffold at every maximal run of ambiguous bases and return the
/// length of each piece, in sequence order.
///
/// Pieces bordering a leading or trailing run are kept as zero-length
/// contigs, so the result always has one more entry than there are runs:
///
/// ```
/// use assembly_stats::core::contig::contig_lengths;
///
/// assert_eq!(contig_lengths(b"ACGTNNNNACGT"), vec![4, 4]);
/// assert_eq!(contig_lengths(b"NNNN"), vec![0, 0]);
/// assert_eq!(contig_lengths(b"ACGT"), vec![4]);
/// ```
#[must_use]
pub fn contig_lengths(sequence: &[u8]) -> Vec<u64> {
    let mut lengths = Vec::new();
    extend_contig_lengths(sequence, &mut lengths);
    lengths
}

/// Append contig lengths for `sequence` to `lengths` without allocating
/// an intermediate vector.
pub fn extend_contig_lengths(sequence: &[u8], lengths: &mut Vec<u64>) {
    let mut current: u64 = 0;
    let mut in_gap = false;

    for &base in sequence {
        if is_ambiguous(base) {
            if !in_gap {
                lengths.push(current);
                current = 0;
                in_gap = true;
            }
        } else {
            current += 1;
            in_gap = false;
        }
    }

    lengths.push(current);
}

/// Count ambiguous bases in a sequence
#[must_use]
pub fn ambiguous_count(sequence: &[u8]) -> u64 {
    sequence.iter().filter(|&&b| is_ambiguous(b)).count() as u64
}
