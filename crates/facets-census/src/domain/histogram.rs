//! Subset size histogram
//!
//! Bucket k holds the number of distinct k-element subsets covered by the
//! family. Buckets are only ever incremented.

use crate::constants::HISTOGRAM_LEN;

/// Histogram of subset sizes (0 to 64)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Histogram {
    counts: [u64; HISTOGRAM_LEN],
}

impl Histogram {
    /// Create a histogram with every bucket at 0
    pub fn new() -> Self {
        Self {
            counts: [0; HISTOGRAM_LEN],
        }
    }

    /// Build a histogram from leading bucket values
    ///
    /// Buckets beyond `counts.len()` stay at 0.
    ///
    /// # Panics
    /// Panics if more than `HISTOGRAM_LEN` values are given.
    pub fn from_counts(counts: &[u64]) -> Self {
        let mut histogram = Self::new();
        histogram.counts[..counts.len()].copy_from_slice(counts);
        histogram
    }

    #[inline]
    pub(crate) fn increment(&mut self, size: u32) {
        self.counts[size as usize] += 1;
    }

    /// Count for subsets of the given size (0 for sizes above 64)
    pub fn get(&self, size: usize) -> u64 {
        self.counts.get(size).copied().unwrap_or(0)
    }

    /// All buckets, indexed by subset size
    pub fn counts(&self) -> &[u64; HISTOGRAM_LEN] {
        &self.counts
    }

    /// Largest size with a nonzero count
    pub fn max_size(&self) -> Option<usize> {
        self.counts.iter().rposition(|&count| count != 0)
    }

    /// Total number of distinct subsets across all sizes
    ///
    /// Returned as `u128`: the full universe alone has 2^64 subsets.
    pub fn total(&self) -> u128 {
        self.counts.iter().map(|&count| count as u128).sum()
    }

    /// Counts in output order
    ///
    /// Yields counts for sizes 0, 1, 2, ... and stops at the first zero
    /// bucket, even if a later bucket is nonzero.
    pub fn emitted(&self) -> impl Iterator<Item = u64> + '_ {
        self.counts.iter().copied().take_while(|&count| count != 0)
    }
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new()
    }
}
