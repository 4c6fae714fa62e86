//! Reference census by explicit deduplication
//!
//! Collects every subset of every set into a hash set and buckets the
//! distinct subsets by size. Memory grows with the number of distinct
//! subsets, so this is only meant for cross-checking small families.

use crate::domain::histogram::Histogram;
use crate::domain::set_store::SetStore;
use rustc_hash::FxHashSet;

/// Iterate over all subsets of `mask`, ending with the empty set
///
/// Uses the `(sub - 1) & mask` descent, independent of any chain.
pub fn subsets_of(mask: u64) -> impl Iterator<Item = u64> {
    let mut next = Some(mask);
    std::iter::from_fn(move || {
        let current = next?;
        next = if current == 0 {
            None
        } else {
            Some((current - 1) & mask)
        };
        Some(current)
    })
}

/// Collect the distinct subsets covered by the family
pub fn distinct_subsets(store: &SetStore) -> FxHashSet<u64> {
    let mut seen = FxHashSet::default();
    for &mask in store.masks() {
        seen.extend(subsets_of(mask));
    }
    seen
}

/// Compute the histogram by explicit deduplication
pub fn brute_force_histogram(store: &SetStore) -> Histogram {
    let mut histogram = Histogram::new();
    for subset in distinct_subsets(store) {
        histogram.increment(subset.count_ones());
    }
    histogram
}
