//! Subset census engine
//!
//! Walks the power set of every set in the store and counts each subset
//! exactly once across the whole family: a subset is attributed to the
//! first set (in insertion order) that contains it, and skipped during the
//! passes over later sets.

use crate::domain::chain::Chain;
use crate::domain::histogram::Histogram;
use crate::domain::set_store::SetStore;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

/// Census errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CensusError {
    /// The family has more subsets to visit than the configured budget
    #[error("work budget exceeded: {required} subsets to visit, budget is {budget}")]
    WorkBudgetExceeded { required: u128, budget: u128 },
    /// The cancel flag was raised between two sets
    #[error("census cancelled after {completed_sets} sets")]
    Cancelled { completed_sets: usize },
}

/// Options for a census run
#[derive(Clone)]
pub struct CensusOptions<'a, F = fn(usize, usize)> {
    /// Maximum number of subsets to visit (None = unlimited)
    pub max_subsets: Option<u128>,
    /// Checked before each set's pass
    pub cancel: Option<&'a AtomicBool>,
    /// Progress callback (completed_sets, total_sets)
    pub on_progress: Option<F>,
}

impl Default for CensusOptions<'_, fn(usize, usize)> {
    fn default() -> Self {
        Self {
            max_subsets: None,
            cancel: None,
            on_progress: None,
        }
    }
}

impl<'a, F> CensusOptions<'a, F> {
    /// Set the subset budget
    pub fn with_max_subsets(mut self, max_subsets: u128) -> Self {
        self.max_subsets = Some(max_subsets);
        self
    }

    /// Set the cancel flag
    pub fn with_cancel_flag(mut self, cancel: &'a AtomicBool) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Set the progress callback
    pub fn with_progress<G>(self, callback: G) -> CensusOptions<'a, G> {
        CensusOptions {
            max_subsets: self.max_subsets,
            cancel: self.cancel,
            on_progress: Some(callback),
        }
    }
}

/// Number of subsets the census visits for this store (sum of 2^|A_i|)
pub fn estimated_work(store: &SetStore) -> u128 {
    store
        .iter()
        .map(|(_, _, chain)| 1u128 << chain.len())
        .sum()
}

/// Compute the subset size histogram of the family held in the store
pub fn compute_histogram(store: &SetStore) -> Histogram {
    let mut histogram = Histogram::new();
    let masks = store.masks();

    for (handle, _, chain) in store.iter() {
        census_set(chain, &masks[..handle.index()], &mut histogram);
    }

    histogram
}

/// Compute the histogram with a work budget, cancellation and progress
///
/// The budget is checked before any subset is visited. Cancellation is
/// checked at the start of every set's pass.
pub fn compute_histogram_with_options<F>(
    store: &SetStore,
    options: CensusOptions<'_, F>,
) -> Result<Histogram, CensusError>
where
    F: FnMut(usize, usize),
{
    let CensusOptions {
        max_subsets,
        cancel,
        mut on_progress,
    } = options;

    if let Some(budget) = max_subsets {
        let required = estimated_work(store);
        if required > budget {
            return Err(CensusError::WorkBudgetExceeded { required, budget });
        }
    }

    let mut histogram = Histogram::new();
    let masks = store.masks();
    let total = store.len();

    for (handle, _, chain) in store.iter() {
        if let Some(flag) = cancel
            && flag.load(Ordering::Relaxed)
        {
            return Err(CensusError::Cancelled {
                completed_sets: handle.index(),
            });
        }

        census_set(chain, &masks[..handle.index()], &mut histogram);

        if let Some(ref mut callback) = on_progress {
            callback(handle.index() + 1, total);
        }
    }

    Ok(histogram)
}

/// Tally every subset of one set that no earlier set contains
fn census_set(chain: &Chain, earlier: &[u64], histogram: &mut Histogram) {
    for (cursor, size) in chain.subsets() {
        if !is_covered(cursor, earlier) {
            histogram.increment(size);
        }
    }
}

/// Whether `subset` is contained in any of the given sets
#[inline]
fn is_covered(subset: u64, sets: &[u64]) -> bool {
    sets.iter().any(|&set| subset & set == subset)
}
