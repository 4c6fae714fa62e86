//! Census workflow
//!
//! Load a set file, run the census and save the histogram. Input errors are
//! reported before any subset is visited, and nothing is written when the
//! census fails.

use crate::constants::MAX_VERIFY_SUBSETS;
use crate::domain::brute_force::brute_force_histogram;
use crate::domain::census::{CensusError, CensusOptions, compute_histogram_with_options, estimated_work};
use crate::domain::histogram::Histogram;
use crate::domain::set_store::{SetStore, StoreConfig};
use crate::infra::histogram_writer::save_histogram;
use crate::infra::set_reader::{ReadError, load_sets};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Workflow errors
#[derive(Debug, Error)]
pub enum AppError {
    /// Input could not be turned into a set store
    #[error(transparent)]
    Read(#[from] ReadError),
    /// The census did not run to completion
    #[error(transparent)]
    Census(#[from] CensusError),
    /// Output file could not be written
    #[error("cannot write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    /// Family is too large for the reference census
    #[error("verification refused: {required} subsets to visit, limit is {limit}")]
    TooLargeToVerify { required: u128, limit: u128 },
    /// Engine and reference census disagree
    #[error("verification failed at size {size}: engine counted {engine}, reference counted {reference}")]
    VerificationFailed {
        size: usize,
        engine: u64,
        reference: u64,
    },
}

/// A census run from an input file to an output file
#[derive(Clone, Debug)]
pub struct CensusJob {
    /// Set file to read
    pub input: PathBuf,
    /// Histogram file to write
    pub output: PathBuf,
    /// Store limits
    pub store: StoreConfig,
    /// Cross-check the result against the reference census
    pub verify: bool,
}

impl CensusJob {
    /// Create a job with the default store configuration
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            store: StoreConfig::default(),
            verify: false,
        }
    }

    /// Set the store configuration
    pub fn with_store_config(mut self, store: StoreConfig) -> Self {
        self.store = store;
        self
    }

    /// Enable or disable the reference cross-check
    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }
}

/// Result of a completed census run
#[derive(Clone, Debug)]
pub struct CensusReport {
    /// Number of sets read
    pub set_count: usize,
    /// Number of subsets visited
    pub visited_subsets: u128,
    /// Resulting histogram
    pub histogram: Histogram,
    /// Number of lines written to the output file
    pub lines_written: usize,
}

/// Check that the store is small enough for the reference census
pub fn check_verifiable(store: &SetStore) -> Result<(), AppError> {
    let required = estimated_work(store);
    if required > MAX_VERIFY_SUBSETS {
        return Err(AppError::TooLargeToVerify {
            required,
            limit: MAX_VERIFY_SUBSETS,
        });
    }
    Ok(())
}

/// Compare the histogram with the reference census of the same store
///
/// Refused with `TooLargeToVerify` above `MAX_VERIFY_SUBSETS` visits.
pub fn verify_histogram(store: &SetStore, histogram: &Histogram) -> Result<(), AppError> {
    check_verifiable(store)?;
    let reference = brute_force_histogram(store);

    let mismatch = histogram
        .counts()
        .iter()
        .zip(reference.counts())
        .position(|(engine, reference)| engine != reference);

    match mismatch {
        Some(size) => Err(AppError::VerificationFailed {
            size,
            engine: histogram.get(size),
            reference: reference.get(size),
        }),
        None => Ok(()),
    }
}

/// Run a census job end to end
pub fn run_census<F>(job: &CensusJob, options: CensusOptions<'_, F>) -> Result<CensusReport, AppError>
where
    F: FnMut(usize, usize),
{
    let store = load_sets(&job.input, job.store)?;
    let visited_subsets = estimated_work(&store);

    if job.verify {
        check_verifiable(&store)?;
    }

    let histogram = compute_histogram_with_options(&store, options)?;

    if job.verify {
        verify_histogram(&store, &histogram)?;
    }

    let lines_written =
        save_histogram(&job.output, &histogram).map_err(|source| AppError::Write {
            path: job.output.clone(),
            source,
        })?;

    Ok(CensusReport {
        set_count: store.len(),
        visited_subsets,
        histogram,
        lines_written,
    })
}
