//! facets-census - Size census of the union of power sets
//!
//! Given a family of sets A_1, ..., A_n drawn from the universe {0, ..., 63},
//! this crate counts, for every k, the distinct k-element sets X that are a
//! subset of at least one A_i.
//!
//! This crate provides functionality to:
//! - Build a store of sets as bitmasks with their ordered bases (chains)
//! - Enumerate every subset once and deduplicate against earlier sets
//! - Read sets from and write histograms to line-oriented text files

pub mod constants;
pub mod domain;
pub mod infra;
pub mod app;

// Re-export commonly used types
pub use constants::*;
pub use domain::census::{CensusError, CensusOptions, compute_histogram, estimated_work};
pub use domain::chain::Chain;
pub use domain::histogram::Histogram;
pub use domain::set_store::{ElementError, SetHandle, SetStore, SetStoreError, StoreConfig};
