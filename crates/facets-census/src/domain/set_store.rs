//! Set store
//!
//! Holds the family of input sets as 64-bit bitmasks together with their
//! chains. Sets are kept in insertion order; that order decides which set
//! a shared subset is attributed to during the census.

use crate::constants::{DEFAULT_MAX_SETS, MAX_ELEMENT};
use crate::domain::chain::Chain;
use thiserror::Error;

/// Set store configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    /// Maximum number of sets the store accepts
    pub capacity: usize,
    /// Accept sets with no elements (they only contribute the empty subset)
    pub allow_empty: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_MAX_SETS,
            allow_empty: false,
        }
    }
}

impl StoreConfig {
    /// Set the maximum number of sets
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Accept or reject empty sets
    pub fn with_allow_empty(mut self, allow_empty: bool) -> Self {
        self.allow_empty = allow_empty;
        self
    }
}

/// Position of a set inside its store
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SetHandle(usize);

impl SetHandle {
    /// Zero-based insertion index
    pub fn index(self) -> usize {
        self.0
    }
}

/// Reason an element (or a whole set) was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ElementError {
    /// Element does not fit in the universe
    #[error("element {0} is outside the universe 0..=63")]
    OutOfRange(u32),
    /// Element text is not a non-negative integer
    #[error("'{0}' is not a valid element")]
    Malformed(String),
    /// Element appears twice in the same set
    #[error("element {0} appears more than once")]
    Duplicate(u32),
    /// Set has no elements and empty sets are not accepted
    #[error("set has no elements")]
    Empty,
}

/// Set store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetStoreError {
    /// Store already holds the configured maximum number of sets
    #[error("capacity exceeded: the store is limited to {capacity} sets")]
    CapacityExceeded { capacity: usize },
    /// Element value is unusable
    #[error("invalid element: {0}")]
    InvalidElement(#[from] ElementError),
}

/// Arena of sets, indexed by insertion order
#[derive(Clone, Debug, Default)]
pub struct SetStore {
    config: StoreConfig,
    masks: Vec<u64>,
    chains: Vec<Chain>,
}

impl SetStore {
    /// Create an empty store with the default configuration
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Create an empty store with the given configuration
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            config,
            masks: Vec::new(),
            chains: Vec::new(),
        }
    }

    /// Configuration the store was created with
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Append a set given its elements in declaration order
    ///
    /// The store is left unchanged when an error is returned.
    pub fn add_set(&mut self, elements: &[u32]) -> Result<SetHandle, SetStoreError> {
        if self.masks.len() >= self.config.capacity {
            return Err(SetStoreError::CapacityExceeded {
                capacity: self.config.capacity,
            });
        }

        if elements.is_empty() && !self.config.allow_empty {
            return Err(ElementError::Empty.into());
        }

        let mut validated = Vec::with_capacity(elements.len());
        let mut mask = 0u64;
        for &element in elements {
            if element > MAX_ELEMENT {
                return Err(ElementError::OutOfRange(element).into());
            }
            let bit = 1u64 << element;
            if mask & bit != 0 {
                return Err(ElementError::Duplicate(element).into());
            }
            mask |= bit;
            validated.push(element as u8);
        }

        let chain = Chain::from_elements(&validated);
        debug_assert_eq!(chain.mask(), mask);

        let handle = SetHandle(self.masks.len());
        self.masks.push(mask);
        self.chains.push(chain);
        Ok(handle)
    }

    /// Number of sets in the store
    pub fn len(&self) -> usize {
        self.masks.len()
    }

    /// Whether the store holds no sets
    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }

    /// Bitmasks of all sets in insertion order
    pub fn masks(&self) -> &[u64] {
        &self.masks
    }

    /// Bitmask of a single set
    pub fn mask(&self, handle: SetHandle) -> u64 {
        self.masks[handle.0]
    }

    /// Chain of a single set
    pub fn chain(&self, handle: SetHandle) -> &Chain {
        &self.chains[handle.0]
    }

    /// Iterate over `(handle, mask, chain)` in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (SetHandle, u64, &Chain)> + '_ {
        self.masks
            .iter()
            .zip(&self.chains)
            .enumerate()
            .map(|(i, (&mask, chain))| (SetHandle(i), mask, chain))
    }
}
