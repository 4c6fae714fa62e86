//! Census related constants

// =============================================================================
// Universe parameters
// =============================================================================

/// Number of elements in the universe {0, ..., 63}
pub const UNIVERSE_SIZE: usize = 64;

/// Largest element value accepted in a set
pub const MAX_ELEMENT: u32 = UNIVERSE_SIZE as u32 - 1;

/// Number of histogram buckets (subset sizes 0 to 64 inclusive)
pub const HISTOGRAM_LEN: usize = UNIVERSE_SIZE + 1;

// =============================================================================
// Set store parameters
// =============================================================================

/// Default maximum number of sets held by a store
pub const DEFAULT_MAX_SETS: usize = 1000;

// =============================================================================
// Verification
// =============================================================================

/// Largest number of subset visits the reference census is run for
///
/// The reference census stores every distinct subset in a hash set.
pub const MAX_VERIFY_SUBSETS: u128 = 1 << 24;

// =============================================================================
// Text format
// =============================================================================

/// Separator between elements on an input line
pub const ELEMENT_SEPARATOR: char = ',';
