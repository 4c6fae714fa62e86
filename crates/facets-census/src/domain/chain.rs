//! Ordered basis (chain) of a set and subset enumeration
//!
//! A chain for the set A = {e_1, ..., e_m} (in declaration order) is the
//! sequence of cumulative unions c_1 ⊂ c_2 ⊂ ... ⊂ c_m = A where
//! c_j = {e_1, ..., e_j}. Walking a cursor along the chain visits every
//! subset of A exactly once, starting at the empty set and ending at A.
//!
//! Example: the chain for A = {1, 5, 2, 0} is
//! `0b000010`, `0b100010`, `0b100110`, `0b100111`.

/// Ordered basis of a set
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Chain {
    /// Cumulative bitmasks, one per element in declaration order
    links: Vec<u64>,
}

impl Chain {
    /// Build a chain from distinct elements in declaration order
    ///
    /// Elements must already be validated: each below 64 and no repeats.
    pub fn from_elements(elements: &[u8]) -> Self {
        let mut links = Vec::with_capacity(elements.len());
        let mut mask = 0u64;

        for &element in elements {
            mask |= 1u64 << element;
            links.push(mask);
        }

        Self { links }
    }

    /// Cumulative bitmasks in declaration order
    pub fn links(&self) -> &[u64] {
        &self.links
    }

    /// Number of elements in the set
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Whether the chain belongs to the empty set
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Bitmask of the whole set (the last link, or 0 for the empty set)
    pub fn mask(&self) -> u64 {
        self.links.last().copied().unwrap_or(0)
    }

    /// Advance a cursor to the next subset in chain order
    ///
    /// Finds the first link that is not a subset of `cursor` and toggles it
    /// into the cursor. The first `t` links are all inside the cursor, so the
    /// toggle clears `t` elements and adds one new element.
    ///
    /// Returns `None` once the cursor equals the full set.
    #[inline]
    pub fn successor(&self, cursor: u64, size: u32) -> Option<(u64, u32)> {
        let t = self.links.iter().position(|&link| cursor | link != cursor)?;
        let next = cursor ^ self.links[t];
        let next_size = size + 1 - t as u32;

        debug_assert_eq!(next_size, next.count_ones());
        Some((next, next_size))
    }

    /// Iterate over every subset of the set as `(cursor, size)` pairs
    ///
    /// The walk starts at the empty set and ends with the full set.
    pub fn subsets(&self) -> Subsets<'_> {
        Subsets {
            chain: self,
            next: Some((0, 0)),
        }
    }
}

/// Iterator over the subsets of a chain's set
pub struct Subsets<'a> {
    chain: &'a Chain,
    next: Option<(u64, u32)>,
}

impl Iterator for Subsets<'_> {
    type Item = (u64, u32);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (cursor, size) = self.next?;
        self.next = self.chain.successor(cursor, size);
        Some((cursor, size))
    }
}
