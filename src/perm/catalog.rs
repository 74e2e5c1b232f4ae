// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The auto-sizing permutation catalog.
//!
//! Concatenating the permutation lists of every size in increasing order,
//! starting at size 1, gives one infinite sequence:
//!
//! ```text
//! index:        0    1      2      3        4        ...  8        9
//! permutation:  (0)  (0 1)  (1 0)  (0 1 2)  (0 2 1)  ...  (2 1 0)  (0 1 2 3)
//! ```
//!
//! The catalog maps an index into that sequence to its permutation. Sizing
//! repeatedly queries the same small factorials, so the catalog owns a
//! [`FactorialMemo`] and reuses it across calls.

use crate::memo::FactorialMemo;
use crate::perm::rank::unrank;
use crate::perm::{Permutation, PermutationError};

/// Indexes the concatenation of all permutation lists of every size.
#[derive(Debug, Clone, Default)]
pub struct PermutationCatalog {
    factorials: FactorialMemo,
}

impl PermutationCatalog {
    /// Create a catalog with a fresh factorial table.
    pub fn new() -> Self {
        Self {
            factorials: FactorialMemo::new(),
        }
    }

    /// Create a catalog reusing an existing factorial table.
    pub fn with_memo(factorials: FactorialMemo) -> Self {
        Self { factorials }
    }

    /// The permutation at overall index `n`.
    ///
    /// Accumulates factorial(size) from size 1 upward until the running
    /// total would pass `n`; the remainder is the rank within that size's
    /// block, decoded by [`unrank`]. Indexes past the size-20 block fail
    /// with [`PermutationError::SizeOverflow`].
    pub fn nth(&mut self, n: u64) -> Result<Permutation, PermutationError> {
        let mut size = 1;
        let mut start = 0u64;
        loop {
            let block = self.factorials.get(size)?;
            if start + block > n {
                break;
            }
            start += block;
            size += 1;
        }
        Ok(unrank(n - start, size))
    }

    /// Get the factorial table (for inspecting cache statistics).
    pub fn factorials(&self) -> &FactorialMemo {
        &self.factorials
    }
}
