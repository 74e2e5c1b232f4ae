// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Permutation type for reindexing maps.
//!
//! A permutation of size n is a sequence containing each integer in `0..n`
//! exactly once. The constructor is the validation gate: once a
//! [`Permutation`] exists, every operation on it can rely on the invariant,
//! so only construction and length agreement can fail.
//!
//! # Examples
//!
//! ```
//! use nat_facts::perm::Permutation;
//!
//! let p = Permutation::new(vec![2, 0, 1]).unwrap();
//! assert_eq!(p.apply(&["a", "b", "c"]).unwrap(), vec!["c", "a", "b"]);
//! assert_eq!(format!("{}", p), "(2 0 1)");
//!
//! assert!(Permutation::new(vec![0, 1, 1]).is_err());
//! ```

use crate::perm::PermutationError;
use std::collections::HashMap;
use std::fmt;

/// A permutation of the integers `0..n`, usable as a reindexing map.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Permutation {
    /// The map itself; `map[i]` is the source index for output position i.
    map: Vec<usize>,
}

impl Permutation {
    /// Create a permutation from a map, validating it.
    ///
    /// Returns [`PermutationError::InvalidPermutation`] naming the first
    /// offending entry if the map is not a permutation of `0..map.len()`.
    pub fn new(map: Vec<usize>) -> Result<Self, PermutationError> {
        let n = map.len();
        let mut seen = vec![false; n];
        for (position, &value) in map.iter().enumerate() {
            if value >= n || seen[value] {
                return Err(PermutationError::InvalidPermutation {
                    value,
                    position,
                    length: n,
                });
            }
            seen[value] = true;
        }
        Ok(Self { map })
    }

    /// Create a permutation from a map known to be valid.
    ///
    /// Callers are the engine's own algorithms, which produce valid maps by
    /// construction.
    pub(crate) fn from_validated(map: Vec<usize>) -> Self {
        debug_assert!(Self::is_valid_map(&map));
        Self { map }
    }

    /// The identity permutation `[0, 1, .., n-1]`.
    pub fn identity(n: usize) -> Self {
        Self {
            map: (0..n).collect(),
        }
    }

    /// Check whether `map` is a permutation of `0..map.len()`.
    ///
    /// Seen-set scan, O(n).
    pub fn is_valid_map(map: &[usize]) -> bool {
        let n = map.len();
        let mut seen = vec![false; n];
        for &value in map {
            if value >= n || seen[value] {
                return false;
            }
            seen[value] = true;
        }
        true
    }

    /// Number of elements this permutation acts on.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if this is the empty permutation (of the empty sequence).
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The underlying map as a slice.
    pub fn as_slice(&self) -> &[usize] {
        &self.map
    }

    /// Mutable access for the engine's in-place algorithms, which preserve
    /// the permutation invariant.
    pub(crate) fn map_mut(&mut self) -> &mut [usize] {
        &mut self.map
    }

    /// Consume the permutation, returning the underlying map.
    pub fn into_inner(self) -> Vec<usize> {
        self.map
    }

    /// Reindex `list`: output position i holds `list[map[i]]`.
    ///
    /// Returns [`PermutationError::LengthMismatch`] if `list` has a different
    /// length than this permutation.
    pub fn apply<T: Clone>(&self, list: &[T]) -> Result<Vec<T>, PermutationError> {
        if list.len() != self.map.len() {
            return Err(PermutationError::LengthMismatch {
                expected: self.map.len(),
                actual: list.len(),
            });
        }
        Ok(self.map.iter().map(|&i| list[i].clone()).collect())
    }

    /// View the permutation as a function on all non-negative integers,
    /// extending it periodically: `f(n) = map[n mod m] + m * floor(n / m)`
    /// where m is the permutation's length.
    ///
    /// # Panics
    ///
    /// Panics if the permutation is empty (there is no period to extend).
    pub fn apply_periodic(&self, n: u64) -> u64 {
        let m = self.map.len() as u64;
        self.map[(n % m) as usize] as u64 + (n / m) * m
    }

    /// Compose with another permutation of the same size.
    ///
    /// Applying the result is equivalent to applying `other`, then `self`:
    /// `p.compose(&q)?.apply(list) == p.apply(&q.apply(list)?)`.
    pub fn compose(&self, other: &Permutation) -> Result<Permutation, PermutationError> {
        if other.len() != self.len() {
            return Err(PermutationError::LengthMismatch {
                expected: self.len(),
                actual: other.len(),
            });
        }
        let map = self.map.iter().map(|&i| other.map[i]).collect();
        Ok(Self::from_validated(map))
    }

    /// Infer the permutation that reindexes `before` into `after`.
    ///
    /// Builds a value-to-original-index table for `before`, then looks up
    /// each element of `after`. The inputs need not be permutations
    /// themselves, just rearrangements of each other with distinct elements;
    /// a duplicate in `before` or an element of `after` absent from `before`
    /// yields [`PermutationError::InvalidPermutation`].
    pub fn from_before_after(
        before: &[usize],
        after: &[usize],
    ) -> Result<Permutation, PermutationError> {
        if before.len() != after.len() {
            return Err(PermutationError::LengthMismatch {
                expected: before.len(),
                actual: after.len(),
            });
        }
        let positions: HashMap<usize, usize> = before
            .iter()
            .enumerate()
            .map(|(index, &value)| (value, index))
            .collect();
        let mut map = Vec::with_capacity(after.len());
        for (position, &value) in after.iter().enumerate() {
            match positions.get(&value) {
                Some(&index) => map.push(index),
                None => {
                    return Err(PermutationError::InvalidPermutation {
                        value,
                        position,
                        length: after.len(),
                    })
                }
            }
        }
        // A lossy table (duplicates in `before`) produces repeated indices;
        // the constructor rejects those.
        Permutation::new(map)
    }
}

impl fmt::Display for Permutation {
    /// Format as "(2 0 1)".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, value) in self.map.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, ")")
    }
}
