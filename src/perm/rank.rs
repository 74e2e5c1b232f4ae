// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Ranking and unranking permutations of a fixed size.
//!
//! Permutations of `0..size` are numbered 0 to size!-1 in lexicographic
//! order. [`unrank`] decodes a rank through the factorial number system
//! (Lehmer code), most significant digit first; [`Permutation::rank`] is its
//! exact inverse. [`unrank_by_stepping`] reaches the same permutation by
//! advancing from the identity one step at a time, which is O(rank * size)
//! but requires no factorial arithmetic; the two variants agree on every
//! input.

use crate::perm::constants::MAX_PERMUTATION_SIZE;
use crate::perm::{Permutation, PermutationError};

/// `n!` if it fits in a u64.
fn checked_factorial(n: usize) -> Option<u64> {
    (1..=n as u64).try_fold(1u64, |acc, k| acc.checked_mul(k))
}

/// Decode `rank` into the permutation of `0..size` at that position in
/// lexicographic order.
///
/// Factorial-number-system decoding: for i from size down to 1, the digit
/// `rank / (i-1)!` selects which of the remaining candidates comes next, and
/// the candidate is removed from the pool. O(size^2) from the pool removal,
/// independent of the rank's magnitude.
///
/// Ranks are taken modulo size!, so ranks past the last permutation wrap
/// around exactly like repeated [`Permutation::advance`] does.
pub fn unrank(rank: u64, size: usize) -> Permutation {
    // When size! exceeds u64 range, every u64 rank is already in range.
    let mut rank = match checked_factorial(size) {
        Some(total) => rank % total,
        None => rank,
    };
    let mut pool: Vec<usize> = (0..size).collect();
    let mut map = Vec::with_capacity(size);
    for i in (1..=size).rev() {
        let selector = match checked_factorial(i - 1) {
            Some(f) => {
                let digit = (rank / f) as usize;
                rank %= f;
                digit
            }
            // (i-1)! exceeds u64 range and therefore any remaining rank,
            // so this digit is 0.
            None => 0,
        };
        map.push(pool.remove(selector));
    }
    Permutation::from_validated(map)
}

/// Reach the permutation of `0..size` at position `rank` by advancing from
/// the identity `rank` times.
///
/// O(rank * size); use [`unrank`] unless the rank is tiny. Kept as the
/// executable definition of lexicographic rank, against which the decoder is
/// tested.
pub fn unrank_by_stepping(rank: u64, size: usize) -> Permutation {
    let mut map = Permutation::identity(size);
    for _ in 0..rank {
        map.advance();
    }
    map
}

impl Permutation {
    /// The position of this permutation in the lexicographic order of all
    /// permutations of its size: the exact inverse of [`unrank`].
    ///
    /// Lehmer encoding: digit i counts the elements after position i that
    /// are smaller than the element at i, weighted by (n-1-i)!. Returns
    /// [`PermutationError::SizeOverflow`] if the rank does not fit in a u64,
    /// which can only happen past size [`MAX_PERMUTATION_SIZE`].
    pub fn rank(&self) -> Result<u64, PermutationError> {
        let map = self.as_slice();
        let n = map.len();
        let overflow = || PermutationError::SizeOverflow {
            size: n,
            max: MAX_PERMUTATION_SIZE,
        };
        let mut rank: u64 = 0;
        for (i, &value) in map.iter().enumerate() {
            let digit = map[i + 1..].iter().filter(|&&v| v < value).count() as u64;
            if digit > 0 {
                let f = checked_factorial(n - 1 - i).ok_or_else(overflow)?;
                rank = digit
                    .checked_mul(f)
                    .and_then(|term| rank.checked_add(term))
                    .ok_or_else(overflow)?;
            }
        }
        Ok(rank)
    }
}
