// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Memoized factorial table.
//!
//! The auto-sizing permutation catalog queries the same small factorials over
//! and over while decomposing ranks; this table computes each value once and
//! appends it. Access goes through `&mut self`, so ownership serializes all
//! reads and writes; a host that shares one table across threads wraps the
//! owner in its own lock.

use crate::perm::constants::MAX_PERMUTATION_SIZE;
use crate::perm::PermutationError;
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

/// Counters tracked by the factorial cache.
#[derive(Debug, EnumCountMacro, Copy, Clone)]
#[repr(u8)]
pub enum CacheCounters {
    /// Queries answered from the table.
    Hits,
    /// Queries that had to extend the table.
    Misses,
}

/// Hit/miss statistics for a memo table.
#[derive(Debug, Default, Clone)]
pub struct CacheStatistics {
    stats: [u64; CacheCounters::COUNT],
}

impl CacheStatistics {
    /// Increment the specified counter by 1.
    fn increment(&mut self, counter: CacheCounters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: CacheCounters) -> u64 {
        self.stats[counter as usize]
    }
}

/// Append-only memoized factorial table.
///
/// `table[n] == n!`. The table starts at `0! = 1` and extends itself on
/// demand up to [`MAX_PERMUTATION_SIZE`]; larger queries fail with
/// [`PermutationError::SizeOverflow`] instead of wrapping.
#[derive(Debug, Clone)]
pub struct FactorialMemo {
    table: Vec<u64>,
    statistics: CacheStatistics,
}

impl FactorialMemo {
    /// Create a table holding only `0! = 1`.
    pub fn new() -> Self {
        Self {
            table: vec![1],
            statistics: CacheStatistics::default(),
        }
    }

    /// Look up `n!`, extending the table if this is the first query for `n`.
    pub fn get(&mut self, n: usize) -> Result<u64, PermutationError> {
        if n > MAX_PERMUTATION_SIZE {
            return Err(PermutationError::SizeOverflow {
                size: n,
                max: MAX_PERMUTATION_SIZE,
            });
        }
        if n < self.table.len() {
            self.statistics.increment(CacheCounters::Hits);
            return Ok(self.table[n]);
        }
        self.statistics.increment(CacheCounters::Misses);
        while self.table.len() <= n {
            let k = self.table.len() as u64;
            let next = self.table[self.table.len() - 1] * k;
            self.table.push(next);
        }
        Ok(self.table[n])
    }

    /// Number of entries currently cached (always at least 1, for `0!`).
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// A memo table is never empty: it is seeded with `0! = 1`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Get the cache statistics.
    pub fn statistics(&self) -> &CacheStatistics {
        &self.statistics
    }
}

impl Default for FactorialMemo {
    fn default() -> Self {
        Self::new()
    }
}
