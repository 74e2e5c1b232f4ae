// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! MEMO data: memoized tables that grow but never change.
//!
//! This tier holds the only mutable state in the crate. Entries are appended
//! on first use and never evicted or overwritten, so a cached value is valid
//! for the lifetime of its owner. Each owner (the permutation catalog, a test)
//! constructs its own table; there is no process-global instance, which keeps
//! tests independent and leaves serialization to the embedding host.

pub mod factorial;

// Re-export for convenience
pub use factorial::{CacheCounters, CacheStatistics, FactorialMemo};
