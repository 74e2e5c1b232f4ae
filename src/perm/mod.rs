// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Permutation engine.
//!
//! Everything here operates on permutations of the integers `0..n`:
//! - [`Permutation`]: validated reindexing maps and their function views
//! - successor: lexicographic ordering of the permutations of one size
//! - rank/unrank: positions in that ordering, via the factorial number system
//! - [`PermutationCatalog`]: one index over the permutations of every size
//!
//! Sizes are machine integers and ranks are u64, so factorial growth imposes
//! a hard size boundary; see [`constants`].

pub mod catalog;
pub mod constants;
pub mod errors;
pub mod map;
pub mod rank;
pub mod succ;

// Re-export for convenience
pub use catalog::PermutationCatalog;
pub use errors::PermutationError;
pub use map::Permutation;
pub use rank::{unrank, unrank_by_stepping};
