// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rust implementation of the Nat Database number library.
//!
//! The Nat Database is a small demonstration page that shows a table of
//! number-theoretic and combinatorial facts about a displayed natural number.
//! This crate is the computational core behind that table; the `natfacts`
//! binary is a command-line stand-in for the page.
//!
//! # Architecture
//!
//! The library is a flat set of pure functions grouped by concern:
//!
//! ## Root finder
//!
//! Arbitrary-precision integer square roots and Nth roots via Newton's method,
//! over [`num_bigint::BigUint`]. Leaf component; the pairing codecs depend on it.
//!
//! ## Pairing codecs
//!
//! Three independent bijections between the natural numbers and pairs of
//! natural numbers (Cantor, Szudzik, Rosenberg-Strong), behind the
//! [`PairingScheme`] trait. `unpair(pair(x, y)) == (x, y)` and
//! `pair(unpair(z)) == z` for every valid input.
//!
//! ## Permutation engine
//!
//! Validation, reindexing, lexicographic successor, ranking and unranking of
//! permutations of `0..n`, and the [`PermutationCatalog`] that indexes the
//! concatenation of all permutation lists of every size as one infinite
//! sequence.
//!
//! ## MEMO data
//!
//! The only mutable state in the crate: an append-only memoized factorial
//! table ([`memo::FactorialMemo`]) owned by the catalog. Entries are added and
//! never evicted or overwritten.

pub mod arith;
pub mod facts;
pub mod memo;
pub mod pairing;
pub mod perm;

// Re-export commonly used types
pub use arith::{integer_nth_root, integer_sqrt};
pub use pairing::{all_schemes, Cantor, PairingScheme, RosenbergStrong, Szudzik};
pub use perm::{Permutation, PermutationCatalog, PermutationError};
