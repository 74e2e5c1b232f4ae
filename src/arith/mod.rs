// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Arbitrary-precision integer arithmetic.
//!
//! Currently this is just the root finder. Everything else in the crate that
//! needs a square root goes through here.

pub mod roots;

// Re-export for convenience
pub use roots::{integer_nth_root, integer_sqrt};
