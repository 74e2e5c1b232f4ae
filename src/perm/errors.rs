// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the permutation engine.

use std::fmt;
use strum_macros::EnumCount as EnumCountMacro;

/// Errors that can occur when building or applying permutations.
#[derive(Debug, Clone, PartialEq, Eq, EnumCountMacro)]
pub enum PermutationError {
    /// The map is not a permutation of `0..length`: the value at `position`
    /// is out of range or has already appeared.
    InvalidPermutation {
        value: usize,
        position: usize,
        length: usize,
    },

    /// A reindexing operation was invoked with a list whose length differs
    /// from the permutation map's length.
    LengthMismatch { expected: usize, actual: usize },

    /// A factorial or rank computation would exceed the native integer range.
    /// Factorials past `size = 20` do not fit in a u64.
    SizeOverflow { size: usize, max: usize },
}

impl fmt::Display for PermutationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PermutationError::InvalidPermutation {
                value,
                position,
                length,
            } => {
                write!(
                    f,
                    "Value {} at position {} is out of range or repeated (map length {})",
                    value, position, length
                )
            }
            PermutationError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "List length {} does not match permutation length {}",
                    actual, expected
                )
            }
            PermutationError::SizeOverflow { size, max } => {
                write!(
                    f,
                    "Size {} exceeds the largest supported permutation size {}",
                    size, max
                )
            }
        }
    }
}

impl std::error::Error for PermutationError {}
