// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use nat_facts::perm::Permutation;

/// All permutations of `0..size` in lexicographic order, generated by
/// advancing from the identity. Independent of the rank decoders under test.
pub fn all_permutations(size: usize) -> Vec<Permutation> {
    let total: u64 = (1..=size as u64).product();
    let mut current = Permutation::identity(size);
    let mut result = Vec::with_capacity(total as usize);
    for _ in 0..total {
        result.push(current.clone());
        current.advance();
    }
    result
}

/// Reference factorial, computed directly.
pub fn factorial(n: u64) -> u64 {
    (1..=n).product()
}
