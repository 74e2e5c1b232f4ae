// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The facts table for one natural number.
//!
//! This is what the Nat Database page computes per render: the integer square
//! root, the three unpaired decompositions, and the catalog permutation at
//! the number's index. The display layer (web page or the `natfacts` binary)
//! just formats what is assembled here.

use crate::arith::integer_sqrt;
use crate::pairing::all_schemes;
use crate::perm::{Permutation, PermutationCatalog};
use num_bigint::BigUint;
use num_traits::ToPrimitive;
use std::fmt;

/// Number-theoretic and combinatorial facts about one natural number.
#[derive(Debug, Clone)]
pub struct NumberFacts {
    /// The number itself.
    pub value: BigUint,
    /// Floor of the square root.
    pub square_root: BigUint,
    /// The number unpaired under each scheme, in display order.
    pub unpairings: Vec<(&'static str, (BigUint, BigUint))>,
    /// The catalog permutation at this number's index.
    ///
    /// Permutation indexing works on machine integers, so this is `None`
    /// when the number exceeds u64 or the index lands past the supported
    /// permutation sizes.
    pub permutation: Option<Permutation>,
}

impl NumberFacts {
    /// Assemble the facts table for `value`.
    pub fn compute(value: &BigUint, catalog: &mut PermutationCatalog) -> Self {
        let square_root = integer_sqrt(value);
        let unpairings = all_schemes()
            .iter()
            .map(|scheme| (scheme.name(), scheme.unpair(value)))
            .collect();
        let permutation = value
            .to_u64()
            .and_then(|index| catalog.nth(index).ok());
        Self {
            value: value.clone(),
            square_root,
            unpairings,
            permutation,
        }
    }
}

impl fmt::Display for NumberFacts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<18}{}", "number", self.value)?;
        writeln!(f, "{:<18}{}", "square root", self.square_root)?;
        for (name, (x, y)) in &self.unpairings {
            writeln!(f, "{:<18}({}, {})", name, x, y)?;
        }
        match &self.permutation {
            Some(permutation) => writeln!(f, "{:<18}{}", "permutation", permutation),
            None => writeln!(f, "{:<18}{}", "permutation", "past the supported range"),
        }
    }
}
