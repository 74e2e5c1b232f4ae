// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The Cantor pairing function.
//!
//! Enumerates the grid along anti-diagonals:
//!
//! ```text
//! pair(x, y) = (x + y)(x + y + 1)/2 + y
//! ```
//!
//! Unpairing recovers the diagonal index `w` from the triangular-number
//! inverse `w = floor((sqrt(8z + 1) - 1) / 2)`, then reads the offset along
//! the diagonal.

use crate::arith::integer_sqrt;
use crate::pairing::PairingScheme;
use num_bigint::BigUint;

/// The Cantor pairing bijection.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cantor;

impl PairingScheme for Cantor {
    fn name(&self) -> &'static str {
        "cantor"
    }

    fn pair(&self, x: &BigUint, y: &BigUint) -> BigUint {
        let s = x + y;
        (&s * (&s + 1u32)) / 2u32 + y
    }

    fn unpair(&self, z: &BigUint) -> (BigUint, BigUint) {
        let w = (integer_sqrt(&(z * 8u32 + 1u32)) - 1u32) / 2u32;
        let t = (&w * &w + &w) / 2u32;
        let y = z - t;
        let x = &w - &y;
        (x, y)
    }
}
