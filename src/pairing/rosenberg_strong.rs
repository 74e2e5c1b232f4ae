// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The Rosenberg-Strong pairing function.
//!
//! Enumerates the grid in square shells indexed by `m = max(x, y)`, walking
//! up one side of the shell and down the other:
//!
//! ```text
//! pair(x, y) = m^2 + m + x - y    where m = max(x, y)
//! ```
//!
//! Unpairing takes `m = floor(sqrt(z))` and splits the shell at `m^2 + m`
//! (the corner point `(m, m)`).

use crate::arith::integer_sqrt;
use crate::pairing::PairingScheme;
use num_bigint::BigUint;

/// The Rosenberg-Strong pairing bijection.
#[derive(Debug, Clone, Copy, Default)]
pub struct RosenbergStrong;

impl PairingScheme for RosenbergStrong {
    fn name(&self) -> &'static str {
        "rosenberg-strong"
    }

    fn pair(&self, x: &BigUint, y: &BigUint) -> BigUint {
        let m = x.max(y);
        // m >= y, so adding x before subtracting y keeps the value
        // non-negative throughout.
        m * m + m + x - y
    }

    fn unpair(&self, z: &BigUint) -> (BigUint, BigUint) {
        let m = integer_sqrt(z);
        let rest = z - &m * &m;
        if rest < m {
            (rest, m)
        } else {
            let y = &m * &m + &m * 2u32 - z;
            (m, y)
        }
    }
}
