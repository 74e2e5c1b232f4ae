// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integer square roots and Nth roots via Newton's method.
//!
//! Both functions operate on [`BigUint`] and return exact floors: no
//! floating-point arithmetic is involved at any width, so results are correct
//! for inputs of any size. Each Newton step costs one big division, and the
//! iteration count is logarithmic in the bit length of the input.

use num_bigint::BigUint;
use num_traits::{One, Pow, Zero};

/// Compute the floor of the square root of `n`.
///
/// Newton's method starting at `x = n`, `y = (n + 1) / 2`, iterating
/// `y = (x + n/x) / 2` under floor division until `y >= x`. The sequence
/// decreases monotonically onto the root, so the first non-decreasing step
/// is the answer.
///
/// `integer_sqrt(0) == 0`.
pub fn integer_sqrt(n: &BigUint) -> BigUint {
    let mut x = n.clone();
    let mut y = (&x + 1u32) / 2u32;
    while y < x {
        x = y;
        y = (&x + n / &x) / 2u32;
    }
    x
}

/// Compute the floor of the `r`-th root of `n`.
///
/// The 0th root is defined as 1 for every `n`, matching the degenerate case
/// of the iteration formula. The root of 0 is 0 for every `r >= 1`; this is
/// handled before the iteration starts since the Newton step divides by a
/// power of the current estimate.
///
/// For all other inputs, Newton's method on
/// `y = (r*x + n / x^(r-1)) / (r + 1)` until `y >= x`.
///
/// `integer_nth_root(k.pow(r), r) == k` exactly for perfect powers.
pub fn integer_nth_root(n: &BigUint, r: u32) -> BigUint {
    if r == 0 {
        return BigUint::one();
    }
    if n.is_zero() {
        return BigUint::zero();
    }
    let mut x = n.clone();
    let mut y = nth_root_step(n, &x, r);
    while y < x {
        x = y;
        y = nth_root_step(n, &x, r);
    }
    x
}

/// One Newton step for the `r`-th root: `(r*x + n / x^(r-1)) / (r + 1)`.
fn nth_root_step(n: &BigUint, x: &BigUint, r: u32) -> BigUint {
    (x * r + n / Pow::pow(x, r - 1)) / (r as u64 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Pow;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn test_integer_sqrt_zero() {
        assert_eq!(integer_sqrt(&BigUint::zero()), BigUint::zero());
    }

    #[test]
    fn test_integer_sqrt_perfect_squares() {
        for k in 0u64..200 {
            assert_eq!(integer_sqrt(&big(k * k)), big(k), "sqrt of {}^2", k);
        }
    }

    #[test]
    fn test_integer_sqrt_floors() {
        assert_eq!(integer_sqrt(&big(1)), big(1));
        assert_eq!(integer_sqrt(&big(2)), big(1));
        assert_eq!(integer_sqrt(&big(3)), big(1));
        assert_eq!(integer_sqrt(&big(8)), big(2));
        assert_eq!(integer_sqrt(&big(9)), big(3));
        assert_eq!(integer_sqrt(&big(99)), big(9));
        assert_eq!(integer_sqrt(&big(100)), big(10));
    }

    #[test]
    fn test_integer_sqrt_beyond_machine_range() {
        // k = 10^30 does not fit in u64; k^2 certainly does not.
        let k = big(10).pow(30u32);
        let square = &k * &k;
        assert_eq!(integer_sqrt(&square), k);
        assert_eq!(integer_sqrt(&(&square - 1u32)), &k - 1u32);
    }

    #[test]
    fn test_nth_root_zeroth_is_one() {
        assert_eq!(integer_nth_root(&big(0), 0), big(1));
        assert_eq!(integer_nth_root(&big(5), 0), big(1));
        assert_eq!(integer_nth_root(&big(u64::MAX), 0), big(1));
    }

    #[test]
    fn test_nth_root_of_zero() {
        assert_eq!(integer_nth_root(&big(0), 1), big(0));
        assert_eq!(integer_nth_root(&big(0), 2), big(0));
        assert_eq!(integer_nth_root(&big(0), 5), big(0));
    }

    #[test]
    fn test_nth_root_examples() {
        assert_eq!(integer_nth_root(&big(5), 2), big(2));
        assert_eq!(integer_nth_root(&big(1000), 3), big(10));
        assert_eq!(integer_nth_root(&big(37 * 37 * 37), 3), big(37));
        assert_eq!(integer_nth_root(&big(37 * 37 * 37 * 37), 4), big(37));
    }

    #[test]
    fn test_nth_root_perfect_powers() {
        for k in 1u64..50 {
            for r in 2u32..=4 {
                let n = big(k).pow(r);
                assert_eq!(integer_nth_root(&n, r), big(k), "root {} of {}^{}", r, k, r);
            }
        }
    }

    #[test]
    fn test_nth_root_floors_below_perfect_power() {
        for k in 2u64..30 {
            for r in 2u32..=4 {
                let n = big(k).pow(r) - 1u32;
                assert_eq!(integer_nth_root(&n, r), big(k - 1));
            }
        }
    }

    #[test]
    fn test_first_root_is_identity() {
        for n in [0u64, 1, 2, 17, 1_000_000] {
            assert_eq!(integer_nth_root(&big(n), 1), big(n));
        }
    }
}
