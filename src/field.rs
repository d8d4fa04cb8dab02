//! Prime field arithmetic
//!
//! Curve coordinates live in F_p. Values are carried as signed `BigInt`s so
//! intermediate differences can go negative; every result handed back to the
//! curve layer is reduced to the canonical representative in `[0, p)`.

use crate::error::{CurveError, Result};
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Reduces `a` into `[0, n)`.
///
/// `n` must be positive.
#[inline]
pub fn modulo(a: &BigInt, n: &BigInt) -> BigInt {
    a.mod_floor(n)
}

/// Multiplicative inverse of `a` modulo `n`
///
/// Iterative extended Euclidean algorithm. `a` may have any sign; it is
/// reduced modulo `n` first.
///
/// # Returns
/// `r` with `0 <= r < n` and `(a * r) mod n == 1`
///
/// # Errors
/// [`CurveError::NotInvertible`] when `gcd(a, n) != 1` (including `a ≡ 0`)
/// or when `n` is not positive.
pub fn mod_inverse(a: &BigInt, n: &BigInt) -> Result<BigInt> {
    if n.sign() != Sign::Plus {
        return Err(not_invertible(a, n));
    }

    // Invariant: low ≡ lm·a and high ≡ hm·a (mod n)
    let mut lm = BigInt::one();
    let mut hm = BigInt::zero();
    let mut low = modulo(a, n);
    let mut high = n.clone();

    while low > BigInt::one() {
        let ratio = &high / &low;
        let nm = &hm - &lm * &ratio;
        let new = &high - &low * &ratio;
        hm = std::mem::replace(&mut lm, nm);
        high = std::mem::replace(&mut low, new);
    }

    if !low.is_one() {
        return Err(not_invertible(a, n));
    }

    Ok(modulo(&lm, n))
}

fn not_invertible(a: &BigInt, n: &BigInt) -> CurveError {
    CurveError::NotInvertible {
        value: a.clone(),
        modulus: n.clone(),
    }
}
