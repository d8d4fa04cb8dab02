//! Key generation
//!
//! A key pair is a private scalar d in [1, N) and the public point Q = d·G.
//! Callers create one pair at startup and share it by reference.

use crate::elliptic_curve::{EllipticCurve, Point};
use crate::error::Result;
use num_bigint::BigUint;
use num_traits::Zero;
use rand::RngCore;
use std::fmt;

/// Private scalar d with 1 ≤ d < N
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey(BigUint);

impl PrivateKey {
    pub fn scalar(&self) -> &BigUint {
        &self.0
    }

    /// Recomputes Q = d·G
    pub fn public_key(&self, curve: &EllipticCurve) -> Result<PublicKey> {
        curve.mul_generator(&self.0).map(PublicKey)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey(..)")
    }
}

/// Public point Q = d·G
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey(Point);

impl PublicKey {
    pub fn point(&self) -> &Point {
        &self.0
    }
}

/// A private scalar together with its public point
#[derive(Clone, Debug)]
pub struct KeyPair {
    private: PrivateKey,
    public: PublicKey,
}

impl KeyPair {
    /// Generates a fresh key pair from the thread-local RNG
    pub fn generate(curve: &EllipticCurve) -> Result<Self> {
        Self::generate_with_rng(curve, &mut rand::rng())
    }

    /// Generates a fresh key pair from the given RNG
    ///
    /// Draws N.bits() random bits (256 for secp256k1) and redraws until the
    /// value lies in [1, N).
    pub fn generate_with_rng<R: RngCore + ?Sized>(
        curve: &EllipticCurve,
        rng: &mut R,
    ) -> Result<Self> {
        let d = random_scalar(curve.order(), rng);
        Self::from_private(curve, d)
    }

    /// Builds the key pair for a known private scalar
    ///
    /// # Errors
    /// [`CurveError::InvalidScalar`](crate::error::CurveError::InvalidScalar)
    /// if `d` is outside [1, N).
    pub fn from_private(curve: &EllipticCurve, d: BigUint) -> Result<Self> {
        let public = curve.mul_generator(&d).map(PublicKey)?;
        log::debug!("Derived key pair, public key {}", public.0);
        Ok(Self {
            private: PrivateKey(d),
            public,
        })
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }
}

/// Draws a uniform scalar in [1, n) by rejection sampling
///
/// Each candidate has exactly `n.bits()` random bits; out-of-range draws
/// (zero, or ≥ n) are discarded.
pub fn random_scalar<R: RngCore + ?Sized>(n: &BigUint, rng: &mut R) -> BigUint {
    let bit_len = n.bits();
    let byte_len = bit_len.div_ceil(8) as usize;
    let top_bits = bit_len % 8;
    let top_mask: u8 = if top_bits == 0 {
        0xFF
    } else {
        (1u8 << top_bits) - 1
    };

    let mut bytes = vec![0u8; byte_len];
    loop {
        rng.fill_bytes(&mut bytes);
        if let Some(first) = bytes.first_mut() {
            *first &= top_mask;
        }

        let candidate = BigUint::from_bytes_be(&bytes);
        if !candidate.is_zero() && &candidate < n {
            return candidate;
        }
        log::debug!("Random scalar outside [1, N), redrawing");
    }
}
