//! ElGamal-style encryption over an elliptic curve group
//!
//! Encryption of an integer m under public key Q with ephemeral scalar k:
//! ```text
//! C1 = k·G
//! C2 = (k·Q).x + m          (plain integer addition, no reduction)
//! ```
//! Decryption with private key d recovers m = C2 - (d·C1).x, since
//! d·(k·G) = k·(d·G). The x-coordinate cancels as an integer, so any m
//! (negative, or far wider than p) round-trips exactly.
//!
//! # Homomorphic addition
//! `homomorphic_add` adds the C1 points on the curve and the C2 integers.
//! The combined C1 is exactly (k_a + k_b)·G, but decrypting the combined
//! ciphertext subtracts ((k_a + k_b)·Q).x, which in general differs from
//! (k_a·Q).x + (k_b·Q).x. The summed ciphertext therefore does not, in
//! general, decrypt to m_a + m_b.
//!
//! # Security
//! The ephemeral k must be fresh for every encryption; reusing it reveals
//! the difference of the two plaintexts. Arithmetic is not constant-time.

use super::keys::{KeyPair, PrivateKey, PublicKey, random_scalar};
use crate::elliptic_curve::{EllipticCurve, Point};
use crate::error::{CurveError, Result};
use num_bigint::{BigInt, BigUint};
use rand::RngCore;
use std::fmt;

/// Ciphertext (C1, C2)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ciphertext {
    /// Ephemeral point k·G
    c1: Point,
    /// Blinded message (k·Q).x + m
    c2: BigInt,
}

impl Ciphertext {
    pub fn new(c1: Point, c2: BigInt) -> Self {
        Self { c1, c2 }
    }

    pub fn c1(&self) -> &Point {
        &self.c1
    }

    pub fn c2(&self) -> &BigInt {
        &self.c2
    }

    pub fn into_parts(self) -> (Point, BigInt) {
        (self.c1, self.c2)
    }
}

impl fmt::Display for Ciphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(C1 = {}, C2 = {})", self.c1, self.c2)
    }
}

/// The encryption scheme bound to one curve group
///
/// Holds no key material; key pairs are passed in explicitly so a single
/// long-lived pair can be shared across callers.
#[derive(Clone, Debug)]
pub struct ElGamal {
    curve: EllipticCurve,
}

impl ElGamal {
    pub fn new(curve: EllipticCurve) -> Self {
        Self { curve }
    }

    /// The scheme over secp256k1
    pub fn secp256k1() -> Self {
        Self::new(EllipticCurve::secp256k1())
    }

    pub fn curve(&self) -> &EllipticCurve {
        &self.curve
    }

    /// Generates a key pair from the thread-local RNG
    pub fn generate_key_pair(&self) -> Result<KeyPair> {
        KeyPair::generate(&self.curve)
    }

    /// Encrypts `message` with a fresh ephemeral scalar from the
    /// thread-local RNG
    pub fn encrypt(&self, public_key: &PublicKey, message: &BigInt) -> Result<Ciphertext> {
        self.encrypt_with_rng(public_key, message, &mut rand::rng())
    }

    /// Encrypts `message` with a fresh ephemeral scalar drawn from `rng`
    ///
    /// Callers on separate threads can each pass their own generator.
    pub fn encrypt_with_rng<R: RngCore + ?Sized>(
        &self,
        public_key: &PublicKey,
        message: &BigInt,
        rng: &mut R,
    ) -> Result<Ciphertext> {
        let k = random_scalar(self.curve.order(), rng);
        self.encrypt_with_nonce(public_key, message, &k)
    }

    /// Encrypts `message` with the ephemeral scalar `k`
    ///
    /// # Arguments
    /// * `public_key` - Recipient public key Q
    /// * `message` - Any integer; not reduced and not range-checked
    /// * `k` - Ephemeral scalar in [1, N) (must be fresh for each encryption!)
    ///
    /// # Errors
    /// [`CurveError::InvalidScalar`] if `k` is outside [1, N)
    pub fn encrypt_with_nonce(
        &self,
        public_key: &PublicKey,
        message: &BigInt,
        k: &BigUint,
    ) -> Result<Ciphertext> {
        let c1 = self.curve.mul_generator(k)?;
        let shared = self.curve.scalar_mul(public_key.point(), k)?;
        let c2 = shared_x(&shared)? + message;
        Ok(Ciphertext { c1, c2 })
    }

    /// Recovers the message: C2 - (d·C1).x
    ///
    /// # Errors
    /// [`CurveError::PointAtInfinity`] if `C1` is the point at infinity;
    /// curve errors from a degenerate `C1` are passed through.
    pub fn decrypt(&self, ciphertext: &Ciphertext, private_key: &PrivateKey) -> Result<BigInt> {
        let shared = self.curve.scalar_mul(&ciphertext.c1, private_key.scalar())?;
        Ok(&ciphertext.c2 - shared_x(&shared)?)
    }

    /// Combines two ciphertexts: (C1_a + C1_b, C2_a + C2_b)
    ///
    /// The C1 sum uses the chord formula only, so two ciphertexts sharing an
    /// ephemeral scalar (equal C1) or with negated ephemeral scalars fail.
    /// See the module documentation for why the result does not in general
    /// decrypt to the sum of the plaintexts.
    ///
    /// # Errors
    /// [`CurveError::NotInvertible`] when the two C1 points share an
    /// x-coordinate
    pub fn homomorphic_add(&self, a: &Ciphertext, b: &Ciphertext) -> Result<Ciphertext> {
        let c1 = self.curve.add(&a.c1, &b.c1)?;
        let c2 = &a.c2 + &b.c2;
        log::trace!("Combined ciphertexts into C1 = {}", c1);
        Ok(Ciphertext { c1, c2 })
    }
}

fn shared_x(point: &Point) -> Result<&BigInt> {
    point.x().ok_or(CurveError::PointAtInfinity)
}
