//! Elliptic Curve ElGamal Library
//!
//! Additive ElGamal-style encryption built directly on affine point
//! arithmetic over secp256k1 (or any short Weierstrass curve).
//!
//! ## Modules
//!
//! - [`field`]: Modular reduction and inversion over F_p
//! - [`elliptic_curve`]: Point addition, doubling and scalar multiplication
//! - [`params`]: Curve domain parameters (secp256k1)
//! - [`crypto`]: Key pairs and the encryption scheme
//! - [`demo`]: End-to-end homomorphic addition walkthrough
//!
//! ## Example
//!
//! ```rust,no_run
//! use ec_elgamal::{BigInt, ElGamal};
//!
//! let scheme = ElGamal::secp256k1();
//! let keys = scheme.generate_key_pair()?;
//!
//! let ct = scheme.encrypt(keys.public_key(), &BigInt::from(42))?;
//! assert_eq!(scheme.decrypt(&ct, keys.private_key())?, BigInt::from(42));
//! # Ok::<(), ec_elgamal::CurveError>(())
//! ```
//!
//! ## Security Warning
//!
//! Not constant-time, and the ciphertext sum does not decrypt to the sum of
//! the plaintexts. For study only.

/// Cryptographic schemes (key pairs, ElGamal)
pub mod crypto;
/// End-to-end walkthrough and its JSON report
pub mod demo;
/// Elliptic curve group over a prime field
pub mod elliptic_curve;
/// Error types
pub mod error;
/// Prime field arithmetic
pub mod field;
/// Curve domain parameters
pub mod params;

pub use crypto::elgamal::{Ciphertext, ElGamal};
pub use crypto::keys::{KeyPair, PrivateKey, PublicKey};
pub use elliptic_curve::{EllipticCurve, Point};
pub use error::{CurveError, Result};
pub use params::{CurveConfig, CurveParams, Secp256k1};

pub use num_bigint::{BigInt, BigUint};
