//! Cryptographic schemes built on the curve group.
//!
//! Provides key management and the ElGamal-style additive scheme.

pub mod elgamal;
pub mod keys;
