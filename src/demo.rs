//! End-to-end homomorphic addition walkthrough
//!
//! Runs the full request sequence for two plaintexts under one long-lived
//! key pair: encrypt both, combine the ciphertexts, decrypt each ciphertext
//! and add the plaintexts. The summed ciphertext is decrypted as well, so the
//! report shows both the plaintext sum and what the combined ciphertext
//! actually decrypts to.
//!
//! Reports serialize to JSON with integers as decimal strings and points as
//! `{"type":"infinity"}` or `{"type":"point","x":"..","y":".."}`.

use crate::crypto::elgamal::{Ciphertext, ElGamal};
use crate::crypto::keys::KeyPair;
use crate::elliptic_curve::Point;
use crate::error::Result;
use num_bigint::BigInt;
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Every intermediate value of one walkthrough
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoReport {
    pub message1: BigInt,
    pub message2: BigInt,
    pub ciphertext1: Ciphertext,
    pub ciphertext2: Ciphertext,
    pub ciphertext_sum: Ciphertext,
    pub decrypted1: BigInt,
    pub decrypted2: BigInt,
    /// decrypted1 + decrypted2
    pub homomorphic_sum: BigInt,
    /// Decryption of `ciphertext_sum`
    pub decrypted_ciphertext_sum: BigInt,
}

impl DemoReport {
    /// Whether the combined ciphertext decrypted to the plaintext sum
    pub fn matches_plaintext_sum(&self) -> bool {
        self.decrypted_ciphertext_sum == self.homomorphic_sum
    }

    /// Convert to pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&SerializableReport::from(self))
    }
}

/// Runs the walkthrough with the thread-local RNG
pub fn run(scheme: &ElGamal, keys: &KeyPair, m1: &BigInt, m2: &BigInt) -> Result<DemoReport> {
    run_with_rng(scheme, keys, m1, m2, &mut rand::rng())
}

/// Runs the walkthrough drawing both ephemeral scalars from `rng`
pub fn run_with_rng<R: RngCore + ?Sized>(
    scheme: &ElGamal,
    keys: &KeyPair,
    m1: &BigInt,
    m2: &BigInt,
    rng: &mut R,
) -> Result<DemoReport> {
    let ciphertext1 = scheme.encrypt_with_rng(keys.public_key(), m1, rng)?;
    let ciphertext2 = scheme.encrypt_with_rng(keys.public_key(), m2, rng)?;
    report(scheme, keys, m1, m2, ciphertext1, ciphertext2)
}

/// Finishes the walkthrough from two ready-made ciphertexts
pub fn report(
    scheme: &ElGamal,
    keys: &KeyPair,
    m1: &BigInt,
    m2: &BigInt,
    ciphertext1: Ciphertext,
    ciphertext2: Ciphertext,
) -> Result<DemoReport> {
    let ciphertext_sum = scheme.homomorphic_add(&ciphertext1, &ciphertext2)?;

    let decrypted1 = scheme.decrypt(&ciphertext1, keys.private_key())?;
    let decrypted2 = scheme.decrypt(&ciphertext2, keys.private_key())?;
    let homomorphic_sum = &decrypted1 + &decrypted2;
    let decrypted_ciphertext_sum = scheme.decrypt(&ciphertext_sum, keys.private_key())?;

    if decrypted_ciphertext_sum != homomorphic_sum {
        log::debug!(
            "Summed ciphertext decrypts to {}, plaintext sum is {}",
            decrypted_ciphertext_sum,
            homomorphic_sum
        );
    }

    Ok(DemoReport {
        message1: m1.clone(),
        message2: m2.clone(),
        ciphertext1,
        ciphertext2,
        ciphertext_sum,
        decrypted1,
        decrypted2,
        homomorphic_sum,
        decrypted_ciphertext_sum,
    })
}

// ==================== Serializable forms ====================

/// Serializable representation of a curve point
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum SerializablePoint {
    #[serde(rename = "infinity")]
    Infinity,
    #[serde(rename = "point")]
    Point { x: String, y: String },
}

impl From<&Point> for SerializablePoint {
    fn from(point: &Point) -> Self {
        match point {
            Point::Infinity => SerializablePoint::Infinity,
            Point::Affine { x, y } => SerializablePoint::Point {
                x: x.to_string(),
                y: y.to_string(),
            },
        }
    }
}

/// Serializable representation of a ciphertext
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SerializableCiphertext {
    pub c1: SerializablePoint,
    pub c2: String,
}

impl From<&Ciphertext> for SerializableCiphertext {
    fn from(ct: &Ciphertext) -> Self {
        SerializableCiphertext {
            c1: SerializablePoint::from(ct.c1()),
            c2: ct.c2().to_string(),
        }
    }
}

/// Serializable representation of a [`DemoReport`]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SerializableReport {
    pub message1: String,
    pub message2: String,
    pub ciphertext1: SerializableCiphertext,
    pub ciphertext2: SerializableCiphertext,
    pub ciphertext_sum: SerializableCiphertext,
    pub decrypted1: String,
    pub decrypted2: String,
    pub homomorphic_sum: String,
    pub decrypted_ciphertext_sum: String,
    pub matches_plaintext_sum: bool,
}

impl From<&DemoReport> for SerializableReport {
    fn from(report: &DemoReport) -> Self {
        SerializableReport {
            message1: report.message1.to_string(),
            message2: report.message2.to_string(),
            ciphertext1: (&report.ciphertext1).into(),
            ciphertext2: (&report.ciphertext2).into(),
            ciphertext_sum: (&report.ciphertext_sum).into(),
            decrypted1: report.decrypted1.to_string(),
            decrypted2: report.decrypted2.to_string(),
            homomorphic_sum: report.homomorphic_sum.to_string(),
            decrypted_ciphertext_sum: report.decrypted_ciphertext_sum.to_string(),
            matches_plaintext_sum: report.matches_plaintext_sum(),
        }
    }
}
