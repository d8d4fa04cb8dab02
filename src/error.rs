//! Error types for curve and encryption operations

use num_bigint::{BigInt, BigUint};

/// Result type for curve and encryption operations
pub type Result<T> = std::result::Result<T, CurveError>;

/// Failures raised by field, curve and scheme operations.
///
/// Both kinds are deterministic functions of their inputs; retrying the
/// same call fails the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    /// `value` shares a factor with `modulus`, so no inverse exists.
    ///
    /// Raised for degenerate point arithmetic: adding a point to itself or
    /// to its negation through `add`, or doubling a point with `y = 0`.
    NotInvertible { value: BigInt, modulus: BigInt },
    /// Scalar outside `[1, N)`
    InvalidScalar { scalar: BigUint },
    /// A shared point came out as the identity, which has no x-coordinate
    ///
    /// Only reachable with a hand-built ciphertext whose `C1` is the point
    /// at infinity.
    PointAtInfinity,
}

impl std::fmt::Display for CurveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CurveError::NotInvertible { value, modulus } => write!(
                f,
                "The modular inverse does not exist for {} mod {}",
                value, modulus
            ),
            CurveError::InvalidScalar { scalar } => {
                write!(f, "Invalid scalar/private key: {}", scalar)
            }
            CurveError::PointAtInfinity => {
                write!(f, "Point at infinity has no affine coordinates")
            }
        }
    }
}

impl std::error::Error for CurveError {}
