//! Curve domain parameters
//!
//! Parameters are fixed for the lifetime of the process. The named curve is
//! built once on first use and handed out as a `&'static` reference.

use crate::elliptic_curve::Point;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};
use once_cell::sync::Lazy;

/// Domain parameters of a short Weierstrass curve y² = x³ + ax + b over F_p
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveParams {
    /// Prime modulus of the base field
    pub p: BigInt,
    pub a: BigInt,
    pub b: BigInt,
    /// Generator point G
    pub g: Point,
    /// Order of G
    pub n: BigUint,
    /// Cofactor
    pub h: BigUint,
}

impl CurveParams {
    pub fn new(p: BigInt, a: BigInt, b: BigInt, g: Point, n: BigUint, h: BigUint) -> Self {
        Self { p, a, b, g, n, h }
    }

    /// secp256k1: y² = x³ + 7 over p = 2²⁵⁶ - 2³² - 977
    pub fn secp256k1() -> &'static CurveParams {
        &SECP256K1
    }
}

/// Compile-time selection of curve parameters
///
/// Marker types implementing this trait name a curve the same way a field
/// configuration names a modulus, so a curve can be chosen by type.
///
/// # Example
/// ```
/// use ec_elgamal::params::{CurveConfig, CurveParams, Secp256k1};
///
/// let params: &'static CurveParams = Secp256k1::params();
/// assert_eq!(params.n.bits(), 256);
/// ```
pub trait CurveConfig: 'static + Sized + Clone {
    /// Returns the curve's domain parameters
    fn params() -> &'static CurveParams;
}

/// The secp256k1 curve
#[derive(Clone, Debug)]
pub struct Secp256k1;

impl CurveConfig for Secp256k1 {
    fn params() -> &'static CurveParams {
        &SECP256K1
    }
}

static SECP256K1: Lazy<CurveParams> = Lazy::new(|| {
    let p = (BigInt::one() << 256u32) - (BigInt::one() << 32u32) - BigInt::from(977u32);
    let gx = big_dec(b"55066263022277343669578718895168534326250603453777594175500187360389116729240");
    let gy = big_dec(b"32670510020758816978083085130507043184471273380659243275938904335757337482424");
    let n = BigUint::parse_bytes(
        b"FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141",
        16,
    )
    .unwrap_or_else(BigUint::zero);

    CurveParams::new(
        p,
        BigInt::zero(),
        BigInt::from(7u32),
        Point::Affine { x: gx, y: gy },
        n,
        BigUint::one(),
    )
});

fn big_dec(digits: &[u8]) -> BigInt {
    BigInt::parse_bytes(digits, 10).unwrap_or_else(BigInt::zero)
}

/// y² = x³ + 2x + 3 over F_97, generator (3, 6) of order 5
///
/// The curve has 100 points, so the cofactor is 20. Small enough to check
/// the group law by hand.
#[cfg(test)]
#[derive(Clone, Debug)]
pub(crate) struct F97Curve;

#[cfg(test)]
static F97_CURVE: Lazy<CurveParams> = Lazy::new(|| {
    CurveParams::new(
        BigInt::from(97),
        BigInt::from(2),
        BigInt::from(3),
        Point::Affine {
            x: BigInt::from(3),
            y: BigInt::from(6),
        },
        BigUint::from(5u32),
        BigUint::from(20u32),
    )
});

#[cfg(test)]
impl CurveConfig for F97Curve {
    fn params() -> &'static CurveParams {
        &F97_CURVE
    }
}
