//! Elliptic Curve Group over a prime field
//!
//! Short Weierstrass form: y² = x³ + ax + b (mod p), characteristic > 3.
//!
//! Points use affine coordinates; every addition and doubling costs one
//! field inversion. Degenerate inputs are not rerouted: `add` on two points
//! sharing an x-coordinate fails with [`CurveError::NotInvertible`] rather
//! than falling back to doubling or returning the identity.

use crate::error::{CurveError, Result};
use crate::field::{mod_inverse, modulo};
use crate::params::{CurveConfig, CurveParams};
use num_bigint::{BigInt, BigUint};
use num_traits::{Signed, Zero};
use std::fmt;

/// A point on an elliptic curve
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Point {
    /// The point at infinity (identity element)
    Infinity,
    /// A point with affine coordinates (x, y), both in [0, p)
    Affine { x: BigInt, y: BigInt },
}

impl Point {
    pub fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    /// x-coordinate, `None` for the point at infinity
    pub fn x(&self) -> Option<&BigInt> {
        match self {
            Point::Infinity => None,
            Point::Affine { x, .. } => Some(x),
        }
    }

    /// y-coordinate, `None` for the point at infinity
    pub fn y(&self) -> Option<&BigInt> {
        match self {
            Point::Infinity => None,
            Point::Affine { y, .. } => Some(y),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Point::Infinity => write!(f, "O (point at infinity)"),
            Point::Affine { x, y } => write!(f, "({}, {})", x, y),
        }
    }
}

/// An elliptic curve group with a fixed generator
#[derive(Clone, Debug)]
pub struct EllipticCurve {
    params: CurveParams,
}

impl EllipticCurve {
    /// Builds the curve group from domain parameters
    ///
    /// # Panics
    /// Panics if p ≤ 3, if the curve is singular (4a³ + 27b² ≡ 0), if the
    /// generator does not lie on the curve, or if its order is below 2.
    pub fn new(params: CurveParams) -> Self {
        assert!(
            params.p > BigInt::from(3),
            "Short Weierstrass form requires characteristic > 3"
        );
        assert!(
            params.n > BigUint::from(1u32),
            "Generator order must be at least 2"
        );

        let a_cubed = &params.a * &params.a * &params.a;
        let b_squared = &params.b * &params.b;
        let discriminant = modulo(
            &(BigInt::from(4) * a_cubed + BigInt::from(27) * b_squared),
            &params.p,
        );
        assert!(
            !discriminant.is_zero(),
            "Curve is singular (discriminant is zero)"
        );

        let curve = Self { params };
        assert!(
            curve.is_on_curve(&curve.params.g) && !curve.params.g.is_infinity(),
            "Generator is not on the curve"
        );
        curve
    }

    /// The secp256k1 group
    pub fn secp256k1() -> Self {
        Self::new(CurveParams::secp256k1().clone())
    }

    /// The group named by a [`CurveConfig`] marker type
    pub fn from_config<C: CurveConfig>() -> Self {
        Self::new(C::params().clone())
    }

    pub fn params(&self) -> &CurveParams {
        &self.params
    }

    pub fn generator(&self) -> &Point {
        &self.params.g
    }

    /// Order N of the generator
    pub fn order(&self) -> &BigUint {
        &self.params.n
    }

    pub fn identity(&self) -> Point {
        Point::Infinity
    }

    pub fn is_on_curve(&self, point: &Point) -> bool {
        match point {
            Point::Infinity => true,
            Point::Affine { x, y } => {
                let p = &self.params.p;
                if x.is_negative() || y.is_negative() || x >= p || y >= p {
                    return false;
                }
                let lhs = modulo(&(y * y), p);
                let rhs = modulo(&(x * x * x + &self.params.a * x + &self.params.b), p);
                lhs == rhs
            }
        }
    }

    pub fn negate(&self, point: &Point) -> Point {
        match point {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => Point::Affine {
                x: x.clone(),
                y: modulo(&-y, &self.params.p),
            },
        }
    }

    /// Chord addition of two distinct affine points
    ///
    /// λ = (b.y - a.y) / (b.x - a.x), x = λ² - a.x - b.x, y = λ(a.x - x) - a.y
    ///
    /// The point at infinity acts as the identity. There is no doubling
    /// branch: if `a.x == b.x` (equal points, or a point and its negation)
    /// the slope's denominator is zero and the call fails.
    ///
    /// # Errors
    /// [`CurveError::NotInvertible`] when `a.x ≡ b.x (mod p)`
    pub fn add(&self, a: &Point, b: &Point) -> Result<Point> {
        match (a, b) {
            (Point::Infinity, _) => Ok(b.clone()),
            (_, Point::Infinity) => Ok(a.clone()),
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => {
                let p = &self.params.p;
                let lambda = modulo(&((y2 - y1) * mod_inverse(&(x2 - x1), p)?), p);
                let x3 = modulo(&(&lambda * &lambda - x1 - x2), p);
                let y3 = modulo(&(&lambda * (x1 - &x3) - y1), p);
                Ok(Point::Affine { x: x3, y: y3 })
            }
        }
    }

    /// Tangent doubling
    ///
    /// λ = (3x² + a) / 2y, x' = λ² - 2x, y' = λ(x - x') - y.
    /// Doubling the point at infinity gives the point at infinity.
    ///
    /// # Errors
    /// [`CurveError::NotInvertible`] for a 2-torsion point (y = 0)
    pub fn double(&self, a: &Point) -> Result<Point> {
        match a {
            Point::Infinity => Ok(Point::Infinity),
            Point::Affine { x, y } => {
                let p = &self.params.p;
                let numerator = BigInt::from(3) * x * x + &self.params.a;
                let denominator = mod_inverse(&(BigInt::from(2) * y), p)?;
                let lambda = modulo(&(numerator * denominator), p);
                let x3 = modulo(&(&lambda * &lambda - BigInt::from(2) * x), p);
                let y3 = modulo(&(&lambda * (x - &x3) - y), p);
                Ok(Point::Affine { x: x3, y: y3 })
            }
        }
    }

    /// Scalar multiplication using double-and-add algorithm
    ///
    /// Computes k*P, scanning the bits of `k` from most significant to least:
    /// ```text
    /// result = O (point at infinity)
    /// for each bit b in scalar k (from MSB to LSB):
    ///     result = 2 * result
    ///     if b == 1:
    ///         result = result + P
    /// return result
    /// ```
    /// While `result` is still O the addition is just an assignment of P.
    /// For a point of order N and 1 ≤ k < N the accumulator never equals
    /// ±P at an addition step, so the chord formula always applies.
    ///
    /// # Errors
    /// [`CurveError::InvalidScalar`] if `k == 0` or `k >= N`. Degenerate
    /// base points (wrong order, 2-torsion) surface as
    /// [`CurveError::NotInvertible`].
    pub fn scalar_mul(&self, base: &Point, k: &BigUint) -> Result<Point> {
        if k.is_zero() || k >= &self.params.n {
            return Err(CurveError::InvalidScalar { scalar: k.clone() });
        }

        let mut result = Point::Infinity;

        for i in (0..k.bits()).rev() {
            result = self.double(&result)?;

            if k.bit(i) {
                result = self.add(&result, base)?;
            }
        }
        Ok(result)
    }

    /// k*G for the curve's generator
    pub fn mul_generator(&self, k: &BigUint) -> Result<Point> {
        self.scalar_mul(&self.params.g, k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::F97Curve;

    fn pt(x: i64, y: i64) -> Point {
        Point::Affine {
            x: BigInt::from(x),
            y: BigInt::from(y),
        }
    }

    fn scalar(k: u64) -> BigUint {
        BigUint::from(k)
    }

    fn f97() -> EllipticCurve {
        EllipticCurve::from_config::<F97Curve>()
    }

    #[test]
    fn test_curve_creation() {
        let curve = f97();
        assert_eq!(curve.generator(), &pt(3, 6));
        assert_eq!(curve.order(), &scalar(5));
    }

    #[test]
    #[should_panic(expected = "Curve is singular")]
    fn test_singular_curve_panics() {
        let params = CurveParams::new(
            BigInt::from(97),
            BigInt::zero(),
            BigInt::zero(),
            pt(0, 0),
            scalar(5),
            scalar(1),
        );
        let _curve = EllipticCurve::new(params);
    }

    #[test]
    #[should_panic(expected = "Generator is not on the curve")]
    fn test_generator_off_curve_panics() {
        let mut params = F97Curve::params().clone();
        params.g = pt(3, 7);
        let _curve = EllipticCurve::new(params);
    }

    #[test]
    fn test_point_on_curve() {
        let curve = f97();
        assert!(curve.is_on_curve(&pt(3, 6)));
        assert!(curve.is_on_curve(&pt(80, 10)));
        assert!(curve.is_on_curve(&Point::Infinity));
        assert!(!curve.is_on_curve(&pt(3, 7)));
        // unreduced coordinates are rejected
        assert!(!curve.is_on_curve(&pt(3 + 97, 6)));
    }

    #[test]
    fn test_double_infinity_is_infinity() {
        let curve = f97();
        assert_eq!(curve.double(&Point::Infinity).unwrap(), Point::Infinity);
    }

    #[test]
    fn test_known_multiples_fp97() {
        let curve = f97();
        let g = pt(3, 6);

        let two = curve.double(&g).unwrap();
        assert_eq!(two, pt(80, 10));
        let three = curve.add(&two, &g).unwrap();
        assert_eq!(three, pt(80, 87));
        let four = curve.double(&two).unwrap();
        assert_eq!(four, pt(3, 91));

        assert_eq!(curve.negate(&g), four);
        assert_eq!(curve.negate(&two), three);
    }

    #[test]
    fn test_add_with_infinity_is_identity() {
        let curve = f97();
        let g = pt(3, 6);
        assert_eq!(curve.add(&g, &Point::Infinity).unwrap(), g);
        assert_eq!(curve.add(&Point::Infinity, &g).unwrap(), g);
    }

    #[test]
    fn test_add_point_to_negation_fails() {
        let curve = f97();
        let g = pt(3, 6);
        let neg = curve.negate(&g);
        assert!(matches!(
            curve.add(&g, &neg),
            Err(CurveError::NotInvertible { .. })
        ));
    }

    #[test]
    fn test_add_point_to_itself_fails() {
        let curve = f97();
        let g = pt(3, 6);
        assert_eq!(
            curve.add(&g, &g),
            Err(CurveError::NotInvertible {
                value: BigInt::zero(),
                modulus: BigInt::from(97),
            })
        );
    }

    #[test]
    fn test_double_two_torsion_fails() {
        let curve = f97();
        // 30³ + 2·30 + 3 ≡ 0 (mod 97)
        let p = pt(30, 0);
        assert!(curve.is_on_curve(&p));
        assert!(matches!(
            curve.double(&p),
            Err(CurveError::NotInvertible { .. })
        ));
    }

    #[test]
    fn test_scalar_mul_fp97() {
        let curve = f97();
        let g = pt(3, 6);
        assert_eq!(curve.scalar_mul(&g, &scalar(1)).unwrap(), g);
        assert_eq!(curve.scalar_mul(&g, &scalar(2)).unwrap(), pt(80, 10));
        assert_eq!(curve.scalar_mul(&g, &scalar(3)).unwrap(), pt(80, 87));
        assert_eq!(curve.scalar_mul(&g, &scalar(4)).unwrap(), pt(3, 91));
    }

    #[test]
    fn test_scalar_mul_rejects_zero_and_order() {
        let curve = f97();
        let g = curve.generator().clone();
        assert_eq!(
            curve.scalar_mul(&g, &scalar(0)),
            Err(CurveError::InvalidScalar { scalar: scalar(0) })
        );
        assert_eq!(
            curve.scalar_mul(&g, &scalar(5)),
            Err(CurveError::InvalidScalar { scalar: scalar(5) })
        );
        assert!(curve.scalar_mul(&g, &scalar(6)).is_err());
    }

    #[test]
    fn test_scalar_mul_closure_fp97() {
        let curve = f97();
        for k in 1..5 {
            let q = curve.mul_generator(&scalar(k)).unwrap();
            assert!(curve.is_on_curve(&q));
            assert!(!q.is_infinity());
        }
    }

    #[test]
    fn test_secp256k1_small_multiples() {
        let curve = EllipticCurve::secp256k1();
        let two = curve.mul_generator(&scalar(2)).unwrap();
        assert_eq!(
            two.x().unwrap().to_string(),
            "89565891926547004231252920425935692360644145829622209833684329913297188986597"
        );
        assert_eq!(
            two.y().unwrap().to_string(),
            "12158399299693830322967808612713398636155367887041628176798871954788371653930"
        );
        assert_eq!(two, curve.double(curve.generator()).unwrap());

        let three = curve.mul_generator(&scalar(3)).unwrap();
        assert_eq!(
            three.x().unwrap().to_string(),
            "112711660439710606056748659173929673102114977341539408544630613555209775888121"
        );
        assert!(curve.is_on_curve(&three));
    }

    #[test]
    fn test_secp256k1_order_minus_one_is_negated_generator() {
        let curve = EllipticCurve::secp256k1();
        let n_minus_1 = curve.order() - 1u32;
        let q = curve.mul_generator(&n_minus_1).unwrap();
        assert_eq!(q, curve.negate(curve.generator()));
    }

    #[test]
    fn test_point_display() {
        assert_eq!(Point::Infinity.to_string(), "O (point at infinity)");
        assert_eq!(pt(3, 6).to_string(), "(3, 6)");
    }
}
