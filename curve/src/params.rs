use num_bigint::{BigInt, BigUint};
use serde::{Deserialize, Serialize};

use crate::CurvePoint;

/// Parameters of a short Weierstrass curve y² = x³ - 3x + b over GF(p).
///
/// A value is built once per named curve and shared read-only by every
/// operation; nothing in this crate mutates it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveParams {
    /// Prime modulus of the base field
    pub p: BigUint,
    /// Order of the base point
    pub n: BigUint,
    /// Constant term of the curve equation
    pub b: BigUint,
    /// Base point
    pub g: CurvePoint,
    /// Bit length of the field, which fixes every encoding width
    pub bit_size: usize,
}

impl CurveParams {
    pub fn new(p: BigUint, n: BigUint, b: BigUint, g: CurvePoint, bit_size: usize) -> Self {
        CurveParams {
            p,
            n,
            b,
            g,
            bit_size,
        }
    }

    /// Number of bytes in a field element: ceil(bit_size / 8).
    #[inline]
    pub fn byte_len(&self) -> usize {
        (self.bit_size + 7) >> 3
    }

    /// Check if a point is on the curve: y² = x³ - 3x + b (mod p).
    ///
    /// Coordinates need not be reduced. The point at infinity has no affine
    /// coordinates and is reported as not on the curve.
    pub fn is_on_curve(&self, point: &CurvePoint) -> bool {
        let Some((x, y)) = point.coordinates() else {
            return false;
        };
        let p = &self.p;

        let y2 = (y * y) % p;

        let x3 = x.modpow(&BigUint::from(3u32), p);
        let three_x = ((x << 1u32) + x) % p;
        // both terms are below p, so adding p first keeps the difference unsigned
        let rhs = (x3 + p - three_x + &self.b) % p;

        rhs == y2
    }

    /// The field modulus as a signed integer, for the Jacobian engine.
    #[inline]
    pub(crate) fn modulus(&self) -> BigInt {
        BigInt::from(self.p.clone())
    }
}
