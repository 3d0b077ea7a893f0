use crate::jacobian::{add_jacobian, affine_from_jacobian, double_jacobian, Jacobian};
use crate::{CurveParams, CurvePoint};

/// A short Weierstrass curve with a = -3.
///
/// Scalars are big-endian byte strings and are consumed most significant bit
/// first. Neither multiplier is constant time.
pub trait Curve {
    /// Parameters of the curve.
    fn params(&self) -> &CurveParams;

    /// Check if a point lies on the curve.
    fn is_on_curve(&self, point: &CurvePoint) -> bool {
        self.params().is_on_curve(point)
    }

    /// Sum of two points.
    fn add(&self, p1: &CurvePoint, p2: &CurvePoint) -> CurvePoint;

    /// Point doubling: 2*P.
    fn double(&self, point: &CurvePoint) -> CurvePoint;

    /// k*P by double-and-add. The addition runs only on set bits, so timing
    /// follows the bit pattern of `k`.
    fn scalar_mult(&self, point: &CurvePoint, k: &[u8]) -> CurvePoint;

    /// k*P with a Montgomery ladder: one addition and one doubling per bit
    /// whatever the bit value. Same result as [`Curve::scalar_mult`].
    fn scalar_mult_ladder(&self, point: &CurvePoint, k: &[u8]) -> CurvePoint;

    /// k*G for the base point G.
    #[inline]
    fn scalar_base_mult(&self, k: &[u8]) -> CurvePoint {
        self.scalar_mult(&self.params().g, k)
    }
}

impl Curve for CurveParams {
    #[inline]
    fn params(&self) -> &CurveParams {
        self
    }

    fn add(&self, p1: &CurvePoint, p2: &CurvePoint) -> CurvePoint {
        let p = self.modulus();
        let sum = add_jacobian(&Jacobian::from_affine(p1), &Jacobian::from_affine(p2), &p);
        affine_from_jacobian(&sum, &p)
    }

    fn double(&self, point: &CurvePoint) -> CurvePoint {
        let p = self.modulus();
        affine_from_jacobian(&double_jacobian(&Jacobian::from_affine(point), &p), &p)
    }

    fn scalar_mult(&self, point: &CurvePoint, k: &[u8]) -> CurvePoint {
        let p = self.modulus();
        let base = Jacobian::from_affine(point);
        let mut acc = Jacobian::identity();

        for &byte in k {
            let mut bits = byte;
            for _ in 0..8 {
                acc = double_jacobian(&acc, &p);
                if bits & 0x80 == 0x80 {
                    acc = add_jacobian(&base, &acc, &p);
                }
                bits <<= 1;
            }
        }

        affine_from_jacobian(&acc, &p)
    }

    fn scalar_mult_ladder(&self, point: &CurvePoint, k: &[u8]) -> CurvePoint {
        let p = self.modulus();
        // invariant: r1 = r0 + P
        let mut r0 = Jacobian::identity();
        let mut r1 = Jacobian::from_affine(point);

        for &byte in k {
            for shift in (0..8).rev() {
                let set = (byte >> shift) & 1 == 1;
                if set {
                    core::mem::swap(&mut r0, &mut r1);
                }
                r1 = add_jacobian(&r0, &r1, &p);
                r0 = double_jacobian(&r0, &p);
                if set {
                    core::mem::swap(&mut r0, &mut r1);
                }
            }
        }

        affine_from_jacobian(&r0, &p)
    }
}
