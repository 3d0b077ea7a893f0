//! Jacobian coordinate arithmetic for curves with a = -3.
//!
//! A triple (X, Y, Z) stands for the affine point (X/Z², Y/Z³); Z = 0 is the
//! point at infinity. Addition and doubling never invert, so a whole scalar
//! multiplication pays for a single inversion in [`affine_from_jacobian`].
//!
//! Intermediates are signed. Differences that can drop below zero are lifted
//! back by adding p before they are multiplied further, and reductions happen
//! at the same points as in the explicit formulas.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::CurvePoint;

/// Point in Jacobian coordinates. Never leaves the crate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Jacobian {
    pub(crate) x: BigInt,
    pub(crate) y: BigInt,
    pub(crate) z: BigInt,
}

impl Jacobian {
    /// The point at infinity: (0, 0, 0)
    pub(crate) fn identity() -> Self {
        Jacobian {
            x: BigInt::zero(),
            y: BigInt::zero(),
            z: BigInt::zero(),
        }
    }

    #[inline]
    pub(crate) fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    pub(crate) fn from_affine(point: &CurvePoint) -> Self {
        match point {
            CurvePoint::Infinity => Self::identity(),
            CurvePoint::Affine { x, y } => Jacobian {
                x: BigInt::from(x.clone()),
                y: BigInt::from(y.clone()),
                z: z_for_affine(point),
            },
        }
    }
}

/// Jacobian Z for an affine point: 1 for a finite point, 0 for infinity.
pub(crate) fn z_for_affine(point: &CurvePoint) -> BigInt {
    if point.is_infinity() {
        BigInt::zero()
    } else {
        BigInt::one()
    }
}

/// Adds p once if `v` is negative. Callers only pass values above -p.
#[inline]
fn lift(v: BigInt, p: &BigInt) -> BigInt {
    if v.is_negative() {
        v + p
    } else {
        v
    }
}

/// Magnitude of a value already reduced into [0, p).
#[inline]
fn into_field_element(v: BigInt) -> num_bigint::BigUint {
    debug_assert!(!v.is_negative());
    v.into_parts().1
}

/// Convert (X, Y, Z) to (X/Z², Y/Z³).
pub(crate) fn affine_from_jacobian(point: &Jacobian, p: &BigInt) -> CurvePoint {
    if point.is_identity() {
        return CurvePoint::Infinity;
    }

    // Z is reduced and non-zero, so it is invertible modulo the prime p
    let Some(z_inv) = point.z.modinv(p) else {
        return CurvePoint::Infinity;
    };
    let z_inv_sq = &z_inv * &z_inv;

    let x = (&point.x * &z_inv_sq).mod_floor(p);
    let z_inv_cube = z_inv_sq * &z_inv;
    let y = (&point.y * z_inv_cube).mod_floor(p);

    CurvePoint::new(into_field_element(x), into_field_element(y))
}

/// Sum of two points in Jacobian coordinates.
pub(crate) fn add_jacobian(a: &Jacobian, b: &Jacobian, p: &BigInt) -> Jacobian {
    // See http://hyperelliptic.org/EFD/g1p/auto-shortw-jacobian-3.html#addition-add-2007-bl
    if a.is_identity() {
        return b.clone();
    }
    if b.is_identity() {
        return a.clone();
    }

    let z1z1 = (&a.z * &a.z).mod_floor(p);
    let z2z2 = (&b.z * &b.z).mod_floor(p);

    let u1 = (&a.x * &z2z2).mod_floor(p);
    let u2 = (&b.x * &z1z1).mod_floor(p);
    let h = &u2 - &u1;
    let x_equal = h.is_zero();
    let h = lift(h, p);
    let i = {
        let two_h: BigInt = &h << 1u32;
        &two_h * &two_h
    };
    let j = &h * &i;

    let s1 = (&a.y * &b.z * &z2z2).mod_floor(p);
    let s2 = (&b.y * &a.z * &z1z1).mod_floor(p);
    let r = lift(&s2 - &s1, p);
    let y_equal = r.is_zero();
    if x_equal && y_equal {
        // the general formula degenerates for P + P
        return double_jacobian(a, p);
    }
    let r: BigInt = r << 1u32;
    let v = &u1 * &i;

    let x3 = (&r * &r - &j - &v - &v).mod_floor(p);

    let s1j2: BigInt = (&s1 * &j) << 1u32;
    let y3 = (&r * (&v - &x3) - s1j2).mod_floor(p);

    let z_sum = &a.z + &b.z;
    let z3 = ((&z_sum * &z_sum - &z1z1 - &z2z2) * &h).mod_floor(p);

    Jacobian {
        x: x3,
        y: y3,
        z: z3,
    }
}

/// Double of a point in Jacobian coordinates.
pub(crate) fn double_jacobian(a: &Jacobian, p: &BigInt) -> Jacobian {
    // See http://hyperelliptic.org/EFD/g1p/auto-shortw-jacobian-3.html#doubling-dbl-2001-b
    let delta = (&a.z * &a.z).mod_floor(p);
    let gamma = (&a.y * &a.y).mod_floor(p);

    // alpha = 3 * (x - delta) * (x + delta)
    let alpha = lift(&a.x - &delta, p) * (&a.x + &delta);
    let alpha = &alpha * 3u32;

    let beta = &a.x * &gamma;

    let beta8: BigInt = &beta << 3u32;
    let x3 = (&alpha * &alpha - beta8).mod_floor(p);

    let y_plus_z = &a.y + &a.z;
    let z3 = lift(&y_plus_z * &y_plus_z - &gamma, p);
    let z3 = lift(z3 - &delta, p).mod_floor(p);

    let beta4: BigInt = beta << 2u32;
    let y3 = &alpha * lift(beta4 - &x3, p);
    let gamma8: BigInt = (&gamma * &gamma) << 3u32;
    let y3 = lift(y3 - gamma8.mod_floor(p), p).mod_floor(p);

    Jacobian {
        x: x3,
        y: y3,
        z: z3,
    }
}
