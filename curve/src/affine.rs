use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// Point on the curve in affine coordinates, or the point at infinity.
///
/// Coordinates handed out by the arithmetic in this crate are always reduced
/// into `[0, p)`. Points built by callers (or decoded from the wire) are not
/// checked; use [`CurveParams::is_on_curve`](crate::CurveParams::is_on_curve)
/// before trusting them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurvePoint {
    /// The point at infinity (identity element)
    #[default]
    Infinity,
    /// A finite point (x, y)
    Affine {
        /// The x-coordinate of the point
        x: BigUint,
        /// The y-coordinate of the point
        y: BigUint,
    },
}

impl CurvePoint {
    /// Create a new finite affine point.
    pub fn new(x: BigUint, y: BigUint) -> Self {
        CurvePoint::Affine { x, y }
    }

    /// Check if this point is the point at infinity.
    #[inline]
    pub fn is_infinity(&self) -> bool {
        matches!(self, CurvePoint::Infinity)
    }

    /// The x-coordinate, or `None` for the point at infinity.
    #[inline]
    pub fn x(&self) -> Option<&BigUint> {
        self.coordinates().map(|(x, _)| x)
    }

    /// The y-coordinate, or `None` for the point at infinity.
    #[inline]
    pub fn y(&self) -> Option<&BigUint> {
        self.coordinates().map(|(_, y)| y)
    }

    /// Both coordinates, or `None` for the point at infinity.
    #[inline]
    pub fn coordinates(&self) -> Option<(&BigUint, &BigUint)> {
        match self {
            CurvePoint::Infinity => None,
            CurvePoint::Affine { x, y } => Some((x, y)),
        }
    }
}

impl From<(BigUint, BigUint)> for CurvePoint {
    fn from((x, y): (BigUint, BigUint)) -> Self {
        CurvePoint::new(x, y)
    }
}
