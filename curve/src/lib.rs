//! Short Weierstrass curves y² = x³ - 3x + b over prime fields.
//!
//! Curve parameters are supplied by the caller as a [`CurveParams`] value;
//! this crate does not embed any named curve. Point arithmetic runs in
//! Jacobian coordinates internally, and every point handed back to the
//! caller is an affine [`CurvePoint`] with coordinates reduced into `[0, p)`.

mod affine;
mod encoding;
mod group;
mod jacobian;
mod params;
mod random;

#[cfg(any(test, feature = "dev"))]
pub mod dev;

pub use affine::CurvePoint;
pub use encoding::{marshal, unmarshal, UNCOMPRESSED_TAG};
pub use group::Curve;
pub use num_bigint::BigUint;
pub use params::CurveParams;
pub use random::{RandomScalar, MASK};
