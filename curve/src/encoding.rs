//! Uncompressed point encoding, ANSI X9.62 section 4.3.6.
//!
//! Layout: `0x04 || X || Y`, each coordinate big-endian and left-padded to
//! `byte_len` bytes. The point at infinity is written with both coordinates
//! zero, and an all-zero body decodes back to infinity.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::{Curve, CurvePoint};

/// Leading tag byte of an uncompressed point.
pub const UNCOMPRESSED_TAG: u8 = 4;

/// Encodes a point as `1 + 2 * byte_len` bytes.
pub fn marshal<C: Curve + ?Sized>(curve: &C, point: &CurvePoint) -> Vec<u8> {
    let params = curve.params();
    let byte_len = params.byte_len();

    let mut ret = vec![0u8; 1 + 2 * byte_len];
    ret[0] = UNCOMPRESSED_TAG;

    if let Some((x, y)) = point.coordinates() {
        let (x_out, y_out) = ret[1..].split_at_mut(byte_len);
        write_field_element(x_out, x, &params.p);
        write_field_element(y_out, y, &params.p);
    }

    ret
}

/// Decodes a point produced by [`marshal`].
///
/// Returns `None` on a wrong length or tag. Curve membership is NOT checked;
/// callers that need it must call [`Curve::is_on_curve`] themselves.
pub fn unmarshal<C: Curve + ?Sized>(curve: &C, data: &[u8]) -> Option<CurvePoint> {
    let byte_len = curve.params().byte_len();
    if data.len() != 1 + 2 * byte_len {
        return None;
    }
    if data[0] != UNCOMPRESSED_TAG {
        return None;
    }

    let x = BigUint::from_bytes_be(&data[1..1 + byte_len]);
    let y = BigUint::from_bytes_be(&data[1 + byte_len..]);
    if x.is_zero() && y.is_zero() {
        return Some(CurvePoint::Infinity);
    }

    Some(CurvePoint::new(x, y))
}

/// Right-aligns `value mod p` in `out`.
fn write_field_element(out: &mut [u8], value: &BigUint, p: &BigUint) {
    let bytes = if value < p {
        value.to_bytes_be()
    } else {
        (value % p).to_bytes_be()
    };
    let n = bytes.len().min(out.len());
    let start = out.len() - n;
    out[start..].copy_from_slice(&bytes[bytes.len() - n..]);
}
