//! Named curve parameters for tests, benches and examples.
//!
//! Not part of the library proper: enable the `dev` feature to use them
//! outside this crate.

use num_bigint::BigUint;

use crate::{CurveParams, CurvePoint};

fn from_hex(s: &str) -> BigUint {
    BigUint::parse_bytes(s.as_bytes(), 16).expect("valid hex constant")
}

/// NIST P-256.
pub fn p256() -> CurveParams {
    CurveParams::new(
        from_hex("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff"),
        from_hex("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551"),
        from_hex("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b"),
        CurvePoint::new(
            from_hex("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
            from_hex("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"),
        ),
        256,
    )
}

/// NIST P-521, p = 2^521 - 1.
pub fn p521() -> CurveParams {
    CurveParams::new(
        (BigUint::from(1u32) << 521u32) - 1u32,
        from_hex("01fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffa51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e91386409"),
        from_hex("0051953eb9618e1c9a1f929a21a0b68540eea2da725b99b315f3b8b489918ef109e156193951ec7e937b1652c0bd3bb1bf073573df883d2c34f1ef451fd46b503f00"),
        CurvePoint::new(
            from_hex("00c6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d3dbaa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5bd66"),
            from_hex("011839296a789a3bc0045c8a5fb42c7d1bd998f54449579b446817afbd17273e662c97ee72995ef42640c550b9013fad0761353c7086a272c24088be94769fd16650"),
        ),
        521,
    )
}
