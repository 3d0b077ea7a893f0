//! Private scalars and key-pair generation.

use core::fmt;

use rand::TryRngCore;
use wcurve::{Curve, CurvePoint, RandomScalar};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::errors::EciesError;

/// A private scalar, stored as `byte_len` big-endian bytes.
///
/// The bytes are wiped when the key is dropped and never printed by `Debug`.
///
/// # Example
///
/// ```
/// use ecies::generate_key;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wcurve::dev::p256;
///
/// let curve = p256();
/// let mut rng = StdRng::seed_from_u64(42);
/// let (secret, public) = generate_key(&curve, &mut rng).expect("key generation failed");
/// assert_eq!(secret.public_key(&curve), public);
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    bytes: Vec<u8>,
}

impl SecretKey {
    /// Wraps raw scalar bytes. No range check is made.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        SecretKey {
            bytes: bytes.to_vec(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The public point `k * G`.
    pub fn public_key<C: Curve + ?Sized>(&self, curve: &C) -> CurvePoint {
        curve.scalar_base_mult(&self.bytes)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey").finish_non_exhaustive()
    }
}

/// Generates a key pair on `curve`.
///
/// Draws `byte_len` bytes, masks the bits above the curve's bit size and
/// computes the public point. A fresh scalar is drawn whenever the public
/// point is the point at infinity; any failure of `rng` ends the call.
///
/// An RNG that only ever yields zeros never produces a usable scalar, and
/// this function then does not return.
pub fn generate_key<C, R>(curve: &C, rng: &mut R) -> Result<(SecretKey, CurvePoint), EciesError>
where
    C: Curve + ?Sized,
    R: TryRngCore + ?Sized,
{
    let params = curve.params();
    let mut secret = SecretKey {
        bytes: vec![0u8; params.byte_len()],
    };

    loop {
        params
            .fill_scalar(rng, &mut secret.bytes)
            .map_err(|e| EciesError::RandomSource(e.to_string()))?;

        let public = curve.scalar_base_mult(&secret.bytes);
        if !public.is_infinity() {
            return Ok((secret, public));
        }
    }
}
