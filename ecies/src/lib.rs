//! Key generation and key derivation for elliptic-curve encryption schemes.
//!
//! This library provides the primitives an encryption or key-agreement
//! protocol over a [`wcurve`] curve is built from:
//! - Key-pair generation from any randomness source ([`generate_key`])
//! - A counter-mode key derivation function over a 128-bit hash ([`kdf`])
//! - The bit strings the KDF consumes and produces ([`BitString`])
//!
//! Points are serialized with [`wcurve::marshal`] and [`wcurve::unmarshal`].
//!
//! # Example
//!
//! ```
//! use ecies::{generate_key, kdf, BitString};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wcurve::dev::p521;
//! use wcurve::{marshal, Curve};
//!
//! let curve = p521();
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! // Recipient key pair and sender ephemeral key pair
//! let (recipient_sk, recipient_pk) = generate_key(&curve, &mut rng).expect("keygen");
//! let (ephemeral_sk, ephemeral_pk) = generate_key(&curve, &mut rng).expect("keygen");
//!
//! // Both sides reach the same shared point
//! let sender = curve.scalar_mult(&recipient_pk, ephemeral_sk.as_bytes());
//! let recipient = curve.scalar_mult(&ephemeral_pk, recipient_sk.as_bytes());
//! assert_eq!(sender, recipient);
//!
//! // and derive the same key stream from its coordinates
//! let seed = BitString::from_bytes(&marshal(&curve, &sender)[1..]);
//! let stream = kdf(&seed, 256).expect("kdf");
//! assert_eq!(stream.len(), 256);
//! ```
//!
//! # Security Considerations
//!
//! - Scalar multiplication is not constant time
//! - Decoded points are not validated; call `is_on_curve` before using them
//! - The KDF hash is MD5, kept for compatibility with existing peers

mod bits;
mod constants;
mod errors;
mod kdf;
mod keys;

#[cfg(test)]
mod tests;

pub use bits::BitString;
pub use constants::{HASH_BITS, MAX_KLEN_BITS};
pub use errors::EciesError;
pub use kdf::kdf;
pub use keys::{SecretKey, generate_key};
