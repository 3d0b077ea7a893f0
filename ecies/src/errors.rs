//! Error types for key generation and key derivation.

use thiserror::Error;

/// Errors that can occur while generating keys or deriving key material.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EciesError {
    /// The KDF was asked for zero bits or for more than a 32-bit counter can
    /// produce.
    #[error("cannot derive {requested} bits; the KDF supports 1 to {max} bits")]
    InvalidLength { requested: u64, max: u64 },

    /// The derived key material is all zero.
    ///
    /// The caller is expected to change its input (typically by drawing a
    /// fresh ephemeral scalar) and try again.
    #[error("derived key material is all zero")]
    DegenerateOutput,

    /// The randomness source failed while drawing a private scalar.
    #[error("random source failed: {0}")]
    RandomSource(String),

    /// A textual bit string contained a character other than '0' or '1'.
    #[error("bit string may only contain '0' and '1'")]
    InvalidBitString,
}
