//! Constants used by the key derivation function.

/// Output width of the KDF hash in bits.
///
/// The hash is MD5, so every counter block contributes 128 bits.
pub const HASH_BITS: usize = 128;

/// Size of the KDF counter in bytes. The counter is big-endian.
pub(crate) const COUNTER_SIZE: usize = 4;

/// Longest output the KDF can produce: (2^32 - 1) * [`HASH_BITS`].
pub const MAX_KLEN_BITS: u64 = u32::MAX as u64 * HASH_BITS as u64;
