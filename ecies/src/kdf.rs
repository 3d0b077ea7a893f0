//! Counter-mode key derivation over a 128-bit hash.
//!
//! The output is `H(Z || ct_1) || H(Z || ct_2) || ...` cut to the requested
//! number of bits, where `ct_i` is a 32-bit big-endian counter starting at 1.
//! Seed and counter enter the hash in their text form (one ASCII `'0'` or
//! `'1'` per bit), so seeds that are not a whole number of bytes are well
//! defined.

use md5::{Digest, Md5};

use crate::bits::BitString;
use crate::constants::{COUNTER_SIZE, HASH_BITS, MAX_KLEN_BITS};
use crate::errors::EciesError;

/// Derives exactly `klen` bits from `seed`.
///
/// # Errors
///
/// - [`EciesError::InvalidLength`] if `klen` is 0 or above
///   [`MAX_KLEN_BITS`]; nothing is hashed in that case.
/// - [`EciesError::DegenerateOutput`] if every derived bit is zero.
///
/// # Example
///
/// ```
/// use ecies::{kdf, BitString};
///
/// let seed = BitString::from_bytes(b"shared secret");
/// let key = kdf(&seed, 200).expect("derivation failed");
/// assert_eq!(key.len(), 200);
/// ```
pub fn kdf(seed: &BitString, klen: usize) -> Result<BitString, EciesError> {
    if klen == 0 || klen as u64 > MAX_KLEN_BITS {
        return Err(EciesError::InvalidLength {
            requested: klen as u64,
            max: MAX_KLEN_BITS,
        });
    }

    let blocks = klen.div_ceil(HASH_BITS);

    let mut prefix = Md5::new();
    prefix.update(seed.to_string().as_bytes());

    let mut out = BitString::with_capacity(blocks * HASH_BITS);
    let mut ct: u32 = 1;
    for _ in 0..blocks {
        let mut hasher = prefix.clone();
        hasher.update(counter_text(ct).as_bytes());
        out.extend_from_bytes(&hasher.finalize());
        ct = ct.wrapping_add(1);
    }

    // only the last block can be longer than needed
    out.truncate(klen);

    if out.is_all_zero() {
        return Err(EciesError::DegenerateOutput);
    }
    Ok(out)
}

fn counter_text(ct: u32) -> String {
    let bytes: [u8; COUNTER_SIZE] = ct.to_be_bytes();
    BitString::from_bytes(&bytes).to_string()
}
