//! Bit strings of arbitrary length.

use core::fmt;
use core::str::FromStr;

use crate::errors::EciesError;

/// A string of bits, packed most significant bit first.
///
/// The last byte is zero-padded on the right when the length is not a
/// multiple of 8. The text form has one `'0'` or `'1'` per bit.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BitString {
    bytes: Vec<u8>,
    len: usize,
}

impl BitString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty bit string with room for `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        BitString {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            len: 0,
        }
    }

    /// Every bit of `bytes`, 8 per byte.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        BitString {
            bytes: bytes.to_vec(),
            len: bytes.len() * 8,
        }
    }

    /// Number of bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The bit at `index`, counting from the most significant end.
    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        Some(self.bytes[index / 8] & (0x80 >> (index % 8)) != 0)
    }

    pub fn push(&mut self, bit: bool) {
        let offset = self.len % 8;
        if offset == 0 {
            self.bytes.push(0);
        }
        if bit {
            if let Some(last) = self.bytes.last_mut() {
                *last |= 0x80 >> offset;
            }
        }
        self.len += 1;
    }

    /// Appends every bit of `bytes`.
    pub fn extend_from_bytes(&mut self, bytes: &[u8]) {
        if self.len % 8 == 0 {
            self.bytes.extend_from_slice(bytes);
            self.len += bytes.len() * 8;
            return;
        }
        for &byte in bytes {
            for shift in (0..8).rev() {
                self.push((byte >> shift) & 1 == 1);
            }
        }
    }

    /// Appends every bit of `other`.
    pub fn append(&mut self, other: &BitString) {
        if self.len % 8 == 0 {
            self.bytes.extend_from_slice(&other.bytes);
            self.len += other.len;
            return;
        }
        for bit in other.iter() {
            self.push(bit);
        }
    }

    /// Keeps the first `len` bits. No effect if `len` is not shorter.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        self.bytes.truncate(len.div_ceil(8));
        let offset = len % 8;
        if offset != 0 {
            if let Some(last) = self.bytes.last_mut() {
                *last &= 0xff << (8 - offset);
            }
        }
        self.len = len;
    }

    /// True if no bit is set. The empty string counts as all zero.
    pub fn is_all_zero(&self) -> bool {
        self.bytes.iter().all(|&b| b == 0)
    }

    /// Packed bytes; padding bits in the last byte are zero.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| self.bytes[i / 8] & (0x80 >> (i % 8)) != 0)
    }
}

impl From<&[u8]> for BitString {
    fn from(bytes: &[u8]) -> Self {
        BitString::from_bytes(bytes)
    }
}

impl From<Vec<u8>> for BitString {
    fn from(bytes: Vec<u8>) -> Self {
        let len = bytes.len() * 8;
        BitString { bytes, len }
    }
}

impl FromStr for BitString {
    type Err = EciesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut out = BitString::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '0' => out.push(false),
                '1' => out.push(true),
                _ => return Err(EciesError::InvalidBitString),
            }
        }
        Ok(out)
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BitString")
            .field(&format_args!("{self}"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_form() {
        let bits = BitString::from_bytes(&[0xa5, 0x01]);
        assert_eq!(bits.len(), 16);
        assert_eq!(bits.to_string(), "1010010100000001");
        assert_eq!("1010010100000001".parse::<BitString>(), Ok(bits));
    }

    #[test]
    fn test_parse_unaligned() {
        let bits: BitString = "101".parse().unwrap();
        assert_eq!(bits.len(), 3);
        assert_eq!(bits.as_bytes(), &[0xa0]);
        assert_eq!(bits.get(0), Some(true));
        assert_eq!(bits.get(1), Some(false));
        assert_eq!(bits.get(3), None);
    }

    #[test]
    fn test_parse_rejects_other_characters() {
        assert_eq!("10 1".parse::<BitString>(), Err(EciesError::InvalidBitString));
        assert_eq!("012".parse::<BitString>(), Err(EciesError::InvalidBitString));
        assert_eq!("".parse::<BitString>(), Ok(BitString::new()));
    }

    #[test]
    fn test_append_unaligned() {
        let mut bits: BitString = "1".parse().unwrap();
        bits.extend_from_bytes(&[0xff]);
        bits.append(&"01".parse().unwrap());

        assert_eq!(bits.len(), 11);
        assert_eq!(bits.to_string(), "11111111101");
        assert_eq!(bits.as_bytes(), &[0xff, 0xa0]);
    }

    #[test]
    fn test_truncate_clears_padding() {
        let mut bits = BitString::from_bytes(&[0xff, 0xff]);
        bits.truncate(12);
        assert_eq!(bits.len(), 12);
        assert_eq!(bits.as_bytes(), &[0xff, 0xf0]);

        // equal to the same bits built directly
        assert_eq!(bits, "111111111111".parse().unwrap());

        bits.truncate(20);
        assert_eq!(bits.len(), 12);
    }

    #[test]
    fn test_all_zero() {
        assert!(BitString::new().is_all_zero());
        assert!(BitString::from_bytes(&[0, 0]).is_all_zero());

        let mut bits = BitString::from_bytes(&[0x00, 0x01]);
        assert!(!bits.is_all_zero());
        bits.truncate(15);
        assert!(bits.is_all_zero());
    }
}
