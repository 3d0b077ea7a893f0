use rand::TryRngCore;

use crate::CurveParams;

/// Mask for the leading scalar byte, indexed by `bit_size % 8`.
pub const MASK: [u8; 8] = [0xff, 0x1, 0x3, 0x7, 0xf, 0x1f, 0x3f, 0x7f];

/// Helper trait for drawing scalars that fit the curve's bit size.
pub trait RandomScalar {
    /// Fills `out` from `rng` and clears the leading bits beyond the bit size.
    ///
    /// `out` is expected to be `byte_len` long. A read failure is returned
    /// as is; nothing is retried.
    fn fill_scalar<R: TryRngCore + ?Sized>(&self, rng: &mut R, out: &mut [u8])
        -> Result<(), R::Error>;
}

impl RandomScalar for CurveParams {
    fn fill_scalar<R: TryRngCore + ?Sized>(
        &self,
        rng: &mut R,
        out: &mut [u8],
    ) -> Result<(), R::Error> {
        rng.try_fill_bytes(out)?;
        if let Some(first) = out.first_mut() {
            *first &= MASK[self.bit_size % 8];
        }
        Ok(())
    }
}
