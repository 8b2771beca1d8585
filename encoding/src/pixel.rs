//! Helpers for preparing native pixel data before compression.
//!
//! Samples are expected in little endian,
//! with 8 or 16 bits allocated per sample.
//! Both helpers report whether any sample was modified,
//! so that callers may skip replacing a frame which is already clean.

use snafu::{ensure, Backtrace, Snafu};

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Unsupported Bits Allocated {}", bits_allocated))]
    UnsupportedBitsAllocated {
        bits_allocated: u16,
        backtrace: Backtrace,
    },
    #[snafu(display(
        "Bits Stored cannot be greater than Bits Allocated ({} > {})",
        bits_stored,
        bits_allocated
    ))]
    BitsStoredTooLarge {
        bits_stored: u16,
        bits_allocated: u16,
        backtrace: Backtrace,
    },
    #[snafu(display(
        "Invalid High Bit {} for {} bits stored out of {}",
        high_bit,
        bits_stored,
        bits_allocated
    ))]
    InvalidHighBit {
        high_bit: u16,
        bits_stored: u16,
        bits_allocated: u16,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Number of unused bits below the stored range.
fn low_bit(bits_allocated: u16, bits_stored: u16, high_bit: u16) -> Result<u16> {
    ensure!(
        bits_allocated == 8 || bits_allocated == 16,
        UnsupportedBitsAllocatedSnafu { bits_allocated }
    );
    ensure!(
        bits_stored <= bits_allocated && bits_stored > 0,
        BitsStoredTooLargeSnafu {
            bits_stored,
            bits_allocated
        }
    );
    ensure!(
        high_bit < bits_allocated && high_bit + 1 >= bits_stored,
        InvalidHighBitSnafu {
            high_bit,
            bits_stored,
            bits_allocated
        }
    );
    Ok(high_bit + 1 - bits_stored)
}

/// Shift every sample to the right
/// so that the high bit ends up at `bits_stored - 1`.
///
/// Returns `true` if any sample changed.
/// Callers should update _High Bit_ accordingly.
pub fn right_align(
    data: &mut [u8],
    bits_allocated: u16,
    bits_stored: u16,
    high_bit: u16,
) -> Result<bool> {
    let shift = low_bit(bits_allocated, bits_stored, high_bit)?;
    if shift == 0 {
        return Ok(false);
    }

    let mut changed = false;
    if bits_allocated == 8 {
        for v in data.iter_mut().filter(|v| **v != 0) {
            *v >>= shift;
            changed = true;
        }
    } else {
        for chunk in data.chunks_exact_mut(2) {
            let v = u16::from_le_bytes([chunk[0], chunk[1]]);
            if v == 0 {
                continue;
            }
            chunk.copy_from_slice(&(v >> shift).to_le_bytes());
            changed = true;
        }
    }
    Ok(changed)
}

/// Clear every bit outside of the stored range
/// `[high_bit + 1 - bits_stored, high_bit]`.
///
/// Returns `true` if any sample changed.
pub fn zero_unused_bits(
    data: &mut [u8],
    bits_allocated: u16,
    bits_stored: u16,
    high_bit: u16,
) -> Result<bool> {
    let low = low_bit(bits_allocated, bits_stored, high_bit)?;
    let unused_high = bits_allocated - 1 - high_bit;

    let mut changed = false;
    if bits_allocated == 8 {
        let mask = (0xFF_u8 >> (unused_high + low)) << low;
        for v in data.iter_mut() {
            let masked = *v & mask;
            if masked != *v {
                *v = masked;
                changed = true;
            }
        }
    } else {
        let mask = (0xFFFF_u16 >> (unused_high + low)) << low;
        for chunk in data.chunks_exact_mut(2) {
            let v = u16::from_le_bytes([chunk[0], chunk[1]]);
            let masked = v & mask;
            if masked != v {
                chunk.copy_from_slice(&masked.to_le_bytes());
                changed = true;
            }
        }
    }
    Ok(changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use matches::assert_matches;

    #[test]
    fn zero_unused_bits_16() {
        // 12 bits stored, high bit 11
        let mut data = [0xFF, 0xFF, 0x34, 0x02];
        assert!(zero_unused_bits(&mut data, 16, 12, 11).unwrap());
        assert_eq!(data, [0xFF, 0x0F, 0x34, 0x02]);
        // already clean
        assert!(!zero_unused_bits(&mut data, 16, 12, 11).unwrap());
    }

    #[test]
    fn zero_unused_bits_8_with_low_bits() {
        // 6 bits stored in bits 1..=6
        let mut data = [0xFF, 0x7E];
        assert!(zero_unused_bits(&mut data, 8, 6, 6).unwrap());
        assert_eq!(data, [0x7E, 0x7E]);
    }

    #[test]
    fn right_align_16() {
        // 12 bits stored, high bit 15: four unused low bits
        let mut data = [0xF0, 0xFF, 0x00, 0x00, 0x10, 0x00];
        assert!(right_align(&mut data, 16, 12, 15).unwrap());
        assert_eq!(data, [0xFF, 0x0F, 0x00, 0x00, 0x01, 0x00]);
    }

    #[test]
    fn right_align_is_noop_when_aligned() {
        let mut data = [0x12, 0x34];
        assert!(!right_align(&mut data, 8, 8, 7).unwrap());
        assert_eq!(data, [0x12, 0x34]);
    }

    #[test]
    fn bad_layouts() {
        let mut data = [0u8; 4];
        assert_matches!(
            right_align(&mut data, 12, 12, 11),
            Err(Error::UnsupportedBitsAllocated { .. })
        );
        assert_matches!(
            zero_unused_bits(&mut data, 8, 9, 7),
            Err(Error::BitsStoredTooLarge { .. })
        );
        assert_matches!(
            zero_unused_bits(&mut data, 16, 12, 16),
            Err(Error::InvalidHighBit { .. })
        );
        assert_matches!(
            zero_unused_bits(&mut data, 16, 12, 5),
            Err(Error::InvalidHighBit { .. })
        );
    }
}
