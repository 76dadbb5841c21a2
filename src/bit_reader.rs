//! A cursor that reads small, fixed-width values out of a packed byte stream.
//!
//! Values are stored most-significant-bit first with no padding between them, so a value can
//! straddle a byte boundary. Only the final byte of a stream carries trailing padding.

use crate::{Error, Result};

/// Widest value a single [`BitReader::read_bits`] call can return.
pub const MAX_READ_BITS: u8 = u8::BITS as u8;

/// Reads values of 1 to 8 bits, MSB first, from a borrowed byte slice.
///
/// The reader keeps the unread low bits of the most recently loaded byte in a one-byte buffer
/// and only loads the next byte once that buffer is empty.
///
/// # Examples
/// ```
/// use tv_blaster::BitReader;
///
/// let mut reader = BitReader::new(&[0b1011_0101]);
/// assert_eq!(reader.read_bits(3)?, 0b101);
/// assert_eq!(reader.read_bits(5)?, 0b1_0101);
/// # Ok::<(), tv_blaster::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct BitReader<'a> {
    bytes: &'a [u8],
    /// Index of the next byte to load.
    next_byte: usize,
    /// The most recently loaded byte; only its low `bits_left` bits are still unread.
    buffer: u8,
    /// 0..=7 once a read returns.
    bits_left: u8,
}

impl<'a> BitReader<'a> {
    #[must_use]
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            next_byte: 0,
            buffer: 0,
            bits_left: 0,
        }
    }

    /// Read the next `count` bits and return them in the low bits of the result.
    ///
    /// # Errors
    /// Returns [`Error::InvalidIndexWidth`] if `count` is not in `1..=8` and
    /// [`Error::TruncatedStream`] if fewer than `count` bits remain. The reader is left
    /// untouched in both cases.
    pub fn read_bits(&mut self, count: u8) -> Result<u8> {
        if !(1..=MAX_READ_BITS).contains(&count) {
            return Err(Error::InvalidIndexWidth { width: count });
        }
        let available_bits = self.remaining_bits();
        if usize::from(count) > available_bits {
            return Err(Error::TruncatedStream {
                required_bits: usize::from(count),
                available_bits,
            });
        }

        let mut value: u16 = 0;
        let mut needed = count;
        while needed > 0 {
            if self.bits_left == 0 {
                self.load_next_byte()?;
            }
            let take = needed.min(self.bits_left);
            let shift = self.bits_left.saturating_sub(take);
            let mask = (1_u16 << take).wrapping_sub(1);
            let chunk = (u16::from(self.buffer) >> shift) & mask;
            value = (value << take) | chunk;
            self.bits_left = shift;
            needed = needed.saturating_sub(take);
        }

        #[expect(
            clippy::cast_possible_truncation,
            reason = "at most eight bits are accumulated"
        )]
        let value = value as u8;
        Ok(value)
    }

    /// Drop any unread bits of the current byte so the next read starts byte-aligned.
    pub const fn reset(&mut self) {
        self.buffer = 0;
        self.bits_left = 0;
    }

    /// Number of unread bits left over from the most recently loaded byte.
    #[must_use]
    pub const fn bits_left(&self) -> u8 {
        self.bits_left
    }

    /// Number of bits handed out (or discarded by [`reset`](Self::reset)) so far.
    #[must_use]
    pub fn bits_consumed(&self) -> usize {
        self.next_byte
            .saturating_mul(8)
            .saturating_sub(usize::from(self.bits_left))
    }

    /// Number of bits that can still be read.
    #[must_use]
    pub fn remaining_bits(&self) -> usize {
        self.bytes
            .len()
            .saturating_sub(self.next_byte)
            .saturating_mul(8)
            .saturating_add(usize::from(self.bits_left))
    }

    fn load_next_byte(&mut self) -> Result<()> {
        let Some(&byte) = self.bytes.get(self.next_byte) else {
            return Err(Error::TruncatedStream {
                required_bits: 1,
                available_bits: 0,
            });
        };
        self.buffer = byte;
        self.bits_left = 8;
        self.next_byte = self.next_byte.saturating_add(1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_whole_byte() {
        let mut reader = BitReader::new(&[0xA5, 0x3C]);
        assert_eq!(reader.read_bits(8), Ok(0xA5));
        assert_eq!(reader.read_bits(8), Ok(0x3C));
        assert_eq!(reader.bits_left(), 0);
    }

    #[test]
    fn test_read_single_bits() {
        let mut reader = BitReader::new(&[0b1001_0000]);
        assert_eq!(reader.read_bits(1), Ok(1));
        assert_eq!(reader.read_bits(1), Ok(0));
        assert_eq!(reader.read_bits(1), Ok(0));
        assert_eq!(reader.read_bits(1), Ok(1));
        assert_eq!(reader.bits_left(), 4);
    }

    #[test]
    fn test_straddles_byte_boundary() {
        // 0b10110101, 0b01100110: skip 3 bits, then 6 bits span both bytes.
        let mut reader = BitReader::new(&[0b1011_0101, 0b0110_0110]);
        assert_eq!(reader.read_bits(3), Ok(0b101));
        assert_eq!(reader.read_bits(6), Ok(0b10_1010));
        assert_eq!(reader.bits_left(), 7);
        assert_eq!(reader.read_bits(7), Ok(0b110_0110));
        assert_eq!(reader.remaining_bits(), 0);
    }

    #[test]
    fn test_reset_realigns_to_next_byte() {
        let mut reader = BitReader::new(&[0b1110_0000, 0b0100_0000]);
        assert_eq!(reader.read_bits(3), Ok(0b111));
        reader.reset();
        assert_eq!(reader.bits_left(), 0);
        assert_eq!(reader.bits_consumed(), 8);
        assert_eq!(reader.read_bits(2), Ok(0b01));
    }

    #[test]
    fn test_invalid_widths_are_rejected() {
        let mut reader = BitReader::new(&[0xFF, 0xFF]);
        assert_eq!(
            reader.read_bits(0),
            Err(Error::InvalidIndexWidth { width: 0 })
        );
        assert_eq!(
            reader.read_bits(9),
            Err(Error::InvalidIndexWidth { width: 9 })
        );
        assert_eq!(reader.bits_consumed(), 0);
    }

    #[test]
    fn test_truncated_read_leaves_reader_untouched() {
        let mut reader = BitReader::new(&[0b1010_1010]);
        assert_eq!(reader.read_bits(6), Ok(0b10_1010));
        assert_eq!(
            reader.read_bits(3),
            Err(Error::TruncatedStream {
                required_bits: 3,
                available_bits: 2
            })
        );
        assert_eq!(reader.read_bits(2), Ok(0b10));
    }

    #[test]
    fn test_empty_stream() {
        let mut reader = BitReader::new(&[]);
        assert_eq!(reader.remaining_bits(), 0);
        assert!(matches!(
            reader.read_bits(1),
            Err(Error::TruncatedStream { .. })
        ));
    }
}
