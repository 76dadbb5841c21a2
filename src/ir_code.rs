//! The compressed representation of one infrared power code.
//!
//! A full transmission repeats only a handful of distinct (on, off) timings, so each code keeps
//! those timings once in a small table and stores the transmission itself as a dense stream of
//! table indexes, `index_width` bits each.

use embassy_time::Duration;

use crate::bit_reader::{BitReader, MAX_READ_BITS};
use crate::carrier::Carrier;
use crate::code_decoder::CodeDecoder;
use crate::config::TICK;
use crate::{Error, Result};

/// One (on, off) timing pair, in ticks of [`TICK`] (10 µs).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pair {
    pub on: u16,
    pub off: u16,
}

impl Pair {
    #[must_use]
    pub const fn new(on: u16, off: u16) -> Self {
        Self { on, off }
    }

    #[must_use]
    pub const fn on_duration(self) -> Duration {
        ticks_to_duration(self.on)
    }

    #[must_use]
    pub const fn off_duration(self) -> Duration {
        ticks_to_duration(self.off)
    }
}

impl From<(u16, u16)> for Pair {
    fn from((on, off): (u16, u16)) -> Self {
        Self { on, off }
    }
}

/// Converts a count of 10 µs ticks into an `embassy_time::Duration`.
#[must_use]
pub const fn ticks_to_duration(ticks: u16) -> Duration {
    // u16::MAX ticks is 655 ms, far from overflowing u64 microseconds.
    Duration::from_micros(ticks as u64 * TICK.as_micros())
}

/// One compressed infrared transmission.
///
/// # Examples
/// ```
/// use tv_blaster::{IrCode, Pair};
///
/// // Two pairs, one bit per index: index 1 then index 0.
/// let code = IrCode::new(0, 2, 1, &[100, 50, 200, 25], &[0b1000_0000]);
/// let pairs: Result<Vec<Pair>, _> = code.decode().map(|pulse| pulse.map(|p| p.pair)).collect();
/// assert_eq!(pairs?, [Pair::new(200, 25), Pair::new(100, 50)]);
/// # Ok::<(), tv_blaster::Error>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IrCode {
    carrier_period: u8,
    pair_count: u8,
    index_width: u8,
    timing_table: &'static [u16],
    packed_indices: &'static [u8],
}

impl IrCode {
    /// Create a code record. Nothing is checked here; see [`IrCode::check`].
    #[must_use]
    pub const fn new(
        carrier_period: u8,
        pair_count: u8,
        index_width: u8,
        timing_table: &'static [u16],
        packed_indices: &'static [u8],
    ) -> Self {
        Self {
            carrier_period,
            pair_count,
            index_width,
            timing_table,
            packed_indices,
        }
    }

    #[must_use]
    pub const fn carrier_period(&self) -> u8 {
        self.carrier_period
    }

    #[must_use]
    pub const fn carrier(&self) -> Carrier {
        Carrier::from_period(self.carrier_period)
    }

    #[must_use]
    pub const fn pair_count(&self) -> u8 {
        self.pair_count
    }

    #[must_use]
    pub const fn index_width(&self) -> u8 {
        self.index_width
    }

    #[must_use]
    pub const fn timing_table(&self) -> &'static [u16] {
        self.timing_table
    }

    #[must_use]
    pub const fn packed_indices(&self) -> &'static [u8] {
        self.packed_indices
    }

    /// Number of distinct (on, off) pairs in the timing table.
    #[must_use]
    pub const fn table_pairs(&self) -> usize {
        self.timing_table.len() / 2
    }

    /// Bits of packed index data the code needs: `pair_count * index_width`.
    #[must_use]
    pub fn required_bits(&self) -> usize {
        usize::from(self.pair_count).saturating_mul(usize::from(self.index_width))
    }

    /// Bytes of packed index data the code needs, rounding the last partial byte up.
    #[must_use]
    pub fn packed_len(&self) -> usize {
        self.required_bits().div_ceil(8)
    }

    /// Look up the pair a decoded index refers to.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if `index` is past the end of the timing table.
    pub fn timing_pair(&self, index: u8) -> Result<Pair> {
        let start = usize::from(index).saturating_mul(2);
        match self.timing_table.get(start..start.saturating_add(2)) {
            Some(&[on, off]) => Ok(Pair { on, off }),
            _ => Err(Error::IndexOutOfRange {
                index,
                table_pairs: self.table_pairs(),
            }),
        }
    }

    /// Decode the code pair by pair. The decoder owns its own fresh bit cursor.
    #[must_use]
    pub fn decode(&self) -> CodeDecoder<'_> {
        CodeDecoder::new(self)
    }

    /// Walk the whole code once without emitting anything.
    ///
    /// # Errors
    /// Returns the first defect found: an index width outside `1..=8`, a timing table that does
    /// not hold whole pairs, too few packed bytes, or an index past the end of the table.
    pub fn check(&self) -> Result<()> {
        if !(1..=MAX_READ_BITS).contains(&self.index_width) {
            return Err(Error::InvalidIndexWidth {
                width: self.index_width,
            });
        }
        let len = self.timing_table.len();
        if len == 0 || len % 2 != 0 {
            return Err(Error::UnpairedTimingTable { len });
        }
        let available_bits = BitReader::new(self.packed_indices).remaining_bits();
        if available_bits < self.required_bits() {
            return Err(Error::TruncatedStream {
                required_bits: self.required_bits(),
                available_bits,
            });
        }
        self.decode().try_for_each(|pulse| pulse.map(|_| ()))
    }

    /// Total time the code takes to transmit, off-phases included.
    ///
    /// # Errors
    /// Returns the same errors as [`IrCode::check`].
    pub fn duration(&self) -> Result<Duration> {
        self.decode().try_fold(Duration::from_ticks(0), |total, pulse| {
            let pair = pulse?.pair;
            Ok(total + pair.on_duration() + pair.off_duration())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_PAIRS: IrCode = IrCode::new(0, 2, 1, &[100, 50, 200, 25], &[0b1000_0000]);

    #[test]
    fn test_timing_pair_lookup() {
        assert_eq!(TWO_PAIRS.timing_pair(0), Ok(Pair::new(100, 50)));
        assert_eq!(TWO_PAIRS.timing_pair(1), Ok(Pair::new(200, 25)));
        assert_eq!(
            TWO_PAIRS.timing_pair(2),
            Err(Error::IndexOutOfRange {
                index: 2,
                table_pairs: 2
            })
        );
    }

    #[test]
    fn test_packed_len_rounds_up() {
        let code = IrCode::new(104, 26, 2, &[60, 60], &[0; 7]);
        assert_eq!(code.required_bits(), 52);
        assert_eq!(code.packed_len(), 7);
        assert_eq!(TWO_PAIRS.packed_len(), 1);
    }

    #[test]
    fn test_check_accepts_valid_code() {
        assert_eq!(TWO_PAIRS.check(), Ok(()));
    }

    #[test]
    fn test_check_rejects_odd_table() {
        let code = IrCode::new(0, 1, 1, &[100, 50, 200], &[0]);
        assert_eq!(code.check(), Err(Error::UnpairedTimingTable { len: 3 }));
    }

    #[test]
    fn test_check_rejects_bad_width() {
        let code = IrCode::new(0, 1, 9, &[100, 50], &[0, 0]);
        assert_eq!(code.check(), Err(Error::InvalidIndexWidth { width: 9 }));
    }

    #[test]
    fn test_check_rejects_short_stream() {
        // 5 pairs at 2 bits need 10 bits; only 8 are present.
        let code = IrCode::new(0, 5, 2, &[100, 50, 200, 25], &[0]);
        assert_eq!(
            code.check(),
            Err(Error::TruncatedStream {
                required_bits: 10,
                available_bits: 8
            })
        );
    }

    #[test]
    fn test_check_rejects_index_past_table() {
        // Second index is 0b11 but the table only has two pairs.
        let code = IrCode::new(0, 2, 2, &[100, 50, 200, 25], &[0b0111_0000]);
        assert_eq!(
            code.check(),
            Err(Error::IndexOutOfRange {
                index: 3,
                table_pairs: 2
            })
        );
    }

    #[test]
    fn test_duration_sums_pairs() {
        // (200 + 25 + 100 + 50) ticks of 10 µs.
        assert_eq!(TWO_PAIRS.duration(), Ok(Duration::from_micros(3_750)));
    }
}
