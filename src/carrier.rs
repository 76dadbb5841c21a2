//! Carrier settings for the "on" half of each infrared pair.
//!
//! A code stores its carrier as the half-period count of a timer clocked at
//! [`REFERENCE_CLOCK_HZ`]: the output toggles every `period + 1` ticks, so
//! `hz = REFERENCE_CLOCK_HZ / (2 * (period + 1))`. A stored period of `0` means the code is
//! not modulated at all.

/// Clock the stored carrier periods are counted against.
pub const REFERENCE_CLOCK_HZ: u32 = 8_000_000;

/// Stored carrier period of a code whose on-phases are steady holds rather than bursts.
pub const UNMODULATED: u8 = 0;

/// How the on-phases of one code are realized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Carrier {
    /// Pulse the output at the carrier frequency.
    Modulated { period: u8 },
    /// Hold the output on for the whole on-phase.
    Unmodulated,
}

impl Carrier {
    #[must_use]
    pub const fn from_period(period: u8) -> Self {
        if period == UNMODULATED {
            Self::Unmodulated
        } else {
            Self::Modulated { period }
        }
    }

    #[must_use]
    pub const fn period(self) -> u8 {
        match self {
            Self::Modulated { period } => period,
            Self::Unmodulated => UNMODULATED,
        }
    }

    #[must_use]
    pub const fn is_modulated(self) -> bool {
        matches!(self, Self::Modulated { .. })
    }

    /// Carrier frequency in Hz, or `None` when unmodulated.
    #[must_use]
    pub const fn frequency_hz(self) -> Option<u32> {
        match self {
            Self::Modulated { period } => {
                // period <= 255, so the divisor is at most 512.
                let divisor = (period as u32 + 1) * 2;
                Some(REFERENCE_CLOCK_HZ / divisor)
            }
            Self::Unmodulated => None,
        }
    }
}

/// The stored carrier period for a frequency, rounded the way the database was authored.
///
/// Frequencies too low to fit a `u8` period saturate at 255 (about 15.6 kHz); `0` Hz yields
/// [`UNMODULATED`].
#[must_use]
pub const fn period_for_hz(hz: u32) -> u8 {
    let Some(half_period) = (REFERENCE_CLOCK_HZ / 2).checked_div(hz) else {
        return UNMODULATED;
    };
    let period = half_period.saturating_sub(1);
    if period > u8::MAX as u32 {
        u8::MAX
    } else {
        #[expect(clippy::cast_possible_truncation, reason = "checked against u8::MAX")]
        let period = period as u8;
        period
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_carriers() {
        assert_eq!(period_for_hz(38_000), 104);
        assert_eq!(period_for_hz(40_000), 99);
        assert_eq!(period_for_hz(36_000), 110);
        assert_eq!(Carrier::from_period(99).frequency_hz(), Some(40_000));
        assert_eq!(Carrier::from_period(104).frequency_hz(), Some(38_095));
    }

    #[test]
    fn test_zero_period_is_unmodulated() {
        let carrier = Carrier::from_period(UNMODULATED);
        assert_eq!(carrier, Carrier::Unmodulated);
        assert!(!carrier.is_modulated());
        assert_eq!(carrier.frequency_hz(), None);
        assert_eq!(carrier.period(), 0);
        assert_eq!(period_for_hz(0), UNMODULATED);
    }

    #[test]
    fn test_low_frequencies_saturate() {
        assert_eq!(period_for_hz(1_000), u8::MAX);
    }
}
