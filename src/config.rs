//! Timing constants and the build-time blast settings.

use embassy_time::Duration;

use crate::database::{Database, EUROPE, NORTH_AMERICA};
use crate::{Error, Result};

/// Unit of every on/off time in the code database.
pub const TICK: Duration = Duration::from_micros(10);

/// Pause after a wake event before the first code goes out.
pub const WAKE_SETTLE: Duration = Duration::from_millis(250);

/// Pause between two codes so each TV sees a separate command.
pub const INTER_CODE_PAUSE: Duration = Duration::from_millis(250);

/// How long the visible LED lights up after each transmitted code.
pub const FEEDBACK_FLASH: Duration = Duration::from_millis(30);

/// Debounce delay for the wake button.
pub const BUTTON_DEBOUNCE_DELAY: Duration = Duration::from_millis(10);

/// Which regional databases a blast cycle sends, in order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Regions {
    /// North America, then Europe.
    #[default]
    Both,
    NorthAmerica,
    Europe,
}

static BOTH: [&Database; 2] = [&NORTH_AMERICA, &EUROPE];
static NORTH_AMERICA_ONLY: [&Database; 1] = [&NORTH_AMERICA];
static EUROPE_ONLY: [&Database; 1] = [&EUROPE];

impl Regions {
    /// Parse the `BLAST_REGIONS` setting: `both`, `na` or `eu` (case-insensitive).
    ///
    /// # Errors
    /// Returns [`Error::UnknownRegions`] for anything else.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.eq_ignore_ascii_case("both") {
            Ok(Self::Both)
        } else if text.eq_ignore_ascii_case("na") {
            Ok(Self::NorthAmerica)
        } else if text.eq_ignore_ascii_case("eu") {
            Ok(Self::Europe)
        } else {
            Err(Error::UnknownRegions)
        }
    }

    /// The databases to send, in blast order.
    #[must_use]
    pub fn databases(self) -> &'static [&'static Database] {
        match self {
            Self::Both => &BOTH,
            Self::NorthAmerica => &NORTH_AMERICA_ONLY,
            Self::Europe => &EUROPE_ONLY,
        }
    }
}

/// Everything a blast cycle needs to know besides the hardware.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlastSettings {
    pub regions: Regions,
    pub wake_settle: Duration,
    pub inter_code_pause: Duration,
    pub feedback_flash: Duration,
}

impl Default for BlastSettings {
    fn default() -> Self {
        Self {
            regions: Regions::default(),
            wake_settle: WAKE_SETTLE,
            inter_code_pause: INTER_CODE_PAUSE,
            feedback_flash: FEEDBACK_FLASH,
        }
    }
}

impl BlastSettings {
    /// Settings with the regions chosen by `BLAST_REGIONS` at build time (see `build.rs`).
    ///
    /// # Errors
    /// Returns [`Error::UnknownRegions`] if the build-time value is not recognised.
    pub fn from_build_env() -> Result<Self> {
        Ok(Self {
            regions: Regions::parse(env!("BLAST_REGIONS"))?,
            ..Self::default()
        })
    }
}
