//! The baked-in regional power-code databases.
//!
//! Codes are `static` records; a code that works in both regions is stored once and referenced
//! from both lists.

pub mod europe;
pub mod north_america;

use crate::ir_code::IrCode;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Region {
    /// North America and most of Asia.
    NorthAmerica,
    /// Europe, Australia, New Zealand and the Middle East.
    Europe,
}

/// An ordered, fixed list of codes for one region.
#[derive(Debug)]
pub struct Database {
    region: Region,
    codes: &'static [&'static IrCode],
}

impl Database {
    #[must_use]
    pub const fn new(region: Region, codes: &'static [&'static IrCode]) -> Self {
        Self { region, codes }
    }

    #[must_use]
    pub const fn region(&self) -> Region {
        self.region
    }

    #[must_use]
    pub const fn codes(&self) -> &'static [&'static IrCode] {
        self.codes
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.codes.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Whether this very code (not merely an equal one) is listed here.
    #[must_use]
    pub fn contains(&self, code: &IrCode) -> bool {
        self.codes.iter().any(|listed| core::ptr::eq(*listed, code))
    }
}

static NORTH_AMERICA_CODES: [&IrCode; 5] = [
    &north_america::SONY_POWER,
    &north_america::SAMSUNG_POWER,
    &north_america::LG_POWER,
    &north_america::VIZIO_POWER,
    &north_america::ZENITH_POWER,
];

static EUROPE_CODES: [&IrCode; 5] = [
    &europe::PHILIPS_POWER,
    &europe::PANASONIC_POWER,
    &north_america::SONY_POWER,
    &europe::GRUNDIG_POWER,
    &europe::THOMSON_POWER,
];

pub static NORTH_AMERICA: Database = Database::new(Region::NorthAmerica, &NORTH_AMERICA_CODES);

pub static EUROPE: Database = Database::new(Region::Europe, &EUROPE_CODES);
