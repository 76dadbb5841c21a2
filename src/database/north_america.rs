//! Power codes for North America (also covers most of Asia).

use crate::carrier::{UNMODULATED, period_for_hz};
use crate::ir_code::IrCode;

/// Sony SIRC 12-bit, sent twice.
pub static SONY_POWER: IrCode = IrCode::new(
    period_for_hz(40_000),
    26,
    2,
    &[
        240, 60,
        120, 60,
        60, 60,
        60, 2700,
    ],
    &[
        0x19, 0x9A, 0x6A, 0xC6, 0x66, 0x9A, 0xB0,
    ],
);

/// Samsung 32-bit.
pub static SAMSUNG_POWER: IrCode = IrCode::new(
    period_for_hz(38_000),
    34,
    2,
    &[
        450, 450,
        56, 169,
        56, 56,
        56, 4000,
    ],
    &[
        0x15, 0xAA, 0x95, 0xAA, 0xA6, 0xAA, 0x99, 0x55,
        0x70,
    ],
);

/// LG NEC 32-bit.
pub static LG_POWER: IrCode = IrCode::new(
    period_for_hz(38_000),
    34,
    2,
    &[
        900, 450,
        56, 56,
        56, 169,
        56, 4000,
    ],
    &[
        0x16, 0x55, 0x69, 0xAA, 0x95, 0x95, 0x6A, 0x6A,
        0xB0,
    ],
);

/// Vizio NEC 32-bit.
pub static VIZIO_POWER: IrCode = IrCode::new(
    period_for_hz(38_000),
    34,
    2,
    &[
        900, 450,
        56, 56,
        56, 169,
        56, 4000,
    ],
    &[
        0x15, 0x59, 0x6A, 0xA6, 0x95, 0x65, 0x6A, 0x9A,
        0xB0,
    ],
);

/// Zenith pulse-position, unmodulated.
pub static ZENITH_POWER: IrCode = IrCode::new(
    UNMODULATED,
    18,
    3,
    &[
        800, 400,
        50, 200,
        50, 300,
        50, 150,
        50, 250,
        50, 6000,
    ],
    &[
        0x05, 0x39, 0x1A, 0x2D, 0x95, 0x13, 0x34,
    ],
);
