//! Power codes for Europe, Australia, New Zealand and the Middle East.

use crate::carrier::period_for_hz;
use crate::ir_code::IrCode;

/// Philips RC5 bi-phase.
pub static PHILIPS_POWER: IrCode = IrCode::new(
    period_for_hz(36_000),
    12,
    2,
    &[
        89, 89,
        178, 89,
        89, 178,
        89, 9000,
    ],
    &[
        0x10, 0x00, 0x87,
    ],
);

/// Panasonic 48-bit.
pub static PANASONIC_POWER: IrCode = IrCode::new(
    period_for_hz(37_000),
    50,
    2,
    &[
        350, 175,
        44, 44,
        44, 130,
        44, 7400,
    ],
    &[
        0x19, 0x55, 0x55, 0x59, 0x55, 0x55, 0x95, 0x55,
        0x66, 0xA9, 0x66, 0xA9, 0xB0,
    ],
);

/// Grundig raw capture.
pub static GRUNDIG_POWER: IrCode = IrCode::new(
    period_for_hz(38_000),
    51,
    4,
    &[
        340, 170,
        42, 42,
        42, 128,
        40, 130,
        44, 40,
        44, 130,
        40, 42,
        42, 3000,
        38, 44,
        46, 126,
    ],
    &[
        0x01, 0x21, 0x23, 0x42, 0x11, 0x25, 0x61, 0x23,
        0x42, 0x12, 0x56, 0x12, 0x12, 0x34, 0x21, 0x70,
        0x12, 0x12, 0x34, 0x21, 0x12, 0x56, 0x12, 0x34,
        0x89, 0x70,
    ],
);

/// Thomson 32-bit.
pub static THOMSON_POWER: IrCode = IrCode::new(
    period_for_hz(38_000),
    34,
    2,
    &[
        400, 400,
        56, 56,
        56, 169,
        56, 4000,
    ],
    &[
        0x15, 0x55, 0x6A, 0xAA, 0x96, 0x95, 0x69, 0x6A,
        0xB0,
    ],
);
