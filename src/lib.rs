//! Compressed infrared power-code playback for a TV-B-Gone style remote.
//!
//! Runs on a Raspberry Pi Pico.
//! Everything except the `hardware`, `ir_led` and `wake` modules also builds on the host
//! (`--no-default-features --features host`) so the playback engine can be tested there.
#![cfg_attr(not(test), no_std)]

pub mod bit_reader;
pub mod carrier;
pub mod code_decoder;
pub mod config;
pub mod database;
mod error;
pub mod feedback;
#[cfg(feature = "pico1")]
pub mod hardware;
pub mod ir_code;
#[cfg(feature = "pico1")]
pub mod ir_led;
mod never;
pub mod playback;
pub mod press;
pub mod pulse;
#[cfg(feature = "pico1")]
pub mod wake;

// Re-export commonly used items
pub use bit_reader::BitReader;
pub use carrier::{Carrier, period_for_hz};
pub use code_decoder::CodeDecoder;
pub use config::{BlastSettings, Regions};
pub use database::{Database, EUROPE, NORTH_AMERICA, Region};
pub use error::{Error, Result};
pub use feedback::{Feedback, LedFeedback};
pub use ir_code::{IrCode, Pair};
pub use never::Never;
pub use playback::{BlastSummary, Blaster, FailedCode};
pub use pulse::{BusyWait, Drive, IrOutput, Modulation, Pulse, PulseEmitter};
