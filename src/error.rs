use derive_more::derive::{Display, Error};

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Define a unified error type for this crate.
///
/// Every variant except `TaskSpawn` describes a defect in the baked-in code database (or in the
/// build-time configuration), never a transient condition, so nothing here is retried.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The executor had no free slot for a background task.
    #[cfg(feature = "pico1")]
    #[display("background task could not be spawned")]
    TaskSpawn,

    /// A decoded index points past the end of its code's timing table.
    #[display("timing index {index} is outside a table of {table_pairs} pairs")]
    IndexOutOfRange { index: u8, table_pairs: usize },

    /// The packed index stream ends before all of the code's pairs were read.
    #[display("packed indices hold {available_bits} bits but {required_bits} are required")]
    TruncatedStream {
        required_bits: usize,
        available_bits: usize,
    },

    /// An index width outside `1..=8` bits.
    #[display("index width {width} is outside 1..=8 bits")]
    InvalidIndexWidth { width: u8 },

    /// The timing table is empty or does not hold whole (on, off) pairs.
    #[display("timing table of {len} values does not hold whole (on, off) pairs")]
    UnpairedTimingTable { len: usize },

    #[display("BLAST_REGIONS must be one of `both`, `na` or `eu`")]
    UnknownRegions,
}

#[cfg(feature = "pico1")]
impl From<embassy_executor::SpawnError> for Error {
    fn from(_: embassy_executor::SpawnError) -> Self {
        Self::TaskSpawn
    }
}
