//! The playback driver: sends whole codes and whole databases.
//!
//! A blast cycle walks the selected databases in order and, for every code,
//! arms the carrier, emits every pair, disarms, flashes the feedback LED and pauses.
//! Codes are never reordered or retried, and nothing can interrupt a cycle once started. A code
//! shared by two selected databases is sent once.

use embassy_time::Duration;
use heapless::Vec;

use crate::config::{BlastSettings, Regions};
use crate::database::{Database, Region};
use crate::feedback::Feedback;
use crate::ir_code::IrCode;
use crate::pulse::{BusyWait, IrOutput, PulseEmitter};
use crate::{Error, Result};

/// Failed codes remembered per cycle; later failures are only counted.
pub const MAX_RECORDED_FAILURES: usize = 8;

/// A code that could not be sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FailedCode {
    pub region: Region,
    /// Position of the code in its database.
    pub index: usize,
    pub error: Error,
}

/// What happened during one [`Blaster::play_all`] or [`Blaster::blast_cycle`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlastSummary {
    pub codes_sent: usize,
    pub codes_failed: usize,
    /// Codes left out because an earlier database in the same cycle already sent them.
    pub codes_skipped: usize,
    pub pairs_sent: usize,
    pub failures: Vec<FailedCode, MAX_RECORDED_FAILURES>,
}

impl BlastSummary {
    fn record_failure(&mut self, failed: FailedCode) {
        self.codes_failed = self.codes_failed.saturating_add(1);
        // Only the first few are kept; the count above is always exact.
        let _ = self.failures.push(failed);
    }

    fn absorb(&mut self, other: Self) {
        self.codes_sent = self.codes_sent.saturating_add(other.codes_sent);
        self.pairs_sent = self.pairs_sent.saturating_add(other.pairs_sent);
        self.codes_failed = self.codes_failed.saturating_add(other.codes_failed);
        self.codes_skipped = self.codes_skipped.saturating_add(other.codes_skipped);
        for failed in other.failures {
            let _ = self.failures.push(failed);
        }
    }
}

/// Sends codes through a [`PulseEmitter`] and signals a [`Feedback`] after each one.
pub struct Blaster<O, W, F> {
    emitter: PulseEmitter<O, W>,
    feedback: F,
    inter_code_pause: Duration,
}

impl<O: IrOutput, W: BusyWait, F: Feedback> Blaster<O, W, F> {
    #[must_use]
    pub const fn new(emitter: PulseEmitter<O, W>, feedback: F, settings: &BlastSettings) -> Self {
        Self {
            emitter,
            feedback,
            inter_code_pause: settings.inter_code_pause,
        }
    }

    /// Transmit one code and return the number of pairs sent.
    ///
    /// The code is checked in full before the output is armed, so a defective code sends
    /// nothing at all.
    ///
    /// # Errors
    /// Returns the first defect [`IrCode::check`] finds.
    pub fn play(&mut self, code: &IrCode) -> Result<usize> {
        code.check()?;

        self.emitter.arm(code.carrier());
        let mut decoder = code.decode();
        let mut pairs_sent: usize = 0;
        let outcome = decoder.by_ref().try_for_each(|pulse| {
            self.emitter.emit(pulse?);
            pairs_sent = pairs_sent.saturating_add(1);
            Ok(())
        });
        // Flush the leftover bits so nothing carries into the next code.
        let _ = decoder.finish();
        self.emitter.disarm();

        outcome.map(|()| pairs_sent)
    }

    /// Transmit every code of one database in order, with feedback and a pause after each.
    ///
    /// A defective code is logged and counted, gets no feedback flash, and still gets its
    /// pause so the next code keeps its spacing.
    pub fn play_all(&mut self, database: &Database) -> BlastSummary {
        self.play_new(database, &[])
    }

    /// One full blast cycle over the selected regions.
    ///
    /// A code listed in more than one selected database goes out only the first time; a
    /// second copy of a power toggle would switch the TV back on.
    pub fn blast_cycle(&mut self, regions: Regions) -> BlastSummary {
        let databases = regions.databases();
        #[cfg(feature = "defmt")]
        defmt::info!("Blast cycle: {:?}, {} databases", regions, databases.len());

        let mut summary = BlastSummary::default();
        for split in 0..databases.len() {
            let (sent, rest) = databases.split_at(split);
            if let Some(database) = rest.first() {
                summary.absorb(self.play_new(database, sent));
            }
        }

        #[cfg(feature = "defmt")]
        defmt::info!(
            "Blast cycle done: {} codes sent, {} failed, {} duplicates skipped, {} pairs",
            summary.codes_sent,
            summary.codes_failed,
            summary.codes_skipped,
            summary.pairs_sent
        );
        summary
    }

    /// Play the codes of `database` that none of `sent` lists.
    fn play_new(&mut self, database: &Database, sent: &[&Database]) -> BlastSummary {
        let mut summary = BlastSummary::default();
        for (index, code) in database.codes().iter().enumerate() {
            if sent.iter().any(|earlier| earlier.contains(code)) {
                #[cfg(feature = "defmt")]
                defmt::debug!("{:?} code {}: already sent this cycle", database.region(), index);
                summary.codes_skipped = summary.codes_skipped.saturating_add(1);
                continue;
            }
            #[cfg(feature = "defmt")]
            defmt::debug!(
                "{:?} code {}: carrier {:?} Hz, {} pairs",
                database.region(),
                index,
                code.carrier().frequency_hz(),
                code.pair_count()
            );
            match self.play(code) {
                Ok(pairs) => {
                    summary.codes_sent = summary.codes_sent.saturating_add(1);
                    summary.pairs_sent = summary.pairs_sent.saturating_add(pairs);
                    self.feedback.code_sent();
                }
                Err(error) => {
                    #[cfg(feature = "defmt")]
                    defmt::error!("{:?} code {} skipped: {}", database.region(), index, error);
                    summary.record_failure(FailedCode {
                        region: database.region(),
                        index,
                        error,
                    });
                }
            }
            self.emitter.pause(self.inter_code_pause);
        }
        summary
    }

    /// Block without touching the output, e.g. to let things settle after a wake.
    pub fn pause(&mut self, duration: Duration) {
        self.emitter.pause(duration);
    }

    pub fn into_parts(self) -> (PulseEmitter<O, W>, F) {
        (self.emitter, self.feedback)
    }
}
