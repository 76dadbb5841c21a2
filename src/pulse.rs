//! Turning decoded pairs into timed output.
//!
//! The emitter only knows two capabilities: something that can switch the infrared output
//! ([`IrOutput`]) and something that can block for a given time ([`BusyWait`]). Firmware builds
//! plug in the PWM slice and `embassy_time::block_for`; tests plug in recorders and a virtual
//! clock.

use embassy_time::Duration;

use crate::carrier::Carrier;
use crate::ir_code::Pair;

/// How the on-phase of a pulse is realized.
///
/// Instead of threading a vague `bool` through the decoder and emitter, we name both states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Modulation {
    /// Burst the carrier for the on-phase.
    Carrier,
    /// Hold the output steadily on for the on-phase.
    Hold,
}

impl From<Carrier> for Modulation {
    fn from(carrier: Carrier) -> Self {
        match carrier {
            Carrier::Modulated { .. } => Self::Carrier,
            Carrier::Unmodulated => Self::Hold,
        }
    }
}

/// One decoded pair together with how its on-phase is driven.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pulse {
    pub pair: Pair,
    pub modulation: Modulation,
}

/// The state the infrared output is driven to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Drive {
    /// Carrier bursts at the armed frequency.
    Carrier,
    /// Output steadily high.
    Hold,
    /// Carrier stopped and output forced low.
    Off,
}

impl From<Modulation> for Drive {
    fn from(modulation: Modulation) -> Self {
        match modulation {
            Modulation::Carrier => Self::Carrier,
            Modulation::Hold => Self::Hold,
        }
    }
}

/// The infrared output stage.
pub trait IrOutput {
    /// Configure the carrier generator for the code about to be sent. The output stays low.
    fn arm(&mut self, carrier: Carrier);

    fn drive(&mut self, drive: Drive);

    /// Stop the carrier generator and leave the output low.
    fn disarm(&mut self);
}

/// A blocking wait. Nothing else runs on the calling thread meanwhile.
pub trait BusyWait {
    fn wait(&mut self, duration: Duration);
}

impl<T: IrOutput + ?Sized> IrOutput for &mut T {
    fn arm(&mut self, carrier: Carrier) {
        (**self).arm(carrier);
    }

    fn drive(&mut self, drive: Drive) {
        (**self).drive(drive);
    }

    fn disarm(&mut self) {
        (**self).disarm();
    }
}

impl<T: BusyWait + ?Sized> BusyWait for &mut T {
    fn wait(&mut self, duration: Duration) {
        (**self).wait(duration);
    }
}

/// Drives the output through one pulse at a time.
pub struct PulseEmitter<O, W> {
    output: O,
    clock: W,
}

impl<O: IrOutput, W: BusyWait> PulseEmitter<O, W> {
    #[must_use]
    pub const fn new(output: O, clock: W) -> Self {
        Self { output, clock }
    }

    /// Send one pair: the on-phase as carrier bursts or a steady hold, then silence.
    ///
    /// Blocks for the pair's full on and off time.
    pub fn emit(&mut self, pulse: Pulse) {
        self.output.drive(pulse.modulation.into());
        self.clock.wait(pulse.pair.on_duration());

        // The carrier may have been stopped mid-cycle with the pin high, so force it low.
        self.output.drive(Drive::Off);
        self.clock.wait(pulse.pair.off_duration());
    }

    pub fn arm(&mut self, carrier: Carrier) {
        self.output.arm(carrier);
    }

    pub fn disarm(&mut self) {
        self.output.disarm();
    }

    /// Block without touching the output.
    pub fn pause(&mut self, duration: Duration) {
        self.clock.wait(duration);
    }

    pub fn into_parts(self) -> (O, W) {
        (self.output, self.clock)
    }
}
