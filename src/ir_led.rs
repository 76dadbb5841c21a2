//! Hardware-PWM infrared LED driver for RP2040 (Pico / Pico W) using Embassy.
//! - One PWM slice, channel A, runs at the code's carrier frequency
//! - Carrier bursts are 50 % duty; a steady hold is a compare above `top`
//! - Switching between burst, hold and off only rewrites the compare value

use defmt::info;
use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pwm::{Config, Pwm};
use embassy_time::{Duration, block_for};

use crate::carrier::Carrier;
use crate::pulse::{BusyWait, Drive, IrOutput};

/// `top` used for unmodulated codes; any value below `u16::MAX` works since only compare 0
/// and compare `top + 1` are used.
const HOLD_TOP: u16 = 999;

pub struct PwmIrLed<'d> {
    pwm: Pwm<'d>,
    cfg: Config, // Store config to avoid recreating default (which resets divider)
}

impl<'d> PwmIrLed<'d> {
    /// Take a PWM output on channel A, e.g.
    /// `PwmIrLed::new(Pwm::new_output_a(p.PWM_SLICE0, p.PIN_16, Config::default()))`.
    /// The slice starts disabled with the output low.
    pub fn new(mut pwm: Pwm<'d>) -> Self {
        let mut cfg = Config::default();
        cfg.phase_correct = false; // edge-aligned => period is exactly top + 1 ticks
        cfg.divider = 1_u8.into();
        cfg.compare_a = 0;
        cfg.enable = false;
        pwm.set_config(&cfg);
        Self { pwm, cfg }
    }

    fn apply(&mut self) {
        self.pwm.set_config(&self.cfg);
    }
}

/// Counter wrap value for `hz` at the given system clock, with the divider at 1.
fn top_for(clk_hz: u32, hz: u32) -> u16 {
    let ticks = clk_hz.checked_div(hz).unwrap_or(u32::from(HOLD_TOP));
    u16::try_from(ticks.saturating_sub(1)).unwrap_or(u16::MAX)
}

impl IrOutput for PwmIrLed<'_> {
    fn arm(&mut self, carrier: Carrier) {
        let clk = clk_sys_freq();
        self.cfg.top = carrier
            .frequency_hz()
            .map_or(HOLD_TOP, |hz| top_for(clk, hz));
        self.cfg.compare_a = 0;
        self.cfg.enable = true;
        self.apply();
        info!("IR carrier {:?} clk={}Hz top={}", carrier, clk, self.cfg.top);
    }

    fn drive(&mut self, drive: Drive) {
        // The compare register is double-buffered, so a change lands at the next counter wrap.
        self.cfg.compare_a = match drive {
            Drive::Carrier => self.cfg.top / 2 + 1,
            Drive::Hold => self.cfg.top.saturating_add(1),
            Drive::Off => 0,
        };
        self.apply();
    }

    fn disarm(&mut self) {
        // The last pair's off-phase already latched a zero compare, so the pin is low when the
        // counter stops.
        self.cfg.compare_a = 0;
        self.cfg.enable = false;
        self.apply();
    }
}

/// Busy-waits on the embassy time driver. The executor does not run meanwhile.
pub struct SpinWait;

impl BusyWait for SpinWait {
    fn wait(&mut self, duration: Duration) {
        block_for(duration);
    }
}
