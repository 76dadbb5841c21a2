use embassy_rp::{
    Peri,
    gpio::{self, Level},
    peripherals::PIN_13,
    pwm::{Config, Pwm},
};

use crate::ir_led::PwmIrLed;

/// Pin assignment for the blaster board.
///
/// | Pin     | Use                                          |
/// |---------|----------------------------------------------|
/// | GPIO 16 | IR LED driver (PWM slice 0, channel A)       |
/// | GPIO 25 | visible feedback LED (the Pico's onboard LED) |
/// | GPIO 13 | wake button to 3V3                           |
pub struct Hardware {
    pub ir_led: PwmIrLed<'static>,
    pub led: gpio::Output<'static>,
    pub button: Peri<'static, PIN_13>,
}

impl Default for Hardware {
    fn default() -> Self {
        let peripherals: embassy_rp::Peripherals =
            embassy_rp::init(embassy_rp::config::Config::default());

        let ir_led = PwmIrLed::new(Pwm::new_output_a(
            peripherals.PWM_SLICE0,
            peripherals.PIN_16,
            Config::default(),
        ));

        let led = gpio::Output::new(peripherals.PIN_25, Level::Low);

        Self {
            ir_led,
            led,
            button: peripherals.PIN_13,
        }
    }
}
