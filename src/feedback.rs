//! The visible "a code just went out" indication.

use embassy_time::Duration;
use embedded_hal::digital::OutputPin;

use crate::pulse::BusyWait;

/// Receives one feedback pulse per transmitted code.
pub trait Feedback {
    fn code_sent(&mut self);
}

impl<T: Feedback + ?Sized> Feedback for &mut T {
    fn code_sent(&mut self) {
        (**self).code_sent();
    }
}

/// Flashes an LED for a fixed time after each code.
pub struct LedFeedback<P, W> {
    led: P,
    clock: W,
    flash: Duration,
}

impl<P: OutputPin, W: BusyWait> LedFeedback<P, W> {
    #[must_use]
    pub const fn new(led: P, clock: W, flash: Duration) -> Self {
        Self { led, clock, flash }
    }
}

impl<P: OutputPin, W: BusyWait> Feedback for LedFeedback<P, W> {
    fn code_sent(&mut self) {
        // on some hardware (but not here), setting a pin can fail; a missed flash is harmless
        let _ = self.led.set_high();
        self.clock.wait(self.flash);
        let _ = self.led.set_low();
    }
}

#[cfg(test)]
mod tests {
    use core::convert::Infallible;

    use embedded_hal::digital::{ErrorType, OutputPin};

    use super::*;

    #[derive(Default)]
    struct Led {
        high: bool,
        toggles: u8,
    }

    impl ErrorType for Led {
        type Error = Infallible;
    }

    impl OutputPin for Led {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            self.toggles += 1;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            self.toggles += 1;
            Ok(())
        }
    }

    struct Elapsed(Duration);

    impl BusyWait for Elapsed {
        fn wait(&mut self, duration: Duration) {
            self.0 += duration;
        }
    }

    #[test]
    fn test_flash_lights_then_clears() {
        let mut led = Led::default();
        let mut elapsed = Elapsed(Duration::from_ticks(0));
        let mut feedback = LedFeedback::new(&mut led, &mut elapsed, Duration::from_millis(30));
        feedback.code_sent();
        feedback.code_sent();
        drop(feedback);

        assert!(!led.high);
        assert_eq!(led.toggles, 4);
        assert_eq!(elapsed.0, Duration::from_millis(60));
    }
}
