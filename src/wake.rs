//! A device abstraction for the wake button.
//!
//! A background task latches each press into a [`WakeStatic`] signal. While a blast cycle
//! busy-waits the task is not polled, but the pin interrupt has already recorded the edge, so
//! a press made during the cycle is reported once the cycle ends (see [`crate::press`]) and
//! starts the next cycle instead of cutting the current one short.
use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::Peri;
use embassy_rp::gpio::{AnyPin, Input, Pin, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::Delay;

use crate::config::BUTTON_DEBOUNCE_DELAY;
use crate::press::watch_press;
use crate::Result;

/// Static type for the `Wake` device abstraction. Holds at most one pending wake.
pub type WakeStatic = Signal<CriticalSectionRawMutex, ()>;

/// A debounced wake button, wired between the pin and 3V3.
///
/// # Examples
/// ```no_run
/// # #![no_std]
/// # #![no_main]
/// # use panic_probe as _;
/// # use embassy_executor::Spawner;
/// # use tv_blaster::wake::{Wake, WakeStatic};
/// # async fn example(p: embassy_rp::Peripherals, spawner: Spawner) -> tv_blaster::Result<()> {
/// static WAKE_STATIC: WakeStatic = Wake::new_static();
/// let wake = Wake::new(p.PIN_13, &WAKE_STATIC, spawner)?;
///
/// loop {
///     wake.wait().await;
///     // blast
/// }
/// # }
/// ```
pub struct Wake<'a> {
    wake_static: &'a WakeStatic,
}

impl Wake<'_> {
    /// Create static signal resources for wake events.
    #[must_use]
    pub const fn new_static() -> WakeStatic {
        Signal::new()
    }

    /// Start watching the button on the specified pin.
    ///
    /// # Errors
    /// Returns an error if the background task cannot be spawned.
    pub fn new<P: Pin>(
        pin: Peri<'static, P>,
        wake_static: &'static WakeStatic,
        spawner: Spawner,
    ) -> Result<Self> {
        // Type erase to Peri<'static, AnyPin> (keep the Peri wrapper!)
        let any: Peri<'static, AnyPin> = pin.into();
        let token = wake_task(Input::new(any, Pull::Down), wake_static)?;
        spawner.spawn(token);
        Ok(Self { wake_static })
    }

    /// Wait for the next (or an already latched) press.
    pub async fn wait(&self) {
        self.wake_static.wait().await;
    }
}

#[embassy_executor::task]
async fn wake_task(mut button: Input<'static>, wake_static: &'static WakeStatic) -> ! {
    info!("Wake task started");
    let mut delay = Delay;
    loop {
        let watched = watch_press(&mut button, &mut delay, BUTTON_DEBOUNCE_DELAY, || {
            info!("Wake button pressed");
            wake_static.signal(());
        })
        .await;
        if let Err(never) = watched {
            match never {}
        }
    }
}
