//! Debounced press detection over any async input pin.
//!
//! The blast cycle busy-waits on the only executor, so the task watching the button is not
//! polled while codes go out. The pin's edge interrupt still fires, and the pending
//! `wait_for_high` completes as soon as the task runs again, even if the button has been
//! released by then. A press is therefore reported on that edge alone and never re-checked
//! against the current level.

use embassy_time::Duration;
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::digital::Wait;

/// Wait for one press, report it, then wait out the release.
///
/// `on_press` runs as soon as the pin goes high. Contact bounce is absorbed afterwards:
/// `debounce` after the press, then the release, then `debounce` again.
///
/// # Errors
/// Returns the pin's error if waiting on it fails.
pub async fn watch_press<P: Wait, D: DelayNs>(
    pin: &mut P,
    delay: &mut D,
    debounce: Duration,
    on_press: impl FnOnce(),
) -> Result<(), P::Error> {
    pin.wait_for_high().await?;
    on_press();

    let debounce_us = u32::try_from(debounce.as_micros()).unwrap_or(u32::MAX);
    delay.delay_us(debounce_us).await;
    pin.wait_for_low().await?;
    delay.delay_us(debounce_us).await;
    Ok(())
}
