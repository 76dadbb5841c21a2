//! TV-B-Gone style firmware: each press of the wake button sends every TV power code in the
//! selected regional databases, one after the other.
//!
//! Runs on a Raspberry Pi Pico RP2040. Wiring is listed on [`Hardware`].
#![no_std]
#![no_main]
#![allow(clippy::future_not_send, reason = "Single-threaded")]

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_time::Timer;
use panic_probe as _;
use tv_blaster::hardware::Hardware;
use tv_blaster::ir_led::SpinWait;
use tv_blaster::wake::{Wake, WakeStatic};
use tv_blaster::{BlastSettings, Blaster, LedFeedback, Never, PulseEmitter, Result};

#[embassy_executor::main]
pub async fn main(spawner: Spawner) -> ! {
    // If it returns, something went wrong.
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

#[expect(clippy::items_after_statements, reason = "Keeps related code together")]
async fn inner_main(spawner: Spawner) -> Result<Never> {
    let settings = BlastSettings::from_build_env()?;
    let hardware = Hardware::default();

    static WAKE_STATIC: WakeStatic = Wake::new_static();
    let wake = Wake::new(hardware.button, &WAKE_STATIC, spawner)?;

    let emitter = PulseEmitter::new(hardware.ir_led, SpinWait);
    let feedback = LedFeedback::new(hardware.led, SpinWait, settings.feedback_flash);
    let mut blaster = Blaster::new(emitter, feedback, &settings);

    info!("Ready: {:?}", settings);
    loop {
        wake.wait().await;
        Timer::after(settings.wake_settle).await;

        // Blocks until every code has gone out; presses meanwhile stay latched in `wake`.
        let summary = blaster.blast_cycle(settings.regions);
        if summary.codes_failed > 0 {
            defmt::warn!("{} codes failed: {:?}", summary.codes_failed, summary.failures);
        }
    }
}
