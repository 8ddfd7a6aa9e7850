//! The two demo runs: a timer driven by hand and one tied to a scope.

use std::io::Write;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use timerpro_timer::Timer;
use tracing::info;

fn sleep_secs(secs: f64) -> Result<()> {
    let duration = Duration::try_from_secs_f64(secs)
        .with_context(|| format!("invalid sleep length {secs}"))?;
    thread::sleep(duration);
    Ok(())
}

/// Start, sleep, stop.
pub fn run_manual<W: Write>(timer: &mut Timer<W>, secs: f64) -> Result<Duration> {
    timer.start()?;
    sleep_secs(secs)?;
    let elapsed = timer.stop()?;
    info!(elapsed_secs = elapsed.as_secs_f64(), "manual timer finished");
    Ok(elapsed)
}

/// Sleep while a scope guard keeps the timer running.
pub fn run_scoped<W: Write>(timer: &mut Timer<W>, secs: f64) -> Result<Duration> {
    {
        let _guard = timer.scoped()?;
        sleep_secs(secs)?;
    }
    let elapsed = timer
        .last_elapsed()
        .context("scoped timer did not record a duration")?;
    info!(elapsed_secs = elapsed.as_secs_f64(), "scoped timer finished");
    Ok(elapsed)
}
