use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::error::{Operation, Result, TimerError};
use crate::guard::TimerGuard;
use crate::notice;

/// Stopwatch over the monotonic clock with an idle/running state machine.
///
/// A timer starts idle. [`Timer::start`] moves it to running and
/// [`Timer::stop`] back to idle, returning the time between the two calls.
/// Each cycle is measured independently; nothing accumulates across cycles.
///
/// Named timers print a line to their output (stdout unless built with
/// [`Timer::with_output`]) on every start and stop.
///
/// Not synchronised; concurrent timing needs one timer per thread.
#[derive(Debug)]
pub struct Timer<W: Write = Stdout> {
    name: Option<String>,
    start: Option<Instant>,
    last_elapsed: Option<Duration>,
    output: W,
}

impl Timer {
    pub fn new(name: Option<String>) -> Self {
        Self::with_output(name, io::stdout())
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::new(Some(name.into()))
    }

    pub fn unnamed() -> Self {
        Self::new(None)
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::unnamed()
    }
}

impl<W: Write> Timer<W> {
    /// Create an idle timer that writes its notices to `output`.
    pub fn with_output(name: Option<String>, output: W) -> Self {
        Self {
            name,
            start: None,
            last_elapsed: None,
            output,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_running(&self) -> bool {
        self.start.is_some()
    }

    /// Duration returned by the most recent successful stop, including the
    /// one performed when a [`TimerGuard`] goes out of scope.
    pub fn last_elapsed(&self) -> Option<Duration> {
        self.last_elapsed
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn start(&mut self) -> Result<()> {
        if self.start.is_some() {
            return Err(TimerError::AlreadyRunning {
                operation: Operation::Start,
            });
        }

        self.start = Some(Instant::now());
        debug!(timer = self.label(), "timer started");

        if let Some(line) = self.notice_name().map(notice::started) {
            self.emit(&line);
        }
        Ok(())
    }

    pub fn stop(&mut self) -> Result<Duration> {
        let Some(start) = self.start.take() else {
            return Err(TimerError::NotRunning {
                operation: Operation::Stop,
            });
        };

        let elapsed = start.elapsed();
        self.last_elapsed = Some(elapsed);
        debug!(
            timer = self.label(),
            elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
            "timer stopped"
        );

        if let Some(line) = self.notice_name().map(|name| notice::stopped(name, elapsed)) {
            self.emit(&line);
        }
        Ok(elapsed)
    }

    /// Time since [`Timer::start`] without stopping.
    pub fn elapsed(&self) -> Result<Duration> {
        self.start
            .map(|start| start.elapsed())
            .ok_or(TimerError::NotRunning {
                operation: Operation::Elapsed,
            })
    }

    /// Start the timer and return a guard that stops it when dropped.
    pub fn scoped(&mut self) -> Result<TimerGuard<'_, W>> {
        self.start()?;
        Ok(TimerGuard::new(self))
    }

    /// Run `f` inside a scoped start/stop. The timer is stopped even if `f`
    /// panics; the measured duration is left in [`Timer::last_elapsed`].
    pub fn time<F, T>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce() -> T,
    {
        let guard = self.scoped()?;
        let output = f();
        drop(guard);
        Ok(output)
    }

    // an empty name counts as no name
    fn notice_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }

    // Notices are best effort: a broken sink never fails a transition.
    fn emit(&mut self, line: &str) {
        let written = writeln!(self.output, "{line}").and_then(|()| self.output.flush());
        if let Err(err) = written {
            warn!(timer = self.label(), %err, "failed to write timer notice");
        }
    }
}
