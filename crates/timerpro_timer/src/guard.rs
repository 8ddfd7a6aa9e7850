use std::io::{Stdout, Write};
use std::ops::{Deref, DerefMut};
use std::time::Duration;

use crate::error::Result;
use crate::timer::Timer;

/// Keeps a [`Timer`] running for the lifetime of a scope.
///
/// Created by [`Timer::scoped`]. Dropping the guard stops the timer on every
/// exit path, unwinding included. The duration from that stop is not returned
/// but stays readable through [`Timer::last_elapsed`]; use
/// [`TimerGuard::finish`] to get it directly.
#[derive(Debug)]
#[must_use = "the timer stops as soon as the guard is dropped"]
pub struct TimerGuard<'a, W: Write = Stdout> {
    timer: &'a mut Timer<W>,
}

impl<'a, W: Write> TimerGuard<'a, W> {
    pub(crate) fn new(timer: &'a mut Timer<W>) -> Self {
        Self { timer }
    }

    /// Stop now and return the elapsed time.
    pub fn finish(mut self) -> Result<Duration> {
        self.timer.stop()
    }
}

impl<W: Write> Deref for TimerGuard<'_, W> {
    type Target = Timer<W>;

    fn deref(&self) -> &Self::Target {
        &*self.timer
    }
}

impl<W: Write> DerefMut for TimerGuard<'_, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.timer
    }
}

impl<W: Write> Drop for TimerGuard<'_, W> {
    fn drop(&mut self) {
        // already stopped by finish() or by hand inside the scope
        if !self.timer.is_running() {
            return;
        }
        let _ = self.timer.stop();
    }
}

#[cfg(test)]
mod tests {
    use crate::error::TimerError;
    use crate::timer::Timer;
    use std::panic::{self, AssertUnwindSafe};
    use std::thread;
    use std::time::Duration;

    fn captured(name: &str) -> Timer<Vec<u8>> {
        Timer::with_output(Some(name.to_string()), Vec::new())
    }

    fn stopped_lines(timer: &Timer<Vec<u8>>) -> usize {
        String::from_utf8_lossy(timer.output())
            .lines()
            .filter(|line| line.contains("Timer stopped."))
            .count()
    }

    #[test]
    fn test_guard_stops_on_scope_exit() {
        let mut timer = captured("Block");
        {
            let guard = timer.scoped().unwrap();
            assert!(guard.is_running());
            thread::sleep(Duration::from_millis(20));
            assert!(guard.elapsed().unwrap() >= Duration::from_millis(20));
        }

        assert!(!timer.is_running());
        assert!(timer.last_elapsed().unwrap() >= Duration::from_millis(20));

        let output = String::from_utf8_lossy(timer.output()).into_owned();
        assert!(output.starts_with("[Block] Timer started.\n"));
        assert_eq!(stopped_lines(&timer), 1);
    }

    #[test]
    fn test_guard_stops_when_scope_fails() {
        fn fallible(timer: &mut Timer<Vec<u8>>) -> Result<(), String> {
            let _guard = timer.scoped().map_err(|err| err.to_string())?;
            Err("work failed".to_string())
        }

        let mut timer = captured("failing");
        assert_eq!(fallible(&mut timer), Err("work failed".to_string()));

        assert!(!timer.is_running());
        assert!(timer.start().is_ok());
    }

    #[test]
    fn test_guard_stops_when_scope_panics() {
        let mut timer = captured("panicking");
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let _guard = timer.scoped().unwrap();
            panic!("boom");
        }));

        assert!(result.is_err());
        assert!(!timer.is_running());
        assert!(timer.last_elapsed().is_some());
        assert!(timer.start().is_ok());
    }

    #[test]
    fn test_scoped_on_running_timer_fails() {
        let mut timer = Timer::with_output(None, Vec::new());
        timer.start().unwrap();

        let err = timer.scoped().unwrap_err();
        assert!(matches!(err, TimerError::AlreadyRunning { .. }));
        // the failed entry must not stop the outer measurement
        assert!(timer.is_running());
    }

    #[test]
    fn test_finish_returns_duration_once() {
        let mut timer = captured("finish");
        let guard = timer.scoped().unwrap();
        let elapsed = guard.finish().unwrap();

        assert_eq!(timer.last_elapsed(), Some(elapsed));
        assert_eq!(stopped_lines(&timer), 1);
    }

    #[test]
    fn test_manual_stop_inside_scope() {
        let mut timer = captured("manual");
        {
            let mut guard = timer.scoped().unwrap();
            assert!(guard.stop().is_ok());
            assert!(!guard.is_running());
        }
        assert_eq!(stopped_lines(&timer), 1);
    }

    #[test]
    fn test_time_closure() {
        let mut timer = Timer::with_output(None, Vec::new());
        let value = timer
            .time(|| {
                thread::sleep(Duration::from_millis(10));
                42
            })
            .unwrap();

        assert_eq!(value, 42);
        assert!(!timer.is_running());
        assert!(timer.last_elapsed().unwrap() >= Duration::from_millis(10));
    }

    #[test]
    fn test_time_closure_panic_stops_timer() {
        let mut timer = Timer::with_output(None, Vec::new());
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let _ = timer.time(|| -> u32 { panic!("boom") });
        }));

        assert!(result.is_err());
        assert!(!timer.is_running());
    }
}
