//! Fixed-format progress lines printed by named timers.

use std::time::Duration;

pub fn started(name: &str) -> String {
    format!("[{name}] Timer started.")
}

/// Elapsed seconds are always rendered with microsecond precision.
pub fn stopped(name: &str, elapsed: Duration) -> String {
    format!(
        "[{name}] Timer stopped. Elapsed: {:.6} seconds.",
        elapsed.as_secs_f64()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_started_notice() {
        assert_eq!(started("Manual"), "[Manual] Timer started.");
    }

    #[test]
    fn test_stopped_notice_uses_six_decimals() {
        let line = stopped("Block", Duration::from_micros(1_500_042));
        assert_eq!(line, "[Block] Timer stopped. Elapsed: 1.500042 seconds.");

        let line = stopped("X", Duration::ZERO);
        assert_eq!(line, "[X] Timer stopped. Elapsed: 0.000000 seconds.");
    }
}
