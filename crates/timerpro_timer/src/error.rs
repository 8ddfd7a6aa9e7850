use std::fmt;

use thiserror::Error;

/// Timer operation that rejected a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Start,
    Stop,
    Elapsed,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Elapsed => "elapsed",
        };
        f.write_str(name)
    }
}

/// Misuse of the idle/running state machine. The timer is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimerError {
    #[error("{operation}: timer is already running")]
    AlreadyRunning { operation: Operation },

    #[error("{operation}: timer is not running")]
    NotRunning { operation: Operation },
}

impl TimerError {
    pub fn operation(&self) -> Operation {
        match self {
            Self::AlreadyRunning { operation } | Self::NotRunning { operation } => *operation,
        }
    }
}

pub type Result<T> = std::result::Result<T, TimerError>;
