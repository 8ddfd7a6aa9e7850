//! Monotonic stopwatch with an idle/running state machine and scoped use.

pub mod error;
pub mod guard;
pub mod notice;
pub mod timer;

pub use crate::error::{Operation, Result, TimerError};
pub use crate::guard::TimerGuard;
pub use crate::timer::Timer;
