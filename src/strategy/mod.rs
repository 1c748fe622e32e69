//! Delay schedules for retryable operations.
//!
//! A schedule is an iterator of [`Duration`]s: each item is the wait before one retry,
//! and the iterator running dry ends the retries.

use std::time::Duration;

pub mod exponential;
pub use exponential::Exponential;

pub mod fixed;
pub use fixed::Fixed;

/// The delay growth chosen by [`RetryConfig::backoff`](crate::RetryConfig).
#[derive(Debug, Clone)]
pub enum Delay {
    /// Wait the base delay before every retry.
    Fixed(Fixed),
    /// Double the wait before each successive retry.
    Exponential(Exponential),
}

impl Delay {
    /// Pick the schedule for a base delay in milliseconds.
    pub fn from_millis(base: u64, backoff: bool) -> Self {
        if backoff {
            Delay::Exponential(Exponential::from_millis(base))
        } else {
            Delay::Fixed(Fixed::from_millis(base))
        }
    }
}

impl Iterator for Delay {
    type Item = Duration;

    fn next(&mut self) -> Option<Duration> {
        match self {
            Delay::Fixed(inner) => inner.next(),
            Delay::Exponential(inner) => inner.next(),
        }
    }
}
