//! Retry configuration.
use std::iter::Take;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::strategy::Delay;

/// How many times to retry and how long to wait in between.
///
/// Fields left out when deserializing take their defaults, so `{}` is the default config.
///
/// ```
/// use reattempt::RetryConfig;
///
/// let config = RetryConfig::default().with_retries(5).with_backoff(true);
/// assert_eq!(config.retries, 5);
/// assert_eq!(config.delay, 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RetryConfig {
    /// Maximum number of attempts after the first one.
    pub retries: u32,
    /// Base wait before a retry, in milliseconds.
    pub delay: u64,
    /// Double the wait before each successive retry.
    pub backoff: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        RetryConfig {
            retries: 3,
            delay: 1000,
            backoff: false,
        }
    }
}

impl RetryConfig {
    /// Build a config from signed values, rejecting negative or out of range numbers.
    pub fn try_new(retries: i64, delay: i64, backoff: bool) -> Result<Self, ConfigError> {
        let retries = u32::try_from(retries).map_err(|_| ConfigError::InvalidArgument {
            field: "retries",
            value: retries,
            max: u64::from(u32::MAX),
        })?;
        let delay = u64::try_from(delay).map_err(|_| ConfigError::InvalidArgument {
            field: "delay",
            value: delay,
            max: u64::MAX,
        })?;

        Ok(RetryConfig {
            retries,
            delay,
            backoff,
        })
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    pub fn with_delay(mut self, millis: u64) -> Self {
        self.delay = millis;
        self
    }

    pub fn with_backoff(mut self, backoff: bool) -> Self {
        self.backoff = backoff;
        self
    }

    /// The base delay as a [`Duration`].
    pub fn delay_duration(&self) -> Duration {
        Duration::from_millis(self.delay)
    }

    /// Maximum number of times the operation is invoked.
    pub fn max_attempts(&self) -> u64 {
        u64::from(self.retries) + 1
    }

    /// The waits before each retry, one item per allowed retry.
    pub fn schedule(&self) -> Take<Delay> {
        Delay::from_millis(self.delay, self.backoff).take(self.retries as usize)
    }
}
