//! # Reattempt
//!
//! Retry an asynchronous operation that may fail.
//!
//! The operation is invoked, and on failure invoked again up to a bounded number of times,
//! waiting between attempts with either a fixed delay or an exponentially growing one. The call
//! resolves with the first success, or with the failure of the last attempt.
//!
//! ## Features
//!
//! - [`retry`] driven by a [`RetryConfig`] (`retries`, `delay`, `backoff`)
//! - [`retry_reporting`] when the caller wants to know how many attempts were made
//! - [`retry_with_schedule`] for any iterator of delays, see the [`strategy`] module
//!
//! ## Usage
//!
//! ```rust
//! use reattempt::{RetryConfig, retry};
//! use std::sync::{Arc, Mutex};
//!
//! async fn example() -> Result<&'static str, &'static str> {
//!     let attempts = Arc::new(Mutex::new(0));
//!     let attempts_clone = attempts.clone();
//!     let config = RetryConfig::default().with_delay(3).with_backoff(true);
//!     retry(
//!         || {
//!             let value = attempts_clone.clone();
//!             async move {
//!                 let mut lock = value.lock().unwrap();
//!                 *lock += 1;
//!                 if *lock < 2 { Err("Error") } else { Ok("Success") }
//!             }
//!         },
//!         config,
//!     )
//!     .await
//! }
//! ```
//!
//! Retries log through [`tracing`]: each failed attempt that will be retried emits a `DEBUG`
//! event, and giving up emits a `WARN` event. Install a subscriber to see them.
pub mod config;
pub mod error;
mod retry;
pub mod strategy;

pub use config::RetryConfig;
pub use error::{ConfigError, Exhausted};
pub use retry::{retry, retry_default, retry_reporting, retry_with_schedule};
