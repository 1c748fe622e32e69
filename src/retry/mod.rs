//! Asynchronous retry of operations that may fail.
use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, warn};

use crate::config::RetryConfig;
use crate::error::Exhausted;

/// Execute an asynchronous operation and retry it on failure as described by `config`.
///
/// The operation is invoked at most `config.retries + 1` times, one attempt at a time. Before
/// the n-th retry the call waits `config.delay` milliseconds, or `config.delay * 2^(n-1)` when
/// `config.backoff` is set.
///
/// # Returns
///
/// The first success as `Ok(O)`. If every attempt fails, the error of the last attempt, exactly
/// as the operation produced it.
///
/// # Examples
///
/// ```
/// use reattempt::{RetryConfig, retry};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mut calls = 0;
/// let result = retry(
///     || {
///         calls += 1;
///         let attempt = calls;
///         async move { if attempt < 3 { Err("not yet") } else { Ok("ok") } }
///     },
///     RetryConfig::default().with_delay(10),
/// )
/// .await;
///
/// assert_eq!(result, Ok("ok"));
/// assert_eq!(calls, 3);
/// # }
/// ```
pub async fn retry<OP, F, R, O, E>(operation: OP, config: RetryConfig) -> Result<O, E>
where
    OP: FnMut() -> F,
    F: Future<Output = R>,
    R: Into<Result<O, E>>,
{
    retry_with_schedule(config.schedule(), operation).await
}

/// [`retry`] with [`RetryConfig::default`]: up to 3 retries, 1 second apart.
pub async fn retry_default<OP, F, R, O, E>(operation: OP) -> Result<O, E>
where
    OP: FnMut() -> F,
    F: Future<Output = R>,
    R: Into<Result<O, E>>,
{
    retry(operation, RetryConfig::default()).await
}

/// Like [`retry`], but a final failure also reports how many attempts were made.
///
/// ```
/// use reattempt::{RetryConfig, retry_reporting};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let config = RetryConfig::default().with_retries(2).with_delay(0);
/// let err = retry_reporting(|| async { Err::<(), _>("boom") }, config)
///     .await
///     .unwrap_err();
///
/// assert_eq!(err.attempts(), 3);
/// assert_eq!(err.into_inner(), "boom");
/// # }
/// ```
pub async fn retry_reporting<OP, F, R, O, E>(
    operation: OP,
    config: RetryConfig,
) -> Result<O, Exhausted<E>>
where
    OP: FnMut() -> F,
    F: Future<Output = R>,
    R: Into<Result<O, E>>,
{
    run(config.schedule(), operation).await
}

/// Execute an asynchronous operation and retry it with the delays yielded by `schedule`.
///
/// Each failed attempt takes the next delay from the schedule and sleeps for it before trying
/// again. Once the schedule is exhausted the last error is returned. An endless schedule retries
/// until the operation succeeds.
///
/// ```
/// use reattempt::retry_with_schedule;
/// use reattempt::strategy::Exponential;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mut values = vec![1, 2, 3].into_iter();
/// let value = retry_with_schedule(Exponential::from_millis(1).take(5), || {
///     let next = values.next();
///     async move {
///         match next {
///             Some(3) => Ok(3),
///             _ => Err("not 3"),
///         }
///     }
/// })
/// .await;
///
/// assert_eq!(value, Ok(3));
/// # }
/// ```
pub async fn retry_with_schedule<I, OP, F, R, O, E>(schedule: I, operation: OP) -> Result<O, E>
where
    I: IntoIterator<Item = Duration>,
    OP: FnMut() -> F,
    F: Future<Output = R>,
    R: Into<Result<O, E>>,
{
    run(schedule, operation).await.map_err(Exhausted::into_inner)
}

async fn run<I, OP, F, R, O, E>(schedule: I, mut operation: OP) -> Result<O, Exhausted<E>>
where
    I: IntoIterator<Item = Duration>,
    OP: FnMut() -> F,
    F: Future<Output = R>,
    R: Into<Result<O, E>>,
{
    let mut delays = schedule.into_iter();
    let mut attempts: u32 = 0;

    loop {
        attempts = attempts.saturating_add(1);
        // A fresh future per attempt; the previous one has already settled.
        match operation().await.into() {
            Ok(value) => {
                if attempts > 1 {
                    debug!(attempts, "operation succeeded after retrying");
                }
                return Ok(value);
            }
            Err(err) => match delays.next() {
                Some(delay) => {
                    debug!(attempt = attempts, ?delay, "attempt failed, retrying");
                    sleep(delay).await;
                }
                None => {
                    warn!(attempts, "operation failed, no retries left");
                    return Err(Exhausted::new(attempts, err));
                }
            },
        }
    }
}
