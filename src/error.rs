//! Errors produced by this crate.
use std::error::Error as StdError;
use std::fmt;

/// A retry configuration that cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid argument: `{field}` must be between 0 and {max}, got {value}")]
    InvalidArgument {
        field: &'static str,
        value: i64,
        max: u64,
    },
}

/// The last failure of an operation whose retry budget ran out, with the number of attempts made.
///
/// Returned by [`retry_reporting`](crate::retry_reporting). The original failure is kept
/// untouched and can be recovered with [`Exhausted::into_inner`] or [`StdError::source`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exhausted<E> {
    attempts: u32,
    error: E,
}

impl<E> Exhausted<E> {
    pub(crate) fn new(attempts: u32, error: E) -> Self {
        Exhausted { attempts, error }
    }

    /// How many times the operation was invoked.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// The failure produced by the last attempt.
    pub fn error(&self) -> &E {
        &self.error
    }

    /// Consume this and return the failure produced by the last attempt.
    pub fn into_inner(self) -> E {
        self.error
    }
}

impl<E: fmt::Display> fmt::Display for Exhausted<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "operation failed after {} attempt(s): {}",
            self.attempts, self.error
        )
    }
}

impl<E> StdError for Exhausted<E>
where
    E: StdError + 'static,
{
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn exhausted_keeps_last_error_as_source() {
        let err = Exhausted::new(4, io::Error::new(io::ErrorKind::TimedOut, "slow"));

        assert_eq!(err.attempts(), 4);
        assert_eq!(err.to_string(), "operation failed after 4 attempt(s): slow");
        let source = err.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("slow"));
        assert_eq!(err.into_inner().kind(), io::ErrorKind::TimedOut);
    }

    #[test]
    fn invalid_argument_names_field() {
        let err = ConfigError::InvalidArgument {
            field: "delay",
            value: -5,
            max: u64::MAX,
        };
        assert_eq!(
            err.to_string(),
            format!("invalid argument: `delay` must be between 0 and {}, got -5", u64::MAX)
        );
    }
}
