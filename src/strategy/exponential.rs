use std::time::Duration;

/// Each retry doubles the delay since the last one.
///
/// The n-th yielded delay is `base * 2^(n-1)` milliseconds, saturating at `u64::MAX`.
#[derive(Debug, Clone)]
pub struct Exponential {
    current: u64,
}

impl Exponential {
    /// Create a new [`Exponential`] using the given millisecond duration as the initial delay.
    pub fn from_millis(base: u64) -> Self {
        Exponential { current: base }
    }
}

impl Iterator for Exponential {
    type Item = Duration;

    fn next(&mut self) -> Option<Duration> {
        let duration = Duration::from_millis(self.current);
        self.current = self.current.saturating_mul(2);
        Some(duration)
    }
}

impl From<Duration> for Exponential {
    fn from(duration: Duration) -> Self {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        Self::from_millis(millis)
    }
}

#[test]
fn exponential_doubles() {
    let mut iter = Exponential::from_millis(1000);
    assert_eq!(iter.next(), Some(Duration::from_millis(1000)));
    assert_eq!(iter.next(), Some(Duration::from_millis(2000)));
    assert_eq!(iter.next(), Some(Duration::from_millis(4000)));
    assert_eq!(iter.next(), Some(Duration::from_millis(8000)));
    assert_eq!(iter.next(), Some(Duration::from_millis(16000)));
}

#[test]
fn exponential_zero_base_stays_zero() {
    let delays: Vec<_> = Exponential::from_millis(0).take(4).collect();
    assert_eq!(delays, vec![Duration::ZERO; 4]);
}

#[test]
fn exponential_overflow() {
    let mut iter = Exponential::from_millis(u64::MAX / 2 + 1);
    assert_eq!(iter.next(), Some(Duration::from_millis(u64::MAX / 2 + 1)));
    assert_eq!(iter.next(), Some(Duration::from_millis(u64::MAX)));
    assert_eq!(iter.next(), Some(Duration::from_millis(u64::MAX)));
}
