use std::time::Duration;

/// Each retry waits the same delay.
#[derive(Debug, Clone)]
pub struct Fixed {
    duration: Duration,
}

impl Fixed {
    /// Create a new [`Fixed`] using the given duration in milliseconds.
    pub fn from_millis(millis: u64) -> Self {
        Fixed {
            duration: Duration::from_millis(millis),
        }
    }
}

impl Iterator for Fixed {
    type Item = Duration;

    fn next(&mut self) -> Option<Duration> {
        Some(self.duration)
    }
}

impl From<Duration> for Fixed {
    fn from(duration: Duration) -> Self {
        Self { duration }
    }
}

#[test]
fn fixed_repeats_delay() {
    let delays: Vec<_> = Fixed::from_millis(10).take(3).collect();
    assert_eq!(delays, vec![Duration::from_millis(10); 3]);
}

#[test]
fn fixed_from_duration() {
    assert_eq!(
        Fixed::from_millis(1_000).next(),
        Fixed::from(Duration::from_secs(1)).next(),
    );
}
