use chrono::{DateTime, Duration, Utc};

/// Process-wide mute flag.
///
/// The timeout is checked lazily: a sleeping bot only notices it has
/// overslept when the next message arrives.
#[derive(Debug)]
pub struct SleepState {
    slept_at: Option<DateTime<Utc>>,
    timeout: Duration,
}

impl SleepState {
    pub fn new(timeout: Duration) -> Self {
        Self {
            slept_at: None,
            timeout,
        }
    }

    pub fn is_asleep(&self) -> bool {
        self.slept_at.is_some()
    }

    pub fn fall_asleep(&mut self, now: DateTime<Utc>) {
        self.slept_at = Some(now);
    }

    pub fn wake(&mut self) {
        self.slept_at = None;
    }

    /// Whether more than the timeout has passed since falling asleep.
    pub fn overslept(&self, now: DateTime<Utc>) -> bool {
        self.slept_at
            .is_some_and(|slept_at| now.signed_duration_since(slept_at) > self.timeout)
    }
}
