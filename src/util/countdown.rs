//! Countdown arithmetic for the flash-sale timer.

#[cfg(test)]
#[path = "countdown_test.rs"]
mod countdown_test;

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Time remaining until a sale ends, broken into display components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeLeft {
    /// Break a remaining duration (milliseconds) into components. Elapsed
    /// or negative durations clamp to all zeros rather than going negative.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn from_millis(remaining_ms: i64) -> Self {
        if remaining_ms <= 0 {
            return Self::default();
        }
        Self {
            days: (remaining_ms / MS_PER_DAY) as u64,
            hours: (remaining_ms % MS_PER_DAY / MS_PER_HOUR) as u64,
            minutes: (remaining_ms % MS_PER_HOUR / MS_PER_MINUTE) as u64,
            seconds: (remaining_ms % MS_PER_MINUTE / MS_PER_SECOND) as u64,
        }
    }

    /// True once the countdown has reached zero.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        *self == Self::default()
    }
}
