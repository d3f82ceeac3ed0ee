use crate::constants::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, SECONDS_PER_WEEK};

/// Human-readable phrase for a timer length in seconds.
pub trait DurationFormatter: Send + Sync {
    fn format(&self, seconds: u32) -> String;
}

/// English expiration phrasing: the largest whole unit, floored.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpirationDurations;

impl DurationFormatter for ExpirationDurations {
    fn format(&self, seconds: u32) -> String {
        let (count, unit) = if seconds < SECONDS_PER_MINUTE {
            (seconds, "second")
        } else if seconds < SECONDS_PER_HOUR {
            (seconds / SECONDS_PER_MINUTE, "minute")
        } else if seconds < SECONDS_PER_DAY {
            (seconds / SECONDS_PER_HOUR, "hour")
        } else if seconds < SECONDS_PER_WEEK {
            (seconds / SECONDS_PER_DAY, "day")
        } else {
            (seconds / SECONDS_PER_WEEK, "week")
        };

        if count == 1 {
            format!("1 {}", unit)
        } else {
            format!("{} {}s", count, unit)
        }
    }
}
