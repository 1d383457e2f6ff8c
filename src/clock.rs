//! Wall-clock capability injected into anything that stamps timestamps

use chrono::{DateTime, SecondsFormat, Utc};

/// Source of the current instant
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Format an instant as ISO-8601 with millisecond precision, e.g. `2024-01-02T03:04:05.678Z`
pub fn iso_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
