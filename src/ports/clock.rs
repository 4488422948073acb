/// Clock port trait
///
/// Supplies "now" for default meeting dates and the cache load stamp.
/// Implementation: system clock
use chrono::{DateTime, Utc};

#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
