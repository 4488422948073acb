//! Mock implementations for testing

use crate::domain::models::RawRecords;
use crate::error::{AppError, Result};
use crate::ports::cache_source::CacheSourcePort;
use crate::ports::clock::ClockPort;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

/// In-memory cache source for testing
#[derive(Clone, Default)]
pub struct MockCacheSource {
    records: RawRecords,
    fail_with: Option<String>,
}

impl MockCacheSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a source from a JSON object literal
    pub fn from_json(value: Value) -> Self {
        let records = match value {
            Value::Object(map) => map,
            _ => RawRecords::new(),
        };
        Self {
            records,
            fail_with: None,
        }
    }

    /// A source whose load always fails
    pub fn failing(message: &str) -> Self {
        Self {
            records: RawRecords::new(),
            fail_with: Some(message.to_string()),
        }
    }
}

impl CacheSourcePort for MockCacheSource {
    fn load(&self) -> Result<RawRecords> {
        match &self.fail_with {
            Some(message) => Err(AppError::Config(message.clone())),
            None => Ok(self.records.clone()),
        }
    }

    fn describe(&self) -> String {
        "in-memory records".to_string()
    }
}

/// Clock pinned to a single instant
#[derive(Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// 2025-06-01T12:00:00Z
    pub fn default_instant() -> Self {
        Self(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap())
    }
}

impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
