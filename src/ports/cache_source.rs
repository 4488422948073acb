/// Cache source port trait
///
/// Defines the interface for reading the raw cache records.
/// Implementation: JSON file adapter
use crate::domain::models::RawRecords;
use crate::error::Result;

/// Port trait for the raw record source
pub trait CacheSourcePort: Send + Sync {
    /// Load the raw top-level record map.
    ///
    /// A missing source yields an empty map. Malformed data is an error.
    fn load(&self) -> Result<RawRecords>;

    /// Human-readable description of where records come from
    fn describe(&self) -> String;
}
