/// JSON cache file adapter
///
/// Implements CacheSourcePort over the note-taking app's local cache file.
use crate::domain::models::RawRecords;
use crate::error::Result;
use crate::ports::cache_source::CacheSourcePort;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Reads the cache file once per load, read-only
pub struct FileCacheSource {
    path: PathBuf,
}

impl FileCacheSource {
    /// Create a source for the given cache file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CacheSourcePort for FileCacheSource {
    fn load(&self) -> Result<RawRecords> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::warn!(
                    "Cache file not found at {}, using an empty cache",
                    self.path.display()
                );
                return Ok(RawRecords::new());
            }
            Err(e) => return Err(e.into()),
        };

        log::info!(
            "Loaded {} bytes from {}",
            contents.len(),
            self.path.display()
        );

        let parsed: Value = serde_json::from_str(&contents)?;
        unwrap_records(parsed)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Unwraps one level of string-encoded store, if present.
///
/// The app may serialize its whole store into a `cache` string field, and that
/// inner document may hold the records under `state`.
pub fn unwrap_records(parsed: Value) -> Result<RawRecords> {
    let top = match parsed {
        Value::Object(map) => map,
        other => {
            log::warn!("Cache root is not an object ({}), ignoring it", type_name(&other));
            return Ok(RawRecords::new());
        }
    };

    let inner: Value = match top.get("cache") {
        Some(Value::String(encoded)) => {
            log::debug!("Unwrapping string-encoded cache ({} bytes)", encoded.len());
            serde_json::from_str(encoded)?
        }
        _ => return Ok(top),
    };

    match inner {
        Value::Object(mut inner) => match inner.remove("state") {
            Some(Value::Object(state)) => Ok(state),
            Some(other) => {
                inner.insert("state".to_string(), other);
                Ok(inner)
            }
            None => Ok(inner),
        },
        other => {
            log::warn!(
                "Decoded cache is not an object ({}), ignoring it",
                type_name(&other)
            );
            Ok(RawRecords::new())
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
