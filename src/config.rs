//! Runtime configuration
//!
//! Defaults, then environment variables, then explicit overrides from the
//! caller (the CLI applies its flags last).

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const CACHE_PATH_ENV: &str = "GRANOLA_CACHE_PATH";
pub const DISABLE_PANELS_ENV: &str = "GRANOLA_DISABLE_PANELS";

const DEFAULT_CACHE_RELATIVE_PATH: &str = "Library/Application Support/Granola/cache-v3.json";
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Reader configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    pub cache_path: PathBuf,
    /// Fall back to document panels when a meeting has no notes
    pub panel_extraction: bool,
    pub default_search_limit: usize,
}

impl AppConfig {
    /// Creates a configuration for an explicit cache path
    pub fn new(cache_path: impl Into<PathBuf>) -> Self {
        Self {
            cache_path: cache_path.into(),
            panel_extraction: true,
            default_search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    /// Reads configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let cache_path = match lookup(CACHE_PATH_ENV).filter(|v| !v.trim().is_empty()) {
            Some(path) => PathBuf::from(path),
            None => default_cache_path()?,
        };

        let panels_disabled = lookup(DISABLE_PANELS_ENV)
            .map(|v| is_truthy(&v))
            .unwrap_or(false);

        Ok(Self::new(cache_path).with_panel_extraction(!panels_disabled))
    }

    /// Sets the cache path (builder pattern)
    pub fn with_cache_path(mut self, cache_path: impl Into<PathBuf>) -> Self {
        self.cache_path = cache_path.into();
        self
    }

    /// Sets panel extraction (builder pattern)
    pub fn with_panel_extraction(mut self, enabled: bool) -> Self {
        self.panel_extraction = enabled;
        self
    }
}

/// The app's cache file under the user's home directory
pub fn default_cache_path() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(DEFAULT_CACHE_RELATIVE_PATH))
        .ok_or_else(|| AppError::Config("Could not determine home directory".to_string()))
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_env_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            (CACHE_PATH_ENV, "/tmp/granola.json"),
            (DISABLE_PANELS_ENV, "yes"),
        ]))
        .unwrap();

        assert_eq!(config.cache_path, PathBuf::from("/tmp/granola.json"));
        assert!(!config.panel_extraction);
        assert_eq!(config.default_search_limit, DEFAULT_SEARCH_LIMIT);
    }

    #[test]
    fn test_panels_enabled_unless_truthy() {
        let config = AppConfig::from_lookup(lookup(&[
            (CACHE_PATH_ENV, "/tmp/granola.json"),
            (DISABLE_PANELS_ENV, "0"),
        ]))
        .unwrap();
        assert!(config.panel_extraction);
    }

    #[test]
    fn test_default_path_under_home() {
        if dirs::home_dir().is_none() {
            return;
        }
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert!(config.cache_path.ends_with("Granola/cache-v3.json"));
        assert!(config.panel_extraction);
    }

    #[test]
    fn test_builder_overrides() {
        let config = AppConfig::new("/a.json")
            .with_cache_path("/b.json")
            .with_panel_extraction(false);
        assert_eq!(config.cache_path, PathBuf::from("/b.json"));
        assert!(!config.panel_extraction);
    }
}
