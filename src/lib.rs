//! Read-only reader and analyzer for the Granola local meeting cache.
//!
//! One pass per run: load the raw cache, build the normalized model, answer a
//! single query. Nothing is ever written back.

pub mod adapters;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod utils;

use domain::{Cache, ModelBuilder};
use error::Result;
use ports::{CacheSourcePort, ClockPort};

/// Load the raw records and build the cache.
///
/// Fails only when the source fails (for a file, malformed JSON). A missing
/// cache file gives an empty cache.
pub fn load_cache(
    source: &dyn CacheSourcePort,
    clock: &dyn ClockPort,
    panel_extraction: bool,
) -> Result<Cache> {
    log::debug!("Loading cache from {}", source.describe());
    let raw = source.load()?;
    Ok(ModelBuilder::new(panel_extraction).build(&raw, clock))
}
