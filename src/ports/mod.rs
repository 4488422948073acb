/// Port trait definitions (interfaces)
///
/// These traits define the contracts for adapters to implement.
/// Following the ports-and-adapters (hexagonal) architecture pattern.
pub mod cache_source;
pub mod clock;

#[cfg(test)]
pub mod mocks;

pub use cache_source::CacheSourcePort;
pub use clock::ClockPort;
