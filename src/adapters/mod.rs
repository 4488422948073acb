/// Adapters - concrete implementations of the port traits
pub mod clock;
pub mod source;

pub use clock::SystemClock;
pub use source::FileCacheSource;
