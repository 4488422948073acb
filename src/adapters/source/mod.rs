pub mod cache_file;

pub use cache_file::FileCacheSource;
