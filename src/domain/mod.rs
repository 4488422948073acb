/// Domain layer - core models and the raw-to-model transformation
///
/// These modules are independent of where the raw records come from.
pub mod builder;
pub mod flatten;
pub mod models;
pub mod results;

pub use builder::ModelBuilder;
pub use models::{Cache, CacheStats, Document, Meeting, RawRecords, Transcript};
pub use results::{
    MeetingDetails, PatternKind, PatternReport, QueryOutput, SearchHit, TranscriptRecord,
};
