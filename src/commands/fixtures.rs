//! Shared cache fixture for command tests

use crate::domain::builder::ModelBuilder;
use crate::domain::models::Cache;
use crate::ports::mocks::{FixedClock, MockCacheSource};
use crate::ports::CacheSourcePort;
use serde_json::json;

/// Three meetings across two months, one transcript, one orphan transcript
pub fn sample_cache() -> Cache {
    let source = MockCacheSource::from_json(json!({
        "documents": {
            "m1": {
                "title": "Q1 Planning Sync",
                "created_at": "2024-01-15T10:00:00Z",
                "people": [{"name": "Ada"}, {"name": "Bo"}],
                "notes_plain": "Discussed roadmap.",
                "summary": "Agreed on Q1 goals"
            },
            "m2": {
                "title": "Q1 Roadmap Review",
                "created_at": "2024-01-28T16:30:00Z",
                "people": [{"name": "Bo"}, {"name": "Cy"}]
            },
            "m3": {
                "title": "Customer call with Acme",
                "created_at": "2024-03-02T09:00:00Z",
                "people": [{"name": "Bo"}]
            }
        },
        "transcripts": {
            "m1": [
                {"text": "Let's start", "source": "microphone"},
                {"text": "Sounds good", "source": "system"}
            ],
            "orphan": {"content": "No meeting for this one", "speakers": ["Zed"]}
        }
    }));
    let raw = source.load().unwrap();
    ModelBuilder::default().build(&raw, &FixedClock::default_instant())
}
