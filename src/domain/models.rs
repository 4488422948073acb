/// Domain models for the Granola cache reader
///
/// These models are the normalized view of the raw cache and are built fresh on
/// every run. Nothing here is ever written back.
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The raw top-level record map as read from the cache file.
///
/// Key order follows the source document.
pub type RawRecords = serde_json::Map<String, serde_json::Value>;

pub const DEFAULT_MEETING_TITLE: &str = "Untitled Meeting";
pub const DEFAULT_MEETING_TYPE: &str = "meeting";
pub const MEETING_NOTES_DOCUMENT_TYPE: &str = "meeting_notes";

/// Represents a meeting recorded in the cache
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Meeting {
    pub id: String,
    pub title: String,
    pub date: DateTime<Utc>,
    pub participants: Vec<String>,
    pub meeting_type: String,
    pub duration: Option<i64>, // Reserved, never populated by the cache
    pub platform: Option<String>, // Reserved, never populated by the cache
}

impl Meeting {
    /// Creates a meeting with default type and no participants
    pub fn new(id: impl Into<String>, title: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            date,
            participants: Vec::new(),
            meeting_type: DEFAULT_MEETING_TYPE.to_string(),
            duration: None,
            platform: None,
        }
    }

    /// Sets the participant list (builder pattern)
    pub fn with_participants(mut self, participants: Vec<String>) -> Self {
        self.participants = participants;
        self
    }

    /// Sets the meeting type (builder pattern)
    pub fn with_meeting_type(mut self, meeting_type: impl Into<String>) -> Self {
        self.meeting_type = meeting_type.into();
        self
    }
}

/// The notes document attached to a meeting
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    pub id: String,
    pub meeting_id: String,
    pub title: String,
    pub content: String,
    pub document_type: String,
    pub created_at: DateTime<Utc>,
    pub tags: Vec<String>,
}

impl Document {
    /// Creates the notes document for a meeting, mirroring its title and date
    pub fn for_meeting(meeting: &Meeting, content: String) -> Self {
        Self {
            id: meeting.id.clone(),
            meeting_id: meeting.id.clone(),
            title: meeting.title.clone(),
            content,
            document_type: MEETING_NOTES_DOCUMENT_TYPE.to_string(),
            created_at: meeting.date,
            tags: Vec::new(),
        }
    }
}

/// Represents a flattened meeting transcript
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transcript {
    pub id: String,
    pub content: String,
    pub speakers: Vec<String>, // Distinct, in order of first appearance
    pub language: Option<String>,
    pub confidence: Option<f32>, // 0.0 to 1.0
}

impl Transcript {
    /// Creates a new transcript
    pub fn new(id: impl Into<String>, content: String, speakers: Vec<String>) -> Self {
        Self {
            id: id.into(),
            content,
            speakers,
            language: None,
            confidence: None,
        }
    }
}

/// The normalized in-memory aggregate built from one cache file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cache {
    pub meetings: IndexMap<String, Meeting>,
    pub documents: IndexMap<String, Document>,
    pub transcripts: IndexMap<String, Transcript>,
    pub last_updated: DateTime<Utc>,
}

/// Entity counts for a built cache
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CacheStats {
    pub meetings: usize,
    pub documents: usize,
    pub transcripts: usize,
}

impl Cache {
    /// Creates an empty cache stamped with the given load time
    pub fn empty(last_updated: DateTime<Utc>) -> Self {
        Self {
            meetings: IndexMap::new(),
            documents: IndexMap::new(),
            transcripts: IndexMap::new(),
            last_updated,
        }
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            meetings: self.meetings.len(),
            documents: self.documents.len(),
            transcripts: self.transcripts.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.meetings.is_empty() && self.documents.is_empty() && self.transcripts.is_empty()
    }
}
