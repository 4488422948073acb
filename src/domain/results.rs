//! Structured query results
//!
//! Every query produces one of these values. Rendering them for humans is left
//! to whatever sits on top; the binary just serializes them as JSON.

use crate::domain::models::{Document, Meeting, Transcript};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A meeting matched by a search, with its relevance score
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchHit {
    #[serde(flatten)]
    pub meeting: Meeting,
    pub score: u32,
}

/// Meeting attributes plus computed document and transcript info
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MeetingDetails {
    #[serde(flatten)]
    pub meeting: Meeting,
    pub document_count: usize,
    pub has_transcript: bool,
}

/// A stored transcript with its meeting title for display context
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TranscriptRecord {
    pub meeting_id: String,
    /// Meeting title, or the raw id when the meeting is missing
    pub meeting_title: String,
    pub transcript: Transcript,
}

/// Kinds of pattern analysis
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    Participants,
    Frequency,
    Topics,
}

impl std::fmt::Display for PatternKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternKind::Participants => write!(f, "participants"),
            PatternKind::Frequency => write!(f, "frequency"),
            PatternKind::Topics => write!(f, "topics"),
        }
    }
}

impl FromStr for PatternKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "participants" => Ok(PatternKind::Participants),
            "frequency" => Ok(PatternKind::Frequency),
            "topics" => Ok(PatternKind::Topics),
            other => Err(AppError::InvalidInput(format!(
                "Invalid pattern type: {} (expected participants, frequency or topics)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ParticipantCount {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MonthCount {
    pub month: String, // "YYYY-MM", UTC
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TopicCount {
    pub topic: String,
    pub count: usize,
}

/// Result of a pattern analysis over the date-filtered meetings
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "pattern", rename_all = "lowercase")]
pub enum PatternReport {
    Participants {
        meeting_count: usize,
        participants: Vec<ParticipantCount>,
    },
    Frequency {
        total_meetings: usize,
        /// Total divided by the number of months that have any meeting
        average_per_month: f64,
        months: Vec<MonthCount>,
    },
    Topics {
        meeting_count: usize,
        topics: Vec<TopicCount>,
    },
}

/// One query's outcome, including the not-found indicator
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QueryOutput {
    Search {
        query: String,
        results: Vec<SearchHit>,
    },
    Details(MeetingDetails),
    Transcript(TranscriptRecord),
    Documents {
        meeting_id: String,
        documents: Vec<Document>,
    },
    Patterns(PatternReport),
    NotFound {
        meeting_id: String,
        message: String,
    },
}

impl QueryOutput {
    pub fn not_found(meeting_id: &str, message: impl Into<String>) -> Self {
        QueryOutput::NotFound {
            meeting_id: meeting_id.to_string(),
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, QueryOutput::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_kind_parse() {
        assert_eq!(
            "participants".parse::<PatternKind>().unwrap(),
            PatternKind::Participants
        );
        assert_eq!(
            "frequency".parse::<PatternKind>().unwrap(),
            PatternKind::Frequency
        );
        assert_eq!("topics".parse::<PatternKind>().unwrap(), PatternKind::Topics);
    }

    #[test]
    fn test_pattern_kind_rejects_unknown() {
        let err = "Topics".parse::<PatternKind>().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_not_found_serializes_with_kind_tag() {
        let output = QueryOutput::not_found("m9", "Meeting not found");
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["kind"], "not_found");
        assert_eq!(json["meeting_id"], "m9");
        assert!(output.is_not_found());
    }
}
