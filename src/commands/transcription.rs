//! Transcript lookup

use crate::domain::models::Cache;
use crate::domain::results::TranscriptRecord;

/// Get the stored transcript for a meeting, titled for display.
///
/// Falls back to the raw id as the title when the meeting itself is missing.
/// Returns `None` when no transcript is stored under the id.
pub fn get_transcript(cache: &Cache, meeting_id: &str) -> Option<TranscriptRecord> {
    let transcript = cache.transcripts.get(meeting_id)?;

    let meeting_title = cache
        .meetings
        .get(meeting_id)
        .map(|m| m.title.clone())
        .unwrap_or_else(|| meeting_id.to_string());

    Some(TranscriptRecord {
        meeting_id: meeting_id.to_string(),
        meeting_title,
        transcript: transcript.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::sample_cache;

    #[test]
    fn test_transcript_with_meeting_title() {
        let record = get_transcript(&sample_cache(), "m1").unwrap();
        assert_eq!(record.meeting_title, "Q1 Planning Sync");
        assert_eq!(record.transcript.content, "Let's start Sounds good");
        assert_eq!(record.transcript.speakers, vec!["microphone", "system"]);
    }

    #[test]
    fn test_transcript_without_meeting_uses_id() {
        let record = get_transcript(&sample_cache(), "orphan").unwrap();
        assert_eq!(record.meeting_title, "orphan");
        assert_eq!(record.transcript.speakers, vec!["Zed"]);
    }

    #[test]
    fn test_missing_transcript() {
        assert!(get_transcript(&sample_cache(), "m2").is_none());
        assert!(get_transcript(&sample_cache(), "nope").is_none());
    }
}
