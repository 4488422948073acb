//! Meeting detail and document lookups

use crate::domain::models::{Cache, Document};
use crate::domain::results::MeetingDetails;

/// Get a meeting with its document count and transcript availability.
///
/// Returns `None` for an unknown id.
pub fn get_meeting_details(cache: &Cache, meeting_id: &str) -> Option<MeetingDetails> {
    let Some(meeting) = cache.meetings.get(meeting_id) else {
        log::info!("Meeting not found: {}", meeting_id);
        return None;
    };

    let document_count = cache
        .documents
        .values()
        .filter(|d| d.meeting_id == meeting_id)
        .count();

    Some(MeetingDetails {
        meeting: meeting.clone(),
        document_count,
        has_transcript: cache.transcripts.contains_key(meeting_id),
    })
}

/// Get all documents attached to a meeting, in cache order
pub fn get_meeting_documents(cache: &Cache, meeting_id: &str) -> Vec<Document> {
    let documents: Vec<Document> = cache
        .documents
        .values()
        .filter(|d| d.meeting_id == meeting_id)
        .cloned()
        .collect();

    log::debug!("Found {} documents for {}", documents.len(), meeting_id);
    documents
}
