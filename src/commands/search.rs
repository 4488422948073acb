//! Meeting search

use crate::domain::models::Cache;
use crate::domain::results::SearchHit;
use crate::error::{AppError, Result};

const TITLE_MATCH_SCORE: u32 = 2;
const PARTICIPANT_MATCH_SCORE: u32 = 1;
const TRANSCRIPT_MATCH_SCORE: u32 = 1;

pub fn validate_limit(limit: usize) -> Result<()> {
    if limit == 0 {
        return Err(AppError::InvalidInput(
            "limit must be a positive integer".to_string(),
        ));
    }
    Ok(())
}

/// Case-insensitive substring search over meeting titles, participants and
/// transcripts.
///
/// Scores: title +2, each matching participant +1, transcript +1. Meetings
/// scoring zero are dropped; ties keep cache order. Document content is not
/// searched.
pub fn search_meetings(cache: &Cache, query: &str, limit: usize) -> Result<Vec<SearchHit>> {
    validate_limit(limit)?;

    log::debug!("Searching {} meetings for {:?}", cache.meetings.len(), query);
    let needle = query.to_lowercase();

    let mut hits: Vec<SearchHit> = cache
        .meetings
        .values()
        .filter_map(|meeting| {
            let mut score = 0;

            if meeting.title.to_lowercase().contains(&needle) {
                score += TITLE_MATCH_SCORE;
            }

            score += meeting
                .participants
                .iter()
                .filter(|name| name.to_lowercase().contains(&needle))
                .count() as u32
                * PARTICIPANT_MATCH_SCORE;

            if let Some(transcript) = cache.transcripts.get(&meeting.id) {
                if transcript.content.to_lowercase().contains(&needle) {
                    score += TRANSCRIPT_MATCH_SCORE;
                }
            }

            (score > 0).then(|| SearchHit {
                meeting: meeting.clone(),
                score,
            })
        })
        .collect();

    // Stable: equal scores stay in insertion order
    hits.sort_by(|a, b| b.score.cmp(&a.score));
    hits.truncate(limit);

    log::info!("Search for {:?} matched {} meetings", query, hits.len());
    Ok(hits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::builder::ModelBuilder;
    use crate::ports::mocks::{FixedClock, MockCacheSource};
    use crate::ports::CacheSourcePort;
    use serde_json::json;

    fn cache() -> Cache {
        let source = MockCacheSource::from_json(json!({
            "documents": {
                "m1": {
                    "title": "Q1 Planning",
                    "created_at": "2024-01-15T10:00:00Z",
                    "people": [{"name": "Ada"}, {"name": "Bo"}],
                    "notes_plain": "Discussed roadmap."
                },
                "m2": {
                    "title": "Hiring sync",
                    "people": [{"name": "Ada Lovelace"}, {"name": "Adam"}]
                },
                "m3": {"title": "Roadmap review"},
                "m4": {"title": "Budget"}
            },
            "transcripts": {
                "m4": [{"text": "We should revisit the roadmap soon"}]
            }
        }));
        let raw = source.load().unwrap();
        ModelBuilder::default().build(&raw, &FixedClock::default_instant())
    }

    #[test]
    fn test_title_match_scores_two() {
        let hits = search_meetings(&cache(), "Q1", 10).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].meeting.id, "m1");
        assert_eq!(hits[0].score, 2);
    }

    #[test]
    fn test_document_content_not_scored() {
        let hits = search_meetings(&cache(), "discussed", 10).unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn test_participants_counted_individually() {
        let hits = search_meetings(&cache(), "ada", 10).unwrap();
        assert_eq!(hits.len(), 2);
        // m2 has two matching participants
        assert_eq!(hits[0].meeting.id, "m2");
        assert_eq!(hits[0].score, 2);
        assert_eq!(hits[1].meeting.id, "m1");
        assert_eq!(hits[1].score, 1);
    }

    #[test]
    fn test_ranking_and_ties_keep_insertion_order() {
        let hits = search_meetings(&cache(), "ROADMAP", 10).unwrap();
        let ranked: Vec<(&str, u32)> = hits
            .iter()
            .map(|h| (h.meeting.id.as_str(), h.score))
            .collect();
        assert_eq!(ranked, vec![("m3", 2), ("m4", 1)]);
    }

    #[test]
    fn test_limit_truncates() {
        let hits = search_meetings(&cache(), "a", 1).unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_zero_limit_rejected() {
        let err = search_meetings(&cache(), "Q1", 0).unwrap_err();
        assert!(err.is_validation());
    }
}
