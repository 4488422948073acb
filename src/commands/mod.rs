/// Query operations over a built cache
///
/// Each submodule answers one query family. `execute` dispatches a single
/// query and wraps its outcome in a `QueryOutput`.
pub mod meeting;
pub mod patterns;
pub mod search;
pub mod transcription;

#[cfg(test)]
pub(crate) mod fixtures;

use crate::domain::models::Cache;
use crate::domain::results::{PatternKind, QueryOutput};
use crate::error::Result;

pub use meeting::{get_meeting_details, get_meeting_documents};
pub use patterns::{analyze_patterns, DateWindow};
pub use search::search_meetings;
pub use transcription::get_transcript;

/// One query to answer against the cache
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Search {
        query: String,
        limit: usize,
    },
    Details {
        meeting_id: String,
    },
    Transcript {
        meeting_id: String,
    },
    Documents {
        meeting_id: String,
    },
    Patterns {
        kind: String,
        start: Option<String>,
        end: Option<String>,
    },
}

impl Query {
    /// Check arguments without touching the cache
    pub fn validate(&self) -> Result<()> {
        match self {
            Query::Search { limit, .. } => search::validate_limit(*limit),
            Query::Patterns { kind, start, end } => {
                kind.parse::<PatternKind>()?;
                DateWindow::parse(start.as_deref(), end.as_deref())?;
                Ok(())
            }
            Query::Details { .. } | Query::Transcript { .. } | Query::Documents { .. } => Ok(()),
        }
    }
}

/// Run one query. Unknown ids produce `QueryOutput::NotFound`, not an error.
pub fn execute(cache: &Cache, query: &Query) -> Result<QueryOutput> {
    let output = match query {
        Query::Search { query, limit } => QueryOutput::Search {
            query: query.clone(),
            results: search_meetings(cache, query, *limit)?,
        },
        Query::Details { meeting_id } => match get_meeting_details(cache, meeting_id) {
            Some(details) => QueryOutput::Details(details),
            None => QueryOutput::not_found(meeting_id, "Meeting not found"),
        },
        Query::Transcript { meeting_id } => match get_transcript(cache, meeting_id) {
            Some(record) => QueryOutput::Transcript(record),
            None => QueryOutput::not_found(meeting_id, "No transcript available"),
        },
        Query::Documents { meeting_id } => QueryOutput::Documents {
            meeting_id: meeting_id.clone(),
            documents: get_meeting_documents(cache, meeting_id),
        },
        Query::Patterns { kind, start, end } => QueryOutput::Patterns(analyze_patterns(
            cache,
            kind,
            start.as_deref(),
            end.as_deref(),
        )?),
    };

    Ok(output)
}
