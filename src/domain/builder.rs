//! Model builder
//!
//! Turns the raw record map into the normalized `Cache`. Malformed sub-fields
//! degrade to defaults; non-object records are skipped.

use crate::domain::flatten::document_content;
use crate::domain::models::{
    Cache, Document, Meeting, RawRecords, Transcript, DEFAULT_MEETING_TITLE,
    DEFAULT_MEETING_TYPE,
};
use crate::ports::clock::ClockPort;
use crate::utils::dates::parse_timestamp;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

const DOCUMENTS_KEY: &str = "documents";
const TRANSCRIPTS_KEY: &str = "transcripts";
const PANELS_KEY: &str = "documentPanels";

const TRANSCRIPT_CONTENT_FIELDS: [&str; 3] = ["content", "text", "transcript"];

/// Builds the normalized model from raw cache records
#[derive(Debug, Clone, Copy)]
pub struct ModelBuilder {
    panel_extraction: bool,
}

impl ModelBuilder {
    pub fn new(panel_extraction: bool) -> Self {
        Self { panel_extraction }
    }

    /// Build the cache. The clock is read exactly once.
    pub fn build(&self, raw: &RawRecords, clock: &dyn ClockPort) -> Cache {
        let now = clock.now();
        let mut cache = Cache::empty(now);

        let documents = object_field(raw, DOCUMENTS_KEY);
        let transcripts = object_field(raw, TRANSCRIPTS_KEY);
        let panels = object_field(raw, PANELS_KEY);

        if let Some(documents) = documents {
            for (id, record) in documents {
                let Some(record) = record.as_object() else {
                    log::debug!("Skipping non-object meeting record {}", id);
                    continue;
                };
                let meeting = build_meeting(id, record, now);
                cache.meetings.insert(id.clone(), meeting);
            }
        }

        if let Some(transcripts) = transcripts {
            for (id, entry) in transcripts {
                match build_transcript(id, entry) {
                    Some(transcript) => {
                        cache.transcripts.insert(id.clone(), transcript);
                    }
                    None => log::debug!("No transcript text for {}", id),
                }
            }
        }

        if let Some(documents) = documents {
            for (id, record) in documents {
                let Some(record) = record.as_object() else {
                    continue;
                };
                let Some(meeting) = cache.meetings.get(id) else {
                    log::debug!("Dropping document {} without a meeting", id);
                    continue;
                };

                let meeting_panels = panels.and_then(|p| p.get(id));
                let content = document_content(record, meeting_panels, self.panel_extraction);
                let document = Document::for_meeting(meeting, content);
                cache.documents.insert(id.clone(), document);
            }
        }

        let stats = cache.stats();
        log::info!(
            "Built cache: {} meetings, {} documents, {} transcripts",
            stats.meetings,
            stats.documents,
            stats.transcripts
        );

        cache
    }
}

impl Default for ModelBuilder {
    fn default() -> Self {
        Self::new(true)
    }
}

fn object_field<'a>(raw: &'a RawRecords, key: &str) -> Option<&'a Map<String, Value>> {
    match raw.get(key) {
        Some(Value::Object(map)) => Some(map),
        Some(Value::Null) | None => None,
        Some(_) => {
            log::warn!("Ignoring cache field {}: expected an object", key);
            None
        }
    }
}

fn non_blank_str<'a>(record: &'a Map<String, Value>, field: &str) -> Option<&'a str> {
    record
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

fn build_meeting(id: &str, record: &Map<String, Value>, now: DateTime<Utc>) -> Meeting {
    let title = non_blank_str(record, "title").unwrap_or(DEFAULT_MEETING_TITLE);
    let date = non_blank_str(record, "created_at")
        .and_then(parse_timestamp)
        .unwrap_or(now);
    let meeting_type = non_blank_str(record, "type").unwrap_or(DEFAULT_MEETING_TYPE);

    Meeting::new(id, title, date)
        .with_participants(participant_names(record))
        .with_meeting_type(meeting_type)
}

fn participant_names(record: &Map<String, Value>) -> Vec<String> {
    record
        .get("people")
        .and_then(Value::as_array)
        .map(|people| {
            people
                .iter()
                .filter_map(Value::as_object)
                .filter_map(|person| non_blank_str(person, "name"))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn push_distinct(speakers: &mut Vec<String>, speaker: &str) {
    if !speakers.iter().any(|s| s == speaker) {
        speakers.push(speaker.to_string());
    }
}

fn build_transcript(id: &str, entry: &Value) -> Option<Transcript> {
    let mut speakers = Vec::new();

    let content = match entry {
        Value::Array(segments) => {
            let mut texts: Vec<&str> = Vec::new();
            for segment in segments.iter().filter_map(Value::as_object) {
                if let Some(text) = non_blank_str(segment, "text") {
                    texts.push(text);
                }
                if let Some(source) = non_blank_str(segment, "source") {
                    push_distinct(&mut speakers, source);
                }
            }
            texts.join(" ")
        }
        Value::Object(fields) => {
            let content = TRANSCRIPT_CONTENT_FIELDS
                .iter()
                .find_map(|field| non_blank_str(fields, field))
                .unwrap_or_default()
                .to_string();
            if let Some(listed) = fields.get("speakers").and_then(Value::as_array) {
                for speaker in listed.iter().filter_map(Value::as_str) {
                    if !speaker.trim().is_empty() {
                        push_distinct(&mut speakers, speaker);
                    }
                }
            }
            content
        }
        _ => String::new(),
    };

    if content.trim().is_empty() {
        return None;
    }

    Some(Transcript::new(id, content, speakers))
}
