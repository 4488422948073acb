//! Pattern analysis over a date window of meetings

use crate::domain::models::{Cache, Meeting};
use crate::domain::results::{
    MonthCount, ParticipantCount, PatternKind, PatternReport, TopicCount,
};
use crate::error::Result;
use crate::utils::dates::{parse_bound, unbounded_end, unbounded_start, Bound};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use std::collections::BTreeMap;

/// Title words too generic to count as topics
const TOPIC_STOPWORDS: [&str; 10] = [
    "meeting", "meetings", "call", "sync", "with", "from", "about", "this", "that", "chat",
];

/// Tokens of this many characters or fewer are not topics
const MIN_TOPIC_LEN: usize = 3;

/// Inclusive date window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateWindow {
    /// Parse optional bounds; each missing bound is effectively unbounded
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self> {
        let start = match start {
            Some(raw) => parse_bound(raw, Bound::Start)?,
            None => unbounded_start(),
        };
        let end = match end {
            Some(raw) => parse_bound(raw, Bound::End)?,
            None => unbounded_end(),
        };
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: DateTime<Utc>) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Validate the pattern kind and bounds, then run the analysis.
///
/// Validation happens before any meeting is looked at.
pub fn analyze_patterns(
    cache: &Cache,
    kind: &str,
    start: Option<&str>,
    end: Option<&str>,
) -> Result<PatternReport> {
    let kind: PatternKind = kind.parse()?;
    let window = DateWindow::parse(start, end)?;
    Ok(run_analysis(cache, kind, &window))
}

pub fn run_analysis(cache: &Cache, kind: PatternKind, window: &DateWindow) -> PatternReport {
    let meetings: Vec<&Meeting> = cache
        .meetings
        .values()
        .filter(|m| window.contains(m.date))
        .collect();

    log::info!(
        "Analyzing {} patterns over {} of {} meetings",
        kind,
        meetings.len(),
        cache.meetings.len()
    );

    match kind {
        PatternKind::Participants => participant_report(&meetings),
        PatternKind::Frequency => frequency_report(&meetings),
        PatternKind::Topics => topic_report(&meetings),
    }
}

/// Sort counts descending; equal counts keep first-seen order
fn ranked(counts: IndexMap<String, usize>) -> Vec<(String, usize)> {
    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

fn participant_report(meetings: &[&Meeting]) -> PatternReport {
    let mut counts: IndexMap<String, usize> = IndexMap::new();

    for meeting in meetings {
        let mut seen: Vec<&str> = Vec::new();
        for name in &meeting.participants {
            if seen.contains(&name.as_str()) {
                continue;
            }
            seen.push(name);
            *counts.entry(name.clone()).or_insert(0) += 1;
        }
    }

    PatternReport::Participants {
        meeting_count: meetings.len(),
        participants: ranked(counts)
            .into_iter()
            .map(|(name, count)| ParticipantCount { name, count })
            .collect(),
    }
}

fn frequency_report(meetings: &[&Meeting]) -> PatternReport {
    let mut months: BTreeMap<String, usize> = BTreeMap::new();
    for meeting in meetings {
        *months
            .entry(meeting.date.format("%Y-%m").to_string())
            .or_insert(0) += 1;
    }

    let total_meetings = meetings.len();
    // Divides by populated months only, not the calendar span
    let average_per_month = if months.is_empty() {
        0.0
    } else {
        total_meetings as f64 / months.len() as f64
    };

    PatternReport::Frequency {
        total_meetings,
        average_per_month,
        months: months
            .into_iter()
            .map(|(month, count)| MonthCount { month, count })
            .collect(),
    }
}

/// Lowercased title words with everything outside `[a-z0-9_-]` stripped
pub fn topic_tokens(title: &str) -> Vec<String> {
    title
        .split_whitespace()
        .map(|word| {
            word.to_lowercase()
                .chars()
                .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_' || *c == '-')
                .collect::<String>()
        })
        .filter(|token| token.len() > MIN_TOPIC_LEN && !TOPIC_STOPWORDS.contains(&token.as_str()))
        .collect()
}

fn topic_report(meetings: &[&Meeting]) -> PatternReport {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for meeting in meetings {
        for token in topic_tokens(&meeting.title) {
            *counts.entry(token).or_insert(0) += 1;
        }
    }

    PatternReport::Topics {
        meeting_count: meetings.len(),
        topics: ranked(counts)
            .into_iter()
            .map(|(topic, count)| TopicCount { topic, count })
            .collect(),
    }
}
