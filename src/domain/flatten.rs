//! Rich-text flattening
//!
//! Reduces the editor's node trees to plain text. Two walkers exist because
//! meeting notes reach the cache in two shapes: the structured notes tree, and
//! the looser document panels used only as a fallback.

use serde_json::{Map, Value};

const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// A view over one JSON value of a rich-text tree
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    /// An object, with its `type` discriminator if it has one
    Tagged {
        kind: Option<&'a str>,
        fields: &'a Map<String, Value>,
    },
    List(&'a [Value]),
    Leaf,
}

impl<'a> Node<'a> {
    pub fn classify(value: &'a Value) -> Self {
        match value {
            Value::Object(fields) => Node::Tagged {
                kind: fields.get("type").and_then(Value::as_str),
                fields,
            },
            Value::Array(items) => Node::List(items),
            _ => Node::Leaf,
        }
    }
}

fn content_of(fields: &Map<String, Value>) -> Option<&[Value]> {
    fields
        .get("content")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
}

/// Flattens a structured notes tree into continuous prose.
///
/// Accepts either the `doc` root object (whose `content` holds the top-level
/// blocks) or the block array itself. Paragraph boundaries become single spaces.
pub fn flatten_structured_notes(notes: &Value) -> String {
    match Node::classify(notes) {
        Node::Tagged { fields, .. } => content_of(fields).map(flatten_nodes).unwrap_or_default(),
        Node::List(items) => flatten_nodes(items),
        Node::Leaf => String::new(),
    }
}

fn flatten_nodes(nodes: &[Value]) -> String {
    let mut parts: Vec<String> = Vec::new();

    for node in nodes {
        let Node::Tagged { kind, fields } = Node::classify(node) else {
            continue;
        };

        match (kind, content_of(fields)) {
            (Some("paragraph"), Some(children)) => {
                let paragraph = flatten_nodes(children);
                if !paragraph.trim().is_empty() {
                    parts.push(paragraph);
                }
            }
            (Some("text"), _) => {
                if let Some(text) = fields.get("text").and_then(Value::as_str) {
                    if !text.trim().is_empty() {
                        parts.push(text.to_string());
                    }
                }
            }
            (_, Some(children)) => {
                let nested = flatten_nodes(children);
                if !nested.is_empty() {
                    parts.push(nested);
                }
            }
            _ => {}
        }
    }

    parts.join(" ")
}

/// Flattens document panels, one paragraph per text leaf.
///
/// `panels` is either an array of panel objects or a map of panel id to panel;
/// map entries are visited in ascending key order.
pub fn flatten_panels(panels: &Value) -> String {
    let mut leaves: Vec<&str> = Vec::new();

    match Node::classify(panels) {
        Node::List(items) => {
            for panel in items {
                collect_text_leaves(panel, &mut leaves);
            }
        }
        Node::Tagged { fields, .. } => {
            let mut entries: Vec<(&String, &Value)> = fields.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            for (_, panel) in entries {
                collect_text_leaves(panel, &mut leaves);
            }
        }
        Node::Leaf => {}
    }

    leaves.join(PARAGRAPH_SEPARATOR)
}

fn collect_text_leaves<'a>(value: &'a Value, leaves: &mut Vec<&'a str>) {
    match Node::classify(value) {
        Node::Tagged { kind, fields } => {
            if kind == Some("text") {
                if let Some(text) = fields.get("text").and_then(Value::as_str) {
                    if !text.trim().is_empty() {
                        leaves.push(text);
                    }
                }
            }
            // `content` may be a block array or a nested `doc` root object
            for child in fields.values() {
                collect_text_leaves(child, leaves);
            }
        }
        Node::List(items) => {
            for item in items {
                collect_text_leaves(item, leaves);
            }
        }
        Node::Leaf => {}
    }
}

/// Where a meeting's notes text can come from, in priority order
#[derive(Debug, Clone, Copy)]
pub enum NotesSource<'a> {
    Plain(&'a str),
    Markdown(&'a str),
    Structured(&'a Value),
    Panels(&'a Value),
}

impl<'a> NotesSource<'a> {
    /// Candidate sources for a raw meeting record, highest priority first
    pub fn candidates(
        record: &'a Map<String, Value>,
        panels: Option<&'a Value>,
        panel_extraction: bool,
    ) -> Vec<NotesSource<'a>> {
        let mut candidates = Vec::with_capacity(4);

        if let Some(plain) = record.get("notes_plain").and_then(Value::as_str) {
            candidates.push(NotesSource::Plain(plain));
        }
        if let Some(markdown) = record.get("notes_markdown").and_then(Value::as_str) {
            candidates.push(NotesSource::Markdown(markdown));
        }
        if let Some(notes) = record.get("notes").filter(|v| !v.is_null()) {
            candidates.push(NotesSource::Structured(notes));
        }
        if panel_extraction {
            if let Some(panels) = panels.filter(|v| !v.is_null()) {
                candidates.push(NotesSource::Panels(panels));
            }
        }

        candidates
    }

    pub fn extract(&self) -> String {
        match self {
            NotesSource::Plain(text) | NotesSource::Markdown(text) => text.to_string(),
            NotesSource::Structured(notes) => flatten_structured_notes(notes),
            NotesSource::Panels(panels) => flatten_panels(panels),
        }
    }
}

/// Builds the full document text for a raw meeting record.
///
/// The first candidate with non-blank text wins; `overview` and `summary` are
/// appended whenever present.
pub fn document_content(
    record: &Map<String, Value>,
    panels: Option<&Value>,
    panel_extraction: bool,
) -> String {
    let mut parts: Vec<String> = Vec::new();

    let notes = NotesSource::candidates(record, panels, panel_extraction)
        .into_iter()
        .map(|source| source.extract())
        .find(|text| !text.trim().is_empty());
    if let Some(notes) = notes {
        parts.push(notes);
    }

    for (field, label) in [("overview", "Overview"), ("summary", "Summary")] {
        if let Some(text) = record.get(field).and_then(Value::as_str) {
            if !text.trim().is_empty() {
                parts.push(format!("{}: {}", label, text));
            }
        }
    }

    parts.join(PARAGRAPH_SEPARATOR)
}
