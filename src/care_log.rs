//! Care notes: a session-scoped, append-only log of what happened,
//! what triggered it and what helped.
//!
//! No classification logic touches these entries. The log lives only as
//! long as its session and can be exported as CSV.

use chrono::Local;
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════
// Constants
// ═══════════════════════════════════════════

/// CSV column order. Matches the field order of [`CareLogEntry`].
pub const CARE_LOG_FIELDS: [&str; 5] = [
    "timestamp",
    "what_happened",
    "triggers_context",
    "what_helped",
    "notes",
];

pub const CARE_LOG_FILENAME: &str = "care_log.csv";
pub const CARE_LOG_MIME: &str = "text/csv";

// ═══════════════════════════════════════════
// Types
// ═══════════════════════════════════════════

/// Input for a new log entry, as typed by the caregiver.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CareLogInput {
    #[serde(default)]
    pub what_happened: String,
    #[serde(default)]
    pub triggers_context: String,
    #[serde(default)]
    pub what_helped: String,
    #[serde(default)]
    pub notes: String,
}

/// A stored log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareLogEntry {
    pub timestamp: String,
    pub what_happened: String,
    pub triggers_context: String,
    pub what_helped: String,
    pub notes: String,
}

impl CareLogEntry {
    /// Build an entry from caregiver input, trimming every field.
    pub fn from_input(input: &CareLogInput, timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            what_happened: input.what_happened.trim().to_string(),
            triggers_context: input.triggers_context.trim().to_string(),
            what_helped: input.what_helped.trim().to_string(),
            notes: input.notes.trim().to_string(),
        }
    }

    fn fields(&self) -> [&str; 5] {
        [
            self.timestamp.as_str(),
            self.what_happened.as_str(),
            self.triggers_context.as_str(),
            self.what_helped.as_str(),
            self.notes.as_str(),
        ]
    }
}

/// Local time in ISO-8601 with second precision, e.g. `2026-03-01T09:30:00`.
pub fn local_timestamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S").to_string()
}

// ═══════════════════════════════════════════
// Store
// ═══════════════════════════════════════════

/// Append-only list of entries for one session.
#[derive(Debug, Clone, Default)]
pub struct CareLog {
    entries: Vec<CareLogEntry>,
}

impl CareLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry stamped with `timestamp`. Blank fields are kept.
    pub fn append(&mut self, input: &CareLogInput, timestamp: impl Into<String>) -> &CareLogEntry {
        let index = self.entries.len();
        self.entries.push(CareLogEntry::from_input(input, timestamp));
        &self.entries[index]
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[CareLogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Header row plus one row per entry, `\n` terminated.
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        write_row(&mut out, &CARE_LOG_FIELDS);
        for entry in &self.entries {
            write_row(&mut out, &entry.fields());
        }
        out
    }
}

fn write_row(out: &mut String, fields: &[&str]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_field(out, field);
    }
    out.push('\n');
}

/// Quote only when needed; embedded quotes are doubled.
fn write_field(out: &mut String, field: &str) {
    if field.contains([',', '"', '\n', '\r']) {
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(field);
    }
}
