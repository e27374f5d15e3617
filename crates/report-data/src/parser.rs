//! Line classification and decoding.
//!
//! Each input line is split on the field delimiter and classified by its
//! first field into a [`Record`] variant. Decoding is forgiving: missing
//! trailing columns become empty strings and malformed durations become 0.
//! Lines of any other kind are ignored without error.

use std::collections::HashMap;

use report_core::models::{Record, SessionRecord, UserRecord};

/// Field delimiter of the input format. Delimiters inside field values are
/// not supported by the format.
pub const FIELD_DELIMITER: char = ',';

// ── BrowserCache ──────────────────────────────────────────────────────────────

/// Memo for browser-name upper-casing, scoped to one parse pass.
///
/// Browser names repeat heavily across sessions; caching the upper-cased
/// form keeps the parse pass linear instead of re-converting the same
/// string for every session.
#[derive(Debug, Default)]
pub struct BrowserCache {
    cache: HashMap<String, String>,
}

impl BrowserCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upper-case `raw`, reusing the cached form when this exact string has
    /// been seen before.
    pub fn normalize(&mut self, raw: &str) -> String {
        if let Some(cached) = self.cache.get(raw) {
            return cached.clone();
        }
        let upper = raw.to_uppercase();
        self.cache.insert(raw.to_string(), upper.clone());
        upper
    }

    /// Number of distinct raw browser strings seen so far.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

// ── Line parsing ──────────────────────────────────────────────────────────────

/// Classify and decode one input line.
///
/// * `user` lines decode to [`Record::User`] from columns 1..=4.
/// * `session` lines decode to [`Record::Session`] from columns 1..=5.
/// * Anything else is [`Record::Unrecognized`].
pub fn parse_line(line: &str, browsers: &mut BrowserCache) -> Record {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();

    match fields.first().copied() {
        Some("user") => Record::User(parse_user(&fields)),
        Some("session") => Record::Session(parse_session(&fields, browsers)),
        _ => Record::Unrecognized,
    }
}

/// Fetch column `index`, defaulting to the empty string when absent.
fn column(fields: &[&str], index: usize) -> String {
    fields.get(index).copied().unwrap_or_default().to_string()
}

fn parse_user(fields: &[&str]) -> UserRecord {
    UserRecord {
        id: column(fields, 1),
        first_name: column(fields, 2),
        last_name: column(fields, 3),
        age: column(fields, 4),
    }
}

fn parse_session(fields: &[&str], browsers: &mut BrowserCache) -> SessionRecord {
    // Malformed durations degrade to 0 rather than failing the line.
    let duration_minutes = fields
        .get(4)
        .and_then(|raw| raw.parse::<u64>().ok())
        .unwrap_or(0);

    SessionRecord {
        user_id: column(fields, 1),
        session_id: column(fields, 2),
        browser: browsers.normalize(fields.get(3).copied().unwrap_or_default()),
        duration_minutes,
        date: column(fields, 5),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
