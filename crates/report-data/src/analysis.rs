//! Top-level report pipeline.
//!
//! Orchestrates reading, parsing, grouping and reduction, returning a
//! [`ReportResult`] ready for the writer. The whole pipeline is a single
//! synchronous pass, linear in input size.

use std::path::Path;

use chrono::Utc;
use report_core::error::Result;
use report_core::models::{Report, SessionRecord, UserRecord};

use crate::aggregator::SessionAggregator;
use crate::reader::load_records;
use crate::report::build_report;

// ── Public types ──────────────────────────────────────────────────────────────

/// Metadata produced alongside the report. Logged by the binary, never
/// written into the report document itself.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ReportMetadata {
    /// ISO-8601 timestamp when this report was generated.
    pub generated_at: String,
    /// Total lines read from the input file.
    pub lines_read: u64,
    /// Number of `user` records parsed.
    pub users_parsed: usize,
    /// Number of `session` records parsed.
    pub sessions_parsed: usize,
    /// Lines skipped because their kind was unrecognized.
    pub lines_ignored: u64,
    /// Wall-clock seconds spent reading and parsing the input.
    pub parse_time_seconds: f64,
    /// Wall-clock seconds spent grouping, reducing and assembling.
    pub aggregate_time_seconds: f64,
}

/// The complete output of [`generate_report`].
#[derive(Debug, Clone)]
pub struct ReportResult {
    pub report: Report,
    pub metadata: ReportMetadata,
}

// ── Public functions ──────────────────────────────────────────────────────────

/// Run the full pipeline against the file at `input`.
///
/// 1. Read the file and parse every line into records.
/// 2. Group sessions by user and reduce each group.
/// 3. Assemble the global stats and the per-user map into a [`Report`].
pub fn generate_report(input: &Path) -> Result<ReportResult> {
    // ── Step 1: Read and parse ────────────────────────────────────────────────
    let parse_start = std::time::Instant::now();
    let loaded = load_records(input)?;
    let parse_time = parse_start.elapsed().as_secs_f64();

    // ── Step 2+3: Aggregate and assemble ──────────────────────────────────────
    let aggregate_start = std::time::Instant::now();
    let report = aggregate_records(&loaded.users, &loaded.sessions);
    let aggregate_time = aggregate_start.elapsed().as_secs_f64();

    let metadata = ReportMetadata {
        generated_at: Utc::now().to_rfc3339(),
        lines_read: loaded.lines_read,
        users_parsed: loaded.users.len(),
        sessions_parsed: loaded.sessions.len(),
        lines_ignored: loaded.lines_ignored,
        parse_time_seconds: parse_time,
        aggregate_time_seconds: aggregate_time,
    };

    Ok(ReportResult { report, metadata })
}

/// Aggregate already-parsed records into a [`Report`].
///
/// The in-memory half of the pipeline, shared by [`generate_report`] and
/// the performance tests.
pub fn aggregate_records(users: &[UserRecord], sessions: &[SessionRecord]) -> Report {
    let aggregator = SessionAggregator::new();
    let global = SessionAggregator::global_stats(users, sessions);
    let users_stats = aggregator.user_stats(users, sessions);
    build_report(global, users_stats)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
