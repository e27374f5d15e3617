use clap::Parser;
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Session log aggregation report generator
///
/// Every argument has a default, so a bare `session-report` invocation reads
/// `data.txt` and writes `result.json` in the current directory.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "session-report",
    about = "Aggregate a user/session log into a JSON report",
    version
)]
pub struct Settings {
    /// Input log file
    #[arg(default_value = "data.txt")]
    pub input: PathBuf,

    /// Output report path
    #[arg(long, default_value = "result.json")]
    pub output: PathBuf,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,
}
