mod bootstrap;

use anyhow::Result;
use clap::Parser;
use report_core::settings::Settings;
use report_data::analysis::generate_report;

fn main() -> Result<()> {
    let settings = Settings::parse();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("session-report v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Input: {}, output: {}",
        settings.input.display(),
        settings.output.display()
    );

    let result = generate_report(&settings.input)?;

    bootstrap::write_report(&settings.output, &result.report)?;

    tracing::info!(
        "Parsed {} users and {} sessions from {} lines ({} ignored)",
        result.metadata.users_parsed,
        result.metadata.sessions_parsed,
        result.metadata.lines_read,
        result.metadata.lines_ignored,
    );
    tracing::info!(
        "Parse {:.3}s, aggregate {:.3}s",
        result.metadata.parse_time_seconds,
        result.metadata.aggregate_time_seconds,
    );

    Ok(())
}
