//! Report assembly.

use indexmap::IndexMap;
use report_core::models::{GlobalStats, Report, UserStats};

/// Combine the global stats and the per-user stats map into the final
/// [`Report`].
///
/// Pure assembly: no computation and no failure modes. The map keeps the
/// insertion order the aggregator produced.
pub fn build_report(global: GlobalStats, users_stats: IndexMap<String, UserStats>) -> Report {
    Report {
        total_users: global.total_users,
        unique_browsers_count: global.unique_browsers_count,
        total_sessions: global.total_sessions,
        all_browsers: global.all_browsers,
        users_stats,
    }
}
