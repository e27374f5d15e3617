//! Session grouping and statistics reduction.
//!
//! The algorithmic heart of the tool: sessions are hash-grouped by owning
//! user id in one pass, then each user's group is folded into a
//! [`UserStats`] summary. Global stats are computed in one pass over all
//! sessions, so the whole aggregation is linear in input size.

use std::collections::{BTreeSet, HashMap};

use indexmap::IndexMap;
use regex::Regex;
use report_core::formatting::format_minutes;
use report_core::models::{GlobalStats, SessionRecord, UserRecord, UserStats};

// ── SessionAggregator ─────────────────────────────────────────────────────────

/// Groups sessions by user and reduces them to per-user and global
/// statistics.
pub struct SessionAggregator {
    /// Matched against upper-cased browser names.
    ie_pattern: Regex,
    /// Matched against upper-cased browser names.
    chrome_pattern: Regex,
}

impl Default for SessionAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionAggregator {
    pub fn new() -> Self {
        Self {
            ie_pattern: Regex::new("INTERNET EXPLORER").expect("regex is valid"),
            chrome_pattern: Regex::new("CHROME").expect("regex is valid"),
        }
    }

    // ── Public methods ────────────────────────────────────────────────────────

    /// Group sessions by owning user id.
    ///
    /// A single hashed pass: this is the step that keeps the pipeline O(n)
    /// instead of re-scanning the session list once per user.
    pub fn group_by_user(sessions: &[SessionRecord]) -> HashMap<&str, Vec<&SessionRecord>> {
        let mut groups: HashMap<&str, Vec<&SessionRecord>> = HashMap::new();
        for session in sessions {
            groups
                .entry(session.user_id.as_str())
                .or_default()
                .push(session);
        }
        groups
    }

    /// Compute the aggregate counts over the whole input.
    ///
    /// Every parsed session counts here, including sessions whose `user_id`
    /// matches no user record.
    pub fn global_stats(users: &[UserRecord], sessions: &[SessionRecord]) -> GlobalStats {
        // BTreeSet gives deduplication and ascending order in one structure.
        let unique_browsers: BTreeSet<&str> =
            sessions.iter().map(|s| s.browser.as_str()).collect();

        GlobalStats {
            total_users: users.len(),
            unique_browsers_count: unique_browsers.len(),
            total_sessions: sessions.len(),
            all_browsers: unique_browsers.into_iter().collect::<Vec<_>>().join(","),
        }
    }

    /// Fold one user's session group into a [`UserStats`] value.
    ///
    /// An empty group yields the zero stats: `"0 min."` totals, empty
    /// browser string, `used_ie` false and `always_used_chrome` vacuously
    /// true.
    pub fn reduce_user(&self, group: &[&SessionRecord]) -> UserStats {
        let total_time: u64 = group.iter().map(|s| s.duration_minutes).sum();
        let longest = group.iter().map(|s| s.duration_minutes).max().unwrap_or(0);

        // Duplicates are retained; only the order is normalized.
        let mut browsers: Vec<&str> = group.iter().map(|s| s.browser.as_str()).collect();
        browsers.sort_unstable();

        let used_ie = browsers.iter().any(|b| self.ie_pattern.is_match(b));
        let always_used_chrome = browsers.iter().all(|b| self.chrome_pattern.is_match(b));

        let mut dates: Vec<String> = group.iter().map(|s| s.date.clone()).collect();
        // Fixed-width ISO-8601 dates: lexical descending equals
        // chronological descending.
        dates.sort_unstable_by(|a, b| b.cmp(a));

        UserStats {
            sessions_count: group.len(),
            total_time: format_minutes(total_time),
            longest_session: format_minutes(longest),
            browsers: browsers.join(", "),
            used_ie,
            always_used_chrome,
            dates,
        }
    }

    /// Build the per-user stats map in user input order.
    ///
    /// Sessions that reference no known user are excluded here but still
    /// count in [`Self::global_stats`]. When two users share a display key
    /// the later one's stats overwrite the earlier one's; the map slot
    /// keeps the first occurrence's position.
    pub fn user_stats(
        &self,
        users: &[UserRecord],
        sessions: &[SessionRecord],
    ) -> IndexMap<String, UserStats> {
        let groups = Self::group_by_user(sessions);

        let mut stats: IndexMap<String, UserStats> = IndexMap::with_capacity(users.len());
        for user in users {
            let group = groups
                .get(user.id.as_str())
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            stats.insert(user.display_key(), self.reduce_user(group));
        }
        stats
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
