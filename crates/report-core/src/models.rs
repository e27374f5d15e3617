use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One classified input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// A `user` line.
    User(UserRecord),
    /// A `session` line.
    Session(SessionRecord),
    /// A line whose first field is neither `user` nor `session`.
    /// Produces no record and no error.
    Unrecognized,
}

/// A single `user` line from the input log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Identity key; sessions reference it through `user_id`.
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// Kept as the raw string; never interpreted numerically.
    pub age: String,
}

impl UserRecord {
    /// The `"first last"` key under which this user's stats appear in the
    /// report. Not guaranteed unique: colliding users overwrite each other
    /// in the output map.
    pub fn display_key(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A single `session` line from the input log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Id of the owning user. May reference a user that never appears
    /// in the input.
    pub user_id: String,
    pub session_id: String,
    /// Browser name, upper-cased at parse time.
    pub browser: String,
    /// Session length in minutes. Malformed input degrades to 0.
    pub duration_minutes: u64,
    /// ISO-8601 date string. Fixed-width, so lexical order is
    /// chronological order.
    pub date: String,
}

/// Per-user session statistics, keyed by display key in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    #[serde(rename = "sessionsCount")]
    pub sessions_count: usize,
    /// Total session time, rendered as `"<n> min."`.
    #[serde(rename = "totalTime")]
    pub total_time: String,
    /// Longest single session, rendered as `"<n> min."`. `"0 min."` for a
    /// user with no sessions.
    #[serde(rename = "longestSession")]
    pub longest_session: String,
    /// This user's browsers, sorted ascending and joined with `", "`.
    /// Duplicates are retained.
    pub browsers: String,
    /// Whether any session used Internet Explorer.
    #[serde(rename = "usedIE")]
    pub used_ie: bool,
    /// Whether every session used Chrome. Vacuously true for a user with
    /// no sessions.
    #[serde(rename = "alwaysUsedChrome")]
    pub always_used_chrome: bool,
    /// Session dates, newest first.
    pub dates: Vec<String>,
}

/// Aggregate counts computed over the whole input, independent of the
/// per-user grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalStats {
    pub total_users: usize,
    pub unique_browsers_count: usize,
    pub total_sessions: usize,
    /// Distinct upper-cased browsers, sorted ascending, joined with `","`.
    pub all_browsers: String,
}

/// The final report document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    #[serde(rename = "totalUsers")]
    pub total_users: usize,
    #[serde(rename = "uniqueBrowsersCount")]
    pub unique_browsers_count: usize,
    #[serde(rename = "totalSessions")]
    pub total_sessions: usize,
    #[serde(rename = "allBrowsers")]
    pub all_browsers: String,
    /// Per-user stats in user-record input order. When display keys
    /// collide the first occurrence keeps its position.
    #[serde(rename = "usersStats")]
    pub users_stats: IndexMap<String, UserStats>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_stats() -> UserStats {
        UserStats {
            sessions_count: 2,
            total_time: "30 min.".to_string(),
            longest_session: "20 min.".to_string(),
            browsers: "CHROME, FIREFOX".to_string(),
            used_ie: false,
            always_used_chrome: false,
            dates: vec!["2020-01-05".to_string(), "2020-01-02".to_string()],
        }
    }

    // ── display_key ───────────────────────────────────────────────────────────

    #[test]
    fn test_display_key_joins_first_and_last_name() {
        let user = UserRecord {
            id: "1".to_string(),
            first_name: "Anna".to_string(),
            last_name: "Smith".to_string(),
            age: "28".to_string(),
        };
        assert_eq!(user.display_key(), "Anna Smith");
    }

    #[test]
    fn test_display_key_keeps_empty_fields() {
        let user = UserRecord {
            id: "1".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            age: String::new(),
        };
        assert_eq!(user.display_key(), " ");
    }

    // ── Serialization ─────────────────────────────────────────────────────────

    #[test]
    fn test_user_stats_json_field_names() {
        let json = serde_json::to_value(sample_stats()).unwrap();
        let obj = json.as_object().unwrap();
        let keys: Vec<&str> = obj.keys().map(|k| k.as_str()).collect();
        assert!(keys.contains(&"sessionsCount"));
        assert!(keys.contains(&"totalTime"));
        assert!(keys.contains(&"longestSession"));
        assert!(keys.contains(&"browsers"));
        assert!(keys.contains(&"usedIE"));
        assert!(keys.contains(&"alwaysUsedChrome"));
        assert!(keys.contains(&"dates"));
    }

    #[test]
    fn test_report_json_field_names() {
        let report = Report {
            total_users: 1,
            unique_browsers_count: 2,
            total_sessions: 2,
            all_browsers: "CHROME,FIREFOX".to_string(),
            users_stats: IndexMap::new(),
        };
        let json = serde_json::to_value(&report).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj["totalUsers"], 1);
        assert_eq!(obj["uniqueBrowsersCount"], 2);
        assert_eq!(obj["totalSessions"], 2);
        assert_eq!(obj["allBrowsers"], "CHROME,FIREFOX");
        assert!(obj["usersStats"].is_object());
    }

    #[test]
    fn test_users_stats_preserves_insertion_order() {
        let mut users_stats = IndexMap::new();
        users_stats.insert("Zed Last".to_string(), sample_stats());
        users_stats.insert("Anna Smith".to_string(), sample_stats());

        let report = Report {
            total_users: 2,
            unique_browsers_count: 2,
            total_sessions: 4,
            all_browsers: "CHROME,FIREFOX".to_string(),
            users_stats,
        };

        let json = serde_json::to_string(&report).unwrap();
        let zed_pos = json.find("Zed Last").unwrap();
        let anna_pos = json.find("Anna Smith").unwrap();
        assert!(zed_pos < anna_pos, "insertion order must survive serialization");
    }
}
