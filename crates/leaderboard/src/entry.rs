//! Leaderboard entries and ranking.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::types::{DEFAULT_PLAYER_NAME, MAX_NAME_LEN};

/// One finished run as stored on disk and remotely.
///
/// ```json
/// {"name": "ada", "score": 12, "date": "10/15/2026"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
    pub date: String,
}

impl LeaderboardEntry {
    /// Entry dated today (local time).
    pub fn new(name: &str, score: u32) -> Self {
        Self::with_date(name, score, today())
    }

    pub fn with_date(name: &str, score: u32, date: impl Into<String>) -> Self {
        Self {
            name: normalize_name(name),
            score,
            date: date.into(),
        }
    }
}

/// Trim, default blank names and cap the length in characters.
///
/// # Examples
///
/// ```
/// use tui_snake_leaderboard::normalize_name;
///
/// assert_eq!(normalize_name("  ada  "), "ada");
/// assert_eq!(normalize_name("   "), "Anonymous");
/// assert_eq!(normalize_name("abcdefghijklmnopqrstuvwxyz").len(), 20);
/// ```
pub fn normalize_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return DEFAULT_PLAYER_NAME.to_string();
    }
    trimmed.chars().take(MAX_NAME_LEN).collect::<String>().trim_end().to_string()
}

/// `M/D/YYYY`, no zero padding.
pub fn format_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

pub fn today() -> String {
    format_date(Local::now().date_naive())
}

/// Sort by score, highest first, and keep at most `limit` entries.
///
/// The sort is stable: equal scores keep their existing order, so an
/// earlier entry stays ahead of a later one with the same score.
pub fn rank(entries: &mut Vec<LeaderboardEntry>, limit: usize) {
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries.truncate(limit);
}

/// Append `entry` to `entries` and rank the result.
pub fn merge(
    mut entries: Vec<LeaderboardEntry>,
    entry: LeaderboardEntry,
    limit: usize,
) -> Vec<LeaderboardEntry> {
    entries.push(entry);
    rank(&mut entries, limit);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn e(name: &str, score: u32) -> LeaderboardEntry {
        LeaderboardEntry::with_date(name, score, "1/2/2026")
    }

    #[test]
    fn test_rank_sorts_descending_and_truncates() {
        let mut entries = vec![e("a", 3), e("b", 9), e("c", 1), e("d", 5)];
        rank(&mut entries, 3);
        let scores: Vec<u32> = entries.iter().map(|x| x.score).collect();
        assert_eq!(scores, vec![9, 5, 3]);
    }

    #[test]
    fn test_rank_keeps_tie_order() {
        let mut entries = vec![e("first", 4), e("second", 4), e("third", 4)];
        rank(&mut entries, 10);
        let names: Vec<&str> = entries.iter().map(|x| x.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_merge_places_new_entry_after_equal_scores() {
        let merged = merge(vec![e("old", 7), e("low", 2)], e("new", 7), 100);
        let names: Vec<&str> = merged.iter().map(|x| x.name.as_str()).collect();
        assert_eq!(names, vec!["old", "new", "low"]);
    }

    #[test]
    fn test_name_normalization() {
        assert_eq!(normalize_name(""), DEFAULT_PLAYER_NAME);
        assert_eq!(normalize_name("\t ada lovelace \n"), "ada lovelace");
        // 20 characters, counted as chars rather than bytes
        let long = "ééééééééééééééééééééééé";
        assert_eq!(normalize_name(long).chars().count(), MAX_NAME_LEN);
    }

    #[test]
    fn test_date_format_has_no_padding() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(format_date(date), "3/7/2026");
    }

    #[test]
    fn test_entry_json_shape() {
        let json = serde_json::to_value(e("ada", 12)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "ada", "score": 12, "date": "1/2/2026"})
        );
    }
}
