//! Shared formatting utilities for the UI layer.
//!
//! Date helpers accept ISO-8601 strings (e.g. "2026-01-20T21:35:00Z") as
//! returned by the consultations API.

use chrono::{DateTime, NaiveDate};

/// Format an ISO date string as "Jan 20, 2026" (date-only, human-readable).
///
/// Returns the input unchanged when it is not a real calendar date.
pub fn format_date_human(date_str: &str) -> String {
    parse_day(date_str)
        .map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| date_str.to_string())
}

/// Calendar date (UTC) of an RFC 3339 timestamp, or of a bare `YYYY-MM-DD`.
fn parse_day(date_str: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(date_str)
        .map(|dt| dt.naive_utc().date())
        .ok()
        .or_else(|| NaiveDate::parse_from_str(date_str.get(..10)?, "%Y-%m-%d").ok())
}

/// Relative start date for a consultation card, measured against `today`.
///
/// "today", "yesterday" and "N days ago" within the last week; the human
/// date otherwise, including for timestamps in the future.
pub fn format_started(created_at: &str, today: NaiveDate) -> String {
    let Some(day) = parse_day(created_at) else {
        return format_date_human(created_at);
    };
    match (today - day).num_days() {
        0 => "today".to_string(),
        1 => "yesterday".to_string(),
        n @ 2..=6 => format!("{n} days ago"),
        _ => format_date_human(created_at),
    }
}

/// Uppercase first character of a display name, or "?" when there is none.
pub fn participant_initial(name: Option<&str>) -> String {
    name.and_then(|n| n.trim().chars().next())
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn human_date_formats_iso() {
        assert_eq!(format_date_human("2026-01-20T21:35:00Z"), "Jan 20, 2026");
        assert_eq!(format_date_human("2025-12-05"), "Dec 5, 2025");
    }

    #[test]
    fn human_date_falls_back_on_garbage() {
        assert_eq!(format_date_human(""), "");
        assert_eq!(format_date_human("soon"), "soon");
        assert_eq!(format_date_human("2026-13-01T00:00:00Z"), "2026-13-01T00:00:00Z");
    }

    #[test]
    fn human_date_rejects_impossible_days() {
        assert_eq!(format_date_human("2026-02-31T00:00:00Z"), "2026-02-31T00:00:00Z");
        assert_eq!(format_date_human("2026-01-00"), "2026-01-00");
        assert_eq!(format_date_human("2024-02-29T09:00:00Z"), "Feb 29, 2024");
    }

    #[test]
    fn started_is_relative_within_a_week() {
        let today = day(2026, 3, 10);
        assert_eq!(format_started("2026-03-10T08:00:00Z", today), "today");
        assert_eq!(format_started("2026-03-09T23:59:00Z", today), "yesterday");
        assert_eq!(format_started("2026-03-07T12:00:00.000Z", today), "3 days ago");
        assert_eq!(format_started("2026-03-04T12:00:00+00:00", today), "6 days ago");
    }

    #[test]
    fn started_uses_human_date_beyond_a_week() {
        let today = day(2026, 3, 10);
        assert_eq!(format_started("2026-03-03T12:00:00Z", today), "Mar 3, 2026");
        assert_eq!(format_started("2025-01-20T21:35:00Z", today), "Jan 20, 2025");
    }

    #[test]
    fn started_future_dates_are_absolute() {
        let today = day(2026, 3, 10);
        assert_eq!(format_started("2026-03-12T00:00:00Z", today), "Mar 12, 2026");
    }

    #[test]
    fn started_accepts_bare_dates_and_garbage() {
        let today = day(2026, 3, 10);
        assert_eq!(format_started("2026-03-09", today), "yesterday");
        assert_eq!(format_started("unknown", today), "unknown");
    }

    #[test]
    fn initial_is_uppercased() {
        assert_eq!(participant_initial(Some("alice")), "A");
        assert_eq!(participant_initial(Some("  émile")), "É");
    }

    #[test]
    fn initial_placeholder_for_missing_names() {
        assert_eq!(participant_initial(None), "?");
        assert_eq!(participant_initial(Some("")), "?");
        assert_eq!(participant_initial(Some("   ")), "?");
    }
}
