//! Calendar primitives — month bucketing
//!
//! Record dates arrive as `YYYY-MM-DD` strings from the record store.
//! Months are bucketed into sortable `"MMM YYYY"` labels ("Ene 2026")
//! derived straight from the parsed calendar fields, with no timezone
//! applied, so a record never drifts into an adjacent month.

use chrono::{Datelike, NaiveDate, Utc};

use shared::{EngineError, EngineResult};

/// Spanish month abbreviations, index 0 = January
const MONTH_ABBR: [&str; 12] = [
    "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
];

/// Parse a record date (YYYY-MM-DD). Malformed dates return `None` and
/// the record falls out of whatever filter asked.
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Month label for a record date ("Ene 2026"), `None` if unparseable
pub fn month_bucket(date: &str) -> Option<String> {
    let d = parse_date(date)?;
    Some(format!(
        "{} {}",
        MONTH_ABBR[d.month0() as usize],
        d.year()
    ))
}

/// Chronological ordinal of a month label: `year * 12 + month_index`
pub fn month_ordinal(label: &str) -> Option<i32> {
    let (abbr, year) = label.trim().split_once(' ')?;
    let idx = MONTH_ABBR
        .iter()
        .position(|m| m.eq_ignore_ascii_case(abbr))?;
    let year: i32 = year.parse().ok()?;
    Some(year * 12 + idx as i32)
}

/// Month ordinal, surfacing a bad label as the contract violation it is
pub fn require_month_ordinal(label: &str) -> EngineResult<i32> {
    month_ordinal(label).ok_or_else(|| EngineError::InvalidMonthLabel(label.to_string()))
}

/// Today's date (UTC calendar fields)
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Whether a month label names the current calendar month
pub fn is_current_month(label: &str) -> bool {
    let now = today();
    month_ordinal(label) == Some(now.year() * 12 + now.month0() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_bucket() {
        assert_eq!(month_bucket("2026-01-15").as_deref(), Some("Ene 2026"));
        assert_eq!(month_bucket("2025-12-31").as_deref(), Some("Dic 2025"));
        assert_eq!(month_bucket("not-a-date"), None);
        assert_eq!(month_bucket(""), None);
    }

    #[test]
    fn test_month_ordinal_sorts_chronologically() {
        let dic = month_ordinal("Dic 2025").unwrap();
        let ene = month_ordinal("Ene 2026").unwrap();
        let feb = month_ordinal("Feb 2026").unwrap();
        assert!(dic < ene);
        assert!(ene < feb);
        assert_eq!(ene, 2026 * 12);
    }

    #[test]
    fn test_month_ordinal_case_insensitive() {
        assert_eq!(month_ordinal("ene 2026"), month_ordinal("Ene 2026"));
        assert_eq!(month_ordinal("Enero 2026"), None);
        assert_eq!(month_ordinal("2026"), None);
    }

    #[test]
    fn test_require_month_ordinal_is_loud() {
        let err = require_month_ordinal("garbage").unwrap_err();
        assert_eq!(err, EngineError::InvalidMonthLabel("garbage".to_string()));
    }

    #[test]
    fn test_bucket_and_ordinal_round_trip() {
        let label = month_bucket("2026-08-29").unwrap();
        assert_eq!(month_ordinal(&label), Some(2026 * 12 + 7));
    }

    #[test]
    fn test_is_current_month_tracks_today() {
        let now = today();
        let label = format!("{} {}", MONTH_ABBR[now.month0() as usize], now.year());
        assert!(is_current_month(&label));
        assert!(!is_current_month("Ene 1999"));
    }
}
