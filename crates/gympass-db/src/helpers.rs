//! Row-to-entity parsing helpers.
//!
//! Timestamps are written as fixed-width RFC 3339 with nanoseconds and a `Z`
//! suffix, so lexical order in SQL equals chronological order. Reading also
//! accepts `SQLite`'s `datetime('now')` format for rows written by hand.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

use crate::error::DatabaseError;

/// Format a timestamp for storage.
#[must_use]
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse an optional TEXT column as `Option<DateTime<Utc>>`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string cannot be parsed.
pub fn parse_optional_datetime(s: Option<&str>) -> Result<Option<DateTime<Utc>>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => Ok(Some(parse_datetime(s)?)),
        _ => Ok(None),
    }
}

/// Parse a `YYYY-MM-DD` TEXT column.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string is not a valid date.
pub fn parse_date(s: &str) -> Result<NaiveDate, DatabaseError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| DatabaseError::Query(format!("Failed to parse date '{s}': {e}")))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Escape `%`, `_` and `\` so `s` matches literally inside `LIKE ... ESCAPE '\'`.
#[must_use]
pub fn escape_like(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// SQL `LIMIT`/`OFFSET` pair for a 1-indexed page.
#[must_use]
pub fn page_bounds(page: u32) -> (i64, i64) {
    let offset = i64::try_from(gympass_core::page_offset(page)).unwrap_or(i64::MAX);
    (i64::from(gympass_core::PAGE_SIZE), offset)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn stored_timestamps_sort_chronologically() {
        let earlier = Utc.with_ymd_and_hms(2025, 8, 18, 8, 0, 0).unwrap();
        let later = earlier + chrono::TimeDelta::nanoseconds(1_500);
        assert!(format_datetime(&earlier) < format_datetime(&later));
        assert_eq!(format_datetime(&earlier).len(), format_datetime(&later).len());
    }

    #[test]
    fn datetime_roundtrips_through_storage_format() {
        let dt = Utc.with_ymd_and_hms(2025, 7, 31, 8, 0, 0).unwrap()
            + chrono::TimeDelta::nanoseconds(123_456_789);
        assert_eq!(parse_datetime(&format_datetime(&dt)).unwrap(), dt);
    }

    #[test]
    fn parses_sqlite_default_format() {
        let dt = parse_datetime("2025-07-31 08:00:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2025, 7, 31, 8, 0, 0).unwrap());
    }

    #[test]
    fn empty_optional_datetime_is_none() {
        assert_eq!(parse_optional_datetime(Some("")).unwrap(), None);
        assert_eq!(parse_optional_datetime(None).unwrap(), None);
    }

    #[test]
    fn bad_date_is_a_query_error() {
        assert!(matches!(parse_date("2025-13-01"), Err(DatabaseError::Query(_))));
    }

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("100%_gym\\"), "100\\%\\_gym\\\\");
        assert_eq!(escape_like("Js"), "Js");
    }

    #[test]
    fn page_bounds_are_one_indexed() {
        assert_eq!(page_bounds(1), (20, 0));
        assert_eq!(page_bounds(2), (20, 20));
        assert_eq!(page_bounds(0), (20, 0));
    }
}
