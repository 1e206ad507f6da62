// src/dates.rs

use chrono::{DateTime, Local, NaiveDate};

/// Parses the date string formats the backends actually send.
///
/// The legacy API stores `dd/mm/yyyy` strings typed by users; the relational
/// API returns ISO dates, sometimes with a time suffix. Everything is reduced
/// to a plain calendar date so that comparisons never trip over time-of-day
/// or timezone boundaries.
///
/// Returns `None` for anything that is not a valid calendar date. Callers
/// must treat `None` as "unknown", not as some sentinel date — see the
/// pass-through rule in the filter engine.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if raw.contains('/') {
        return NaiveDate::parse_from_str(raw, "%d/%m/%Y").ok();
    }

    if raw.contains('-') {
        // ISO-like. Drop any time suffix; only the date portion compares.
        let date_part = raw.split('T').next().unwrap_or(raw);
        return NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok();
    }

    // Last resort for the odd full timestamp string.
    DateTime::parse_from_rfc2822(raw)
        .map(|dt| dt.date_naive())
        .ok()
}

/// Display / export format used throughout the shop: `dd/mm/yyyy`.
pub fn format_br(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Today's calendar date in local time. Read once per request at the router
/// boundary and passed down; the engine itself never touches the clock, so
/// tests can pin a date.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn parses_brazilian_slash_format() {
        assert_eq!(parse_date("10/01/2024"), Some(d(2024, 1, 10)));
        assert_eq!(parse_date(" 05/12/2023 "), Some(d(2023, 12, 5)));
    }

    #[test]
    fn parses_iso_format() {
        assert_eq!(parse_date("2024-01-10"), Some(d(2024, 1, 10)));
    }

    #[test]
    fn iso_time_suffix_is_discarded() {
        assert_eq!(
            parse_date("2024-01-10T15:30:00.000Z"),
            Some(d(2024, 1, 10))
        );
        // Same calendar date regardless of the hour.
        assert_eq!(
            parse_date("2024-01-10T00:00:01"),
            parse_date("2024-01-10T23:59:59")
        );
    }

    #[test]
    fn empty_and_blank_are_unknown() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("   "), None);
    }

    #[test]
    fn garbage_is_unknown_not_epoch() {
        assert_eq!(parse_date("not-a-date"), None);
        assert_eq!(parse_date("32/13/2024"), None);
        assert_eq!(parse_date("amanhã"), None);
    }

    #[test]
    fn formats_back_to_brazilian() {
        assert_eq!(format_br(d(2024, 1, 5)), "05/01/2024");
    }
}
