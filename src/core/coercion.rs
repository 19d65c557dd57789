//! Best-effort typed access to raw field values.
//!
//! Every presence check and numeric/date computation in the crate goes
//! through this module, so the notion of "no data" is defined exactly once.
//! Coercion failure yields `None`, never an error.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Raw values conventionally meaning "no data", matched case-insensitively
/// after trimming. Empty and whitespace-only values are placeholders too.
pub const PLACEHOLDER_VALUES: &[&str] = &["n/a", "na", ".", "-", "*"];

/// Date/time layouts observed in the export (Google Forms timestamps plus
/// ISO fallbacks). Tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%y %H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];
const DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%m/%d/%y", "%Y-%m-%d", "%d-%m-%Y"];

pub fn is_placeholder(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty()
        || PLACEHOLDER_VALUES
            .iter()
            .any(|placeholder| trimmed.eq_ignore_ascii_case(placeholder))
}

/// True unless the value is empty, whitespace-only, or a placeholder.
pub fn is_present(raw: &str) -> bool {
    !is_placeholder(raw)
}

/// Parse the leading integer digits of a value, like a lenient `parseInt`:
/// `"42 years"` is 42. `None` on a placeholder or when no digits lead.
pub fn as_integer(raw: &str) -> Option<i64> {
    if is_placeholder(raw) {
        return None;
    }
    let trimmed = raw.trim();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<i64>().ok().map(|value| sign * value)
}

/// Parse a decimal numeral, tolerating currency and unit decorations:
/// every character that is not a digit or a dot is stripped first, so
/// `"Rs. 1,200.50"` is 1200.5 and `"5 Lakhs"` is 5. `None` on failure.
pub fn as_decimal(raw: &str) -> Option<f64> {
    if is_placeholder(raw) {
        return None;
    }
    let cleaned: String = raw
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

/// Parse a calendar date or date/time in any of the observed layouts.
pub fn as_date(raw: &str) -> Option<NaiveDateTime> {
    if is_placeholder(raw) {
        return None;
    }
    let trimmed = raw.trim();
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date.and_time(NaiveTime::MIN));
        }
    }
    None
}

/// Elapsed whole calendar days from `start` to `end`, rounding the elapsed
/// duration up to the next whole day: a 2.1-day span counts as 3 days.
pub fn days_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    const DAY_SECONDS: i64 = 24 * 60 * 60;
    let seconds = end.signed_duration_since(start).num_seconds();
    (seconds + DAY_SECONDS - 1).div_euclid(DAY_SECONDS)
}

/// Trimmed, case-insensitive comparison against the closed status literal.
/// Source capitalization is inconsistent; report code must never compare
/// status strings directly.
pub fn is_closed(raw_status: &str) -> bool {
    raw_status.trim().eq_ignore_ascii_case("closed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_are_absent_everywhere() {
        for raw in ["", "   ", "N/A", "n/a", "NA", ".", "-", "*", " N/A "] {
            assert!(is_placeholder(raw), "{raw:?} should be a placeholder");
            assert!(!is_present(raw));
            assert_eq!(as_integer(raw), None);
            assert_eq!(as_decimal(raw), None);
            assert_eq!(as_date(raw), None);
        }
    }

    #[test]
    fn integer_takes_leading_digits() {
        assert_eq!(as_integer("42"), Some(42));
        assert_eq!(as_integer("42 years"), Some(42));
        assert_eq!(as_integer(" +7 "), Some(7));
        assert_eq!(as_integer("-3"), Some(-3));
        assert_eq!(as_integer("years 42"), None);
    }

    #[test]
    fn decimal_strips_decorations() {
        assert_eq!(as_decimal("1200.50"), Some(1200.5));
        assert_eq!(as_decimal("Rs. 1,200.50"), Some(1200.5));
        assert_eq!(as_decimal("5 Lakhs"), Some(5.0));
        assert_eq!(as_decimal("12.3.4"), None);
        assert_eq!(as_decimal("no digits"), None);
    }

    #[test]
    fn date_accepts_observed_layouts() {
        assert!(as_date("1/15/2024 10:23:45").is_some());
        assert!(as_date("1/20/2024").is_some());
        assert!(as_date("2024-01-20").is_some());
        assert_eq!(as_date("sometime soon"), None);
    }

    #[test]
    fn day_span_rounds_up() {
        let start = as_date("2024-01-01").unwrap();
        let end = as_date("2024-01-04").unwrap();
        assert_eq!(days_between(start, end), 3);

        let late_start = as_date("1/1/2024 18:00:00").unwrap();
        assert_eq!(days_between(late_start, end), 3);
        assert_eq!(days_between(start, start), 0);
        assert_eq!(days_between(end, start), -3);
    }

    #[test]
    fn closed_check_ignores_case_and_whitespace() {
        assert!(is_closed("Closed"));
        assert!(is_closed(" closed "));
        assert!(is_closed("CLOSED"));
        assert!(!is_closed("Close"));
        assert!(!is_closed("Open"));
    }
}
