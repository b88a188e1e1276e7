//! Display formatting helpers for table cells and detail popups.
//!
//! Pure functions only: no styles, no layout. Malformed input formats as an
//! empty string instead of failing.

use chrono::DateTime;

/// Formats a backend date string as `YYYY-MM-DD` (UTC).
///
/// The backend embeds an epoch-millisecond timestamp inside the string, e.g.
/// `"/Date(1609459200000-0000)/"`. The first run of ASCII digits is taken as
/// the timestamp. Missing input, input without digits, and out-of-range values
/// all yield `""`.
pub fn format_date(date: Option<&str>) -> String {
    let Some(date) = date else {
        return String::new();
    };

    let Some(millis) = first_digit_run(date).and_then(|run| run.parse::<i64>().ok()) else {
        return String::new();
    };

    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Returns the first contiguous run of ASCII digits in `s`.
fn first_digit_run(s: &str) -> Option<&str> {
    let start = s.find(|c: char| c.is_ascii_digit())?;
    let rest = &s[start..];
    let len = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(&rest[..len])
}

/// Formats a monetary amount as `$` + two decimals. `None` → `""`.
pub fn format_currency(amount: Option<f64>) -> String {
    match amount {
        // Round first so amounts that round to zero never print as `$-0.00`.
        Some(v) if v.is_finite() => format!("${:.2}", (v * 100.0).round() / 100.0 + 0.0),
        _ => String::new(),
    }
}

/// Returns the text or `""` for missing optional fields.
pub fn format_opt(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

/// Joins city and country the way the detail popup shows a location.
///
/// `"Berlin, Germany"`, `"Berlin"`, `"Germany"`, or `""`.
pub fn format_location(city: Option<&str>, country: Option<&str>) -> String {
    match (city.filter(|s| !s.is_empty()), country.filter(|s| !s.is_empty())) {
        (Some(city), Some(country)) => format!("{}, {}", city, country),
        (Some(one), None) | (None, Some(one)) => one.to_string(),
        (None, None) => String::new(),
    }
}

/// Truncates a string to `max_width` characters, appending `…` when cut.
pub fn truncate(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if s.chars().count() <= max_width {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_width - 1).collect();
    format!("{}…", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_date_extracts_epoch_millis() {
        assert_eq!(format_date(Some("/Date(1609459200000-0000)/")), "2021-01-01");
        assert_eq!(format_date(Some("1609459200000")), "2021-01-01");
        assert_eq!(format_date(Some("x1609459200000y")), "2021-01-01");
    }

    #[test]
    fn format_date_is_empty_for_missing_or_malformed_input() {
        assert_eq!(format_date(None), "");
        assert_eq!(format_date(Some("")), "");
        assert_eq!(format_date(Some("/Date()/")), "");
        assert_eq!(format_date(Some("no digits here")), "");
        // Too many digits for i64.
        assert_eq!(format_date(Some("99999999999999999999999")), "");
    }

    #[test]
    fn format_date_uses_first_digit_run() {
        // 1996-07-04 00:00:00 UTC followed by a timezone offset.
        assert_eq!(format_date(Some("/Date(836438400000+0200)/")), "1996-07-04");
    }

    #[test]
    fn format_currency_two_decimals() {
        assert_eq!(format_currency(Some(32.38)), "$32.38");
        assert_eq!(format_currency(Some(0.0)), "$0.00");
        assert_eq!(format_currency(Some(1.005_1)), "$1.01");
        assert_eq!(format_currency(None), "");
        assert_eq!(format_currency(Some(f64::NAN)), "");
    }

    #[test]
    fn format_currency_never_prints_negative_zero() {
        assert_eq!(format_currency(Some(-0.0)), "$0.00");
        assert_eq!(format_currency(Some(-0.001)), "$0.00");
        assert_eq!(format_currency(Some(-1.5)), "$-1.50");
    }

    #[test]
    fn format_location_variants() {
        assert_eq!(format_location(Some("Berlin"), Some("Germany")), "Berlin, Germany");
        assert_eq!(format_location(Some("Berlin"), None), "Berlin");
        assert_eq!(format_location(None, Some("Germany")), "Germany");
        assert_eq!(format_location(Some(""), None), "");
    }

    #[test]
    fn truncate_appends_ellipsis() {
        assert_eq!(truncate("Alfreds Futterkiste", 7), "Alfred…");
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abc", 0), "");
    }
}
