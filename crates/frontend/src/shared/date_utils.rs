//! Даты из API в виде ячеек таблицы.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%d.%m.%Y";

/// Formats an API date as `DD.MM.YYYY`.
///
/// Accepts RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM:SS[.fff]` and plain
/// `YYYY-MM-DD`. Anything else is shown as is.
pub fn format_date(date_str: &str) -> String {
    let s = date_str.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return dt.format(DISPLAY_FORMAT).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(DISPLAY_FORMAT).to_string();
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d.format(DISPLAY_FORMAT).to_string();
    }
    date_str.to_string()
}

/// Optional API timestamp as a table cell
pub fn format_opt_date(date: Option<&str>) -> String {
    date.map(format_date).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_variants() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T23:30:00+03:00"), "15.03.2024");
    }

    #[test]
    fn test_unparsable_kept() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_date(""), "");
        assert_eq!(format_opt_date(None), "");
    }
}
