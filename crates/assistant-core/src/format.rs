//! Formatting utilities

use chrono::NaiveDate;

/// Date format used for both input and output (`DD.MM.YYYY`)
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Format a date as DD.MM.YYYY
pub fn date(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// Parse a DD.MM.YYYY date
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// Horizontal rule of the given width
pub fn rule(ch: char, width: usize) -> String {
    std::iter::repeat(ch).take(width).collect()
}

/// Title framed by two rules, centred within `width`
pub fn banner(title: &str, width: usize) -> String {
    let line = rule('=', width);
    format!("{line}\n{title:^width$}\n{line}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_roundtrip() {
        let d = NaiveDate::from_ymd_opt(1990, 6, 15).unwrap();
        assert_eq!(date(d), "15.06.1990");
        assert_eq!(parse_date("15.06.1990"), Some(d));
    }

    #[test]
    fn test_parse_date_rejects_other_formats() {
        assert_eq!(parse_date("1990-06-15"), None);
        assert_eq!(parse_date("31.02.2020"), None);
        assert_eq!(parse_date("tomorrow"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_banner() {
        let b = banner("Hi", 6);
        assert_eq!(b, "======\n  Hi  \n======");
    }
}
