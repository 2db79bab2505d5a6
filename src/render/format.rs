use chrono::{DateTime, Local, TimeZone};

/// Integer with a `.` every three digits from the right. Absent and zero
/// both print as `0`.
pub fn format_number(num: Option<i64>) -> String {
    let Some(num) = num.filter(|n| *n != 0) else {
        return "0".to_string();
    };

    let digits = num.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if num < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Flag glyph for the marketplaces the backend scrapes
pub fn country_flag(code: &str) -> Option<&'static str> {
    match code {
        "NL" => Some("🇳🇱"),
        "DE" => Some("🇩🇪"),
        "BE" => Some("🇧🇪"),
        "FR" => Some("🇫🇷"),
        "PL" => Some("🇵🇱"),
        "CZ" => Some("🇨🇿"),
        "AT" => Some("🇦🇹"),
        "ES" => Some("🇪🇸"),
        _ => None,
    }
}

pub fn country_name(code: &str) -> Option<&'static str> {
    match code {
        "NL" => Some("Netherlands"),
        "DE" => Some("Germany"),
        "BE" => Some("Belgium"),
        "FR" => Some("France"),
        "PL" => Some("Poland"),
        "CZ" => Some("Czechia"),
        "AT" => Some("Austria"),
        "ES" => Some("Spain"),
        _ => None,
    }
}

/// "18 October 2026"
pub fn long_date<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("%-d %B %Y").to_string()
}

/// "18-10-2026 14:05:09"
pub fn full_timestamp<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("%d-%m-%Y %H:%M:%S").to_string()
}

/// Backend timestamp shown as local "HH:MM"
pub fn local_clock(raw: &str) -> Option<String> {
    crate::models::parse_timestamp(raw).map(|t| t.with_timezone(&Local).format("%H:%M").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn thousands_separators() {
        assert_eq!(format_number(Some(1234567)), "1.234.567");
        assert_eq!(format_number(Some(999)), "999");
        assert_eq!(format_number(Some(1000)), "1.000");
        assert_eq!(format_number(Some(131866)), "131.866");
        assert_eq!(format_number(Some(-45000)), "-45.000");
    }

    #[test]
    fn zero_and_absent_print_zero() {
        assert_eq!(format_number(Some(0)), "0");
        assert_eq!(format_number(None), "0");
    }

    #[test]
    fn flags_and_names() {
        assert_eq!(country_flag("DE"), Some("🇩🇪"));
        assert_eq!(country_flag("SE"), None);
        assert_eq!(country_name("NL"), Some("Netherlands"));
    }

    #[test]
    fn date_lines() {
        let at = FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2026, 10, 8, 9, 5, 3)
            .unwrap();
        assert_eq!(long_date(&at), "8 October 2026");
        assert_eq!(full_timestamp(&at), "08-10-2026 09:05:03");
        let utc = Utc.with_ymd_and_hms(2026, 10, 8, 9, 5, 3).unwrap();
        assert_eq!(long_date(&utc), "8 October 2026");
    }

    #[test]
    fn clock_rejects_garbage() {
        assert!(local_clock("not a time").is_none());
        assert_eq!(local_clock("2024-03-01 06:00:00").map(|s| s.len()), Some(5));
    }
}
