use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::domain::model::JalaliDate;
use crate::utils::error::{AppError, Result};

static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})$").unwrap());

/// Folds Persian (U+06F0..U+06F9) and Arabic-Indic (U+0660..U+0669) digit
/// glyphs into ASCII. Everything else passes through unchanged.
pub fn normalize_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '۰'..='۹' => ((c as u32 - '۰' as u32) as u8 + b'0') as char,
            '٠'..='٩' => ((c as u32 - '٠' as u32) as u8 + b'0') as char,
            _ => c,
        })
        .collect()
}

fn split_ymd(input: &str) -> Result<(i32, u32, u32)> {
    let normalized = normalize_digits(input.trim()).replace(['/', '.'], "-");

    let caps = DATE_PATTERN
        .captures(&normalized)
        .ok_or_else(|| AppError::InvalidFormat {
            input: input.trim().to_string(),
        })?;

    let invalid = || AppError::InvalidFormat {
        input: input.trim().to_string(),
    };
    let year = caps[1].parse::<i32>().map_err(|_| invalid())?;
    let month = caps[2].parse::<u32>().map_err(|_| invalid())?;
    let day = caps[3].parse::<u32>().map_err(|_| invalid())?;

    Ok((year, month, day))
}

/// Parses a Gregorian date in `YYYY-MM-DD` form (also `/` or `.` separated,
/// Persian and Arabic-Indic digits accepted) and validates it against the
/// calendar.
pub fn parse_gregorian(input: &str) -> Result<NaiveDate> {
    let (year, month, day) = split_ymd(input)?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or(AppError::InvalidCalendarDate {
        calendar: "Gregorian",
        year,
        month,
        day,
    })
}

/// Parses a Jalali date in the same accepted forms. The result is not
/// checked against the calendar here; an impossible date surfaces when it is
/// converted.
pub fn parse_jalali(input: &str) -> Result<JalaliDate> {
    let (year, month, day) = split_ymd(input)?;
    Ok(JalaliDate::new(year, month, day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_digits_persian() {
        assert_eq!(normalize_digits("۱۳۷۰-۰۴-۲۴"), "1370-04-24");
    }

    #[test]
    fn test_normalize_digits_arabic_indic() {
        assert_eq!(normalize_digits("٢٠٢٥-١٠-١٨"), "2025-10-18");
    }

    #[test]
    fn test_normalize_digits_leaves_ascii_alone() {
        assert_eq!(normalize_digits("2025-10-18 ok"), "2025-10-18 ok");
    }

    #[test]
    fn test_parse_gregorian_accepts_alternate_separators() {
        let expected = NaiveDate::from_ymd_opt(2025, 10, 18).unwrap();
        assert_eq!(parse_gregorian("2025-10-18").unwrap(), expected);
        assert_eq!(parse_gregorian("2025/10/18").unwrap(), expected);
        assert_eq!(parse_gregorian("2025.10.18").unwrap(), expected);
        assert_eq!(parse_gregorian("  2025-10-18  ").unwrap(), expected);
    }

    #[test]
    fn test_parse_gregorian_accepts_single_digit_fields() {
        assert_eq!(
            parse_gregorian("2025-1-5").unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()
        );
    }

    #[test]
    fn test_parse_gregorian_persian_digits() {
        assert_eq!(
            parse_gregorian("۲۰۲۵-۱۰-۱۸").unwrap(),
            NaiveDate::from_ymd_opt(2025, 10, 18).unwrap()
        );
    }

    #[test]
    fn test_parse_gregorian_rejects_bad_format() {
        for input in ["", "abc", "2025-10", "18-10-2025", "2025-10-18-1", "20251018"] {
            assert!(
                matches!(parse_gregorian(input), Err(AppError::InvalidFormat { .. })),
                "expected InvalidFormat for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_parse_gregorian_rejects_impossible_dates() {
        for input in ["2025-02-30", "2025-13-01", "2023-02-29", "2025-00-10", "2025-04-31"] {
            assert!(
                matches!(
                    parse_gregorian(input),
                    Err(AppError::InvalidCalendarDate { calendar: "Gregorian", .. })
                ),
                "expected InvalidCalendarDate for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_parse_jalali_persian_digits_match_ascii() {
        assert_eq!(
            parse_jalali("۱۳۷۰-۰۴-۲۴").unwrap(),
            parse_jalali("1370-04-24").unwrap()
        );
        assert_eq!(parse_jalali("1370-04-24").unwrap(), JalaliDate::new(1370, 4, 24));
    }

    #[test]
    fn test_parse_jalali_defers_calendar_validation() {
        // 1404 is not a leap year, so Esfand 30 does not exist. The parser
        // still returns the triple; conversion is where it fails.
        assert_eq!(parse_jalali("1404-12-30").unwrap(), JalaliDate::new(1404, 12, 30));
        assert_eq!(parse_jalali("1400-99-99").unwrap(), JalaliDate::new(1400, 99, 99));
    }

    #[test]
    fn test_parse_jalali_rejects_bad_format() {
        assert!(matches!(
            parse_jalali("1404/07"),
            Err(AppError::InvalidFormat { .. })
        ));
    }
}
