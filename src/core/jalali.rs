//! Arithmetic Solar Hijri (Jalali) calendar using the 33-year leap cycle,
//! computed over fixed-day (Rata Die) numbers as in Reingold & Dershowitz,
//! "Calendrical Calculations". chrono's `num_days_from_ce` is the same day
//! numbering, which makes the Gregorian side a plain constructor call.

use chrono::{Datelike, NaiveDate};

use crate::domain::model::JalaliDate;
use crate::domain::ports::JalaliCalendar;
use crate::utils::error::{AppError, Result};

// Fixed day number of Farvardin 1, year 1 (Gregorian 622-03-22).
const PERSIAN_EPOCH_RD: i64 = 226_896;

// Days in one 33-year cycle: 365 * 33 + 8 leap days.
const CYCLE_DAYS: i64 = 12_053;

pub fn is_leap_year(year: i32) -> bool {
    (25 * i64::from(year) + 11).rem_euclid(33) < 8
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1..=6 => 31,
        7..=11 => 30,
        12 if is_leap_year(year) => 30,
        _ => 29,
    }
}

fn fixed_from_jalali(year: i32, month: u32, day: u32) -> i64 {
    let year = i64::from(year);
    let month = i64::from(month);
    let day = i64::from(day);

    let new_year = PERSIAN_EPOCH_RD - 1 + 365 * (year - 1) + (8 * year + 21).div_euclid(33);
    new_year - 1
        + if month <= 7 {
            31 * (month - 1)
        } else {
            30 * (month - 1) + 6
        }
        + day
}

fn jalali_from_fixed(rd: i64) -> JalaliDate {
    let days_since_epoch = rd - PERSIAN_EPOCH_RD + 1;
    let year = 1 + (33 * days_since_epoch + 3).div_euclid(CYCLE_DAYS);
    let year = year as i32;

    let day_of_year = 1 + rd - fixed_from_jalali(year, 1, 1);
    let month = if day_of_year <= 186 {
        (day_of_year + 30).div_euclid(31)
    } else {
        (day_of_year - 6 + 29).div_euclid(30)
    } as u32;
    let day = (rd - fixed_from_jalali(year, month, 1) + 1) as u32;

    JalaliDate::new(year, month, day)
}

/// Converts a Gregorian date to Jalali. Total: every `NaiveDate` has a
/// Jalali counterpart (years before the epoch come out zero or negative).
pub fn to_jalali(date: NaiveDate) -> JalaliDate {
    jalali_from_fixed(i64::from(date.num_days_from_ce()))
}

/// Converts a Jalali date to Gregorian, validating month and day against the
/// calendar first.
pub fn to_gregorian(date: JalaliDate) -> Result<NaiveDate> {
    let invalid = AppError::InvalidCalendarDate {
        calendar: "Jalali",
        year: date.year,
        month: date.month,
        day: date.day,
    };

    if !(1..=12).contains(&date.month)
        || date.day == 0
        || date.day > days_in_month(date.year, date.month)
    {
        return Err(invalid);
    }

    let rd = fixed_from_jalali(date.year, date.month, date.day);
    i32::try_from(rd)
        .ok()
        .and_then(NaiveDate::from_num_days_from_ce_opt)
        .ok_or(invalid)
}

/// The compiled-in conversion backend.
pub struct ArithmeticJalali;

impl JalaliCalendar for ArithmeticJalali {
    fn is_leap_year(&self, year: i32) -> bool {
        is_leap_year(year)
    }

    fn days_in_month(&self, year: i32, month: u32) -> u32 {
        days_in_month(year, month)
    }

    fn to_jalali(&self, date: NaiveDate) -> JalaliDate {
        to_jalali(date)
    }

    fn to_gregorian(&self, date: JalaliDate) -> Result<NaiveDate> {
        to_gregorian(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_known_pairs() {
        let pairs = [
            (g(2025, 10, 18), JalaliDate::new(1404, 7, 26)),
            (g(2025, 3, 21), JalaliDate::new(1404, 1, 1)),
            (g(2024, 3, 20), JalaliDate::new(1403, 1, 1)),
            (g(1990, 7, 15), JalaliDate::new(1369, 4, 24)),
            (g(2000, 1, 1), JalaliDate::new(1378, 10, 11)),
            (g(622, 3, 22), JalaliDate::new(1, 1, 2)),
        ];
        for (gregorian, jalali) in pairs {
            assert_eq!(to_jalali(gregorian), jalali, "to_jalali({})", gregorian);
            assert_eq!(
                to_gregorian(jalali).unwrap(),
                gregorian,
                "to_gregorian({})",
                jalali
            );
        }
    }

    #[test]
    fn test_leap_years() {
        for year in [1375, 1379, 1399, 1403] {
            assert!(is_leap_year(year), "{} should be leap", year);
        }
        for year in [1400, 1401, 1402, 1404] {
            assert!(!is_leap_year(year), "{} should not be leap", year);
        }
    }

    #[test]
    fn test_leap_rule_for_non_positive_years() {
        // rem_euclid keeps the cycle stable below year 1.
        let leap_count = (-33..0).filter(|&y| is_leap_year(y)).count();
        assert_eq!(leap_count, 8);
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(1404, 1), 31);
        assert_eq!(days_in_month(1404, 6), 31);
        assert_eq!(days_in_month(1404, 7), 30);
        assert_eq!(days_in_month(1404, 11), 30);
        assert_eq!(days_in_month(1404, 12), 29);
        assert_eq!(days_in_month(1403, 12), 30);
    }

    #[test]
    fn test_to_gregorian_rejects_impossible_dates() {
        for (y, m, d) in [
            (1404, 12, 30),
            (1404, 13, 1),
            (1404, 0, 5),
            (1404, 7, 31),
            (1404, 7, 0),
            (1404, 1, 32),
        ] {
            assert!(
                matches!(
                    to_gregorian(JalaliDate::new(y, m, d)),
                    Err(AppError::InvalidCalendarDate {
                        calendar: "Jalali",
                        ..
                    })
                ),
                "expected rejection of {}-{}-{}",
                y,
                m,
                d
            );
        }
    }

    #[test]
    fn test_leap_esfand_30_is_valid() {
        assert_eq!(
            to_gregorian(JalaliDate::new(1403, 12, 30)).unwrap(),
            g(2025, 3, 20)
        );
    }

    #[test]
    fn test_round_trip_gregorian_sweep() {
        // Every day from 1900-01-01 to 2100-12-31.
        let mut date = g(1900, 1, 1);
        let end = g(2100, 12, 31);
        while date <= end {
            let jalali = to_jalali(date);
            assert_eq!(to_gregorian(jalali).unwrap(), date, "round trip of {}", date);
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_round_trip_jalali_sweep() {
        for year in 1300..1500 {
            for month in 1..=12u32 {
                for day in 1..=days_in_month(year, month) {
                    let jalali = JalaliDate::new(year, month, day);
                    let gregorian = to_gregorian(jalali).unwrap();
                    assert_eq!(to_jalali(gregorian), jalali, "round trip of {}", jalali);
                }
            }
        }
    }

    #[test]
    fn test_total_for_very_early_dates() {
        let date = g(1, 1, 1);
        let jalali = to_jalali(date);
        assert_eq!(jalali.year, -621);
        assert_eq!(to_gregorian(jalali).unwrap(), date);
    }

    #[test]
    fn test_backend_delegates() {
        let backend = ArithmeticJalali;
        assert_eq!(
            backend.to_jalali(g(2025, 10, 18)),
            JalaliDate::new(1404, 7, 26)
        );
        assert!(backend.is_leap_year(1403));
        assert_eq!(backend.days_in_month(1404, 12), 29);
    }
}
