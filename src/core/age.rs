use chrono::{Datelike, NaiveDate};

use crate::domain::model::{AgeResult, NextBirthday};
use crate::utils::error::{AppError, Result};

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Exact elapsed years/months/days between `born` and `today`.
///
/// Negative day counts borrow from the months preceding `today`, walking
/// backwards one month at a time (at most twice, when the preceding month is
/// a short February). The returned fields are always in range: months 0-11,
/// days 0-30.
pub fn age_ymd(born: NaiveDate, today: NaiveDate) -> Result<AgeResult> {
    if born > today {
        return Err(AppError::FutureBirthdate { born, today });
    }

    let mut years = today.year() - born.year();
    let mut months = today.month() as i32 - born.month() as i32;
    let mut days = today.day() as i32 - born.day() as i32;

    let (mut cursor_year, mut cursor_month) = (today.year(), today.month());
    while days < 0 {
        let (prev_year, prev_month) = previous_month(cursor_year, cursor_month);
        days += days_in_month(prev_year, prev_month) as i32;
        months -= 1;
        cursor_year = prev_year;
        cursor_month = prev_month;
    }
    if months < 0 {
        months += 12;
        years -= 1;
    }

    Ok(AgeResult {
        years: years as u32,
        months: months as u32,
        days: days as u32,
    })
}

fn birthday_in_year(born: NaiveDate, year: i32) -> NaiveDate {
    let day = born.day().min(days_in_month(year, born.month()));
    NaiveDate::from_ymd_opt(year, born.month(), day).expect("day clamped to month length")
}

/// First birthday strictly after `today`. A Feb 29 birthdate observed in a
/// non-leap year lands on Feb 28, never Mar 1.
pub fn next_birthday_after(born: NaiveDate, today: NaiveDate) -> NaiveDate {
    let candidate = birthday_in_year(born, today.year());
    if candidate > today {
        candidate
    } else {
        birthday_in_year(born, today.year() + 1)
    }
}

pub fn days_until_next_birthday(born: NaiveDate, today: NaiveDate) -> i64 {
    (next_birthday_after(born, today) - today).num_days()
}

pub fn next_birthday(born: NaiveDate, today: NaiveDate) -> NextBirthday {
    let date = next_birthday_after(born, today);
    NextBirthday {
        date,
        days_away: (date - today).num_days(),
    }
}
