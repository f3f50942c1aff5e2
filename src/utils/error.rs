use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid date format: {input:?} (expected YYYY-MM-DD)")]
    InvalidFormat { input: String },

    #[error("No such {calendar} date: {year}-{month:02}-{day:02}")]
    InvalidCalendarDate {
        calendar: &'static str,
        year: i32,
        month: u32,
        day: u32,
    },

    #[error("Birthdate {born} is after today ({today})")]
    FutureBirthdate { born: NaiveDate, today: NaiveDate },

    #[error("Jalali calendar support is not available in this build")]
    CapabilityUnavailable,

    #[error("Time source unavailable: {reason}")]
    TimeSourceUnavailable { reason: String },

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, AppError>;
