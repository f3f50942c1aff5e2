pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod ui;
pub mod utils;

pub use config::{CliConfig, Settings};
pub use core::jalali_backend;
pub use domain::model::{AgeResult, DateSource, JalaliDate, Language, NextBirthday, ResolvedDate};
pub use domain::ports::{Clock, DateResolver, JalaliCalendar};
pub use utils::error::{AppError, Result};
