pub mod age;
#[cfg(feature = "jalali")]
pub mod jalali;
pub mod parse;
pub mod today;

pub use crate::domain::model::{
    AgeResult, DateSource, JalaliDate, Language, NextBirthday, ResolvedDate,
};
pub use crate::domain::ports::{Clock, DateResolver, JalaliCalendar};
pub use crate::utils::error::Result;

#[cfg(feature = "jalali")]
static JALALI_BACKEND: jalali::ArithmeticJalali = jalali::ArithmeticJalali;

/// The Jalali conversion backend, if one was compiled in. Callers check this
/// before offering Jalali operations and report `CapabilityUnavailable` when
/// it is absent.
#[cfg(feature = "jalali")]
pub fn jalali_backend() -> Option<&'static dyn JalaliCalendar> {
    Some(&JALALI_BACKEND)
}

#[cfg(not(feature = "jalali"))]
pub fn jalali_backend() -> Option<&'static dyn JalaliCalendar> {
    None
}
