use crate::domain::model::{JalaliDate, ResolvedDate};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Today's date according to some clock. Implementations must be cheap to
/// call repeatedly.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

#[async_trait]
pub trait DateResolver: Send + Sync {
    async fn resolve(&self) -> ResolvedDate;
}

/// Conversion seam between the Gregorian and Jalali calendars. Compiled-in
/// backends are exposed through `core::jalali::backend()`.
pub trait JalaliCalendar: Send + Sync {
    fn is_leap_year(&self, year: i32) -> bool;
    fn days_in_month(&self, year: i32, month: u32) -> u32;
    fn to_jalali(&self, date: NaiveDate) -> JalaliDate;
    fn to_gregorian(&self, date: JalaliDate) -> Result<NaiveDate>;
}
