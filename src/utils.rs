use crate::error::{FiscalPeriodError, Result};
use chrono::{Datelike, Days, Months, NaiveDate};

/// Earliest calendar year a period or boundary may fall in.
pub const MIN_SUPPORTED_YEAR: i32 = 1;

/// Latest calendar year a period or boundary may fall in.
pub const MAX_SUPPORTED_YEAR: i32 = 9999;

pub fn is_supported(date: NaiveDate) -> bool {
    (MIN_SUPPORTED_YEAR..=MAX_SUPPORTED_YEAR).contains(&date.year())
}

/// Passes `date` through unchanged if it lies inside 0001-01-01 ..= 9999-12-31.
/// `origin` and `operation` describe how the date was produced, for the error.
pub fn ensure_supported(date: NaiveDate, origin: NaiveDate, operation: &str) -> Result<NaiveDate> {
    if is_supported(date) {
        Ok(date)
    } else {
        Err(FiscalPeriodError::overflow(origin, operation))
    }
}

pub fn date_from_ymd(year: i32, month: u32, day: u32, origin: NaiveDate) -> Result<NaiveDate> {
    let operation = format!("building {:04}-{:02}-{:02}", year, month, day);
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| FiscalPeriodError::overflow(origin, operation.as_str()))?;
    ensure_supported(date, origin, &operation)
}

pub fn first_day_of_month(date: NaiveDate) -> Result<NaiveDate> {
    date_from_ymd(date.year(), date.month(), 1, date)
}

pub fn add_months(date: NaiveDate, months: u32) -> Result<NaiveDate> {
    let operation = format!("adding {} month(s)", months);
    let shifted = date
        .checked_add_months(Months::new(months))
        .ok_or_else(|| FiscalPeriodError::overflow(date, operation.as_str()))?;
    ensure_supported(shifted, date, &operation)
}

pub fn sub_days(date: NaiveDate, days: u64) -> Result<NaiveDate> {
    let operation = format!("subtracting {} day(s)", days);
    let shifted = date
        .checked_sub_days(Days::new(days))
        .ok_or_else(|| FiscalPeriodError::overflow(date, operation.as_str()))?;
    ensure_supported(shifted, date, &operation)
}

/// Proleptic Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Formats a date the way the period report prints it, e.g. `2019/07/01`.
pub fn format_slash_date(date: NaiveDate) -> String {
    date.format("%Y/%m/%d").to_string()
}
