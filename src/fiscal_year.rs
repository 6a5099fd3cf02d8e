use crate::error::Result;
use crate::utils::{date_from_ymd, ensure_supported};
use chrono::{Datelike, NaiveDate};

/// Calendar month in which the Australian financial year closes.
pub const FISCAL_YEAR_END_MONTH: u32 = 6;

/// Day of [`FISCAL_YEAR_END_MONTH`] on which the financial year closes.
pub const FISCAL_YEAR_END_DAY: u32 = 30;

/// Returns the end of the most recently completed financial year as seen from `date`.
///
/// Dates from January to June belong to a financial year that started on the
/// previous 1 July, so the last completed year ended on 30 June of the previous
/// calendar year. Dates from July onwards see 30 June of the same calendar year.
///
/// Fails with [`FiscalPeriodError::DateOverflow`](crate::FiscalPeriodError::DateOverflow)
/// when the boundary would fall before year 1.
pub fn fiscal_year_end(date: NaiveDate) -> Result<NaiveDate> {
    ensure_supported(date, date, "computing the fiscal year end")?;

    let year = if date.month() <= FISCAL_YEAR_END_MONTH {
        date.year() - 1
    } else {
        date.year()
    };

    date_from_ymd(year, FISCAL_YEAR_END_MONTH, FISCAL_YEAR_END_DAY, date)
}
