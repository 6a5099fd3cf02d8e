use crate::error::Result;
use crate::fiscal_year::FISCAL_YEAR_END_MONTH;
use crate::utils::{add_months, ensure_supported, sub_days};
use chrono::{Datelike, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One monthly accounting period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Period {
    #[schemars(description = "First calendar day of the period's month (YYYY-MM-DD)")]
    pub period_start: NaiveDate,

    #[schemars(description = "Last calendar day of the period's month (YYYY-MM-DD)")]
    pub period_end: NaiveDate,

    #[schemars(
        description = "Position of the month within the financial year: July is 1, June is 12"
    )]
    pub period_number: u32,
}

/// Builds the period beginning on `start`.
///
/// `start` is expected to be the first day of a month; it is not normalized here.
/// The end is one month after `start`, less a day.
pub fn period_from_start(start: NaiveDate) -> Result<Period> {
    ensure_supported(start, start, "building a period")?;
    let period_end = sub_days(add_months(start, 1)?, 1)?;

    Ok(Period {
        period_start: start,
        period_end,
        period_number: period_number_for_month(start.month()),
    })
}

/// Maps a calendar month (1..=12) to its period number (July = 1 ... June = 12).
pub fn period_number_for_month(month: u32) -> u32 {
    if month > FISCAL_YEAR_END_MONTH {
        month - FISCAL_YEAR_END_MONTH
    } else {
        month + (12 - FISCAL_YEAR_END_MONTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FiscalPeriodError;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_period_number_mapping() {
        let expected = [7, 8, 9, 10, 11, 12, 1, 2, 3, 4, 5, 6];
        for (month, number) in (1..=12).zip(expected) {
            assert_eq!(period_number_for_month(month), number, "month {}", month);
        }
    }

    #[test]
    fn test_july_period() {
        let period = period_from_start(ymd(2019, 7, 1)).unwrap();
        assert_eq!(period.period_start, ymd(2019, 7, 1));
        assert_eq!(period.period_end, ymd(2019, 7, 31));
        assert_eq!(period.period_number, 1);
    }

    #[test]
    fn test_february_ends() {
        assert_eq!(
            period_from_start(ymd(2020, 2, 1)).unwrap().period_end,
            ymd(2020, 2, 29)
        );
        assert_eq!(
            period_from_start(ymd(2021, 2, 1)).unwrap().period_end,
            ymd(2021, 2, 28)
        );
    }

    #[test]
    fn test_june_is_last_period() {
        let period = period_from_start(ymd(2020, 6, 1)).unwrap();
        assert_eq!(period.period_end, ymd(2020, 6, 30));
        assert_eq!(period.period_number, 12);
    }

    #[test]
    fn test_december_9999_overflows() {
        let err = period_from_start(ymd(9999, 12, 1)).unwrap_err();
        assert!(matches!(err, FiscalPeriodError::DateOverflow { .. }));
    }

    #[test]
    fn test_november_9999_fits() {
        let period = period_from_start(ymd(9999, 11, 1)).unwrap();
        assert_eq!(period.period_end, ymd(9999, 11, 30));
    }

    #[test]
    fn test_serializes_pascal_case() {
        let period = period_from_start(ymd(2019, 7, 1)).unwrap();
        let json = serde_json::to_string(&period).unwrap();
        assert_eq!(
            json,
            r#"{"PeriodStart":"2019-07-01","PeriodEnd":"2019-07-31","PeriodNumber":1}"#
        );
    }
}
