use crate::error::{FiscalPeriodError, Result};
use crate::grouper::{group_by_fiscal_year, try_group_by_fiscal_year, PeriodGroup};
use chrono::NaiveDate;
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Input to the period grouping pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PeriodRequest {
    #[schemars(
        description = "Date in YYYY-MM-DD format. Only its year and month matter: the first period starts on the 1st of that month."
    )]
    pub seed_date: NaiveDate,

    #[schemars(
        description = "How many consecutive monthly periods to generate. Negative values are treated as zero."
    )]
    pub number_of_periods: i64,
}

impl Default for PeriodRequest {
    fn default() -> Self {
        Self {
            seed_date: NaiveDate::from_ymd_opt(2019, 7, 15).unwrap_or_default(),
            number_of_periods: 24,
        }
    }
}

impl PeriodRequest {
    pub fn new(seed_date: NaiveDate, number_of_periods: i64) -> Self {
        Self {
            seed_date,
            number_of_periods,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Number of periods to generate, with negative counts clamped to zero.
    pub fn period_count(&self) -> usize {
        if self.number_of_periods < 0 {
            warn!(
                "Negative period count {} treated as zero",
                self.number_of_periods
            );
            return 0;
        }
        usize::try_from(self.number_of_periods).unwrap_or(usize::MAX)
    }

    pub fn group_by_fiscal_year(&self) -> Vec<PeriodGroup> {
        group_by_fiscal_year(self.seed_date, self.period_count())
    }

    pub fn try_group_by_fiscal_year(&self) -> Result<Vec<PeriodGroup>> {
        try_group_by_fiscal_year(self.seed_date, self.period_count())
    }

    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(PeriodRequest)
    }

    pub fn schema_as_json() -> Result<String> {
        let schema = Self::generate_json_schema();
        Ok(serde_json::to_string_pretty(&schema)?)
    }
}

/// Parses a seed date written as `YYYY-MM-DD` or `YYYY/MM/DD`.
pub fn parse_seed_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    ["%Y-%m-%d", "%Y/%m/%d"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| {
            FiscalPeriodError::InvalidArgument(format!(
                "Invalid seed date: {}. Expected YYYY-MM-DD or YYYY/MM/DD",
                input
            ))
        })
}

/// Parses a period count, keeping the sign so that negatives reach [`PeriodRequest::period_count`].
pub fn parse_period_count(input: &str) -> Result<i64> {
    input.trim().parse::<i64>().map_err(|_| {
        FiscalPeriodError::InvalidArgument(format!(
            "Invalid period count: {}. Expected a whole number",
            input
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_request() {
        let request = PeriodRequest::default();
        assert_eq!(
            request.seed_date,
            NaiveDate::from_ymd_opt(2019, 7, 15).unwrap()
        );
        assert_eq!(request.number_of_periods, 24);
        assert_eq!(request.group_by_fiscal_year().len(), 2);
    }

    #[test]
    fn test_negative_count_is_zero() {
        let request = PeriodRequest::new(NaiveDate::from_ymd_opt(2019, 7, 15).unwrap(), -5);
        assert_eq!(request.period_count(), 0);
        assert!(request.group_by_fiscal_year().is_empty());
        assert!(request.try_group_by_fiscal_year().unwrap().is_empty());
    }

    #[test]
    fn test_from_json() {
        let request =
            PeriodRequest::from_json(r#"{"seed_date":"2019-07-15","number_of_periods":60}"#)
                .unwrap();
        assert_eq!(request.period_count(), 60);
        assert_eq!(request.group_by_fiscal_year().len(), 5);
    }

    #[test]
    fn test_from_json_rejects_bad_date() {
        let err = PeriodRequest::from_json(r#"{"seed_date":"2019-13-01","number_of_periods":1}"#)
            .unwrap_err();
        assert!(matches!(err, FiscalPeriodError::SerializationError(_)));
    }

    #[test]
    fn test_schema_generation() {
        let schema_json = PeriodRequest::schema_as_json().unwrap();
        assert!(schema_json.contains("seed_date"));
        assert!(schema_json.contains("number_of_periods"));
    }

    #[test]
    fn test_parse_seed_date() {
        let expected = NaiveDate::from_ymd_opt(2019, 7, 15).unwrap();
        assert_eq!(parse_seed_date("2019-07-15").unwrap(), expected);
        assert_eq!(parse_seed_date(" 2019/07/15 ").unwrap(), expected);
        assert!(matches!(
            parse_seed_date("15/07/2019"),
            Err(FiscalPeriodError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_parse_period_count() {
        assert_eq!(parse_period_count("24").unwrap(), 24);
        assert_eq!(parse_period_count("-3").unwrap(), -3);
        assert!(parse_period_count("twelve").is_err());
    }
}
