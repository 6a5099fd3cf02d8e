use crate::error::Result;
use crate::fiscal_year::fiscal_year_end;
use crate::period::Period;
use crate::sequence::generate_periods;
use crate::utils::days_in_year;
use chrono::{Datelike, NaiveDate};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// All periods that share one financial year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct PeriodGroup {
    #[schemars(
        description = "365 or 366, from the calendar year of the group's first period start"
    )]
    pub number_of_days_in_financial_year: u16,

    #[schemars(description = "The 30 June boundary shared by every period in the group")]
    pub end_of_last_financial_year: NaiveDate,

    #[schemars(description = "Member periods in chronological order")]
    pub periods: Vec<Period>,
}

impl PeriodGroup {
    fn open(boundary: NaiveDate, first: Period) -> Self {
        Self {
            number_of_days_in_financial_year: days_in_year(first.period_start.year()),
            end_of_last_financial_year: boundary,
            periods: vec![first],
        }
    }
}

/// Groups `count` periods starting at `seed` by financial year, propagating the
/// first error raised while generating them.
pub fn try_group_by_fiscal_year(seed: NaiveDate, count: usize) -> Result<Vec<PeriodGroup>> {
    try_group_by_fiscal_year_with(seed, count, |_| {})
}

/// Same as [`try_group_by_fiscal_year`], calling `on_period` with each period as
/// soon as it is generated. Periods seen before a failure have already been reported.
pub fn try_group_by_fiscal_year_with<F>(
    seed: NaiveDate,
    count: usize,
    mut on_period: F,
) -> Result<Vec<PeriodGroup>>
where
    F: FnMut(&Period),
{
    let mut groups = Vec::new();
    let mut open: Option<PeriodGroup> = None;

    for period in generate_periods(seed, count) {
        let period = period?;
        on_period(&period);
        let boundary = fiscal_year_end(period.period_start)?;

        if let Some(group) = open
            .as_mut()
            .filter(|g| g.end_of_last_financial_year == boundary)
        {
            group.periods.push(period);
            continue;
        }

        debug!("Opening financial year group after boundary {}", boundary);
        if let Some(done) = open.replace(PeriodGroup::open(boundary, period)) {
            groups.push(done);
        }
    }

    if let Some(group) = open.filter(|g| !g.periods.is_empty()) {
        groups.push(group);
    }

    info!(
        "Grouped {} periods from {} into {} financial years",
        count,
        seed,
        groups.len()
    );

    Ok(groups)
}

/// Groups `count` periods starting at `seed` by financial year.
///
/// Fail-closed: if any period or boundary cannot be computed the result is empty,
/// never a partial list of groups.
pub fn group_by_fiscal_year(seed: NaiveDate, count: usize) -> Vec<PeriodGroup> {
    group_by_fiscal_year_with(seed, count, |_| {})
}

/// Fail-closed grouping with a per-period callback.
pub fn group_by_fiscal_year_with<F>(seed: NaiveDate, count: usize, on_period: F) -> Vec<PeriodGroup>
where
    F: FnMut(&Period),
{
    match try_group_by_fiscal_year_with(seed, count, on_period) {
        Ok(groups) => groups,
        Err(e) => {
            warn!(
                "Discarding period groups for seed {} ({} periods): {}",
                seed, count, e
            );
            Vec::new()
        }
    }
}
