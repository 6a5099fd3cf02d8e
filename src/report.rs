//! Text and JSON rendering of generated periods. Builds strings only; callers print them.

use crate::error::Result;
use crate::grouper::{group_by_fiscal_year_with, PeriodGroup};
use crate::period::Period;
use crate::utils::format_slash_date;
use chrono::NaiveDate;

pub const PROGRESS_HEADER: &str = "Start Period    End Period    Period Number";

pub fn format_start_banner(seed: NaiveDate) -> String {
    format!("Start Date: {}", format_slash_date(seed))
}

pub fn format_progress_line(period: &Period) -> String {
    format!(
        "{:<16}{:<14}{}",
        format_slash_date(period.period_start),
        format_slash_date(period.period_end),
        period.period_number
    )
}

/// Banner, blank line and column header, each terminated by a newline.
pub fn format_progress_header(seed: NaiveDate) -> String {
    format!("{}\n\n{}\n", format_start_banner(seed), PROGRESS_HEADER)
}

/// Groups `count` periods from `seed`, recording a progress line for each period as
/// it is generated. Lines for periods produced before a failure are kept even
/// though the groups come back empty.
pub fn render_progress(seed: NaiveDate, count: usize) -> (String, Vec<PeriodGroup>) {
    let mut out = format_progress_header(seed);
    let groups = group_by_fiscal_year_with(seed, count, |period| {
        out.push_str(&format_progress_line(period));
        out.push('\n');
    });
    (out, groups)
}

pub fn render_groups_json(groups: &[PeriodGroup]) -> Result<String> {
    Ok(serde_json::to_string_pretty(groups)?)
}
