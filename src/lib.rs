//! # Fiscal Period Builder
//!
//! Generates consecutive monthly accounting periods from a seed date and groups them
//! by Australian financial year (1 July to 30 June).
//!
//! ## Core Concepts
//!
//! - **Period**: one calendar month, numbered 1 (July) to 12 (June)
//! - **Fiscal year boundary**: the 30 June that closed the most recent financial year
//! - **Period group**: every generated period that shares one boundary
//! - **Fail-closed grouping**: a seed that runs past 9999-12-31 yields no groups at all
//!
//! ## Example
//!
//! ```rust
//! use fiscal_period_builder::*;
//! use chrono::NaiveDate;
//!
//! let seed = NaiveDate::from_ymd_opt(2019, 7, 15).unwrap();
//! let groups = group_by_fiscal_year(seed, 24);
//!
//! assert_eq!(groups.len(), 2);
//! assert_eq!(groups[0].periods[0].period_number, 1);
//! assert_eq!(
//!     groups[1].end_of_last_financial_year,
//!     NaiveDate::from_ymd_opt(2020, 6, 30).unwrap()
//! );
//! ```

pub mod error;
pub mod fiscal_year;
pub mod grouper;
pub mod period;
pub mod report;
pub mod schema;
pub mod sequence;
pub mod utils;

pub use error::{FiscalPeriodError, Result};
pub use fiscal_year::{fiscal_year_end, FISCAL_YEAR_END_DAY, FISCAL_YEAR_END_MONTH};
pub use grouper::{
    group_by_fiscal_year, group_by_fiscal_year_with, try_group_by_fiscal_year,
    try_group_by_fiscal_year_with, PeriodGroup,
};
pub use period::{period_from_start, period_number_for_month, Period};
pub use report::{
    format_progress_header, format_progress_line, format_start_banner, render_groups_json,
    render_progress, PROGRESS_HEADER,
};
pub use schema::{parse_period_count, parse_seed_date, PeriodRequest};
pub use sequence::{generate_periods, PeriodSequence};
pub use utils::{is_leap_year, MAX_SUPPORTED_YEAR, MIN_SUPPORTED_YEAR};
