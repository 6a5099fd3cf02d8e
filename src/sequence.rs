use crate::error::Result;
use crate::period::{period_from_start, Period};
use crate::utils::{add_months, first_day_of_month};
use chrono::NaiveDate;
use std::iter::FusedIterator;

/// Lazy sequence of consecutive monthly periods.
///
/// Each period is built only when pulled, so a consumer can stop early without
/// paying for (or failing on) the remainder. After an error the sequence is exhausted.
#[derive(Debug, Clone)]
pub struct PeriodSequence {
    seed: NaiveDate,
    previous: Option<Period>,
    remaining: usize,
}

impl PeriodSequence {
    pub fn new(seed: NaiveDate, count: usize) -> Self {
        Self {
            seed,
            previous: None,
            remaining: count,
        }
    }

    fn next_start(&self) -> Result<NaiveDate> {
        match &self.previous {
            Some(period) => add_months(period.period_start, 1),
            None => first_day_of_month(self.seed),
        }
    }
}

impl Iterator for PeriodSequence {
    type Item = Result<Period>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        match self.next_start().and_then(period_from_start) {
            Ok(period) => {
                self.previous = Some(period);
                self.remaining -= 1;
                Some(Ok(period))
            }
            Err(e) => {
                self.remaining = 0;
                Some(Err(e))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

impl FusedIterator for PeriodSequence {}

/// Starts a sequence of `count` periods at the month containing `seed`.
pub fn generate_periods(seed: NaiveDate, count: usize) -> PeriodSequence {
    PeriodSequence::new(seed, count)
}
