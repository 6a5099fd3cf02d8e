use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FiscalPeriodError {
    #[error("Date overflow: {operation} from {date} leaves the supported date range")]
    DateOverflow { date: NaiveDate, operation: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl FiscalPeriodError {
    pub(crate) fn overflow(date: NaiveDate, operation: impl Into<String>) -> Self {
        Self::DateOverflow {
            date,
            operation: operation.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FiscalPeriodError>;
