//! Typed failures for indicator calculation

use chrono::NaiveDate;
use thiserror::Error;

/// The two caller-visible failure kinds. Both are recoverable: the caller
/// decides whether to skip the asset or retry with more history.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    #[error("series too short: need at least {required} bars, got {actual}")]
    Insufficient { required: usize, actual: usize },

    #[error("invalid series: {0}")]
    Invalid(InvalidSeries),
}

/// What exactly was malformed about the input series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidSeries {
    #[error("dates not strictly increasing at {date}")]
    UnsortedDates { date: NaiveDate },

    #[error("duplicate date {date}")]
    DuplicateDate { date: NaiveDate },

    #[error("non-finite price at {date}")]
    NonFinitePrice { date: NaiveDate },
}

impl From<InvalidSeries> for DataError {
    fn from(reason: InvalidSeries) -> Self {
        DataError::Invalid(reason)
    }
}
