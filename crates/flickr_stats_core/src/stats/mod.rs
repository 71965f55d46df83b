//! Descriptive statistics over photo records.
//!
//! # Responsibility
//! - Project feed fields (`extract`).
//! - Run the six aggregations (`aggregate`, `rank`).
//! - Read capture dates leniently (`date`).
//! - Bundle every aggregation into one serializable summary (`report`).
//!
//! # Invariants
//! - No aggregation mutates its input or holds state between calls.
//! - Undefined results (empty input, bad rank, bad date) are errors, never defaults.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod aggregate;
pub mod date;
pub mod extract;
pub mod rank;
pub mod report;

/// Result type for aggregation APIs.
pub type StatsResult<T> = Result<T, StatsError>;

/// Aggregation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// Operation has no defined value for zero records.
    EmptyCollection { operation: &'static str },
    /// `rank` does not index the distinct-tag table.
    RankOutOfRange { rank: usize, distinct: usize },
    /// `date_taken` of the record at `index` is not a date.
    UnparseableDate { index: usize, value: String },
}

impl Display for StatsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCollection { operation } => {
                write!(f, "{operation} is undefined for an empty record collection")
            }
            Self::RankOutOfRange { rank, distinct } => write!(
                f,
                "tag rank {rank} out of range: only {distinct} distinct tags"
            ),
            Self::UnparseableDate { index, value } => {
                write!(f, "record {index} has unparseable date_taken `{value}`")
            }
        }
    }
}

impl Error for StatsError {}
