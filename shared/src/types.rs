//! Common types used across the platform

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Units of measure for inventory and sale quantities
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Kg,
    Lot,
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::Kg => write!(f, "kg"),
            Unit::Lot => write!(f, "lot"),
        }
    }
}

/// Date range for statements and reports, inclusive on both ends
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Normalized instant bounds: start of the first day to the last
    /// millisecond of the final day.
    pub fn bounds(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        let start = self.start.and_hms_opt(0, 0, 0).unwrap().and_utc();
        let end = self
            .end
            .and_hms_milli_opt(23, 59, 59, 999)
            .unwrap()
            .and_utc();
        (start, end)
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        let (start, end) = self.bounds();
        instant >= start && instant <= end
    }
}
