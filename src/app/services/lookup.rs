//! Date-indexed lookup over a parsed reading table.
//!
//! Dates are unique per station in well-formed archives. If a file carries
//! duplicate rows for one date anyway, the first match wins; an absent date
//! yields "no data" in the same shape as a sentinel-masked reading.

use chrono::NaiveDate;

use crate::app::models::ReadingTable;

/// Outcome of a single-date lookup
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LookupOutcome {
    /// A reading exists for the date and carries a measurement
    Value(f64),
    /// The date is present but sentinel-masked, or absent from the table
    NoData,
}

impl LookupOutcome {
    /// The measurement, if any
    pub fn temperature(&self) -> Option<f64> {
        match self {
            LookupOutcome::Value(v) => Some(*v),
            LookupOutcome::NoData => None,
        }
    }
}

/// Find the reading for an exact calendar date
pub fn lookup_date(table: &ReadingTable, date: NaiveDate) -> LookupOutcome {
    match table.iter().find(|reading| reading.date == date) {
        Some(reading) => match reading.temperature {
            Some(value) => LookupOutcome::Value(value),
            None => LookupOutcome::NoData,
        },
        None => LookupOutcome::NoData,
    }
}
