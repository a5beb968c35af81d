//! Core data models for station observation lookups.
//!
//! These types carry the data contract end to end: a `Station` names the
//! observation point, a `Reading` is one (date, temperature) observation with
//! sentinel cleanup already applied, and a `ReadingTable` is the fully parsed
//! contents of one station's data file.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{MISSING_VALUE_SENTINEL, STATION_CODE_WIDTH, TENTHS_PER_DEGREE};

/// A weather observation station identified by a numeric code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    /// Station identifier as supplied by the client (e.g. "15")
    pub id: String,

    /// Path to the station's observation data file
    pub data_file: PathBuf,
}

impl Station {
    /// Station identifier zero-padded to the filename code width
    ///
    /// Filenames embed the code padded to 6 characters, so station "15"
    /// appears in filenames as "000015".
    pub fn padded_code(id: &str) -> String {
        format!("{:0>width$}", id, width = STATION_CODE_WIDTH)
    }
}

/// One daily observation, with the sentinel already mapped to `None`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    /// Calendar date of the observation
    pub date: NaiveDate,

    /// Temperature in degrees, or `None` when the raw value was the
    /// missing-data sentinel
    pub temperature: Option<f64>,
}

impl Reading {
    /// Build a reading from a raw archive value in tenths of a degree
    pub fn from_raw(date: NaiveDate, raw: i32) -> Self {
        let temperature = if raw == MISSING_VALUE_SENTINEL {
            None
        } else {
            Some(f64::from(raw) / TENTHS_PER_DEGREE)
        };
        Self { date, temperature }
    }
}

/// Fully parsed contents of one station's data file
///
/// Readings keep file order. Dates are expected to be unique per station;
/// should a file carry duplicates, lookups take the first match.
#[derive(Debug, Clone, Default)]
pub struct ReadingTable {
    readings: Vec<Reading>,
}

impl ReadingTable {
    /// Create a table from parsed readings
    pub fn new(readings: Vec<Reading>) -> Self {
        Self { readings }
    }

    /// Number of readings in the table
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Whether the table holds no readings
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Iterate over readings in file order
    pub fn iter(&self) -> impl Iterator<Item = &Reading> {
        self.readings.iter()
    }
}
