//! Application constants for the daily temps service
//!
//! This module contains the file format constants, validation bounds,
//! and default values used throughout the application.

// =============================================================================
// Observation File Format
// =============================================================================

/// Width of the zero-padded numeric station code embedded in data filenames
pub const STATION_CODE_WIDTH: usize = 6;

/// Number of preamble lines before the data section of an observation file
pub const PREAMBLE_LINES: usize = 20;

/// Raw value marking a missing measurement
pub const MISSING_VALUE_SENTINEL: i32 = -9999;

/// Raw temperatures are stored in tenths of a degree
pub const TENTHS_PER_DEGREE: f64 = 10.0;

/// Zero-based field position of the date column in a data row
pub const DATE_FIELD_INDEX: usize = 0;

/// Zero-based field position of the raw temperature column in a data row
pub const TEMPERATURE_FIELD_INDEX: usize = 1;

// =============================================================================
// Date Validation
// =============================================================================

/// Expected date format for request parameters and data rows
pub const DATE_FORMAT: &str = "%Y%m%d";

/// Earliest acceptable observation year (inclusive)
pub const MIN_YEAR: i32 = 1988;

/// Latest acceptable observation year (inclusive)
pub const MAX_YEAR: i32 = 2100;

// =============================================================================
// Service Defaults
// =============================================================================

/// Default socket address for the HTTP listener
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// Directory name used when no data directory is configured
pub const DEFAULT_DATA_DIR_NAME: &str = "daily-temps";

// =============================================================================
// Response Messages
// =============================================================================

/// 400 body when either path parameter is empty
pub const MSG_MISSING_PARAMETERS: &str = "Station and date parameters are required.";

/// 400 body when the date fails YYYYMMDD validation or the year is out of range
pub const MSG_INVALID_DATE: &str = "Invalid date format. Date format must be YYYYMMDD.";

/// 500 body for any internal failure
pub const MSG_INTERNAL_ERROR: &str = "An unexpected error occurred.";
