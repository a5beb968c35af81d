//! Daily Temps Library
//!
//! A Rust library backing a small HTTP service that answers one question:
//! what temperature did a given weather station record on a given date?
//!
//! This library provides tools for:
//! - Locating a station's flat-file archive by zero-padded station code
//! - Parsing whitespace/comma-delimited observation files with a fixed preamble
//! - Sentinel cleanup (-9999 means "no measurement") and tenths-to-degrees conversion
//! - Exact-date lookup against the parsed reading table
//! - Mapping every outcome to a stable JSON response shape

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod lookup;
        pub mod reading_parser;
        pub mod station_locator;
    }
}

// HTTP surface
pub mod http {
    pub mod error;
    pub mod handlers;
    pub mod middleware;
    pub mod router;
    pub mod state;
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Reading, ReadingTable, Station};
pub use config::Config;

/// Result type alias for the daily temps service
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for station lookup and file parsing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Observation file format error
    #[error("Data format error in file '{file}': {message}")]
    DataFormat { file: String, message: String },

    /// No data file exists for the requested station
    #[error("Station not found: {station}")]
    StationNotFound { station: String },

    /// Date string failed YYYYMMDD validation
    #[error("Invalid date: '{input}'")]
    InvalidDate { input: String },

    /// A required request parameter was empty
    #[error("Station and date parameters are required")]
    MissingParameters,

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Filesystem scan error
    #[error("Directory scan error: {message}")]
    DirectoryScan {
        message: String,
        #[source]
        source: glob::GlobError,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a data format error with file context
    pub fn data_format(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DataFormat {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a station not found error
    pub fn station_not_found(station: impl Into<String>) -> Self {
        Self::StationNotFound {
            station: station.into(),
        }
    }

    /// Create an invalid date error
    pub fn invalid_date(input: impl Into<String>) -> Self {
        Self::InvalidDate {
            input: input.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a directory scan error
    pub fn directory_scan(message: impl Into<String>, source: glob::GlobError) -> Self {
        Self::DirectoryScan {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<glob::PatternError> for Error {
    fn from(error: glob::PatternError) -> Self {
        Self::Configuration {
            message: format!("Invalid file search pattern: {}", error),
        }
    }
}
