//! Station locator service for mapping station identifiers to data files.
//!
//! Each station has exactly one observation file in the data directory, and
//! the filename embeds the station code zero-padded to six digits. The
//! locator scans the directory per request; there is no persistent index,
//! so files added or removed between requests are picked up immediately.

use std::path::PathBuf;
use tracing::debug;

use crate::app::models::Station;
use crate::{Error, Result};

/// Locates station data files in a configured directory
#[derive(Debug, Clone)]
pub struct StationLocator {
    data_dir: PathBuf,
}

impl StationLocator {
    /// Create a locator over the given data directory
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Find the data file for a station identifier
    ///
    /// Scans the data directory for a filename embedding the zero-padded
    /// station code. Returns `Error::StationNotFound` when no file matches.
    /// If several files match, the lexicographically first is used so that
    /// repeated requests resolve to the same file.
    pub fn locate(&self, station_id: &str) -> Result<Station> {
        let station_id = station_id.trim();
        if station_id.is_empty() {
            return Err(Error::MissingParameters);
        }

        // Station codes are numeric. Anything else cannot name a file and
        // must not reach the glob pattern, where `?`, `*`, and `[` carry
        // wildcard meaning.
        if !station_id.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::station_not_found(station_id));
        }

        let code = Station::padded_code(station_id);
        let pattern = self
            .data_dir
            .join(format!("*{}*", code))
            .to_string_lossy()
            .into_owned();
        debug!("Scanning for station file: {}", pattern);

        let mut matches: Vec<PathBuf> = Vec::new();
        for entry in glob::glob(&pattern)? {
            let path =
                entry.map_err(|e| Error::directory_scan("Failed to read directory entry", e))?;
            if path.is_file() {
                matches.push(path);
            }
        }
        matches.sort();

        match matches.into_iter().next() {
            Some(data_file) => Ok(Station {
                id: station_id.to_string(),
                data_file,
            }),
            None => Err(Error::station_not_found(station_id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_data_file(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, "header\n").unwrap();
        path
    }

    #[test]
    fn test_locate_finds_file_by_padded_code() {
        let dir = TempDir::new().unwrap();
        let expected = create_data_file(&dir, "daily_tmax_000015_archive.txt");
        create_data_file(&dir, "daily_tmax_000020_archive.txt");

        let locator = StationLocator::new(dir.path());
        let station = locator.locate("15").unwrap();

        assert_eq!(station.id, "15");
        assert_eq!(station.data_file, expected);
    }

    #[test]
    fn test_locate_unknown_station() {
        let dir = TempDir::new().unwrap();
        create_data_file(&dir, "daily_tmax_000015_archive.txt");

        let locator = StationLocator::new(dir.path());
        let result = locator.locate("10");

        assert!(matches!(
            result,
            Err(Error::StationNotFound { station }) if station == "10"
        ));
    }

    #[test]
    fn test_locate_empty_identifier() {
        let dir = TempDir::new().unwrap();
        let locator = StationLocator::new(dir.path());

        assert!(matches!(locator.locate("  "), Err(Error::MissingParameters)));
    }

    #[test]
    fn test_locate_rejects_wildcard_identifiers() {
        let dir = TempDir::new().unwrap();
        create_data_file(&dir, "daily_tmax_000015_archive.txt");

        let locator = StationLocator::new(dir.path());

        // "1?" would otherwise glob-match the trailing digit of 000015
        assert!(matches!(
            locator.locate("1?"),
            Err(Error::StationNotFound { station }) if station == "1?"
        ));
        assert!(matches!(
            locator.locate("*"),
            Err(Error::StationNotFound { .. })
        ));
    }

    #[test]
    fn test_locate_rejects_malformed_pattern_identifiers() {
        let dir = TempDir::new().unwrap();
        create_data_file(&dir, "daily_tmax_000015_archive.txt");

        let locator = StationLocator::new(dir.path());

        // "[" is a glob syntax error; it must surface as an unknown
        // station, not a pattern failure
        assert!(matches!(
            locator.locate("["),
            Err(Error::StationNotFound { station }) if station == "["
        ));
    }

    #[test]
    fn test_locate_does_not_match_unpadded_code() {
        let dir = TempDir::new().unwrap();
        // "15" appears in the year range but the padded code 000015 does not
        create_data_file(&dir, "daily_tmax_000099_1510_2015.txt");

        let locator = StationLocator::new(dir.path());
        assert!(locator.locate("15").is_err());
    }

    #[test]
    fn test_locate_prefers_first_sorted_match() {
        let dir = TempDir::new().unwrap();
        let first = create_data_file(&dir, "a_000015.txt");
        create_data_file(&dir, "b_000015.txt");

        let locator = StationLocator::new(dir.path());
        let station = locator.locate("15").unwrap();

        assert_eq!(station.data_file, first);
    }
}
