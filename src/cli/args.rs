//! Command-line argument definitions for the daily temps server.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// CLI arguments for the daily temps HTTP server
///
/// Serves daily weather station temperature lookups over HTTP, backed by
/// flat-file observation archives on disk.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "daily_temps",
    version,
    about = "HTTP API serving daily weather station temperatures from flat-file archives"
)]
pub struct Args {
    /// Directory holding one observation file per station
    ///
    /// Filenames must embed the zero-padded 6-digit station code. If not
    /// specified, falls back to the DAILY_TEMPS_DATA_DIR environment variable
    /// and then the platform data directory.
    #[arg(short = 'd', long = "data-dir", value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Socket address for the HTTP listener
    ///
    /// Falls back to the DAILY_TEMPS_BIND environment variable, then
    /// 127.0.0.1:8000.
    #[arg(short = 'b', long = "bind", value_name = "ADDR")]
    pub bind_addr: Option<SocketAddr>,

    /// Enable verbose (debug-level) logging
    #[arg(short = 'v', long = "verbose", conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress all but warning and error logs
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Log level implied by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_level() {
        let args = Args::parse_from(["daily_temps"]);
        assert_eq!(args.get_log_level(), "info");
    }

    #[test]
    fn test_verbose_log_level() {
        let args = Args::parse_from(["daily_temps", "--verbose"]);
        assert_eq!(args.get_log_level(), "debug");
    }

    #[test]
    fn test_quiet_log_level() {
        let args = Args::parse_from(["daily_temps", "--quiet"]);
        assert_eq!(args.get_log_level(), "warn");
    }

    #[test]
    fn test_data_dir_and_bind_parsing() {
        let args = Args::parse_from([
            "daily_temps",
            "--data-dir",
            "/srv/obs",
            "--bind",
            "0.0.0.0:9000",
        ]);
        assert_eq!(args.data_dir, Some(PathBuf::from("/srv/obs")));
        assert_eq!(args.bind_addr, Some("0.0.0.0:9000".parse().unwrap()));
    }
}
