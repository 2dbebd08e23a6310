use crate::constants::{
    APP_DESCRIPTION, APP_NAME, DATE_FORMAT_COMPACT, DATE_FORMAT_ISO, LOG_FORMAT_JSON,
    LOG_FORMAT_TEXT,
};
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// Scrapes today's headlines into the headline history
#[derive(Parser, Debug)]
#[clap(name = APP_NAME, about = APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Directory holding the headline history (overrides HEADLINES_DATA_DIR)
    #[clap(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Record under this date instead of today (format: YYYY-MM-DD or YYYYMMDD)
    #[clap(short = 'd', long)]
    pub date: Option<String>,

    /// Scrape and show the record but do not write the history file
    #[clap(long)]
    pub dry_run: bool,

    /// Skip the working-tree and data-file report at the end of the run
    #[clap(long)]
    pub no_report: bool,

    /// Log output format on stderr
    #[clap(long, value_name = "FORMAT", default_value = LOG_FORMAT_TEXT,
           value_parser = [LOG_FORMAT_TEXT, LOG_FORMAT_JSON])]
    pub log_format: String,

    /// Log level (error, warn, info, debug, trace); overrides RUST_LOG
    #[clap(long, value_name = "LEVEL", conflicts_with = "verbose")]
    pub log_level: Option<String>,

    /// Print verbose output (same as --log-level debug)
    #[clap(short = 'v', long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Get the date if specified, parsing it into a NaiveDate
    pub fn parse_date(&self) -> Option<Result<NaiveDate, chrono::ParseError>> {
        self.date.as_ref().map(|date_str| {
            NaiveDate::parse_from_str(date_str, DATE_FORMAT_ISO)
                .or_else(|_| NaiveDate::parse_from_str(date_str, DATE_FORMAT_COMPACT))
        })
    }

    /// The log level asked for on the command line, if any.
    pub fn effective_log_level(&self) -> Option<&str> {
        if self.verbose {
            Some("debug")
        } else {
            self.log_level.as_deref()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_default_args() {
        let args = CliArgs::parse_from(vec!["daily-headlines"]);
        assert!(args.data_dir.is_none());
        assert!(args.date.is_none());
        assert!(!args.dry_run);
        assert!(!args.no_report);
        assert_eq!(args.log_format, "text");
        assert!(args.effective_log_level().is_none());
    }

    #[test]
    fn test_date_option() {
        let args = CliArgs::parse_from(vec!["daily-headlines", "--date", "2024-01-01"]);
        assert_eq!(args.date, Some("2024-01-01".to_string()));

        // Test short form
        let args = CliArgs::parse_from(vec!["daily-headlines", "-d", "20240101"]);
        assert_eq!(args.date, Some("20240101".to_string()));
    }

    #[test]
    fn test_parse_date() {
        let args = CliArgs::parse_from(vec!["daily-headlines", "--date", "2024-01-15"]);
        let parsed = args.parse_date().unwrap().unwrap();
        assert_eq!((parsed.year(), parsed.month(), parsed.day()), (2024, 1, 15));

        let args = CliArgs::parse_from(vec!["daily-headlines", "--date", "20240115"]);
        let parsed = args.parse_date().unwrap().unwrap();
        assert_eq!((parsed.year(), parsed.month(), parsed.day()), (2024, 1, 15));

        let args = CliArgs::parse_from(vec!["daily-headlines"]);
        assert!(args.parse_date().is_none());

        let args = CliArgs::parse_from(vec!["daily-headlines", "--date", "invalid-date"]);
        assert!(args.parse_date().unwrap().is_err());
    }

    #[test]
    fn test_flags() {
        let args = CliArgs::parse_from(vec![
            "daily-headlines",
            "--dry-run",
            "--no-report",
            "--data-dir",
            "/tmp/h",
            "--log-format",
            "json",
        ]);
        assert!(args.dry_run);
        assert!(args.no_report);
        assert_eq!(args.data_dir, Some(PathBuf::from("/tmp/h")));
        assert_eq!(args.log_format, "json");
    }

    #[test]
    fn test_log_level() {
        let args = CliArgs::parse_from(vec!["daily-headlines", "-v"]);
        assert_eq!(args.effective_log_level(), Some("debug"));

        let args = CliArgs::parse_from(vec!["daily-headlines", "--log-level", "warn"]);
        assert_eq!(args.effective_log_level(), Some("warn"));
    }

    #[test]
    fn test_rejects_unknown_log_format() {
        let result = CliArgs::try_parse_from(vec!["daily-headlines", "--log-format", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbose_conflicts_with_log_level() {
        let result =
            CliArgs::try_parse_from(vec!["daily-headlines", "-v", "--log-level", "warn"]);
        assert!(result.is_err());
    }
}
