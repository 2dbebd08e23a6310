//! Configuration management for the daily-headlines application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults.
//!
//! # Environment Variables
//!
//! - `HEADLINES_DATA_DIR`: Directory holding the history file (defaults to `data`)
//! - `HEADLINES_DATA_FILE`: History file name (defaults to `daily_pennsylvanian_headlines.json`)
//! - `HEADLINES_LOG_FILE`: Log file name, rotated daily (defaults to `scrape.log`)
//! - `HEADLINES_BASE_URL`: Root URL of the news site (defaults to `https://www.thedp.com`)
//! - `HEADLINES_HTTP_TIMEOUT_SECS`: Per-request timeout (defaults to 30)

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_DATA_DIR, DEFAULT_DATA_FILE, DEFAULT_HTTP_TIMEOUT_SECS,
    DEFAULT_LOG_FILE, ENV_VAR_BASE_URL, ENV_VAR_DATA_DIR, ENV_VAR_DATA_FILE,
    ENV_VAR_HTTP_TIMEOUT, ENV_VAR_LOG_FILE,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration for the daily-headlines application.
///
/// # Examples
///
/// ```
/// use daily_headlines::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     data_dir: PathBuf::from("/srv/headlines"),
///     ..Config::default()
/// };
/// assert_eq!(
///     config.data_path(),
///     PathBuf::from("/srv/headlines/daily_pennsylvanian_headlines.json")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the history file. Created by the binary if missing.
    pub data_dir: PathBuf,

    /// File name of the history inside `data_dir`.
    pub data_file: String,

    /// File name of the log, written next to the working directory and rotated daily.
    pub log_file: String,

    /// Root URL of the news site; section pages hang off it.
    pub base_url: String,

    /// Timeout applied to each page request.
    pub http_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            data_file: DEFAULT_DATA_FILE.to_string(),
            log_file: DEFAULT_LOG_FILE.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// The data directory is expanded with `shellexpand`, so `~` and `$VAR`
    /// references work.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if path expansion fails or the timeout is not
    /// a whole number of seconds.
    pub fn load() -> AppResult<Self> {
        let defaults = Config::default();

        let data_dir = match env::var(ENV_VAR_DATA_DIR) {
            Ok(raw) => expand_path(&raw)?,
            Err(_) => defaults.data_dir,
        };

        let http_timeout = match env::var(ENV_VAR_HTTP_TIMEOUT) {
            Ok(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|e| {
                    AppError::Config(format!(
                        "{} must be a whole number of seconds, got '{}': {}",
                        ENV_VAR_HTTP_TIMEOUT, raw, e
                    ))
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => defaults.http_timeout,
        };

        Ok(Config {
            data_dir,
            data_file: env::var(ENV_VAR_DATA_FILE).unwrap_or(defaults.data_file),
            log_file: env::var(ENV_VAR_LOG_FILE).unwrap_or(defaults.log_file),
            base_url: env::var(ENV_VAR_BASE_URL).unwrap_or(defaults.base_url),
            http_timeout,
        })
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - the data directory path is empty
    /// - the data or log file name is empty or contains a path separator
    /// - the base URL is not `http://` or `https://`
    /// - the HTTP timeout is zero
    ///
    /// # Examples
    ///
    /// ```
    /// use daily_headlines::Config;
    ///
    /// assert!(Config::default().validate().is_ok());
    ///
    /// let invalid = Config {
    ///     base_url: "ftp://example.com".to_string(),
    ///     ..Config::default()
    /// };
    /// assert!(invalid.validate().is_err());
    /// ```
    pub fn validate(&self) -> AppResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        validate_file_name("Data file", &self.data_file)?;
        validate_file_name("Log file", &self.log_file)?;

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "Base URL must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if self.http_timeout.is_zero() {
            return Err(AppError::Config(
                "HTTP timeout must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Full path of the history file.
    pub fn data_path(&self) -> PathBuf {
        self.data_dir.join(&self.data_file)
    }
}

fn expand_path(raw: &str) -> AppResult<PathBuf> {
    let expanded = shellexpand::full(raw)
        .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;
    Ok(PathBuf::from(expanded.into_owned()))
}

fn validate_file_name(what: &str, name: &str) -> AppResult<()> {
    if name.is_empty() {
        return Err(AppError::Config(format!("{} name is empty", what)));
    }
    if Path::new(name).components().count() != 1 || name.contains(['/', '\\']) {
        return Err(AppError::Config(format!(
            "{} name must not contain path separators: '{}'",
            what, name
        )));
    }
    Ok(())
}
