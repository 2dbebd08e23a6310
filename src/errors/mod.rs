//! Error handling utilities for the daily-headlines application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.
//!
//! Looking up a date that has no record is not an error: the journal returns
//! `None` for it.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the headline history.
///
/// # Examples
///
/// ```
/// use daily_headlines::errors::JournalError;
/// use std::path::PathBuf;
///
/// let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
/// let error = JournalError::Parse {
///     path: PathBuf::from("data/headlines.json"),
///     source,
/// };
///
/// assert!(format!("{}", error).contains("data/headlines.json"));
/// ```
#[derive(Debug, Error)]
pub enum JournalError {
    /// The history file exists but is not a JSON object of dated records.
    #[error("Headline history at {path} could not be parsed: {source}. Fix or move the file aside; it is never overwritten automatically.")]
    Parse {
        /// The path of the file that failed to parse
        path: PathBuf,
        /// The underlying decode error
        #[source]
        source: serde_json::Error,
    },

    /// A top-level key is not a canonical `YYYY-MM-DD` date.
    #[error("Headline history at {path} could not be parsed: key '{key}' is not a YYYY-MM-DD date. Fix or move the file aside; it is never overwritten automatically.")]
    InvalidDate {
        /// The path of the file that failed to parse
        path: PathBuf,
        /// The offending key
        key: String,
    },
}

/// Errors raised by the headline extraction collaborators.
///
/// # Examples
///
/// ```
/// use daily_headlines::errors::ScrapeError;
///
/// let error = ScrapeError::Status {
///     url: "https://www.thedp.com".to_string(),
///     status: 503,
/// };
/// assert!(format!("{}", error).contains("503"));
/// ```
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The page could not be retrieved at all (DNS, connect, timeout, body read).
    #[error("Request to {url} failed: {source}")]
    Request {
        /// The URL that was requested
        url: String,
        /// The underlying HTTP client error
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("Request to {url} returned status {status}")]
    Status {
        /// The URL that was requested
        url: String,
        /// The HTTP status code
        status: u16,
    },

    /// A CSS selector could not be parsed.
    #[error("Invalid selector '{selector}': {message}")]
    Selector {
        /// The selector text
        selector: String,
        /// Description of the parse failure
        message: String,
    },
}

/// Represents all possible errors that can occur in the daily-headlines application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error` trait
/// implementation and formatted error messages.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use daily_headlines::errors::AppError;
///
/// let error = AppError::Config("Data file name is empty".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Data file name is empty");
/// ```
///
/// Converting from an IO error:
/// ```
/// use daily_headlines::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::PermissionDenied, "permission denied");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::PermissionDenied),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    ///
    /// Save failures surface here with their original `ErrorKind`.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Errors loading the headline history.
    #[error("Journal error: {0}")]
    Journal(#[from] JournalError),

    /// Errors fetching or extracting headlines.
    #[error("Scrape error: {0}")]
    Scrape(#[from] ScrapeError),

    /// Invalid command-line input (e.g. an unparsable date).
    #[error("Invalid input: {0}")]
    Input(String),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use daily_headlines::errors::{AppResult, AppError};
///
/// fn might_fail() -> AppResult<String> {
///     if false {
///         return Err(AppError::Input("bad date".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;
