//! Constants used throughout the application.
//!
//! This module contains all constants used in the daily-headlines application,
//! organized into logical groups. Having constants centralized makes them easier
//! to find, modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "daily-headlines";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "Scrapes daily headlines and keeps a date-keyed history of them";

// CLI Arguments & Defaults
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Configuration Keys & Environment Variables
/// Environment variable for the directory holding the headline history.
pub const ENV_VAR_DATA_DIR: &str = "HEADLINES_DATA_DIR";
/// Environment variable for the headline history file name.
pub const ENV_VAR_DATA_FILE: &str = "HEADLINES_DATA_FILE";
/// Environment variable for the log file name.
pub const ENV_VAR_LOG_FILE: &str = "HEADLINES_LOG_FILE";
/// Environment variable for the base URL of the news site.
pub const ENV_VAR_BASE_URL: &str = "HEADLINES_BASE_URL";
/// Environment variable for the HTTP timeout in seconds.
pub const ENV_VAR_HTTP_TIMEOUT: &str = "HEADLINES_HTTP_TIMEOUT_SECS";

/// Default directory for the headline history, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "data";
/// Default file name of the headline history.
pub const DEFAULT_DATA_FILE: &str = "daily_pennsylvanian_headlines.json";
/// Default log file name. Rotated daily.
pub const DEFAULT_LOG_FILE: &str = "scrape.log";
/// Default base URL of the news site.
pub const DEFAULT_BASE_URL: &str = "https://www.thedp.com";
/// Default HTTP timeout in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

// Scraping
/// User agent sent with every page request.
pub const USER_AGENT: &str = concat!("daily-headlines/", env!("CARGO_PKG_VERSION"));
/// Container selector shared by the section pages.
pub const SECTION_ARTICLE_SELECTOR: &str = "div.row.section-article";
/// Headline selector inside a section article container.
pub const SECTION_HEADLINE_SELECTOR: &str = "h3.standard-link";
/// Headline selector on the home page.
pub const HOME_HEADLINE_SELECTOR: &str = "a.frontpage-link";

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD). Also the persisted key format.
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Date format string for compact date format (YYYYMMDD).
pub const DATE_FORMAT_COMPACT: &str = "%Y%m%d";

// File System Parameters
/// Prefix for the temporary file written next to the history during a save.
pub const JOURNAL_TEMP_PREFIX: &str = ".headlines-";
/// Directory names skipped by the workspace tree report.
pub const TREE_IGNORED_DIRS: &[&str] = &[".git", "target", "__pycache__"];

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "daily-headlines";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "daily_run";
