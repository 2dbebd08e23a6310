/*!
# daily-headlines

Fetches today's headlines and adds them to the headline history file.

This file contains the main application flow, coordinating the various components
into one run.

## Usage

```text
daily-headlines [OPTIONS]

Options:
      --data-dir <DIR>        Directory holding the headline history
  -d, --date <DATE>           Record under this date instead of today (YYYY-MM-DD or YYYYMMDD)
      --dry-run               Scrape and show the record but do not write the history file
      --no-report             Skip the working-tree and data-file report
      --log-format <FORMAT>   Log output format on stderr [default: text] [possible values: text, json]
      --log-level <LEVEL>     Log level; overrides RUST_LOG
  -v, --verbose               Same as --log-level debug
  -h, --help                  Print help
  -V, --version               Print version
```

## Configuration

See the `config` module for the `HEADLINES_*` environment variables.
*/

use clap::Parser;
use daily_headlines::cli::CliArgs;
use daily_headlines::config::Config;
use daily_headlines::constants::{
    APP_NAME, DEFAULT_LOG_LEVEL, LOG_FORMAT_JSON, TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME,
    TREE_IGNORED_DIRS,
};
use daily_headlines::errors::{AppError, AppResult};
use daily_headlines::journal::{self, HeadlineJournal};
use daily_headlines::ops::{self, RunOutcome};
use daily_headlines::scrape::{default_sources, HeadlineScraper};
use std::process::ExitCode;
use std::{env, fs, io};
use tracing::{debug, info, info_span};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

/// Sets up stderr logging in the requested format plus a daily-rotated log file.
///
/// An explicit `level` wins over `RUST_LOG`; without either the level is `info`.
fn init_logging(format: &str, level: Option<&str>, log_file: &str) -> AppResult<()> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level).map_err(|e| {
            AppError::Config(format!("Invalid log level configuration: {}: {}", level, e))
        })?,
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL)),
    };

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(tracing_appender::rolling::daily(".", log_file));
    let registry = tracing_subscriber::registry().with(filter).with(file_layer);

    if format == LOG_FORMAT_JSON {
        registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .try_init()
    } else {
        registry.with(fmt::layer().with_writer(io::stderr)).try_init()
    }
    .map_err(|e| AppError::Config(format!("Failed to initialize logging: {}", e)))
}

/// The main entry point for the daily-headlines application.
///
/// This function coordinates the overall application flow:
/// 1. Parses command-line arguments and loads configuration
/// 2. Initializes logging
/// 3. Creates the data directory if needed
/// 4. Opens the headline journal
/// 5. Scrapes the sources and saves the record for the run date
/// 6. Logs the working tree and the history file
///
/// A scrape failure is logged and the run still succeeds without saving.
/// Configuration errors, a corrupt history file and failed writes end the
/// run with a non-zero exit status.
fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Logged once, here; logging may not be initialized yet
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> AppResult<()> {
    let args = CliArgs::parse();

    let mut config = Config::load()?;
    if let Some(dir) = &args.data_dir {
        config.data_dir = dir.clone();
    }
    config.validate()?;

    init_logging(
        &args.log_format,
        args.effective_log_level(),
        &config.log_file,
    )?;

    let span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service = TRACING_SERVICE_NAME,
        correlation_id = %Uuid::new_v4()
    );
    let _guard = span.enter();

    info!("Starting {}", APP_NAME);
    debug!("CLI arguments: {:?}", args);
    debug!("Configuration: {:?}", config);

    let date = match args.parse_date() {
        Some(Ok(date)) => date,
        Some(Err(e)) => return Err(AppError::Input(format!("Invalid date format: {}", e))),
        None => journal::today(),
    };

    info!("Creating data directory if it does not exist");
    fs::create_dir_all(&config.data_dir)?;

    info!("Loading headline journal");
    let mut journal = HeadlineJournal::open(config.data_path())?;

    let scraper = HeadlineScraper::new(config.http_timeout)?;
    let sources = default_sources(&config.base_url);
    let outcome = ops::run_daily(&mut journal, &scraper, &sources, date, args.dry_run)?;

    if let RunOutcome::Recorded { saved: false, .. } = outcome {
        if let Some(record) = journal.get(date) {
            let rendered = serde_json::to_string_pretty(record).map_err(io::Error::from)?;
            println!("{}", rendered);
        }
    }

    if !args.no_report {
        ops::log_directory_tree(&env::current_dir()?, TREE_IGNORED_DIRS)?;
        ops::log_data_file(journal.path())?;
    }

    info!("Scrape complete");
    info!("Exiting");
    Ok(())
}
