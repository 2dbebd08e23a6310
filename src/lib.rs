/*!
# daily-headlines

daily-headlines fetches the front-page headline and a handful of section
headlines from a news site once a day and keeps them in a date-keyed history
file. Each run adds (or replaces) the record for one date and leaves every
other date untouched.

## Architecture

- `journal`: the headline history store (open, get, set, save)
- `scrape`: fetching pages and extracting headlines with CSS selectors
- `ops`: the daily run and the end-of-run report
- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure

## Usage Example

```rust,no_run
use daily_headlines::journal::{self, HeadlineJournal};
use daily_headlines::ops;
use daily_headlines::scrape::{default_sources, HeadlineScraper};
use daily_headlines::Config;

fn main() -> daily_headlines::AppResult<()> {
    let config = Config::load()?;
    let mut journal = HeadlineJournal::open(config.data_path())?;
    let scraper = HeadlineScraper::new(config.http_timeout)?;
    let sources = default_sources(&config.base_url);

    ops::run_daily(&mut journal, &scraper, &sources, journal::today(), false)?;
    Ok(())
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// The headline history store
pub mod journal;
/// Operations run by the binary
pub mod ops;
/// Headline extraction
pub mod scrape;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use journal::{HeadlineJournal, Record};
