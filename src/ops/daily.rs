//! Record one day's headlines.

use crate::errors::{AppResult, ScrapeError};
use crate::journal::io::JournalIO;
use crate::journal::HeadlineJournal;
use crate::scrape::{HeadlineScraper, HeadlineSource};
use chrono::NaiveDate;
use tracing::{error, info, warn};

/// What a daily run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// A record was stored for `date`.
    Recorded {
        /// Date the record was stored under
        date: NaiveDate,
        /// Number of fields in the record
        fields: usize,
        /// Whether the journal was written to disk
        saved: bool,
    },
    /// A page could not be retrieved; the journal and its file were left untouched.
    Skipped,
}

/// Scrapes every source and stores the result as the record for `date`.
///
/// # Flow
///
/// 1. Fetch each source in order and assemble one record
/// 2. If a page cannot be retrieved at all, log it and return `RunOutcome::Skipped`
/// 3. Replace the journal's record for `date`
/// 4. Save the journal unless `dry_run` is set
///
/// A page that answers with an error status only blanks its own field.
///
/// # Errors
///
/// - `AppError::Scrape` if a source carries an invalid selector
/// - `AppError::Io` if the save fails
pub fn run_daily<S: JournalIO>(
    journal: &mut HeadlineJournal<S>,
    scraper: &HeadlineScraper,
    sources: &[HeadlineSource],
    date: NaiveDate,
    dry_run: bool,
) -> AppResult<RunOutcome> {
    info!("Starting scrape of {} sources for {}", sources.len(), date);

    let record = match scraper.collect_record(sources) {
        Ok(record) => record,
        Err(e @ ScrapeError::Selector { .. }) => return Err(e.into()),
        Err(e) => {
            error!("Failed to scrape data point: {}", e);
            return Ok(RunOutcome::Skipped);
        }
    };

    let fields = record.len();
    journal.set(date, record);

    if dry_run {
        warn!("Dry run: record for {} not saved", date);
        return Ok(RunOutcome::Recorded {
            date,
            fields,
            saved: false,
        });
    }

    journal.save()?;
    info!("Saved headline journal");
    Ok(RunOutcome::Recorded {
        date,
        fields,
        saved: true,
    })
}

#[cfg(test)]
mod tests {
    // Integration tests in tests/daily_run_tests.rs
}
