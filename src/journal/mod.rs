//! The headline history store.
//!
//! A `HeadlineJournal` maps calendar dates to one `Record` each and is backed
//! by a single JSON file. The file is read once by [`HeadlineJournal::open`]
//! and written only by [`HeadlineJournal::save`]; everything in between
//! happens in memory.
//!
//! ```no_run
//! use daily_headlines::journal::{HeadlineJournal, Record};
//!
//! let mut journal = HeadlineJournal::open("data/headlines.json")?;
//! let mut record = Record::new();
//! record.insert("home_headline".to_string(), "Penn wins".to_string());
//! journal.set_today(record);
//! journal.save()?;
//! # Ok::<(), daily_headlines::AppError>(())
//! ```

pub mod io;


use crate::errors::AppResult;
use chrono::{Local, NaiveDate};
use io::{FileSystemIO, JournalIO};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// One day's data point: field name to field value.
///
/// An empty value means the field was looked for and not found.
pub type Record = BTreeMap<String, String>;

/// All records, keyed by date.
pub type Entries = BTreeMap<NaiveDate, Record>;

/// The current local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Date-keyed journal of records, persisted as one JSON file.
#[derive(Debug)]
pub struct HeadlineJournal<S: JournalIO = FileSystemIO> {
    path: PathBuf,
    entries: Entries,
    storage: S,
}

impl HeadlineJournal<FileSystemIO> {
    /// Loads the journal at `path`, or starts an empty one if no file exists there.
    ///
    /// # Errors
    ///
    /// - `AppError::Journal` if the file exists but is not a JSON object of
    ///   `YYYY-MM-DD` keys to string-valued objects
    /// - `AppError::Io` if the file exists but cannot be read
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        Self::open_with(path, FileSystemIO)
    }
}

impl<S: JournalIO> HeadlineJournal<S> {
    /// Loads the journal at `path` through the given storage backend.
    pub fn open_with(path: impl AsRef<Path>, storage: S) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match storage.read(&path)? {
            Some(content) => io::decode(&path, &content)?,
            None => {
                debug!("No headline history at {:?}; starting empty", path);
                Entries::new()
            }
        };
        info!("Loaded {} dated records from {:?}", entries.len(), path);

        Ok(Self {
            path,
            entries,
            storage,
        })
    }

    /// The file this journal loads from and saves to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every record, in ascending date order.
    pub fn get_all(&self) -> &Entries {
        &self.entries
    }

    /// The record for `date`, or `None` if nothing was recorded that day.
    pub fn get(&self, date: NaiveDate) -> Option<&Record> {
        self.entries.get(&date)
    }

    /// The record for the current local date.
    pub fn get_today(&self) -> Option<&Record> {
        self.get(today())
    }

    /// Stores `record` for `date`, replacing any earlier record for that date
    /// in full. Only the in-memory state changes.
    pub fn set(&mut self, date: NaiveDate, record: Record) {
        if self.entries.insert(date, record).is_some() {
            debug!("Replaced record for {}", date);
        } else {
            debug!("Added record for {}", date);
        }
    }

    /// Stores `record` for the current local date.
    pub fn set_today(&mut self, record: Record) {
        self.set(today(), record);
    }

    /// Number of dated records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the journal holds no records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes the whole journal to its file, replacing what was there.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Io` carrying the underlying write error. The
    /// previous file content is left in place when this fails.
    pub fn save(&self) -> AppResult<()> {
        let contents = io::encode(&self.entries)?;
        self.storage.write(&self.path, &contents)?;
        info!("Saved {} dated records to {:?}", self.entries.len(), self.path);
        Ok(())
    }
}
