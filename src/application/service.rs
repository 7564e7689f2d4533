use std::path::{Path, PathBuf};

use crate::domain::{Entry, Ledger};
use crate::io::{append_entry_csv, read_entries_csv, ImportResult};

use super::AppError;

/// Application service over a journal file.
/// This is the primary interface for any client (CLI, TUI, etc.): the core
/// `Ledger` stays a memory-only value, and this service handles the journal
/// file the embedding caller chose to keep.
pub struct JournalService {
    path: PathBuf,
}

impl JournalService {
    /// Create a service for the given journal path. No I/O happens until
    /// the journal is loaded or appended to.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the journal into a ledger. The first malformed record fails the
    /// whole load; use [`JournalService::load_lenient`] to collect errors.
    pub fn load(&self) -> Result<Ledger, AppError> {
        let result = self.load_lenient()?;
        match result.errors.first() {
            Some(err) => Err(AppError::MalformedJournal {
                line: err.line,
                reason: err.error.clone(),
            }),
            None => Ok(result.ledger),
        }
    }

    /// Load the journal, collecting one error per rejected record instead
    /// of failing.
    pub fn load_lenient(&self) -> Result<ImportResult, AppError> {
        if !self.path.exists() {
            return Err(AppError::JournalNotFound(self.path.display().to_string()));
        }
        let file = std::fs::File::open(&self.path)?;
        Ok(read_entries_csv(file))
    }

    /// Validate a movement and append it to the journal file, creating the
    /// file (with header) when absent. On a validation failure the file is
    /// untouched.
    pub fn append(
        &self,
        date: &str,
        description: &str,
        amount: f64,
        kind: &str,
    ) -> Result<Entry, AppError> {
        // Refuse to extend a journal that no longer parses.
        let exists = self.path.exists();
        if exists {
            self.load()?;
        }

        // Validate through the ledger so recording and importing share one
        // rule set.
        let mut validated = Ledger::new();
        validated.add_entry(date, description, amount, kind)?;
        let entry = validated.entries()[0].clone();

        append_entry_csv(&self.path, &entry, !exists)?;
        Ok(entry)
    }
}
