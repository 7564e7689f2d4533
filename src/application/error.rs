use thiserror::Error;

use crate::domain::LedgerError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Journal not found: {0}")]
    JournalNotFound(String),

    #[error("Malformed journal at line {line}: {reason}")]
    MalformedJournal { line: usize, reason: String },

    #[error("Invalid entry: {0}")]
    InvalidEntry(#[from] LedgerError),

    #[error("Journal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Journal write error: {0}")]
    Journal(#[from] anyhow::Error),
}
