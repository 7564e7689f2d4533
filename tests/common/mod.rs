// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::fs;

use anyhow::Result;
use daybook::application::JournalService;
use daybook::domain::Ledger;
use tempfile::TempDir;

/// Helper to create a service over a journal file in a temporary directory.
/// The file does not exist until something is appended.
pub fn test_service() -> Result<(JournalService, TempDir)> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("journal.csv");
    Ok((JournalService::open(path), temp_dir))
}

/// Write a raw journal file and return a service over it
pub fn service_with_journal(contents: &str) -> Result<(JournalService, TempDir)> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("journal.csv");
    fs::write(&path, contents)?;
    Ok((JournalService::open(path), temp_dir))
}

/// Test fixture: a month of activity (one income, two expenses)
pub struct SampleJournal;

impl SampleJournal {
    pub const CSV: &'static str = "date,description,amount,kind\n\
        2025-01-28,Service revenue,500,income\n\
        2025-01-29,Electric bill,50,expense\n\
        2025-01-30,Office supplies,100,expense\n";

    pub fn ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger
            .add_entry("2025-01-28", "Service revenue", 500.0, "income")
            .unwrap();
        ledger
            .add_entry("2025-01-29", "Electric bill", 50.0, "expense")
            .unwrap();
        ledger
            .add_entry("2025-01-30", "Office supplies", 100.0, "expense")
            .unwrap();
        ledger
    }
}
