use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::{build_report, JournalReport};
use crate::domain::{Entry, Ledger};

/// Column order of the journal CSV format
pub const JOURNAL_HEADER: [&str; 4] = ["date", "description", "amount", "kind"];

/// Journal snapshot for full JSON export
#[derive(Debug, Clone, Serialize)]
pub struct JournalSnapshot {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub entries: Vec<Entry>,
    pub report: JournalReport,
}

/// Export entries to CSV format. Returns the number of records written.
pub fn export_entries_csv<W: Write>(ledger: &Ledger, writer: W) -> Result<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(JOURNAL_HEADER)?;

    let mut count = 0;
    for entry in ledger.entries() {
        csv_writer.write_record([
            entry.date.as_str(),
            entry.description.as_str(),
            &entry.amount.to_string(),
            entry.kind.as_str(),
        ])?;
        count += 1;
    }

    csv_writer.flush()?;
    Ok(count)
}

/// Export the summary report as `type,amount` CSV rows.
pub fn export_report_csv<W: Write>(ledger: &Ledger, writer: W) -> Result<()> {
    let report = build_report(ledger);
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["type", "amount"])?;
    csv_writer.write_record(["income", &report.total_income.to_string()])?;
    csv_writer.write_record(["expense", &report.total_expense.to_string()])?;
    csv_writer.write_record(["net", &report.net.to_string()])?;

    csv_writer.flush()?;
    Ok(())
}

/// Export the full journal as a JSON snapshot
pub fn export_full_json<W: Write>(ledger: &Ledger, mut writer: W) -> Result<JournalSnapshot> {
    let snapshot = JournalSnapshot {
        version: env!("CARGO_PKG_VERSION").to_string(),
        exported_at: Utc::now(),
        entries: ledger.entries().to_vec(),
        report: build_report(ledger),
    };

    let json = serde_json::to_string_pretty(&snapshot)?;
    writer.write_all(json.as_bytes())?;
    writer.flush()?;

    Ok(snapshot)
}

/// Append a single entry to a journal file, writing the header first when
/// the file is being created.
pub fn append_entry_csv(path: &Path, entry: &Entry, write_header: bool) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open journal file: {}", path.display()))?;

    let mut csv_writer = csv::Writer::from_writer(file);

    if write_header {
        csv_writer.write_record(JOURNAL_HEADER)?;
    }
    csv_writer.write_record([
        entry.date.as_str(),
        entry.description.as_str(),
        &entry.amount.to_string(),
        entry.kind.as_str(),
    ])?;

    csv_writer.flush()?;
    Ok(())
}
