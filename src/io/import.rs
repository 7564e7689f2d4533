use std::io::Read;

use crate::domain::{parse_amount, Ledger, LedgerError};

/// Result of reading a journal: the ledger built from the valid records,
/// plus one error per record that was rejected.
#[derive(Debug)]
pub struct ImportResult {
    pub ledger: Ledger,
    pub errors: Vec<ImportError>,
}

/// Error that occurred while reading a journal record
#[derive(Debug, Clone)]
pub struct ImportError {
    pub line: usize,
    pub field: Option<String>,
    pub error: String,
}

/// Read journal entries from CSV with columns `date,description,amount,kind`.
///
/// Malformed records are collected instead of aborting the read; every
/// accepted record passes through `Ledger::add_entry`, so the ledger
/// invariants gate imported data exactly like data recorded directly.
pub fn read_entries_csv<R: Read>(reader: R) -> ImportResult {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut ledger = Ledger::new();
    let mut errors = Vec::new();

    for (line_num, result) in csv_reader.records().enumerate() {
        let line = line_num + 2; // +2 for header and 0-indexing

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                errors.push(ImportError {
                    line,
                    field: None,
                    error: format!("CSV parse error: {}", e),
                });
                continue;
            }
        };

        let date = record.get(0).unwrap_or("");
        let description = record.get(1).unwrap_or("");
        let amount_str = record.get(2).unwrap_or("");
        let kind = record.get(3).unwrap_or("");

        let amount = match parse_amount(amount_str) {
            Ok(a) => a,
            Err(e) => {
                errors.push(ImportError {
                    line,
                    field: Some("amount".to_string()),
                    error: format!("Invalid amount '{}': {}", amount_str, e),
                });
                continue;
            }
        };

        if let Err(e) = ledger.add_entry(date, description, amount, kind) {
            let field = match &e {
                LedgerError::InvalidAmount(_) => "amount",
                LedgerError::InvalidKind(_) => "kind",
            };
            errors.push(ImportError {
                line,
                field: Some(field.to_string()),
                error: e.to_string(),
            });
        }
    }

    ImportResult { ledger, errors }
}
