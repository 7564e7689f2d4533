use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};

use crate::application::{build_report, JournalService};
use crate::domain::{format_amount, parse_amount, EntryKind};
use crate::io::{export_entries_csv, export_full_json, export_report_csv, ImportError};

/// Daybook - Accounting Journal
#[derive(Parser)]
#[command(name = "daybook")]
#[command(about = "A local-first accounting daybook for the command line")]
#[command(version)]
pub struct Cli {
    /// Journal file path
    #[arg(short, long, default_value = "daybook.csv")]
    pub journal: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record a movement in the journal
    Add {
        /// Amount to record (e.g., "50.00" or "50")
        amount: String,

        /// Kind of movement: income, expense
        #[arg(short, long)]
        kind: String,

        /// Description of the movement
        #[arg(short, long, default_value = "")]
        description: String,

        /// Date of the movement (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Show income and expense totals
    Summary {
        /// Output format: table, json, csv
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// List recorded movements
    List {
        /// Filter by kind: income, expense
        #[arg(short, long)]
        kind: Option<String>,

        /// Maximum number of movements to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Verify that the journal parses cleanly
    Check,

    /// Export data to CSV or JSON
    Export {
        /// What to export: entries, report, full
        export_type: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let service = JournalService::open(&self.journal);

        match self.command {
            Commands::Add {
                amount,
                kind,
                description,
                date,
            } => run_add(&service, &amount, &kind, &description, date),
            Commands::Summary { format } => run_summary(&service, &format),
            Commands::List { kind, limit } => run_list(&service, kind.as_deref(), limit),
            Commands::Check => run_check(&service),
            Commands::Export {
                export_type,
                output,
            } => run_export(&service, &export_type, output.as_deref()),
        }
    }
}

fn run_add(
    service: &JournalService,
    amount: &str,
    kind: &str,
    description: &str,
    date: Option<String>,
) -> Result<()> {
    let amount = parse_amount(amount)
        .map_err(|e| anyhow::anyhow!("Invalid amount '{}': {}", amount, e))?;
    let date = date.unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string());

    let entry = service.append(&date, description, amount, kind)?;

    println!(
        "Recorded {} of {} on {}",
        entry.kind,
        format_amount(entry.amount),
        entry.date
    );
    if !entry.description.is_empty() {
        println!("  {}", entry.description);
    }
    Ok(())
}

fn run_summary(service: &JournalService, format: &str) -> Result<()> {
    let ledger = service.load()?;
    let report = build_report(&ledger);

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "csv" => {
            println!("type,amount");
            println!("income,{}", report.total_income);
            println!("expense,{}", report.total_expense);
            println!("net,{}", report.net);
        }
        _ => {
            println!("Daybook Summary");
            println!("Journal: {}", service.path().display());
            println!();
            println!("Total income:   {:>15}", format_amount(report.total_income));
            println!("Total expense:  {:>15}", format_amount(report.total_expense));
            println!("{}", "-".repeat(32));
            println!("Net:            {:>15}", format_amount(report.net));
        }
    }
    Ok(())
}

fn run_list(service: &JournalService, kind: Option<&str>, limit: Option<usize>) -> Result<()> {
    let ledger = service.load()?;

    let kind_filter = match kind {
        Some(k) => Some(EntryKind::from_str(k).ok_or_else(|| {
            anyhow::anyhow!("Invalid kind '{}'. Valid kinds: income, expense", k)
        })?),
        None => None,
    };

    let entries: Vec<_> = ledger
        .entries()
        .iter()
        .filter(|e| kind_filter.is_none_or(|k| e.kind == k))
        .collect();

    if entries.is_empty() {
        println!("No movements found.");
        return Ok(());
    }

    let shown = limit.unwrap_or(entries.len());

    println!(
        "{:<12} {:<8} {:>12}  {}",
        "DATE", "KIND", "AMOUNT", "DESCRIPTION"
    );
    println!("{}", "-".repeat(64));
    for entry in entries.iter().take(shown) {
        println!(
            "{:<12} {:<8} {:>12}  {}",
            truncate(&entry.date, 12),
            entry.kind.as_str(),
            format_amount(entry.amount),
            truncate(&entry.description, 28)
        );
    }
    if entries.len() > shown {
        println!("... and {} more", entries.len() - shown);
    }
    Ok(())
}

fn run_check(service: &JournalService) -> Result<()> {
    let result = service.load_lenient()?;

    println!("Parsed {} entries", result.ledger.len());
    if result.errors.is_empty() {
        println!("Journal OK.");
        return Ok(());
    }

    println!("Errors:   {}", result.errors.len());
    for error in result.errors.iter().take(10) {
        println!("  Line {}: {}", error.line, describe_error(error));
    }
    if result.errors.len() > 10 {
        println!("  ... and {} more errors", result.errors.len() - 10);
    }
    Ok(())
}

fn run_export(service: &JournalService, export_type: &str, output: Option<&str>) -> Result<()> {
    use std::fs::File;
    use std::io::{stdout, Write};

    let ledger = service.load()?;

    let writer: Box<dyn Write> = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path))?;
            Box::new(file)
        }
        None => Box::new(stdout()),
    };

    match export_type {
        "entries" => {
            let count = export_entries_csv(&ledger, writer)?;
            if output.is_some() {
                eprintln!("Exported {} entries", count);
            }
        }
        "report" => {
            export_report_csv(&ledger, writer)?;
        }
        "full" => {
            let snapshot = export_full_json(&ledger, writer)?;
            if output.is_some() {
                eprintln!("Exported {} entries", snapshot.entries.len());
            }
        }
        _ => {
            anyhow::bail!(
                "Invalid export type '{}'. Valid types: entries, report, full",
                export_type
            );
        }
    }

    Ok(())
}

fn describe_error(error: &ImportError) -> String {
    match &error.field {
        Some(field) => format!("{}: {}", field, error.error),
        None => error.error.clone(),
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}
