use serde::Serialize;

use crate::domain::Ledger;

/// Serializable summary of a journal: entry counts plus the income and
/// expense totals with the derived net balance.
#[derive(Debug, Clone, Serialize)]
pub struct JournalReport {
    pub entry_count: usize,
    pub income_count: usize,
    pub expense_count: usize,
    pub total_income: f64,
    pub total_expense: f64,
    pub net: f64,
}

/// Build a report from a ledger. One summarize pass plus entry counts.
pub fn build_report(ledger: &Ledger) -> JournalReport {
    let summary = ledger.summarize();
    let income_count = ledger.entries().iter().filter(|e| e.is_income()).count();

    JournalReport {
        entry_count: ledger.len(),
        income_count,
        expense_count: ledger.len() - income_count,
        total_income: summary.total_income,
        total_expense: summary.total_expense,
        net: summary.net(),
    }
}
