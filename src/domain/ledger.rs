use serde::Serialize;

use super::{Entry, EntryKind};

/// Totals for a ledger: the sum of all income amounts and the sum of all
/// expense amounts, accumulated in insertion order with native f64 addition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub total_income: f64,
    pub total_expense: f64,
}

impl Summary {
    /// Derived balance: income minus expense.
    pub fn net(&self) -> f64 {
        self.total_income - self.total_expense
    }
}

/// An append-only journal of dated movements.
///
/// The ledger lives entirely in memory: it is created empty, grows only
/// through [`Ledger::add_entry`], and entries are never updated or removed.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    entries: Vec<Entry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a movement.
    ///
    /// The amount is checked before the kind: a record with both a
    /// non-positive amount and an unrecognized kind fails with
    /// [`LedgerError::InvalidAmount`]. On failure nothing is appended.
    pub fn add_entry(
        &mut self,
        date: impl Into<String>,
        description: impl Into<String>,
        amount: f64,
        kind: &str,
    ) -> Result<(), LedgerError> {
        if amount <= 0.0 {
            return Err(LedgerError::InvalidAmount(amount));
        }

        let kind =
            EntryKind::from_str(kind).ok_or_else(|| LedgerError::InvalidKind(kind.to_string()))?;

        self.entries.push(Entry::new(date, description, amount, kind));
        Ok(())
    }

    /// All recorded entries, in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Compute income and expense totals over the full sequence.
    ///
    /// Pure with respect to stored state and recomputed from scratch on
    /// every call; float accumulation error is an accepted characteristic.
    pub fn summarize(&self) -> Summary {
        self.entries.iter().fold(
            Summary {
                total_income: 0.0,
                total_expense: 0.0,
            },
            |mut summary, entry| {
                match entry.kind {
                    EntryKind::Income => summary.total_income += entry.amount,
                    EntryKind::Expense => summary.total_expense += entry.amount,
                }
                summary
            },
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LedgerError {
    /// The amount was not strictly positive
    InvalidAmount(f64),
    /// The kind was not `income` or `expense`
    InvalidKind(String),
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerError::InvalidAmount(amount) => {
                write!(f, "amount must be a positive number, got {}", amount)
            }
            LedgerError::InvalidKind(kind) => {
                write!(f, "kind must be 'income' or 'expense', got '{}'", kind)
            }
        }
    }
}

impl std::error::Error for LedgerError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_entry_appends() {
        let mut ledger = Ledger::new();
        assert!(ledger.is_empty());

        ledger
            .add_entry("2025-01-28", "Service revenue", 500.0, "income")
            .unwrap();

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.entries()[0].amount, 500.0);
        assert_eq!(ledger.entries()[0].kind, EntryKind::Income);
    }

    #[test]
    fn test_rejects_zero_and_negative_amounts() {
        let mut ledger = Ledger::new();

        for amount in [0.0, -1.0, -500.0] {
            let result = ledger.add_entry("2025-01-28", "bad", amount, "income");
            assert_eq!(result, Err(LedgerError::InvalidAmount(amount)));
        }

        assert!(ledger.is_empty(), "failed records must not be appended");
    }

    #[test]
    fn test_rejects_unknown_kinds() {
        let mut ledger = Ledger::new();

        for kind in ["", "transfer", "Income", "EXPENSE", "in come"] {
            let result = ledger.add_entry("2025-01-28", "bad", 10.0, kind);
            assert_eq!(result, Err(LedgerError::InvalidKind(kind.to_string())));
        }

        assert!(ledger.is_empty());
    }

    #[test]
    fn test_amount_checked_before_kind() {
        let mut ledger = Ledger::new();
        let result = ledger.add_entry("2025-01-28", "bad", -5.0, "not-a-kind");
        assert_eq!(result, Err(LedgerError::InvalidAmount(-5.0)));
    }

    #[test]
    fn test_amount_just_above_zero_accepted() {
        let mut ledger = Ledger::new();
        ledger
            .add_entry("2025-01-28", "tiny", 0.0000001, "income")
            .unwrap();
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_summarize_empty() {
        let ledger = Ledger::new();
        let summary = ledger.summarize();

        assert_eq!(summary.total_income, 0.0);
        assert_eq!(summary.total_expense, 0.0);
        assert_eq!(summary.net(), 0.0);
    }

    #[test]
    fn test_summarize_is_idempotent() {
        let mut ledger = Ledger::new();
        ledger
            .add_entry("2025-01-28", "Service revenue", 500.0, "income")
            .unwrap();
        ledger
            .add_entry("2025-01-29", "Electric bill", 50.0, "expense")
            .unwrap();

        assert_eq!(ledger.summarize(), ledger.summarize());
    }

    #[test]
    fn test_totals_are_order_independent() {
        let mut forward = Ledger::new();
        forward.add_entry("2025-01-01", "a", 500.0, "income").unwrap();
        forward.add_entry("2025-01-02", "b", 50.0, "expense").unwrap();

        let mut reversed = Ledger::new();
        reversed.add_entry("2025-01-02", "b", 50.0, "expense").unwrap();
        reversed.add_entry("2025-01-01", "a", 500.0, "income").unwrap();

        assert_eq!(forward.summarize(), reversed.summarize());
    }

    #[test]
    fn test_month_of_activity() {
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

        let summary = ledger.summarize();
        assert_eq!(summary.total_income, 500.0);
        assert_eq!(summary.total_expense, 150.0);
        assert_eq!(summary.net(), 350.0);
    }
}
