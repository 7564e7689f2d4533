use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Money coming in (sales, salary, interest, etc.)
    Income,
    /// Money going out (bills, purchases, fees, etc.)
    Expense,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Income => "income",
            EntryKind::Expense => "expense",
        }
    }

    /// Parse the wire form of a kind. Matching is exact: anything other than
    /// `income` or `expense` (including case variants) is rejected.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "income" => Some(EntryKind::Income),
            "expense" => Some(EntryKind::Expense),
            _ => None,
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single dated movement in the daybook.
/// Entries are immutable once recorded - corrections are made by recording
/// a compensating entry of the opposite kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Date of the movement, kept as an opaque string (no format is enforced)
    pub date: String,
    /// Human-readable description
    pub description: String,
    /// Amount in currency units (always positive)
    pub amount: f64,
    /// Direction of the movement
    pub kind: EntryKind,
}

impl Entry {
    pub fn new(
        date: impl Into<String>,
        description: impl Into<String>,
        amount: f64,
        kind: EntryKind,
    ) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
            amount,
            kind,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == EntryKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == EntryKind::Expense
    }
}
