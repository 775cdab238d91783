//! Transaction record types produced by the line parser

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A structured transaction recovered from one line of free text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// First number found in the line; `None` when the line had no amount
    pub amount: Option<f64>,
    /// Income or expense
    #[serde(rename = "type")]
    pub txn_type: TxnType,
    /// Keyword-matched category
    pub category: Category,
    /// Supplied by the caller for the whole batch (YYYY-MM-DD)
    pub date: Option<NaiveDate>,
}

/// Spending and income buckets matched by keyword
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    #[serde(rename = "groceries")]
    Groceries,
    #[serde(rename = "entertainment")]
    Entertainment,
    #[serde(rename = "salary")]
    Salary,
    #[serde(rename = "freelance")]
    Freelance,
    #[serde(rename = "transport")]
    Transport,
    #[serde(rename = "bills")]
    Bills,
    #[serde(rename = "food")]
    Food,
    #[serde(rename = "other")]
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Groceries,
        Category::Entertainment,
        Category::Salary,
        Category::Freelance,
        Category::Transport,
        Category::Bills,
        Category::Food,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Groceries => "groceries",
            Category::Entertainment => "entertainment",
            Category::Salary => "salary",
            Category::Freelance => "freelance",
            Category::Transport => "transport",
            Category::Bills => "bills",
            Category::Food => "food",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

/// Direction of money flow
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum TxnType {
    #[serde(rename = "income")]
    Income,
    #[default]
    #[serde(rename = "expense")]
    Expense,
}

impl TxnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxnType::Income => "income",
            TxnType::Expense => "expense",
        }
    }

    /// Uppercase label used when the record is written to a store
    pub fn storage_label(&self) -> &'static str {
        match self {
            TxnType::Income => "INCOME",
            TxnType::Expense => "EXPENSE",
        }
    }
}

impl fmt::Display for TxnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TxnType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TxnType::Income),
            "expense" => Ok(TxnType::Expense),
            other => Err(format!("Unknown transaction type: {}", other)),
        }
    }
}

impl Transaction {
    /// Create a new Transaction
    pub fn new(
        amount: Option<f64>,
        txn_type: TxnType,
        category: Category,
        date: Option<NaiveDate>,
    ) -> Self {
        Self {
            amount,
            txn_type,
            category,
            date,
        }
    }

    /// Returns true if this is income
    pub fn is_income(&self) -> bool {
        self.txn_type == TxnType::Income
    }

    /// Returns true if this is an expense
    pub fn is_expense(&self) -> bool {
        self.txn_type == TxnType::Expense
    }

    /// Has both an amount and a date, so it can be stored and fully aggregated
    pub fn is_recordable(&self) -> bool {
        self.amount.is_some() && self.date.is_some()
    }
}
