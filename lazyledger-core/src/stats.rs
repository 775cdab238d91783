//! Aggregated statistics over a batch of transactions

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Totals, counts and time buckets reduced from a set of transactions.
///
/// Category keys are plain strings so snapshots built from a store may carry
/// labels outside the parser's closed set (e.g. "income", "shopping").
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StatsSnapshot {
    /// Sum of every known amount, regardless of type
    pub total_amount: f64,
    pub income_count: usize,
    pub expense_count: usize,
    /// Category label -> summed amount
    pub categories: BTreeMap<String, f64>,
    /// Day key (YYYY-MM-DD) -> summed amount
    #[serde(default)]
    pub weekly_totals: BTreeMap<String, f64>,
    /// Month key (YYYY-MM) -> summed amount
    #[serde(default)]
    pub monthly_totals: BTreeMap<String, f64>,
}

impl StatsSnapshot {
    /// Snapshot with totals and categories only; time buckets left empty
    pub fn new<K: Into<String>>(
        total_amount: f64,
        income_count: usize,
        expense_count: usize,
        categories: impl IntoIterator<Item = (K, f64)>,
    ) -> Self {
        Self {
            total_amount,
            income_count,
            expense_count,
            categories: categories.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            weekly_totals: BTreeMap::new(),
            monthly_totals: BTreeMap::new(),
        }
    }

    pub fn transaction_count(&self) -> usize {
        self.income_count + self.expense_count
    }
}
