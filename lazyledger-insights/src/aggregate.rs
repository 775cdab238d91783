//! Reduce a batch of transactions into a StatsSnapshot.
//!
//! Every known amount feeds `total_amount` and its category bucket, whatever
//! its type. Income/expense counts and the day/month buckets only take
//! transactions that carry both an amount and a date.

use lazyledger_core::{LedgerError, Result, StatsSnapshot, Transaction};
use tracing::debug;

/// Build stats over `txns`.
///
/// Fails with `EmptyInput` when there is nothing usable to reduce.
pub fn aggregate(txns: &[Transaction]) -> Result<StatsSnapshot> {
    if txns.is_empty() {
        return Err(LedgerError::EmptyInput("No transactions found".to_string()));
    }
    if !txns.iter().any(Transaction::is_recordable) {
        return Err(LedgerError::EmptyInput(format!(
            "None of {} transactions has both an amount and a date",
            txns.len()
        )));
    }

    let mut stats = StatsSnapshot::default();

    for txn in txns {
        let Some(amount) = txn.amount else {
            continue;
        };

        stats.total_amount += amount;
        *stats
            .categories
            .entry(txn.category.as_str().to_string())
            .or_insert(0.0) += amount;

        let Some(date) = txn.date else {
            continue;
        };

        if txn.is_income() {
            stats.income_count += 1;
        } else {
            stats.expense_count += 1;
        }

        *stats
            .weekly_totals
            .entry(date.format("%Y-%m-%d").to_string())
            .or_insert(0.0) += amount;
        *stats
            .monthly_totals
            .entry(date.format("%Y-%m").to_string())
            .or_insert(0.0) += amount;
    }

    debug!(
        total = stats.total_amount,
        income = stats.income_count,
        expense = stats.expense_count,
        categories = stats.categories.len(),
        "aggregated transactions"
    );
    Ok(stats)
}
