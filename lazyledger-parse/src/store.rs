//! Load already-structured transactions handed over by a store.
//!
//! CSV layout (header required):
//! amount,type,category,date
//! 120,EXPENSE,transport,2024-01-01
//!
//! A blank amount or date means absent. Type is case-insensitive. JSON input
//! is the array produced by serializing `Vec<Transaction>`.

use chrono::NaiveDate;
use lazyledger_core::{Category, LedgerError, Result, Transaction, TxnType};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct CsvRow {
    amount: String,
    #[serde(rename = "type")]
    txn_type: String,
    category: String,
    date: String,
}

/// Read transactions from a CSV source.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut txns = Vec::new();

    for (i, result) in rdr.deserialize::<CsvRow>().enumerate() {
        let row = result?;
        // header is line 1
        let line = i + 2;
        txns.push(row_to_transaction(row, line)?);
    }

    debug!(count = txns.len(), "loaded csv transactions");
    Ok(txns)
}

/// Read transactions from a CSV file.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Vec<Transaction>> {
    read_csv(File::open(path.as_ref())?)
}

/// Read transactions from a JSON array.
pub fn read_json<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let txns: Vec<Transaction> = serde_json::from_reader(reader)?;
    debug!(count = txns.len(), "loaded json transactions");
    Ok(txns)
}

/// Read transactions from a JSON file.
pub fn load_json(path: impl AsRef<Path>) -> Result<Vec<Transaction>> {
    read_json(File::open(path.as_ref())?)
}

fn row_to_transaction(row: CsvRow, line: usize) -> Result<Transaction> {
    let invalid = |reason: String| LedgerError::InvalidRecord { line, reason };

    let amount = if row.amount.is_empty() {
        None
    } else {
        Some(
            row.amount
                .parse::<f64>()
                .map_err(|e| invalid(format!("amount {:?}: {}", row.amount, e)))?,
        )
    };

    let txn_type: TxnType = row.txn_type.parse().map_err(invalid)?;

    let category = if row.category.is_empty() {
        Category::Other
    } else {
        row.category.parse::<Category>().map_err(invalid)?
    };

    let date = if row.date.is_empty() {
        None
    } else {
        Some(
            NaiveDate::parse_from_str(&row.date, "%Y-%m-%d")
                .map_err(|e| invalid(format!("date {:?}: {}", row.date, e)))?,
        )
    };

    Ok(Transaction::new(amount, txn_type, category, date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_csv_rows() {
        let data = "amount,type,category,date\n\
                    120,EXPENSE,transport,2024-01-01\n\
                    5000,income,salary,2024-01-02\n\
                    ,expense,other,\n";
        let txns = read_csv(data.as_bytes()).unwrap();
        assert_eq!(txns.len(), 3);
        assert_eq!(txns[0].amount, Some(120.0));
        assert_eq!(txns[0].txn_type, TxnType::Expense);
        assert_eq!(txns[1].category, Category::Salary);
        assert_eq!(txns[1].date, NaiveDate::from_ymd_opt(2024, 1, 2));
        assert_eq!(txns[2].amount, None);
        assert_eq!(txns[2].date, None);
    }

    #[test]
    fn test_read_csv_bad_date_reports_line() {
        let data = "amount,type,category,date\n10,expense,food,01/02/2024\n";
        let err = read_csv(data.as_bytes()).unwrap_err();
        match err {
            LedgerError::InvalidRecord { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_read_csv_unknown_type() {
        let data = "amount,type,category,date\n10,transfer,food,2024-01-01\n";
        assert!(matches!(
            read_csv(data.as_bytes()),
            Err(LedgerError::InvalidRecord { .. })
        ));
    }

    #[test]
    fn test_read_json_round_trip_shape() {
        let data = r#"[
            {"amount": 50.0, "type": "expense", "category": "groceries", "date": "2024-01-01"},
            {"amount": null, "type": "income", "category": "other", "date": null}
        ]"#;
        let txns = read_json(data.as_bytes()).unwrap();
        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].category, Category::Groceries);
        assert!(txns[1].is_income());
        assert_eq!(txns[1].amount, None);
    }
}
