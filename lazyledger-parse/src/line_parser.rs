//! Line parser: one free-text line in, one Transaction out.
//!
//! A line never fails to parse. Without an amount it still yields a record
//! (amount `None`); whether to keep it is the caller's decision.

use chrono::NaiveDate;
use lazyledger_core::Transaction;
use tracing::{debug, info};

use crate::amount::extract_amount;
use crate::rules::{CategoryRules, IncomeKeywords};

/// Every character that ends a line: CR and LF on their own, VT, FF, the
/// file/group/record separators, NEL, and the Unicode line/paragraph separators.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Composes amount extraction, category rules and income keywords
#[derive(Debug, Clone, Default)]
pub struct LineParser {
    categories: CategoryRules,
    income: IncomeKeywords,
}

impl LineParser {
    pub fn new(categories: CategoryRules, income: IncomeKeywords) -> Self {
        Self { categories, income }
    }

    /// Parse a single line, attaching `date` as-is.
    pub fn parse_line(&self, line: &str, date: Option<NaiveDate>) -> Transaction {
        let amount = extract_amount(line);
        let lowered = line.to_lowercase();
        let category = self.categories.classify(&lowered);
        let txn_type = self.income.classify(&lowered);

        debug!(line, ?amount, %category, %txn_type, "classified line");
        Transaction::new(amount, txn_type, category, date)
    }

    /// Parse every non-empty trimmed line of `raw_text`, in input order.
    pub fn parse_batch(&self, raw_text: &str, default_date: Option<NaiveDate>) -> Vec<Transaction> {
        let txns: Vec<Transaction> = raw_text
            .split(LINE_BREAKS)
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| self.parse_line(line, default_date))
            .collect();

        debug!(
            count = txns.len(),
            missing_amount = txns.iter().filter(|t| t.amount.is_none()).count(),
            "parsed batch"
        );
        txns
    }
}

/// Parse one line with the default rules.
pub fn parse_line(line: &str, date: Option<NaiveDate>) -> Transaction {
    LineParser::default().parse_line(line, date)
}

/// Parse a multi-line block with the default rules.
pub fn parse_batch(raw_text: &str, default_date: Option<NaiveDate>) -> Vec<Transaction> {
    LineParser::default().parse_batch(raw_text, default_date)
}

/// Drop records lacking an amount or a date, logging each one skipped.
pub fn filter_recordable(txns: Vec<Transaction>) -> Vec<Transaction> {
    txns.into_iter()
        .filter(|txn| {
            let keep = txn.is_recordable();
            if !keep {
                info!(?txn, "Skipping incomplete transaction");
            }
            keep
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lazyledger_core::{Category, TxnType};

    fn jan1() -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2024, 1, 1)
    }

    #[test]
    fn test_parse_batch_basic() {
        let txns = parse_batch("bus 120\ngroceries 50\n", jan1());
        assert_eq!(txns.len(), 2);
        assert_eq!(
            txns[0],
            Transaction::new(Some(120.0), TxnType::Expense, Category::Transport, jan1())
        );
        assert_eq!(
            txns[1],
            Transaction::new(Some(50.0), TxnType::Expense, Category::Groceries, jan1())
        );
    }

    #[test]
    fn test_blank_lines_skipped_and_trimmed() {
        let txns = parse_batch("\n   \r\n  got paid 5000 salary  \r\n\ncoffee 4\n", None);
        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].amount, Some(5000.0));
        assert_eq!(txns[0].category, Category::Salary);
        assert_eq!(txns[0].txn_type, TxnType::Income);
        assert_eq!(txns[1].category, Category::Food);
        assert!(txns.iter().all(|t| t.date.is_none()));
    }

    #[test]
    fn test_unparsable_line_still_yields_record() {
        let txn = parse_line("something happened", jan1());
        assert_eq!(txn.amount, None);
        assert_eq!(txn.category, Category::Other);
        assert_eq!(txn.txn_type, TxnType::Expense);
        assert_eq!(txn.date, jan1());
    }

    #[test]
    fn test_lone_cr_and_unicode_separators_split_lines() {
        let txns = parse_batch("bus 120\rlunch 10\u{2028}netflix 15", None);
        assert_eq!(txns.len(), 3);
        assert_eq!(txns[0].amount, Some(120.0));
        assert_eq!(txns[0].category, Category::Transport);
        assert_eq!(txns[1].amount, Some(10.0));
        assert_eq!(txns[1].category, Category::Food);
        assert_eq!(txns[2].amount, Some(15.0));
        assert_eq!(txns[2].category, Category::Entertainment);

        let txns = parse_batch("taxi 9\u{0c}water bill 30\u{85}coffee 4\u{2029}", None);
        let cats: Vec<_> = txns.iter().map(|t| t.category).collect();
        assert_eq!(cats, vec![Category::Transport, Category::Bills, Category::Food]);
    }

    #[test]
    fn test_order_preserved() {
        let txns = parse_batch("taxi 9\nnetflix 15\nelectricity bill 60", jan1());
        let cats: Vec<_> = txns.iter().map(|t| t.category).collect();
        assert_eq!(
            cats,
            vec![Category::Transport, Category::Entertainment, Category::Bills]
        );
    }

    #[test]
    fn test_filter_recordable() {
        let txns = parse_batch("bus 120\nforgot the amount\nlunch 8", jan1());
        assert_eq!(txns.len(), 3);
        let kept = filter_recordable(txns);
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|t| t.amount.is_some()));

        let undated = parse_batch("bus 120", None);
        assert!(filter_recordable(undated).is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_batch("", jan1()).is_empty());
    }
}
