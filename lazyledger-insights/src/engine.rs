//! Rule-based insight report.
//!
//! Income is whatever sits in the `salary`, `income` or `freelance`
//! buckets; every other positive bucket is an expense. The report is a
//! summary plus up to three numbered insights, every division guarded.

use lazyledger_core::{InsightReport, StatsSnapshot};
use serde::Serialize;
use tracing::debug;

use crate::benchmarks::BenchmarkTable;
use crate::format::money;

/// Category labels counted as income
pub const INCOME_CATEGORIES: [&str; 3] = ["salary", "income", "freelance"];

const EXCELLENT_SAVINGS_RATE: f64 = 20.0;
const GOOD_SAVINGS_RATE: f64 = 10.0;
const HIGH_EXPENSE_RATIO: f64 = 80.0;
const SMALL_PURCHASE_AVG: f64 = 50.0;

fn is_income_category(category: &str) -> bool {
    INCOME_CATEGORIES.contains(&category)
}

/// Income/expense split and the ratios derived from it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ratios {
    pub total_income: f64,
    pub total_expenses: f64,
    /// Expenses as a percentage of income
    pub expense_ratio: f64,
    /// (income - expenses) / income * 100
    pub savings_rate: f64,
}

impl Ratios {
    pub fn from_stats(stats: &StatsSnapshot) -> Self {
        let total_expenses: f64 = stats
            .categories
            .iter()
            .filter(|(cat, amount)| **amount > 0.0 && !is_income_category(cat))
            .map(|(_, amount)| amount)
            .sum();
        let mut total_income: f64 = stats
            .categories
            .iter()
            .filter(|(cat, _)| is_income_category(cat))
            .map(|(_, amount)| amount)
            .sum();

        if total_income == 0.0 {
            total_income = stats.total_amount.max(0.0);
        }

        let (expense_ratio, savings_rate) = if total_income > 0.0 {
            (
                total_expenses / total_income * 100.0,
                (total_income - total_expenses) / total_income * 100.0,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            total_income,
            total_expenses,
            expense_ratio,
            savings_rate,
        }
    }
}

/// Turns a StatsSnapshot into an InsightReport using a benchmark table
#[derive(Debug, Clone, Default)]
pub struct InsightEngine {
    benchmarks: BenchmarkTable,
}

impl InsightEngine {
    pub fn new(benchmarks: BenchmarkTable) -> Self {
        Self { benchmarks }
    }

    pub fn generate(&self, stats: &StatsSnapshot) -> InsightReport {
        let ratios = Ratios::from_stats(stats);
        debug!(?ratios, "computed ratios");

        let mut report = InsightReport::new(summary(stats, &ratios));

        if let Some(text) = self.top_category_insight(stats, &ratios) {
            report.push(1, text);
        }
        report.push(2, cash_flow_insight(&ratios));
        report.push(3, behavior_insight(stats, &ratios));
        report
    }

    /// Largest non-income bucket against its benchmark; `None` when there is none
    fn top_category_insight(&self, stats: &StatsSnapshot, ratios: &Ratios) -> Option<String> {
        let mut top: Option<(&str, f64)> = None;
        for (cat, &amount) in &stats.categories {
            if is_income_category(cat) {
                continue;
            }
            // ties keep the first key seen
            if top.is_none_or(|(_, best)| amount > best) {
                top = Some((cat.as_str(), amount));
            }
        }

        let (category, amount) = top?;
        let share = if ratios.total_income > 0.0 {
            amount / ratios.total_income * 100.0
        } else {
            0.0
        };

        Some(format!(
            "Your largest expense category '{}' represents {:.1}% of your income (${}). \
             Industry benchmarks suggest this category should be under {:.1}% of income.",
            category,
            share,
            money(amount),
            self.benchmarks.benchmark(category)
        ))
    }
}

/// Generate the report with the default benchmark table.
pub fn generate_report(stats: &StatsSnapshot) -> InsightReport {
    InsightEngine::default().generate(stats)
}

fn summary(stats: &StatsSnapshot, ratios: &Ratios) -> String {
    let tier = if ratios.savings_rate >= EXCELLENT_SAVINGS_RATE {
        "Excellent savings discipline! You're building strong financial foundations."
    } else if ratios.savings_rate >= GOOD_SAVINGS_RATE {
        "Good progress on savings, but there's room for improvement."
    } else {
        "Critical: Your expenses are consuming most of your income."
    };

    format!(
        "Financial Overview: With {} income sources totaling ${} and {} expense transactions \
         totaling ${}, your savings rate is {:.1}%. {}",
        stats.income_count,
        money(ratios.total_income),
        stats.expense_count,
        money(ratios.total_expenses),
        ratios.savings_rate,
        tier
    )
}

fn cash_flow_insight(ratios: &Ratios) -> String {
    if ratios.expense_ratio > HIGH_EXPENSE_RATIO {
        format!(
            "Your expense-to-income ratio is {:.1}%, which is concerning. Consider the 50/30/20 \
             rule: 50% needs, 30% wants, 20% savings. You're currently at {:.1}% expenses.",
            ratios.expense_ratio,
            100.0 - ratios.savings_rate
        )
    } else {
        format!(
            "Your expense-to-income ratio of {:.1}% is manageable. Focus on optimizing your \
             largest expense categories for better savings.",
            ratios.expense_ratio
        )
    }
}

fn behavior_insight(stats: &StatsSnapshot, ratios: &Ratios) -> String {
    let avg_transaction = if stats.expense_count > 0 {
        ratios.total_expenses / stats.expense_count as f64
    } else {
        0.0
    };

    if avg_transaction < SMALL_PURCHASE_AVG {
        format!(
            "Your average transaction size is ${:.2}, indicating frequent small purchases. \
             Consider using the 24-hour rule for purchases under $100 to reduce impulse \
             spending by 15-20%.",
            avg_transaction
        )
    } else {
        format!(
            "Your average transaction size is ${:.2}, suggesting planned purchases. Focus on \
             negotiating better rates for your larger recurring expenses to maximize savings \
             impact.",
            avg_transaction
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical() -> StatsSnapshot {
        StatsSnapshot::new(
            1000.0,
            1,
            2,
            [("salary", 1000.0), ("food", 400.0), ("transport", 100.0)],
        )
    }

    #[test]
    fn test_ratios() {
        let r = Ratios::from_stats(&canonical());
        assert_eq!(r.total_income, 1000.0);
        assert_eq!(r.total_expenses, 500.0);
        assert_eq!(r.expense_ratio, 50.0);
        assert_eq!(r.savings_rate, 50.0);
    }

    #[test]
    fn test_canonical_report_text() {
        let report = generate_report(&canonical());
        assert_eq!(report.insights.len(), 3);
        assert_eq!(
            report.summary,
            "Financial Overview: With 1 income sources totaling $1,000.00 and 2 expense \
             transactions totaling $500.00, your savings rate is 50.0%. Excellent savings \
             discipline! You're building strong financial foundations."
        );
        assert_eq!(
            report.insights[0].text,
            "Your largest expense category 'food' represents 40.0% of your income ($400.00). \
             Industry benchmarks suggest this category should be under 15.0% of income."
        );
        assert!(
            report.insights[1]
                .text
                .starts_with("Your expense-to-income ratio of 50.0% is manageable.")
        );
        assert!(report.insights[2].text.starts_with(
            "Your average transaction size is $250.00, suggesting planned purchases."
        ));
    }

    #[test]
    fn test_deterministic() {
        let stats = canonical();
        assert_eq!(generate_report(&stats).to_string(), generate_report(&stats).to_string());
    }

    #[test]
    fn test_good_tier_boundary_inclusive() {
        let stats = StatsSnapshot::new(1900.0, 1, 3, [("salary", 1000.0), ("bills", 900.0)]);
        let r = Ratios::from_stats(&stats);
        assert!((r.savings_rate - 10.0).abs() < 1e-9);
        let report = generate_report(&stats);
        assert!(
            report
                .summary
                .ends_with("Good progress on savings, but there's room for improvement.")
        );
    }

    #[test]
    fn test_excellent_tier_boundary_inclusive() {
        let stats = StatsSnapshot::new(1800.0, 1, 1, [("salary", 1000.0), ("bills", 800.0)]);
        let report = generate_report(&stats);
        assert!(report.summary.contains("savings rate is 20.0%"));
        assert!(report.summary.ends_with(
            "Excellent savings discipline! You're building strong financial foundations."
        ));
    }

    #[test]
    fn test_critical_tier_and_high_ratio() {
        let stats = StatsSnapshot::new(1950.0, 1, 2, [("salary", 1000.0), ("bills", 950.0)]);
        let report = generate_report(&stats);
        assert!(
            report
                .summary
                .ends_with("Critical: Your expenses are consuming most of your income.")
        );
        assert_eq!(
            report.insights[1].text,
            "Your expense-to-income ratio is 95.0%, which is concerning. Consider the 50/30/20 \
             rule: 50% needs, 30% wants, 20% savings. You're currently at 95.0% expenses."
        );
    }

    #[test]
    fn test_small_purchases() {
        let stats = StatsSnapshot::new(1090.0, 1, 3, [("salary", 1000.0), ("food", 90.0)]);
        let report = generate_report(&stats);
        assert_eq!(
            report.insights[2].text,
            "Your average transaction size is $30.00, indicating frequent small purchases. \
             Consider using the 24-hour rule for purchases under $100 to reduce impulse \
             spending by 15-20%."
        );
    }

    #[test]
    fn test_income_basis_falls_back_to_total() {
        // no income buckets: total_amount becomes the basis
        let stats = StatsSnapshot::new(200.0, 0, 2, [("food", 150.0), ("bills", 50.0)]);
        let r = Ratios::from_stats(&stats);
        assert_eq!(r.total_income, 200.0);
        assert_eq!(r.expense_ratio, 100.0);
        assert_eq!(r.savings_rate, 0.0);
    }

    #[test]
    fn test_zero_basis_guards() {
        let stats = StatsSnapshot::new(-20.0, 0, 0, [("food", -20.0)]);
        let r = Ratios::from_stats(&stats);
        assert_eq!(r.total_income, 0.0);
        assert_eq!(r.expense_ratio, 0.0);
        assert_eq!(r.savings_rate, 0.0);

        let report = generate_report(&stats);
        assert_eq!(report.insights.len(), 3);
        assert!(report.insights[0].text.contains("represents 0.0% of your income"));
        assert!(report.insights[2].text.contains("$0.00"));
    }

    #[test]
    fn test_only_income_omits_first_insight() {
        let stats = StatsSnapshot::new(3000.0, 2, 0, [("salary", 2500.0), ("freelance", 500.0)]);
        let report = generate_report(&stats);
        assert_eq!(report.insights.len(), 2);
        assert_eq!(report.insights[0].number, 2);
        assert!(report.to_string().contains("\n\nInsight 2: "));
        assert!(!report.to_string().contains("Insight 1:"));
    }

    #[test]
    fn test_unlisted_category_uses_fallback_benchmark() {
        let stats = StatsSnapshot::new(1300.0, 1, 1, [("salary", 1000.0), ("pets", 300.0)]);
        let report = generate_report(&stats);
        assert!(report.insights[0].text.contains("'pets'"));
        assert!(report.insights[0].text.contains("under 15.0% of income"));
    }

    #[test]
    fn test_custom_benchmarks() {
        let engine = InsightEngine::new(BenchmarkTable::new(vec![("food", 5.0)], 20.0));
        let report = engine.generate(&canonical());
        assert!(report.insights[0].text.contains("under 5.0% of income"));
    }
}
