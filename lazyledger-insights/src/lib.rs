//! lazyledger-insights: stats aggregation and the rule-based insight report

pub mod advisor;
pub mod aggregate;
pub mod benchmarks;
pub mod engine;
mod format;

pub use advisor::{Advisor, RuleBasedAdvisor};
pub use aggregate::aggregate;
pub use benchmarks::BenchmarkTable;
pub use engine::{InsightEngine, Ratios, generate_report};

use lazyledger_core::{InsightReport, Result, Transaction};
use tracing::info;

/// Aggregate `txns` and render the report in one step.
pub fn generate_insights(txns: &[Transaction]) -> Result<InsightReport> {
    generate_insights_with(&RuleBasedAdvisor::default(), txns)
}

/// Same as [`generate_insights`] with a caller-chosen advisor.
pub fn generate_insights_with(
    advisor: &dyn Advisor,
    txns: &[Transaction],
) -> Result<InsightReport> {
    let stats = aggregate(txns)?;
    info!(
        advisor = advisor.name(),
        transactions = stats.transaction_count(),
        "generating insights"
    );
    Ok(advisor.advise(&stats))
}
