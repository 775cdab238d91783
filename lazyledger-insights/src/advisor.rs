//! Advisor seam: who writes the report for a StatsSnapshot.
//!
//! Only the deterministic rule engine ships; a hosted-model advisor would
//! implement the same trait.

use lazyledger_core::{InsightReport, StatsSnapshot};

use crate::engine::InsightEngine;

/// Produces an InsightReport from aggregated stats
pub trait Advisor: Send + Sync {
    /// Short identifier for logs
    fn name(&self) -> &'static str;

    fn advise(&self, stats: &StatsSnapshot) -> InsightReport;
}

/// Advisor backed by [`InsightEngine`]
#[derive(Debug, Clone, Default)]
pub struct RuleBasedAdvisor {
    engine: InsightEngine,
}

impl RuleBasedAdvisor {
    pub fn new(engine: InsightEngine) -> Self {
        Self { engine }
    }
}

impl Advisor for RuleBasedAdvisor {
    fn name(&self) -> &'static str {
        "rule-based"
    }

    fn advise(&self, stats: &StatsSnapshot) -> InsightReport {
        self.engine.generate(stats)
    }
}
