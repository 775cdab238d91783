//! Natural-language insight report

use serde::{Deserialize, Serialize};
use std::fmt;

/// One numbered insight paragraph
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Insight {
    /// Fixed position of this insight kind (1..=3), kept even when an earlier one is omitted
    pub number: u8,
    pub text: String,
}

/// A summary paragraph followed by numbered insights.
///
/// `Display` renders the `Summary:` / `Insight N:` framing joined by blank lines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InsightReport {
    pub summary: String,
    pub insights: Vec<Insight>,
}

impl InsightReport {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            insights: Vec::new(),
        }
    }

    pub fn push(&mut self, number: u8, text: impl Into<String>) {
        self.insights.push(Insight {
            number,
            text: text.into(),
        });
    }

    /// Each block with its label, in order
    pub fn blocks(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.insights.len() + 1);
        out.push(format!("Summary: {}", self.summary));
        for insight in &self.insights {
            out.push(format!("Insight {}: {}", insight.number, insight.text));
        }
        out
    }
}

impl fmt::Display for InsightReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.blocks().join("\n\n"))
    }
}
