//! Target share of income per spending category

/// Percentage-of-income ceilings, looked up case-insensitively.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkTable {
    entries: Vec<(&'static str, f64)>,
    fallback: f64,
}

impl Default for BenchmarkTable {
    fn default() -> Self {
        Self::new(
            vec![
                ("food", 15.0),
                ("groceries", 12.0),
                ("transport", 15.0),
                ("entertainment", 10.0),
                ("bills", 25.0),
                ("shopping", 10.0),
                ("health", 8.0),
                ("other", 10.0),
            ],
            15.0,
        )
    }
}

impl BenchmarkTable {
    pub fn new(entries: Vec<(&'static str, f64)>, fallback: f64) -> Self {
        Self { entries, fallback }
    }

    /// Benchmark percentage for `category`, or the fallback when unlisted
    pub fn benchmark(&self, category: &str) -> f64 {
        let category = category.to_lowercase();
        self.entries
            .iter()
            .find(|(name, _)| *name == category)
            .map(|(_, pct)| *pct)
            .unwrap_or(self.fallback)
    }
}
