//! Deterministic keyword rules mapping a transaction line to its
//! Category and TxnType.
//!
//! Matching is substring containment on the lowercased line, so "foodie"
//! hits "food". Category rules are evaluated in table order and the first
//! hit wins.

use lazyledger_core::{Category, TxnType};

/// One row of the category table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRule {
    pub category: Category,
    pub keywords: Vec<&'static str>,
}

impl CategoryRule {
    pub fn new(category: Category, keywords: &[&'static str]) -> Self {
        Self {
            category,
            keywords: keywords.to_vec(),
        }
    }

    /// `lowered` must already be lowercase
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|kw| lowered.contains(kw))
    }
}

/// Priority-ordered category table.
///
/// "food" sits in both `groceries` and `food`; groceries comes first, so a
/// bare "food" line lands in groceries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRules {
    rules: Vec<CategoryRule>,
}

impl Default for CategoryRules {
    fn default() -> Self {
        Self::new(vec![
            CategoryRule::new(Category::Groceries, &["groceries", "supermarket", "food"]),
            CategoryRule::new(Category::Entertainment, &["netflix", "spotify", "movies", "game"]),
            CategoryRule::new(Category::Salary, &["salary", "income", "paycheck", "got"]),
            CategoryRule::new(Category::Freelance, &["freelance", "project"]),
            CategoryRule::new(
                Category::Transport,
                &["bus", "uber", "train", "taxi", "wheel", "pickme"],
            ),
            CategoryRule::new(
                Category::Bills,
                &["electricity", "water", "bill", "mobile", "reload"],
            ),
            CategoryRule::new(
                Category::Food,
                &["restaurant", "cafe", "dinner", "lunch", "breakfast", "snack", "tea", "coffee"],
            ),
        ])
    }
}

impl CategoryRules {
    pub fn new(rules: Vec<CategoryRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// First matching category for an already-lowercased line, else `Other`
    pub fn classify(&self, lowered: &str) -> Category {
        self.rules
            .iter()
            .find(|rule| rule.matches(lowered))
            .map(|rule| rule.category)
            .unwrap_or(Category::Other)
    }
}

/// Phrases that mark a line as income
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomeKeywords {
    keywords: Vec<&'static str>,
}

impl Default for IncomeKeywords {
    fn default() -> Self {
        Self::new(&["got", "received", "income", "salary", "paid me"])
    }
}

impl IncomeKeywords {
    pub fn new(keywords: &[&'static str]) -> Self {
        Self {
            keywords: keywords.to_vec(),
        }
    }

    /// Income if any phrase is contained in the lowercased line, else expense
    pub fn classify(&self, lowered: &str) -> TxnType {
        if self.keywords.iter().any(|kw| lowered.contains(kw)) {
            TxnType::Income
        } else {
            TxnType::Expense
        }
    }
}

/// Categorize raw text with the default table.
pub fn categorize(text: &str) -> Category {
    CategoryRules::default().classify(&text.to_lowercase())
}

/// Classify raw text as income or expense with the default keywords.
pub fn classify_type(text: &str) -> TxnType {
    IncomeKeywords::default().classify(&text.to_lowercase())
}
