//! lazyledger-parse: turn free-text transaction lines into structured records.

pub mod amount;
pub mod line_parser;
pub mod rules;
pub mod store;

pub use amount::extract_amount;
pub use line_parser::{LineParser, filter_recordable, parse_batch, parse_line};
pub use rules::{CategoryRule, CategoryRules, IncomeKeywords, categorize, classify_type};
pub use store::{load_csv, load_json, read_csv, read_json};
