//! Amount extraction from free text.
//!
//! Only the leftmost number counts: "2 items for 50" yields 2. A leading
//! `-` or `$` is never part of the match. Digits are ASCII only; `\d` in
//! `regex` would also match digits that `f64::from_str` rejects.

use regex::Regex;
use std::sync::LazyLock;

static AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[0-9]+(?:\.[0-9]{1,2})?\b").expect("amount pattern is a valid regex")
});

/// First integer or two-decimal number in `line`, if any.
pub fn extract_amount(line: &str) -> Option<f64> {
    let m = AMOUNT_RE.find(line)?;
    m.as_str().parse().ok()
}
