//! Line-level tokenizing for filter documents.
//!
//! Filter documents are line oriented, so tokenizing never crosses a line
//! boundary. Everything here is a pure function over one line of text.

use std::collections::BTreeMap;

/// Comparison operators, longest first so `<=` is never read as `<`.
pub const OPERATORS: [&str; 6] = ["<=", ">=", "==", ">", "<", "="];

/// Result of a quote-aware split.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuotedSplit {
    /// Tokens with quote characters removed.
    pub tokens: Vec<String>,
    /// True if the line had an odd number of `"` characters.
    pub unterminated: bool,
}

/// Replaces every Unicode whitespace character with an ASCII space.
pub fn normalize_whitespace(line: &str) -> String {
    line.chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect()
}

/// Removes a trailing `# ...` comment that is not inside a quoted string.
pub fn strip_inline_comment(line: &str) -> &str {
    let mut in_quotes = false;
    for (i, c) in line.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            '#' if !in_quotes => return &line[..i],
            _ => {}
        }
    }
    line
}

/// Splits on whitespace, dropping empty tokens.
pub fn split_arguments(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Splits on whitespace, keeping quoted runs together.
///
/// Quote characters are removed and spaces inside quotes are preserved. An
/// odd quote count sets [`QuotedSplit::unterminated`]; the tokens are still
/// the best-effort split, with the open quote running to the end of the line.
///
/// ```
/// use lootlog_engine::filter::split_quoted_arguments;
///
/// let split = split_quoted_arguments(r#""Two-Stone Ring" Amulet "Onyx Amulet""#);
/// assert_eq!(split.tokens, vec!["Two-Stone Ring", "Amulet", "Onyx Amulet"]);
/// assert!(!split.unterminated);
/// ```
pub fn split_quoted_arguments(text: &str) -> QuotedSplit {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in text.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                if !in_quotes && !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    QuotedSplit {
        tokens,
        unterminated: in_quotes,
    }
}

/// If `token` starts with a comparison operator, returns the operator and
/// whatever follows it (possibly empty).
pub fn split_operator(token: &str) -> Option<(&'static str, &str)> {
    OPERATORS
        .iter()
        .find(|op| token.starts_with(*op))
        .map(|op| (*op, &token[op.len()..]))
}

/// Splits an operator glued to the first argument (`>=80`) into two tokens.
pub fn detach_operator(mut tokens: Vec<String>) -> Vec<String> {
    let split = tokens
        .first()
        .and_then(|first| split_operator(first))
        .filter(|(_, rest)| !rest.is_empty())
        .map(|(op, rest)| (op.to_string(), rest.to_string()));

    if let Some((op, rest)) = split {
        tokens[0] = rest;
        tokens.insert(0, op);
    }
    tokens
}

/// Counts how often each character occurs.
pub fn char_frequencies(s: &str) -> BTreeMap<char, usize> {
    let mut counts = BTreeMap::new();
    for c in s.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

/// Returns true if every character in `subset` occurs in `superset` at least
/// as many times.
pub fn is_subset_count(subset: &BTreeMap<char, usize>, superset: &BTreeMap<char, usize>) -> bool {
    subset
        .iter()
        .all(|(c, n)| superset.get(c).copied().unwrap_or(0) >= *n)
}
