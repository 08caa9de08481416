//! Selection-expression parsing
//!
//! Turns free-form user text ("1-3;5;7") into a validated, deduplicated,
//! order-preserving list of 1-based file indices.

use thiserror::Error;

/// Aliases that select every listed file. Input is trimmed and lowercased
/// before membership is checked, so case variants need not be listed.
const ALL_ALIASES: &[&str] = &[
    "",
    "all",
    "all files",
    "allfiles",
    "all-files",
    "everything",
    "every",
    "*",
    "a",
    "x",
];

/// Selection parsing failure. Always recoverable: the caller re-prompts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid selection: {reason}")]
    InvalidSelection { reason: String },
}

impl ParseError {
    fn new(reason: impl Into<String>) -> Self {
        ParseError::InvalidSelection {
            reason: reason.into(),
        }
    }
}

/// Parse a selection expression against a listing of `total_files` entries.
///
/// The grammar is `expr := all-alias | clause (";" clause)*` where a clause
/// is either a single integer or an inclusive `start-end` range. Descending
/// ranges expand high-to-low, so `"5-2"` selects `[5, 4, 3, 2]`.
///
/// The result preserves the order clauses were written, deduplicated with
/// first occurrence winning. Parsing is all-or-nothing: any malformed clause
/// or out-of-range index fails the whole call.
pub fn parse(expression: &str, total_files: usize) -> Result<Vec<usize>, ParseError> {
    let normalized = expression.trim().to_lowercase();

    if ALL_ALIASES.contains(&normalized.as_str()) {
        return Ok((1..=total_files).collect());
    }

    let mut indices = Vec::new();
    for clause in normalized.split(';') {
        expand_clause(clause.trim(), &mut indices)?;
    }

    // Dedupe, keeping the first occurrence of each index
    let mut unique: Vec<usize> = Vec::with_capacity(indices.len());
    for index in indices {
        if !unique.contains(&index) {
            unique.push(index);
        }
    }

    if let Some(&bad) = unique.iter().find(|&&i| i < 1 || i > total_files) {
        return Err(ParseError::new(format!(
            "index {} is out of range 1-{}",
            bad, total_files
        )));
    }

    Ok(unique)
}

fn expand_clause(clause: &str, out: &mut Vec<usize>) -> Result<(), ParseError> {
    match clause.split_once('-') {
        Some((start, end)) => {
            let start = parse_index(start)?;
            let end = parse_index(end)?;
            if start <= end {
                out.extend(start..=end);
            } else {
                out.extend((end..=start).rev());
            }
        }
        None => out.push(parse_index(clause)?),
    }
    Ok(())
}

fn parse_index(text: &str) -> Result<usize, ParseError> {
    let text = text.trim();
    text.parse::<usize>()
        .map_err(|_| ParseError::new(format!("'{}' is not a number", text)))
}
