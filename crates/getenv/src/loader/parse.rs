//! Line parsing for `.env` files.
//!
//! Responsibilities:
//! - Classify a line as blank, comment, or `KEY=VALUE`.
//! - Trim key and value, and strip surrounding quote characters from the value.
//!
//! Does NOT handle:
//! - Reference expansion (see `expand.rs`); values are returned unexpanded.
//!
//! Invariants:
//! - Only exactly-empty lines and lines starting with `#` are skipped.
//! - The first `=` splits; later `=` characters belong to the value.
//! - A missing separator or empty key is `LoadError::MalformedLine`.

use std::path::Path;

use super::error::LoadError;
use crate::constants::{COMMENT_PREFIX, KEY_VALUE_SEPARATOR, QUOTE_CHARS};

/// One `KEY=VALUE` pair parsed from a profile file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    /// Trimmed and unquoted, references not yet expanded.
    pub value: String,
    /// 1-based line number in the source file.
    pub line: usize,
}

/// Parse line `line` (1-based) of the file at `path`.
///
/// Returns `Ok(None)` for blank and comment lines.
///
/// # Errors
///
/// Returns `LoadError::MalformedLine` if the line has no `=` or the key is
/// empty after trimming. `path` is only used for error context.
pub fn parse_line(text: &str, line: usize, path: &Path) -> Result<Option<Entry>, LoadError> {
    if text.is_empty() || text.starts_with(COMMENT_PREFIX) {
        return Ok(None);
    }

    let malformed = || LoadError::MalformedLine {
        path: path.to_path_buf(),
        line,
    };

    let (key, value) = text.split_once(KEY_VALUE_SEPARATOR).ok_or_else(malformed)?;

    let key = key.trim();
    if key.is_empty() {
        return Err(malformed());
    }

    Ok(Some(Entry {
        key: key.to_string(),
        value: unquote(value.trim()).to_string(),
        line,
    }))
}

/// Strip every leading and trailing quote character.
///
/// Quotes are treated as a character class, so unbalanced quotes are
/// stripped too.
fn unquote(value: &str) -> &str {
    value.trim_matches(&QUOTE_CHARS[..])
}
