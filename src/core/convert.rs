//! Text-to-bytes conversion.
//!
//! The stages run in a fixed order: comments are stripped from the original
//! text in one sweep, the remaining payload is validated, whitespace is
//! dropped, and the digit string is decoded two characters at a time.

use std::borrow::Cow;
use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::ConvertError;

/// Block comments, `//` line comments and `#` line comments as one ordered
/// alternation. Line comments stop before the newline so it stays in the
/// payload.
static COMMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s:/\*.*?\*/)|//[^\n]*|#[^\n]*").expect("comment pattern is valid")
});

/// Maximal runs of anything that is neither ASCII whitespace nor a hex digit.
static INVALID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^[:space:]0-9A-Fa-f]+").expect("invalid-run pattern is valid"));

/// Convert hex text (with optional comments and whitespace) into raw bytes.
pub fn convert(text: &str) -> Result<Vec<u8>, ConvertError> {
    let payload = strip_comments(text);
    log::debug!(
        "Stripped comments: {} -> {} bytes of text",
        text.len(),
        payload.len()
    );

    let runs = invalid_runs(&payload);
    if !runs.is_empty() {
        log::debug!("Rejecting payload with {} invalid run(s)", runs.len());
        return Err(ConvertError::InvalidCharacters { runs });
    }

    let digits = strip_whitespace(&payload);
    decode(&digits)
}

/// Remove every comment region in a single leftmost-first pass over `text`.
///
/// At each position the block comment is tried first, then `//`, then `#`.
/// Markers that fall inside an already matched comment are never looked at
/// again. An unterminated `/*` is left in place.
pub fn strip_comments(text: &str) -> Cow<'_, str> {
    COMMENT_RE.replace_all(text, "")
}

/// Distinct offending runs in the order they first appear.
pub fn invalid_runs(payload: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    INVALID_RE
        .find_iter(payload)
        .map(|m| m.as_str())
        .filter(|run| seen.insert(*run))
        .map(str::to_string)
        .collect()
}

/// Drop space, tab, newline, carriage return, form feed and vertical tab.
pub fn strip_whitespace(payload: &str) -> String {
    payload.chars().filter(|c| !is_hex_whitespace(*c)).collect()
}

// `char::is_ascii_whitespace` leaves out the vertical tab.
fn is_hex_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

/// Decode a pure digit string into bytes, most significant nibble first.
pub fn decode(digits: &str) -> Result<Vec<u8>, ConvertError> {
    if digits.len() % 2 != 0 {
        return Err(ConvertError::OddLength {
            digits: digits.len(),
        });
    }
    let bytes = hex::decode(digits).map_err(ConvertError::Decode)?;
    log::debug!("Decoded {} bytes", bytes.len());
    Ok(bytes)
}
