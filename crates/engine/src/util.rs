//! Internal helpers for input validation and storage errors.
//!
//! These utilities are **not** part of the public API. They centralize
//! validation so every domain action enforces the same rules.

use sea_orm::{DbErr, SqlErr};
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::{EngineError, ResultEngine};

/// Trim a required text field, rejecting empty values.
pub(crate) fn normalize_required_text(value: &str, label: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidName(format!("{label} must not be empty")));
    }
    Ok(trimmed.to_string())
}

/// Trim an optional text field; blank values become `None`.
pub(crate) fn normalize_optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

/// Display form of a category name: trimmed, inner whitespace collapsed.
pub(crate) fn normalize_category_display(value: &str) -> ResultEngine<String> {
    let collapsed = value.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        return Err(EngineError::InvalidName(
            "category name must not be empty".to_string(),
        ));
    }
    Ok(collapsed)
}

/// Comparison key of a category name.
///
/// Decomposes (NFKD), drops combining marks (accents, Arabic harakat),
/// lowercases and collapses every run of non alphanumeric characters into a
/// single space.
pub(crate) fn normalize_category_key(value: &str) -> ResultEngine<String> {
    let mut out = String::new();
    let mut pending_space = false;
    for ch in value.trim().nfkd() {
        if is_combining_mark(ch) {
            continue;
        }
        if ch.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.extend(ch.to_lowercase());
        } else {
            pending_space = true;
        }
    }
    if out.is_empty() {
        return Err(EngineError::InvalidName(
            "category name must contain letters or digits".to_string(),
        ));
    }
    Ok(out)
}

/// Validate a `#rgb` / `#rrggbb` color.
pub(crate) fn validate_color(value: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    let valid = trimmed
        .strip_prefix('#')
        .is_some_and(|hex| matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()));
    if !valid {
        return Err(EngineError::InvalidName(format!("invalid color: {trimmed}")));
    }
    Ok(trimmed.to_lowercase())
}

/// Whether a store error comes from a unique index.
pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
