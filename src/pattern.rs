//! Naming pattern expansion and sanitization
//!
//! This module contains the functions that turn a free-form naming pattern
//! into a concrete, filesystem-safe filename stem for each copy index.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{FALLBACK_STEM, PLACEHOLDER};

/// Expands a naming pattern for one copy index
///
/// If the pattern contains the placeholder character, the first occurrence
/// is replaced with the decimal representation of `index`; any later
/// occurrences are left untouched. If no placeholder is present, `_<index>`
/// is appended instead.
///
/// The placeholder is a substitution marker only. `index` starts at 1 and
/// increases by 1 per copy regardless of the digit in the pattern.
///
/// # Arguments
/// * `pattern` - The naming pattern entered by the user
/// * `index` - The 1-based copy index
///
/// # Returns
/// * `String` - The expanded filename stem, not yet sanitized
pub fn expand(pattern: &str, index: u32) -> String {
    match pattern.find(PLACEHOLDER) {
        Some(position) => {
            let mut expanded = String::with_capacity(pattern.len() + 4);
            expanded.push_str(&pattern[..position]);
            expanded.push_str(&index.to_string());
            expanded.push_str(&pattern[position + PLACEHOLDER.len_utf8()..]);
            expanded
        }
        None => format!("{pattern}_{index}"),
    }
}

/// Sanitizes a proposed filename stem
///
/// Every character outside the safe set (ASCII letters, digits, space,
/// `_`, `-`, `.`) is replaced with `_`, and surrounding whitespace is
/// trimmed. The function is idempotent and never returns an empty string:
/// a stem that would sanitize to nothing falls back to a fixed token.
pub fn sanitize(name: &str) -> String {
    static UNSAFE_CHARS: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"[^A-Za-z0-9 ._-]").expect("Failed to compile regex pattern for sanitize")
    });

    let replaced = UNSAFE_CHARS.replace_all(name, "_");
    let trimmed = replaced.trim();
    if trimmed.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        trimmed.to_string()
    }
}
