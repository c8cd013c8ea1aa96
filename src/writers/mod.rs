//! Document writers
//!
//! This module contains one "create minimal empty document" operation per
//! supported format. Every writer satisfies the same contract: given a
//! destination path, produce a valid, openable, empty/skeleton file of that
//! format, or fail with a filesystem error.

mod ooxml;
mod text;

pub use ooxml::{write_presentation, write_word_document, write_workbook};
pub use text::{write_csv, write_markdown, write_yaml};

use std::path::Path;

use crate::errors::Result;
use crate::format::DocumentFormat;

/// Creates a minimal empty document of the given format at `path`
///
/// # Errors
/// Returns an error if the file cannot be written
pub fn write_document(format: DocumentFormat, path: &Path) -> Result<()> {
    match format {
        DocumentFormat::Spreadsheet => write_workbook(path),
        DocumentFormat::WordDocument => write_word_document(path),
        DocumentFormat::Presentation => write_presentation(path),
        DocumentFormat::Csv => write_csv(path),
        DocumentFormat::Markdown => write_markdown(path),
        DocumentFormat::Yaml => write_yaml(path),
    }
}
