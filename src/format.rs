//! Document format table
//!
//! This module defines the closed set of supported output formats and maps
//! each one to its output directory, file extension, and menu label.

use std::fmt;

use crate::errors::{invalid_selection_error, Result};

/// A supported output document format
///
/// Each variant maps to a fixed (directory, extension, label) triple and a
/// dedicated writer in the `writers` module. Keeping the set closed makes
/// the format menu and the dispatch table trivially exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    /// Excel workbook (`.xlsx`)
    Spreadsheet,
    /// Word document (`.docx`)
    WordDocument,
    /// PowerPoint presentation (`.pptx`)
    Presentation,
    /// Comma-separated values (`.csv`)
    Csv,
    /// Markdown (`.md`)
    Markdown,
    /// YAML (`.yaml`)
    Yaml,
}

impl DocumentFormat {
    /// All supported formats in menu order
    pub const ALL: [DocumentFormat; 6] = [
        DocumentFormat::Spreadsheet,
        DocumentFormat::WordDocument,
        DocumentFormat::Presentation,
        DocumentFormat::Csv,
        DocumentFormat::Markdown,
        DocumentFormat::Yaml,
    ];

    /// The file extension for this format, without a leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            DocumentFormat::Spreadsheet => "xlsx",
            DocumentFormat::WordDocument => "docx",
            DocumentFormat::Presentation => "pptx",
            DocumentFormat::Csv => "csv",
            DocumentFormat::Markdown => "md",
            DocumentFormat::Yaml => "yaml",
        }
    }

    /// The per-format output directory name under the output root
    ///
    /// Matches the extension for every format.
    pub fn directory(&self) -> &'static str {
        self.extension()
    }

    /// Human-readable label shown in the format menu
    pub fn label(&self) -> &'static str {
        match self {
            DocumentFormat::Spreadsheet => "Excel Workbook",
            DocumentFormat::WordDocument => "Word Document",
            DocumentFormat::Presentation => "PowerPoint Presentation",
            DocumentFormat::Csv => "CSV File",
            DocumentFormat::Markdown => "Markdown",
            DocumentFormat::Yaml => "YAML File",
        }
    }

    /// Resolves a 1-based menu selection to a format
    ///
    /// # Errors
    /// Returns an error if the input is not a number or is out of menu range
    pub fn from_menu_choice(input: &str) -> Result<DocumentFormat> {
        let max = DocumentFormat::ALL.len();
        match input.trim().parse::<usize>() {
            Ok(choice) if (1..=max).contains(&choice) => Ok(DocumentFormat::ALL[choice - 1]),
            _ => Err(invalid_selection_error(input, max)),
        }
    }

    /// Renders the numbered format menu, one entry per line
    pub fn menu() -> String {
        DocumentFormat::ALL
            .iter()
            .enumerate()
            .map(|(index, format)| format!("  {}. {format}", index + 1))
            .collect::<Vec<String>>()
            .join("\n")
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_mapping() {
        assert_eq!(DocumentFormat::Spreadsheet.extension(), "xlsx");
        assert_eq!(DocumentFormat::WordDocument.extension(), "docx");
        assert_eq!(DocumentFormat::Presentation.extension(), "pptx");
        assert_eq!(DocumentFormat::Csv.extension(), "csv");
        assert_eq!(DocumentFormat::Markdown.extension(), "md");
        assert_eq!(DocumentFormat::Yaml.extension(), "yaml");
    }

    #[test]
    fn test_directory_matches_extension() {
        for format in DocumentFormat::ALL {
            assert_eq!(format.directory(), format.extension());
        }
    }

    #[test]
    fn test_from_menu_choice() {
        // Test every valid selection round-trips through the menu order
        for (index, format) in DocumentFormat::ALL.iter().enumerate() {
            let choice = (index + 1).to_string();
            assert_eq!(DocumentFormat::from_menu_choice(&choice).unwrap(), *format);
        }

        // Test whitespace is tolerated
        assert_eq!(
            DocumentFormat::from_menu_choice(" 1 ").unwrap(),
            DocumentFormat::Spreadsheet
        );

        // Test out-of-range and non-numeric selections are rejected
        assert!(DocumentFormat::from_menu_choice("0").is_err());
        assert!(DocumentFormat::from_menu_choice("7").is_err());
        assert!(DocumentFormat::from_menu_choice("spreadsheet").is_err());
        assert!(DocumentFormat::from_menu_choice("").is_err());
    }

    #[test]
    fn test_menu_lists_all_formats() {
        let menu = DocumentFormat::menu();
        assert_eq!(menu.lines().count(), DocumentFormat::ALL.len());
        for format in DocumentFormat::ALL {
            assert!(
                menu.contains(format.label()),
                "Menu should list {}",
                format.label()
            );
        }
    }
}
