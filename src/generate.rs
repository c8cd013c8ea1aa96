//! Batch generation
//!
//! This module contains the creation loop: it expands the naming pattern for
//! each copy index, resolves the target path inside the per-format output
//! directory, and invokes the format writer. A failure on one file is
//! recorded and the loop continues with the remaining files.

use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::errors::{file_operation_error, Error, Result};
use crate::format::DocumentFormat;
use crate::pattern::{expand, sanitize};
use crate::writers::write_document;

/// A single batch request: pattern, format, and number of copies
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// The naming pattern entered by the user
    pub pattern: String,
    /// The chosen output format
    pub format: DocumentFormat,
    /// How many copies to create, always at least 1
    pub count: u32,
}

/// A file that could not be created
#[derive(Debug)]
pub struct FileFailure {
    /// The target path of the failed file
    pub path: PathBuf,
    /// The error that prevented creation
    pub error: Error,
}

/// Outcome of one batch run
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Number of files created
    pub created: usize,
    /// Target paths resolved in dry-run mode
    pub planned: Vec<PathBuf>,
    /// Files that could not be created
    pub failures: Vec<FileFailure>,
}

/// Resolves the target path for one copy index
///
/// The filename is `sanitize(expand(pattern, index))` plus the format
/// extension, placed inside the per-format directory under the output root.
pub fn target_path(
    output_root: &Path,
    format: DocumentFormat,
    pattern: &str,
    index: u32,
) -> PathBuf {
    let stem = sanitize(&expand(pattern, index));
    output_root
        .join(format.directory())
        .join(format!("{stem}.{}", format.extension()))
}

/// Runs one generation batch
///
/// Ensures the per-format output directory exists, then creates one file
/// per copy index. Filenames within a run are distinct by construction
/// since the strictly increasing index is embedded in every name.
///
/// # Arguments
/// * `request` - The batch to generate
/// * `output_root` - Directory the per-format directories live under
/// * `dry_run` - Resolve and report target paths without writing anything
///
/// # Returns
/// * `Result<GenerationReport>` - Counts and per-file failures for the run
///
/// # Errors
/// Returns an error if the output directory itself cannot be created; a
/// failure on an individual file is recorded in the report instead
pub fn generate(
    request: &GenerationRequest,
    output_root: &Path,
    dry_run: bool,
) -> Result<GenerationReport> {
    let format_dir = output_root.join(request.format.directory());

    if !dry_run {
        create_dir_all(&format_dir)
            .map_err(|e| file_operation_error(e, format_dir.clone(), "create directory"))?;
    }

    let mut report = GenerationReport::default();

    for index in 1..=request.count {
        let path = target_path(output_root, request.format, &request.pattern, index);

        if dry_run {
            info!("Would create {}", path.display());
            report.planned.push(path);
            continue;
        }

        match write_document(request.format, &path) {
            Ok(()) => {
                debug!("Created {}", path.display());
                report.created += 1;
            }
            Err(error) => {
                warn!("Failed to create {}: {}", path.display(), error);
                report.failures.push(FileFailure { path, error });
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_path_layout() {
        let path = target_path(
            Path::new("Created-Files"),
            DocumentFormat::Markdown,
            "Report_0_Draft",
            2,
        );
        assert_eq!(path, PathBuf::from("Created-Files/md/Report_2_Draft.md"));
    }

    #[test]
    fn test_target_path_sanitizes_expanded_name() {
        let path = target_path(Path::new("out"), DocumentFormat::Yaml, "Rep:ort_0", 1);
        assert_eq!(path, PathBuf::from("out/yaml/Rep_ort_1.yaml"));
    }

    #[test]
    fn test_target_paths_are_distinct_per_index() {
        let paths: Vec<PathBuf> = (1..=50)
            .map(|i| target_path(Path::new("out"), DocumentFormat::Csv, "Notes", i))
            .collect();

        let mut deduped = paths.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), paths.len(), "No two indices may collide");
    }
}
