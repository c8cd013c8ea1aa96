//! Plain-text skeleton writers
//!
//! Writers for the text-based formats: an empty CSV file, a Markdown file
//! headed by its own stem, and a YAML file holding an empty mapping.

use std::fs;
use std::fs::File;
use std::io;
use std::io::Write;
use std::path::Path;

use crate::errors::{file_operation_error, invalid_filename_error, Result};

/// Creates an empty CSV file with no records
pub fn write_csv(path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| file_operation_error(io::Error::other(e), path.to_path_buf(), "create"))?;

    writer
        .flush()
        .map_err(|e| file_operation_error(e, path.to_path_buf(), "write"))?;

    Ok(())
}

/// Creates a Markdown file with a heading derived from the file stem
pub fn write_markdown(path: &Path) -> Result<()> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| invalid_filename_error(path.to_path_buf()))?;

    let mut file =
        File::create(path).map_err(|e| file_operation_error(e, path.to_path_buf(), "create"))?;

    writeln!(file, "# {stem}")
        .and_then(|()| writeln!(file))
        .map_err(|e| file_operation_error(e, path.to_path_buf(), "write"))?;

    Ok(())
}

/// Creates a YAML file holding an empty mapping
pub fn write_yaml(path: &Path) -> Result<()> {
    let body = serde_yaml::to_string(&serde_yaml::Mapping::new())
        .map_err(|e| file_operation_error(io::Error::other(e), path.to_path_buf(), "serialize"))?;

    fs::write(path, body).map_err(|e| file_operation_error(e, path.to_path_buf(), "write"))?;

    Ok(())
}
