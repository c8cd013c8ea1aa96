//! Minimal OOXML skeleton writers
//!
//! xlsx, docx, and pptx files are OPC packages: ZIP containers holding XML
//! parts. The templates bundled here carry the smallest part set the
//! mainstream readers accept, so every generated document opens as a valid
//! empty file.

use std::fs::File;
use std::io;
use std::io::Write;
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::errors::{file_operation_error, Result};

const XLSX_CONTENT_TYPES: &str = include_str!("templates/xlsx/content_types.xml");
const XLSX_RELS: &str = include_str!("templates/xlsx/rels.xml");
const XLSX_WORKBOOK: &str = include_str!("templates/xlsx/workbook.xml");
const XLSX_WORKBOOK_RELS: &str = include_str!("templates/xlsx/workbook_rels.xml");
const XLSX_SHEET: &str = include_str!("templates/xlsx/sheet1.xml");

const DOCX_CONTENT_TYPES: &str = include_str!("templates/docx/content_types.xml");
const DOCX_RELS: &str = include_str!("templates/docx/rels.xml");
const DOCX_DOCUMENT: &str = include_str!("templates/docx/document.xml");

const PPTX_CONTENT_TYPES: &str = include_str!("templates/pptx/content_types.xml");
const PPTX_RELS: &str = include_str!("templates/pptx/rels.xml");
const PPTX_PRESENTATION: &str = include_str!("templates/pptx/presentation.xml");
const PPTX_PRESENTATION_RELS: &str = include_str!("templates/pptx/presentation_rels.xml");
const PPTX_SLIDE_MASTER: &str = include_str!("templates/pptx/slide_master.xml");
const PPTX_SLIDE_MASTER_RELS: &str = include_str!("templates/pptx/slide_master_rels.xml");
const PPTX_SLIDE_LAYOUT: &str = include_str!("templates/pptx/slide_layout.xml");
const PPTX_SLIDE_LAYOUT_RELS: &str = include_str!("templates/pptx/slide_layout_rels.xml");
const PPTX_SLIDE: &str = include_str!("templates/pptx/slide1.xml");
const PPTX_SLIDE_RELS: &str = include_str!("templates/pptx/slide1_rels.xml");
const PPTX_THEME: &str = include_str!("templates/pptx/theme.xml");

/// Packages a list of (part name, content) pairs into a ZIP container at `path`
fn write_package(path: &Path, parts: &[(&str, &str)]) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| file_operation_error(e, path.to_path_buf(), "create"))?;

    let mut archive = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (name, content) in parts {
        archive
            .start_file(*name, options)
            .map_err(|e| file_operation_error(io::Error::other(e), path.to_path_buf(), "write"))?;
        archive
            .write_all(content.as_bytes())
            .map_err(|e| file_operation_error(e, path.to_path_buf(), "write"))?;
    }

    archive
        .finish()
        .map_err(|e| file_operation_error(io::Error::other(e), path.to_path_buf(), "finalize"))?;

    Ok(())
}

/// Creates a blank Excel workbook with a single empty sheet named Sheet1
pub fn write_workbook(path: &Path) -> Result<()> {
    write_package(
        path,
        &[
            ("[Content_Types].xml", XLSX_CONTENT_TYPES),
            ("_rels/.rels", XLSX_RELS),
            ("xl/workbook.xml", XLSX_WORKBOOK),
            ("xl/_rels/workbook.xml.rels", XLSX_WORKBOOK_RELS),
            ("xl/worksheets/sheet1.xml", XLSX_SHEET),
        ],
    )
}

/// Creates a blank Word document with a single empty paragraph
pub fn write_word_document(path: &Path) -> Result<()> {
    write_package(
        path,
        &[
            ("[Content_Types].xml", DOCX_CONTENT_TYPES),
            ("_rels/.rels", DOCX_RELS),
            ("word/document.xml", DOCX_DOCUMENT),
        ],
    )
}

/// Creates a blank PowerPoint presentation with one empty slide
pub fn write_presentation(path: &Path) -> Result<()> {
    write_package(
        path,
        &[
            ("[Content_Types].xml", PPTX_CONTENT_TYPES),
            ("_rels/.rels", PPTX_RELS),
            ("ppt/presentation.xml", PPTX_PRESENTATION),
            ("ppt/_rels/presentation.xml.rels", PPTX_PRESENTATION_RELS),
            ("ppt/slideMasters/slideMaster1.xml", PPTX_SLIDE_MASTER),
            (
                "ppt/slideMasters/_rels/slideMaster1.xml.rels",
                PPTX_SLIDE_MASTER_RELS,
            ),
            ("ppt/slideLayouts/slideLayout1.xml", PPTX_SLIDE_LAYOUT),
            (
                "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
                PPTX_SLIDE_LAYOUT_RELS,
            ),
            ("ppt/slides/slide1.xml", PPTX_SLIDE),
            ("ppt/slides/_rels/slide1.xml.rels", PPTX_SLIDE_RELS),
            ("ppt/theme/theme1.xml", PPTX_THEME),
        ],
    )
}
