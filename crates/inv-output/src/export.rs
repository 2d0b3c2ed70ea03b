//! Export documents for the current selection.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use tracing::info;

use inv_model::Record;

use crate::error::{OutputError, Result};
use crate::writer::serialize_records;

/// MIME type of export documents.
pub const EXPORT_MIME_TYPE: &str = "text/csv";

/// A serialized selection ready to be saved or downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    pub file_name: String,
    pub mime_type: &'static str,
    pub contents: String,
    /// Number of data rows.
    pub rows: usize,
}

impl ExportDocument {
    pub fn as_bytes(&self) -> &[u8] {
        self.contents.as_bytes()
    }
}

/// `selected_items_YYYY-MM-DD_HHMM.csv` for the given local time.
pub fn export_file_name(at: NaiveDateTime) -> String {
    at.format("selected_items_%Y-%m-%d_%H%M.csv").to_string()
}

/// Current wall-clock time in the local time zone, as used for file names.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Builds the export for `records`, or `None` when there is nothing to export.
pub fn export_selection(records: &[Record], at: NaiveDateTime) -> Option<ExportDocument> {
    if records.is_empty() {
        return None;
    }
    Some(ExportDocument {
        file_name: export_file_name(at),
        mime_type: EXPORT_MIME_TYPE,
        contents: serialize_records(records),
        rows: records.len(),
    })
}

/// Writes `document` into `dir`, creating the directory if needed.
pub fn write_export(dir: &Path, document: &ExportDocument) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    let path = dir.join(&document.file_name);
    fs::write(&path, document.as_bytes()).map_err(|source| OutputError::Write {
        path: path.clone(),
        source,
    })?;
    info!(
        path = %path.display(),
        rows = document.rows,
        bytes = document.contents.len(),
        "export written"
    );
    Ok(path)
}
