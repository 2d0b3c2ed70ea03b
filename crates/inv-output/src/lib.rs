//! Selection export.
//!
//! Serializes selected records back to CSV and names and writes the
//! resulting document.

mod error;
mod export;
mod writer;

pub use error::{OutputError, Result};
pub use export::{
    EXPORT_MIME_TYPE, ExportDocument, export_file_name, export_selection, local_now, write_export,
};
pub use writer::{EXPORT_HEADER, LINE_ENDING, escape_field, serialize_records};
