//! Inventory ingestion.
//!
//! Turns a CSV document into an [`Inventory`](inv_model::Inventory):
//!
//! - **Tokenizing**: a lenient, linear-time CSV tokenizer that never fails
//! - **Record building**: positional projection onto records, dropping blank rows
//! - **Loading**: file or HTTP sources, the only step that can fail
//!
//! # Example
//!
//! ```ignore
//! use inv_ingest::{DocumentSource, LoadOutcome, load_from_source};
//!
//! let source: DocumentSource = "Data/master_inventory.csv".parse()?;
//! match load_from_source(&source)? {
//!     LoadOutcome::Loaded(inventory) => println!("{} items", inventory.len()),
//!     LoadOutcome::Empty => println!("No data found in CSV."),
//! }
//! ```

mod builder;
mod csv;
mod error;
mod source;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Tokenizing ===
pub use csv::{RawRow, Tokenizer, parse_rows};

// === Record Building ===
pub use builder::{LoadOutcome, build_inventory, load_document};

// === Document Sources ===
pub use source::{DEFAULT_DOCUMENT_PATH, DocumentSource, fetch_document, load_from_source};
