//! Inventory data model shared by the ingest, query, and output crates.

pub mod catalog;
pub mod error;
pub mod query;
pub mod record;

pub use catalog::KitCatalog;
pub use error::{ModelError, Result};
pub use query::{QueryState, QueryUpdate, SortKey, SortOrder};
pub use record::{RECORD_COLUMNS, Record, RecordKey, parse_quantity, split_kits};

/// A loaded record set together with its kit catalog.
///
/// Built once per document and replaced wholesale on reload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    pub records: Vec<Record>,
    pub kits: KitCatalog,
}

impl Inventory {
    /// Builds an inventory, deriving the kit catalog from `records`.
    pub fn new(records: Vec<Record>) -> Self {
        let kits = KitCatalog::from_records(&records);
        Self { records, kits }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
