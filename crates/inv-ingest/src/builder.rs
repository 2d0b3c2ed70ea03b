//! Projection of tokenized rows onto inventory records.

use tracing::debug;

use inv_model::{Inventory, Record};

use crate::csv::{RawRow, parse_rows};

/// Result of loading a document.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Header plus at least one data row was found.
    Loaded(Inventory),
    /// The document had fewer than two rows.
    Empty,
}

impl LoadOutcome {
    pub fn inventory(&self) -> Option<&Inventory> {
        match self {
            Self::Loaded(inventory) => Some(inventory),
            Self::Empty => None,
        }
    }

    pub fn into_inventory(self) -> Option<Inventory> {
        match self {
            Self::Loaded(inventory) => Some(inventory),
            Self::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Builds records from tokenized rows.
///
/// The first row is a header and is skipped without inspection. Remaining
/// rows map positionally onto NSN, description, unit of measure, quantity,
/// and kit membership; rows with neither an NSN nor a description are
/// dropped.
pub fn build_inventory(rows: &[RawRow]) -> Inventory {
    let mut records = Vec::with_capacity(rows.len().saturating_sub(1));
    let mut dropped = 0usize;
    for row in rows.iter().skip(1) {
        let record = Record::from_cells(row.as_slice());
        if record.is_blank() {
            dropped += 1;
            continue;
        }
        records.push(record);
    }
    let inventory = Inventory::new(records);
    debug!(
        rows = rows.len(),
        records = inventory.len(),
        dropped,
        kits = inventory.kits.len(),
        "built inventory"
    );
    inventory
}

/// Tokenizes and builds a whole document.
///
/// A leading UTF-8 byte order mark is ignored. Never fails: malformed rows
/// are normalized and a document without data rows is [`LoadOutcome::Empty`].
pub fn load_document(text: &str) -> LoadOutcome {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let rows = parse_rows(text);
    if rows.len() < 2 {
        debug!(rows = rows.len(), "document has no data rows");
        return LoadOutcome::Empty;
    }
    LoadOutcome::Loaded(build_inventory(&rows))
}
