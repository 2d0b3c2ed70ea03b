//! Terminal rendering of views, kits and the selection.

use std::borrow::Cow;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use inv_model::{KitCatalog, Record};
use inv_query::{Selection, Session, ViewStatus};

pub const NO_DATA_MESSAGE: &str = "No data found in CSV.";
pub const NO_MATCHES_MESSAGE: &str = "No items match your search.";

/// Placeholder for empty cells.
const EMPTY_CELL: &str = "-";
const TRUNCATION_MARK: char = '…';
const SELECTED_MARK: &str = "✓";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Kit text longer than this many characters is shortened.
    pub kit_width: usize,
    /// Show kit text in full for every row.
    pub full_kits: bool,
}

/// Shortens `text` to `width` characters followed by `…`.
pub fn truncate_kits(text: &str, width: usize) -> Cow<'_, str> {
    match text.char_indices().nth(width) {
        Some((cut, _)) => Cow::Owned(format!("{}{TRUNCATION_MARK}", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}

/// Table of the filtered view. Selected rows carry a check mark.
pub fn inventory_table(session: &Session, view: &[&Record], options: TableOptions) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(""),
        header_cell("NSN"),
        header_cell("Description"),
        header_cell("U/I"),
        header_cell("Qty"),
        header_cell("Kit Membership"),
    ]);
    apply_table_style(&mut table);

    for record in view {
        let expanded = options.full_kits || session.kits_expanded(&record.key());
        let kits = if expanded {
            Cow::Borrowed(record.kits_raw())
        } else {
            truncate_kits(record.kits_raw(), options.kit_width)
        };
        let mark = if session.selection().contains(record) {
            Cell::new(SELECTED_MARK).fg(Color::Green)
        } else {
            Cell::new("")
        };
        table.add_row(vec![
            mark,
            Cell::new(record.nsn()).add_attribute(Attribute::Bold),
            Cell::new(record.description()),
            value_cell(record.unit_of_measure()),
            value_cell(record.quantity()),
            value_cell(&kits),
        ]);
    }
    align_column(&mut table, 4, CellAlignment::Right);
    table
}

/// Table of every kit with the number of records that name it.
pub fn kits_table(kits: &KitCatalog, records: &[Record]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Kit"), header_cell("Items")]);
    apply_table_style(&mut table);
    for kit in kits {
        let count = records
            .iter()
            .filter(|record| record.kits().iter().any(|name| name == kit))
            .count();
        table.add_row(vec![Cell::new(kit), Cell::new(count)]);
    }
    align_column(&mut table, 1, CellAlignment::Right);
    table
}

/// Table of selected records in selection order.
pub fn selection_table(selection: &Selection) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("NSN"),
        header_cell("Description"),
        header_cell("Qty"),
    ]);
    apply_table_style(&mut table);
    for (idx, record) in selection.iter().enumerate() {
        table.add_row(vec![
            dim_cell(idx + 1),
            Cell::new(record.nsn()).add_attribute(Attribute::Bold),
            Cell::new(record.description()),
            value_cell(record.quantity()),
        ]);
    }
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    table
}

#[derive(Serialize)]
struct ViewPayload<'a> {
    #[serde(flatten)]
    status: ViewStatus,
    items: &'a [&'a Record],
}

/// The filtered view as pretty-printed JSON with its counts.
pub fn view_json(view: &[&Record], status: ViewStatus) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ViewPayload {
        status,
        items: view,
    })
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn value_cell(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell(EMPTY_CELL)
    } else {
        Cell::new(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
