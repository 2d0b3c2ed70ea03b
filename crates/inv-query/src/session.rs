//! Single owner of the browsing state.
//!
//! The presentation layer holds one [`Session`] and drives it through the
//! setters below; every setter returns the recomputed filtered view so
//! callers never read state from anywhere else.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;
use tracing::{debug, trace};

use inv_model::{Inventory, KitCatalog, QueryState, QueryUpdate, Record, RecordKey, SortOrder};

use crate::engine::evaluate;
use crate::selection::Selection;

/// Counts shown in the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewStatus {
    pub shown: usize,
    pub total: usize,
}

impl fmt::Display for ViewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {} of {} items", self.shown, self.total)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    inventory: Inventory,
    query: QueryState,
    selection: Selection,
    expanded: BTreeSet<RecordKey>,
}

impl Session {
    pub fn new(inventory: Inventory) -> Self {
        Self {
            inventory,
            ..Self::default()
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn records(&self) -> &[Record] {
        &self.inventory.records
    }

    pub fn kits(&self) -> &KitCatalog {
        &self.inventory.kits
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    /// Filtered view for the current query.
    pub fn view(&self) -> Vec<&Record> {
        evaluate(&self.inventory.records, &self.query)
    }

    pub fn status(&self) -> ViewStatus {
        ViewStatus {
            shown: self.view().len(),
            total: self.inventory.len(),
        }
    }

    /// Sets the free-text filter; surrounding whitespace is ignored.
    pub fn set_search_term(&mut self, term: &str) -> Vec<&Record> {
        self.query.search_term = term.trim().to_string();
        trace!(search_term = %self.query.search_term, "search term changed");
        self.view()
    }

    /// Sets the kit filter; an empty string clears it.
    pub fn set_kit_filter(&mut self, kit: &str) -> Vec<&Record> {
        self.query.kit_filter = kit.to_string();
        trace!(kit_filter = %self.query.kit_filter, "kit filter changed");
        self.view()
    }

    pub fn set_sort(&mut self, order: SortOrder) -> Vec<&Record> {
        self.query.sort = order;
        trace!(sort = %order, "sort order changed");
        self.view()
    }

    /// Applies several query changes at once.
    pub fn set_query(&mut self, update: QueryUpdate) -> Vec<&Record> {
        let QueryUpdate {
            search_term,
            kit_filter,
            sort,
        } = update;
        QueryUpdate {
            search_term: search_term.map(|term| term.trim().to_string()),
            kit_filter,
            sort,
        }
        .apply_to(&mut self.query);
        self.view()
    }

    /// Clears both filters and restores NSN ascending order.
    pub fn reset_query(&mut self) -> Vec<&Record> {
        self.query = QueryState::default();
        debug!("query reset");
        self.view()
    }

    /// Replaces the record set wholesale.
    ///
    /// The selection is kept. A kit filter naming a kit that no longer exists
    /// is cleared, and expanded-kit state is dropped.
    pub fn replace_inventory(&mut self, inventory: Inventory) -> Vec<&Record> {
        if !self.query.kit_filter.is_empty() && !inventory.kits.contains(&self.query.kit_filter) {
            debug!(kit_filter = %self.query.kit_filter, "kit filter no longer in catalog");
            self.query.kit_filter.clear();
        }
        self.expanded.clear();
        self.inventory = inventory;
        debug!(
            records = self.inventory.len(),
            kits = self.inventory.kits.len(),
            "inventory replaced"
        );
        self.view()
    }

    /// Looks up a record in the current record set by identity.
    pub fn find(&self, key: &RecordKey) -> Option<&Record> {
        self.inventory
            .records
            .iter()
            .find(|record| record.has_key(&key.nsn, &key.description))
    }

    /// All records sharing an NSN, in record-set order.
    pub fn find_by_nsn<'a>(&'a self, nsn: &'a str) -> impl Iterator<Item = &'a Record> + 'a {
        self.inventory
            .records
            .iter()
            .filter(move |record| record.nsn() == nsn)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    /// Toggles the record with this identity in the selection.
    ///
    /// Returns `None` when no such record is loaded, otherwise whether it is
    /// now selected.
    pub fn toggle_selected(&mut self, key: &RecordKey) -> Option<bool> {
        let record = self
            .inventory
            .records
            .iter()
            .find(|record| record.has_key(&key.nsn, &key.description))?;
        let selected = self.selection.toggle(record);
        debug!(
            nsn = %key.nsn,
            selected,
            selection_size = self.selection.len(),
            "selection toggled"
        );
        Some(selected)
    }

    /// Flips whether a record's full kit text is shown. Returns the new state.
    pub fn toggle_kits_expanded(&mut self, key: &RecordKey) -> bool {
        if self.expanded.remove(key) {
            false
        } else {
            self.expanded.insert(key.clone());
            true
        }
    }

    pub fn kits_expanded(&self, key: &RecordKey) -> bool {
        self.expanded.contains(key)
    }
}
