//! Ordered, deduplicated set of records chosen for export.

use inv_model::{Record, RecordKey};

/// Records the user has picked, in the order they were picked.
///
/// Identity is the `(nsn, description)` pair; no two entries share it.
/// Lookups are linear, which is fine for the tens to hundreds of entries a
/// selection holds in practice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    items: Vec<Record>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes the record if an entry with the same identity is present,
    /// otherwise appends it. Returns `true` when the record is now selected.
    pub fn toggle(&mut self, record: &Record) -> bool {
        match self.position(record.nsn(), record.description()) {
            Some(idx) => {
                self.items.remove(idx);
                false
            }
            None => {
                self.items.push(record.clone());
                true
            }
        }
    }

    /// Removes the entry with this identity. Returns whether one was present.
    pub fn remove(&mut self, nsn: &str, description: &str) -> bool {
        match self.position(nsn, description) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn remove_key(&mut self, key: &RecordKey) -> bool {
        self.remove(&key.nsn, &key.description)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, record: &Record) -> bool {
        self.contains_key(record.nsn(), record.description())
    }

    pub fn contains_key(&self, nsn: &str, description: &str) -> bool {
        self.position(nsn, description).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Selected records in selection order.
    pub fn list(&self) -> &[Record] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.items.iter()
    }

    fn position(&self, nsn: &str, description: &str) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.has_key(nsn, description))
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
