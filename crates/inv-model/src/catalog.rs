//! Distinct kit names across a record set.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::record::Record;

/// Sorted, deduplicated kit names used to populate the kit filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KitCatalog {
    kits: Vec<String>,
}

impl KitCatalog {
    /// Collects every kit referenced by `records`.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut names = BTreeSet::new();
        for record in records {
            for kit in record.kits() {
                names.insert(kit.clone());
            }
        }
        Self::from(names)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.kits
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.kits.iter()
    }

    pub fn len(&self) -> usize {
        self.kits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kits.is_empty()
    }

    pub fn contains(&self, kit: &str) -> bool {
        self.kits
            .binary_search_by(|probe| probe.as_str().cmp(kit))
            .is_ok()
    }
}

impl From<BTreeSet<String>> for KitCatalog {
    fn from(names: BTreeSet<String>) -> Self {
        Self {
            kits: names.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a KitCatalog {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.kits.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_sorted_and_distinct() {
        let records = vec![
            Record::new("1", "A", "", "", "Zulu;Alpha"),
            Record::new("2", "B", "", "", "alpha; Alpha ;Mike"),
            Record::new("3", "C", "", "", ""),
        ];
        let catalog = KitCatalog::from_records(&records);
        assert_eq!(catalog.as_slice(), ["Alpha", "Mike", "Zulu", "alpha"]);
        assert!(catalog.contains("Mike"));
        assert!(!catalog.contains("mike"));
    }

    #[test]
    fn empty_records_give_empty_catalog() {
        let catalog = KitCatalog::from_records(&Vec::<Record>::new());
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }
}
