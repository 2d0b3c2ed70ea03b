//! Filtering and sorting of a record set.

use std::cmp::Ordering;

use inv_model::{QueryState, Record, SortKey, SortOrder};

/// Computes the filtered view for `state`.
///
/// Both filters must pass: the lowercased search term must occur in the
/// record's search index, and the kit filter must name one of its kits.
/// Empty filters pass everything. The result is stably sorted, so records with
/// equal keys keep their record-set order in either direction.
pub fn evaluate<'a>(records: &'a [Record], state: &QueryState) -> Vec<&'a Record> {
    let term = state.search_term.to_lowercase();
    let mut view: Vec<&Record> = records
        .iter()
        .filter(|record| matches(record, &term, &state.kit_filter))
        .collect();
    sort_view(&mut view, state.sort);
    view
}

/// Applies both filters to one record. `term_lower` must already be lowercase.
pub fn matches(record: &Record, term_lower: &str, kit: &str) -> bool {
    if !term_lower.is_empty() && !record.search_index().contains(term_lower) {
        return false;
    }
    if !kit.is_empty() && !record.kits().iter().any(|candidate| candidate == kit) {
        return false;
    }
    true
}

/// Stable in-place sort of a view.
pub fn sort_view(view: &mut [&Record], order: SortOrder) {
    view.sort_by(|a, b| {
        let cmp = compare(a, b, order.key);
        if order.ascending { cmp } else { cmp.reverse() }
    });
}

/// Ascending comparison of two records on `key`.
///
/// Text keys compare the raw (case-preserving) field; quantity compares the
/// parsed number.
pub fn compare(a: &Record, b: &Record, key: SortKey) -> Ordering {
    match key {
        SortKey::Nsn => a.nsn().cmp(b.nsn()),
        SortKey::Description => a.description().cmp(b.description()),
        SortKey::Quantity => a.quantity_numeric().total_cmp(&b.quantity_numeric()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<Record> {
        vec![
            Record::new("1234-56", "Widget", "EA", "10", "KitA;KitB"),
            Record::new("9999-00", "Gasket", "PG", "2", "KitC"),
            Record::new("0001-11", "widget cover", "EA", "abc", "KitB"),
        ]
    }

    fn nsns(view: &[&Record]) -> Vec<String> {
        view.iter().map(|record| record.nsn().to_string()).collect()
    }

    #[test]
    fn search_term_is_case_insensitive_substring() {
        let records = records();
        let state = QueryState::default().with_search_term("WIDGET");
        assert_eq!(nsns(&evaluate(&records, &state)), ["0001-11", "1234-56"]);
    }

    #[test]
    fn search_covers_every_raw_field() {
        let records = records();
        for term in ["9999", "gask", "pg", "2", "kitc"] {
            let state = QueryState::default().with_search_term(term);
            let view = evaluate(&records, &state);
            assert!(
                view.iter().any(|record| record.nsn() == "9999-00"),
                "term {term} should match the gasket"
            );
        }
    }

    #[test]
    fn kit_filter_requires_exact_membership() {
        let records = records();
        let state = QueryState::default().with_kit_filter("KitB");
        assert_eq!(nsns(&evaluate(&records, &state)), ["0001-11", "1234-56"]);

        let partial = QueryState::default().with_kit_filter("Kit");
        assert!(evaluate(&records, &partial).is_empty());
    }

    #[test]
    fn filters_combine() {
        let records = records();
        let state = QueryState::default()
            .with_search_term("widget")
            .with_kit_filter("KitA");
        assert_eq!(nsns(&evaluate(&records, &state)), ["1234-56"]);
    }

    #[test]
    fn quantity_sort_is_numeric() {
        let records = vec![
            Record::new("a", "A", "", "10", ""),
            Record::new("b", "B", "", "9", ""),
            Record::new("c", "C", "", "x", ""),
            Record::new("d", "D", "", "100", ""),
        ];
        let asc = QueryState::default().with_sort(SortOrder::ascending(SortKey::Quantity));
        assert_eq!(nsns(&evaluate(&records, &asc)), ["c", "b", "a", "d"]);

        let desc = QueryState::default().with_sort(SortOrder::descending(SortKey::Quantity));
        assert_eq!(nsns(&evaluate(&records, &desc)), ["d", "a", "b", "c"]);
    }

    #[test]
    fn text_sort_is_case_sensitive() {
        let records = vec![
            Record::new("1", "bolt", "", "", ""),
            Record::new("2", "Washer", "", "", ""),
            Record::new("3", "Anchor", "", "", ""),
        ];
        let state = QueryState::default().with_sort(SortOrder::ascending(SortKey::Description));
        assert_eq!(nsns(&evaluate(&records, &state)), ["3", "2", "1"]);
    }

    #[test]
    fn ties_keep_record_order_in_both_directions() {
        let records = vec![
            Record::new("1", "first", "", "5", ""),
            Record::new("2", "second", "", "5", ""),
            Record::new("0", "zero", "", "1", ""),
            Record::new("3", "third", "", "5", ""),
        ];
        let asc = QueryState::default().with_sort(SortOrder::ascending(SortKey::Quantity));
        assert_eq!(nsns(&evaluate(&records, &asc)), ["0", "1", "2", "3"]);
        let desc = QueryState::default().with_sort(SortOrder::descending(SortKey::Quantity));
        assert_eq!(nsns(&evaluate(&records, &desc)), ["1", "2", "3", "0"]);
    }

    #[test]
    fn empty_filters_return_everything() {
        let records = records();
        let view = evaluate(&records, &QueryState::default());
        assert_eq!(view.len(), records.len());
        assert_eq!(nsns(&view), ["0001-11", "1234-56", "9999-00"]);
    }
}
