//! Property tests for the query engine and selection store.

use inv_model::{QueryState, Record, SortKey, SortOrder};
use inv_query::{Selection, evaluate};
use proptest::prelude::*;

fn record_strategy() -> impl Strategy<Value = Record> {
    (
        "[0-9]{1,2}",
        "[A-Ca-c ]{0,4}",
        prop_oneof![Just("EA"), Just("BX"), Just("")],
        prop_oneof!["[0-9]{1,2}", Just("abc".to_string()), Just(String::new())],
        prop_oneof![Just("KitA"), Just("KitB;KitA"), Just("KitC"), Just("")],
    )
        .prop_map(|(nsn, description, uom, quantity, kits)| {
            Record::new(&nsn, &description, uom, &quantity, kits)
        })
}

fn state_strategy() -> impl Strategy<Value = QueryState> {
    (
        prop_oneof![Just(""), Just("a"), Just("B"), Just("1"), Just("kit")],
        prop_oneof![Just(""), Just("KitA"), Just("KitB"), Just("KitZ")],
        prop_oneof![
            Just(SortKey::Nsn),
            Just(SortKey::Description),
            Just(SortKey::Quantity)
        ],
        any::<bool>(),
    )
        .prop_map(|(term, kit, key, ascending)| {
            QueryState::default()
                .with_search_term(term)
                .with_kit_filter(kit)
                .with_sort(SortOrder::new(key, ascending))
        })
}

fn position(records: &[Record], target: &Record) -> usize {
    records
        .iter()
        .position(|record| std::ptr::eq(record, target))
        .expect("view entries come from the record set")
}

proptest! {
    #[test]
    fn evaluation_is_idempotent(records in prop::collection::vec(record_strategy(), 0..30), state in state_strategy()) {
        let first = evaluate(&records, &state);
        let second = evaluate(&records, &state);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn view_never_exceeds_record_set(records in prop::collection::vec(record_strategy(), 0..30), state in state_strategy()) {
        let view = evaluate(&records, &state);
        prop_assert!(view.len() <= records.len());
        if state.is_unfiltered() {
            prop_assert_eq!(view.len(), records.len());
        }
    }

    #[test]
    fn equal_keys_keep_record_set_order(records in prop::collection::vec(record_strategy(), 0..30), state in state_strategy()) {
        let view = evaluate(&records, &state);
        for pair in view.windows(2) {
            let ordering = inv_query::compare(pair[0], pair[1], state.sort_key());
            if ordering.is_eq() {
                prop_assert!(position(&records, pair[0]) < position(&records, pair[1]));
            } else if state.sort_ascending() {
                prop_assert!(ordering.is_lt());
            } else {
                prop_assert!(ordering.is_gt());
            }
        }
    }

    #[test]
    fn double_toggle_restores_selection(records in prop::collection::vec(record_strategy(), 1..15), pick in any::<prop::sample::Index>()) {
        let mut selection = Selection::new();
        for record in &records {
            if !selection.contains(record) {
                selection.toggle(record);
            }
        }
        let before = selection.clone();
        let target = pick.get(&records);
        selection.toggle(target);
        selection.toggle(target);
        prop_assert_eq!(selection.len(), before.len());
        let keys: Vec<_> = selection.iter().map(Record::key).collect();
        let keys_before: Vec<_> = before.iter().map(Record::key).collect();
        let mut sorted = keys.clone();
        let mut sorted_before = keys_before.clone();
        sorted.sort();
        sorted_before.sort();
        prop_assert_eq!(sorted, sorted_before);
    }
}
