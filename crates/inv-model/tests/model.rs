//! Tests for inv-model types.

use inv_model::{Inventory, QueryState, Record, SortKey, SortOrder};

#[test]
fn record_serializes_camel_case_without_search_index() {
    let record = Record::new("1234-56", "Widget", "EA", "10", "KitA;KitB");
    let json = serde_json::to_value(&record).expect("serialize record");
    assert_eq!(json["nsn"], "1234-56");
    assert_eq!(json["unitOfMeasure"], "EA");
    assert_eq!(json["quantityNumeric"], 10.0);
    assert_eq!(json["kitsRaw"], "KitA;KitB");
    assert_eq!(json["kits"], serde_json::json!(["KitA", "KitB"]));
    assert!(json.get("searchIndex").is_none());
}

#[test]
fn inventory_derives_catalog() {
    let inventory = Inventory::new(vec![
        Record::new("1", "Bolt", "EA", "4", "KitB;KitA"),
        Record::new("2", "Nut", "EA", "8", "KitA"),
    ]);
    assert_eq!(inventory.len(), 2);
    assert_eq!(inventory.kits.as_slice(), ["KitA", "KitB"]);
}

#[test]
fn query_state_serializes_sort_as_key_and_direction() {
    let state = QueryState::default()
        .with_search_term("bolt")
        .with_sort(SortOrder::descending(SortKey::Quantity));
    let json = serde_json::to_value(&state).expect("serialize state");
    assert_eq!(json["search_term"], "bolt");
    assert_eq!(json["sort"]["key"], "quantity");
    assert_eq!(json["sort"]["ascending"], false);
}
