//! Tests for cq-model types.
//!
//! Focused on wire-shape fidelity: the untagged raw enums must absorb every
//! JSON shape the legacy catalog feed produces, and canonical records must
//! serialize with the camelCase field names downstream consumers expect.

use cq_model::{
    CanonicalRecord, GlitchIssue, RawCategory, RawPrice, RawRecord, RawStock, RecordField,
};

// =========================================================================
// RawRecord deserialization
// =========================================================================

#[test]
fn raw_record_with_every_field_degraded() {
    let json = r#"{
        "id": "p-1",
        "name": "",
        "price": "19,99",
        "stock": -3,
        "category": ["Toys", "Games"],
        "updatedAt": "not-a-date"
    }"#;
    let raw: RawRecord = serde_json::from_str(json).expect("deserialize raw record");

    assert_eq!(raw.id, "p-1");
    assert_eq!(raw.name.as_deref(), Some(""));
    assert_eq!(raw.price, Some(RawPrice::Text("19,99".to_string())));
    assert_eq!(raw.stock, Some(RawStock::Count(-3.0)));
    assert_eq!(
        raw.category,
        RawCategory::Many(vec!["Toys".to_string(), "Games".to_string()])
    );
    assert_eq!(raw.updated_at.as_deref(), Some("not-a-date"));
}

#[test]
fn raw_record_with_only_an_id() {
    let raw: RawRecord = serde_json::from_str(r#"{"id": "p-2"}"#).expect("deserialize");

    assert_eq!(raw.name, None);
    assert_eq!(raw.price, None);
    assert_eq!(raw.stock, None);
    assert_eq!(raw.category, RawCategory::Missing);
    assert_eq!(raw.updated_at, None);
}

#[test]
fn null_category_maps_to_missing() {
    let raw: RawRecord =
        serde_json::from_str(r#"{"id": "p-3", "category": null}"#).expect("deserialize");
    assert_eq!(raw.category, RawCategory::Missing);
}

#[test]
fn numeric_category_lands_in_invalid_arm() {
    let raw: RawRecord =
        serde_json::from_str(r#"{"id": "p-4", "category": 7}"#).expect("deserialize");
    assert_eq!(
        raw.category,
        RawCategory::Invalid(serde_json::Value::from(7))
    );
}

#[test]
fn string_stock_lands_in_invalid_arm() {
    let raw: RawRecord =
        serde_json::from_str(r#"{"id": "p-5", "stock": "lots"}"#).expect("deserialize");
    assert_eq!(
        raw.stock,
        Some(RawStock::Invalid(serde_json::Value::from("lots")))
    );
}

#[test]
fn boolean_price_lands_in_invalid_arm() {
    let raw: RawRecord =
        serde_json::from_str(r#"{"id": "p-7", "price": true}"#).expect("deserialize");
    assert_eq!(
        raw.price,
        Some(RawPrice::Invalid(serde_json::Value::Bool(true)))
    );
}

#[test]
fn object_price_lands_in_invalid_arm() {
    let raw: RawRecord =
        serde_json::from_str(r#"{"id": "p-8", "price": {"amount": 5}}"#).expect("deserialize");
    assert!(matches!(raw.price, Some(RawPrice::Invalid(_))));
}

#[test]
fn numeric_price_keeps_its_value() {
    let raw: RawRecord =
        serde_json::from_str(r#"{"id": "p-6", "price": 9.99}"#).expect("deserialize");
    assert_eq!(raw.price, Some(RawPrice::Amount(9.99)));
}

// =========================================================================
// CanonicalRecord serialization
// =========================================================================

fn canonical_fixture() -> CanonicalRecord {
    CanonicalRecord {
        id: "p-1".to_string(),
        name: "Widget".to_string(),
        price: 9.99,
        stock: 5,
        category: "Gadgets".to_string(),
        updated_at: Some("2024-01-01T00:00:00Z".to_string()),
        glitch_score: 0,
        glitch_report: vec![],
    }
}

#[test]
fn canonical_record_uses_camel_case_wire_names() {
    let json = serde_json::to_value(canonical_fixture()).expect("serialize");

    assert!(json.get("updatedAt").is_some());
    assert!(json.get("glitchScore").is_some());
    assert!(json.get("glitchReport").is_some());
    assert!(json.get("updated_at").is_none());
}

#[test]
fn canonical_record_round_trips_through_json() {
    let record = CanonicalRecord {
        glitch_score: 80,
        glitch_report: vec![GlitchIssue::new(
            RecordField::Name,
            "Name is empty or invalid.",
        )],
        ..canonical_fixture()
    };
    let json = serde_json::to_string(&record).expect("serialize");
    let round: CanonicalRecord = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(round, record);
}

#[test]
fn to_raw_preserves_canonical_values() {
    let record = canonical_fixture();
    let raw = record.to_raw();

    assert_eq!(raw.id, "p-1");
    assert_eq!(raw.name.as_deref(), Some("Widget"));
    assert_eq!(raw.price, Some(RawPrice::Amount(9.99)));
    assert_eq!(raw.stock, Some(RawStock::Count(5.0)));
    assert_eq!(raw.category, RawCategory::One("Gadgets".to_string()));
    assert_eq!(raw.updated_at.as_deref(), Some("2024-01-01T00:00:00Z"));
}
