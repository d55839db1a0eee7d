//! Tests for the normalization engine.
//!
//! Covers the reference degraded record, the clean path, the score clamp,
//! the fixed issue order, and the two documented asymmetries (unclamped
//! negative price, empty-array category taking the missing branch). The
//! asymmetries are intentional legacy behavior — do not "fix" them here.

use cq_model::{RawCategory, RawPrice, RawRecord, RawStock, RecordField};
use cq_normalize::{
    NAME_FALLBACK, PENALTY_CATEGORY_LIST, PENALTY_CATEGORY_MISSING, PENALTY_NAME_INVALID,
    PENALTY_PRICE_TEXT, PENALTY_PRICE_UNPARSEABLE, PENALTY_STOCK_INVALID,
    PENALTY_UPDATED_AT_INVALID, normalize, normalize_all,
};

fn clean_record() -> RawRecord {
    RawRecord {
        id: "p-clean".to_string(),
        name: Some("Widget".to_string()),
        price: Some(RawPrice::Amount(9.99)),
        stock: Some(RawStock::Count(5.0)),
        category: RawCategory::One("Gadgets".to_string()),
        updated_at: Some("2024-01-01T00:00:00Z".to_string()),
    }
}

// =========================================================================
// Reference records
// =========================================================================

#[test]
fn every_field_degraded_scores_eighty() {
    let raw = RawRecord {
        id: "p-1".to_string(),
        name: Some(String::new()),
        price: Some(RawPrice::Text("19,99".to_string())),
        stock: Some(RawStock::Count(-3.0)),
        category: RawCategory::Many(vec!["Toys".to_string(), "Games".to_string()]),
        updated_at: Some("not-a-date".to_string()),
    };

    let record = normalize(&raw);

    assert_eq!(record.id, "p-1");
    assert_eq!(record.name, NAME_FALLBACK);
    assert_eq!(record.price, 19.99);
    assert_eq!(record.stock, 0);
    assert_eq!(record.category, "Toys");
    assert_eq!(record.updated_at, None);
    assert_eq!(record.glitch_score, 80);
    assert_eq!(
        u32::from(record.glitch_score),
        PENALTY_NAME_INVALID
            + PENALTY_PRICE_TEXT
            + PENALTY_STOCK_INVALID
            + PENALTY_CATEGORY_LIST
            + PENALTY_UPDATED_AT_INVALID
    );
    assert_eq!(record.glitch_report.len(), 5);
}

#[test]
fn clean_record_scores_zero_with_empty_report() {
    let record = normalize(&clean_record());

    assert_eq!(record.glitch_score, 0);
    assert!(record.glitch_report.is_empty());
    assert!(record.is_clean());
    assert_eq!(record.name, "Widget");
    assert_eq!(record.price, 9.99);
    assert_eq!(record.stock, 5);
    assert_eq!(record.category, "Gadgets");
    assert_eq!(record.updated_at.as_deref(), Some("2024-01-01T00:00:00Z"));
}

#[test]
fn fully_garbage_record_clamps_at_one_hundred() {
    let raw = RawRecord {
        id: "p-garbage".to_string(),
        name: None,
        price: Some(RawPrice::Text("free".to_string())),
        stock: Some(RawStock::Invalid(serde_json::Value::Null)),
        category: RawCategory::Many(vec![]),
        updated_at: None,
    };

    let record = normalize(&raw);

    let unclamped = PENALTY_NAME_INVALID
        + PENALTY_PRICE_UNPARSEABLE
        + PENALTY_STOCK_INVALID
        + PENALTY_CATEGORY_MISSING
        + PENALTY_UPDATED_AT_INVALID;
    assert!(unclamped > 100);
    assert_eq!(record.glitch_score, 100);
    assert_eq!(record.glitch_report.len(), 5);
}

// =========================================================================
// Issue ordering
// =========================================================================

#[test]
fn issues_follow_field_discovery_order() {
    let raw = RawRecord {
        updated_at: Some("someday".to_string()),
        price: None,
        ..clean_record()
    };

    let record = normalize(&raw);

    let fields: Vec<RecordField> = record.glitch_report.iter().map(|i| i.field).collect();
    assert_eq!(fields, vec![RecordField::Price, RecordField::UpdatedAt]);
}

#[test]
fn issue_messages_match_the_legacy_wording() {
    let raw = RawRecord {
        id: "p-msgs".to_string(),
        name: Some("   ".to_string()),
        price: Some(RawPrice::Text("ninety".to_string())),
        stock: Some(RawStock::Count(-1.0)),
        category: RawCategory::Missing,
        updated_at: Some("later".to_string()),
    };

    let messages: Vec<String> = normalize(&raw)
        .glitch_report
        .into_iter()
        .map(|issue| issue.message)
        .collect();

    assert_eq!(
        messages,
        vec![
            "Name is empty or invalid.".to_string(),
            "Could not parse price string: ninety".to_string(),
            "Stock was negative.".to_string(),
            "Category was null or invalid.".to_string(),
            "Date format is invalid.".to_string(),
        ]
    );
}

// =========================================================================
// Price
// =========================================================================

#[test]
fn negative_numeric_price_passes_through_unclamped() {
    let raw = RawRecord {
        price: Some(RawPrice::Amount(-5.0)),
        ..clean_record()
    };
    let record = normalize(&raw);

    assert_eq!(record.price, -5.0);
    assert_eq!(record.glitch_score, 0);
}

#[test]
fn parseable_string_price_costs_ten() {
    let raw = RawRecord {
        price: Some(RawPrice::Text("19.99 EUR".to_string())),
        ..clean_record()
    };
    let record = normalize(&raw);

    assert_eq!(record.price, 19.99);
    assert_eq!(u32::from(record.glitch_score), PENALTY_PRICE_TEXT);
    assert_eq!(record.glitch_report[0].field, RecordField::Price);
    assert_eq!(
        record.glitch_report[0].message,
        "Price was a string format instead of a number."
    );
}

#[test]
fn missing_price_costs_thirty() {
    let raw = RawRecord {
        price: None,
        ..clean_record()
    };
    let record = normalize(&raw);

    assert_eq!(record.price, 0.0);
    assert_eq!(u32::from(record.glitch_score), PENALTY_PRICE_UNPARSEABLE);
}

#[test]
fn non_scalar_price_takes_the_missing_branch() {
    let raw = RawRecord {
        price: Some(RawPrice::Invalid(serde_json::Value::Bool(true))),
        ..clean_record()
    };
    let record = normalize(&raw);

    assert_eq!(record.price, 0.0);
    assert_eq!(u32::from(record.glitch_score), PENALTY_PRICE_UNPARSEABLE);
    assert_eq!(
        record.glitch_report[0].message,
        "Price is missing or totally invalid."
    );
}

// =========================================================================
// Stock
// =========================================================================

#[test]
fn negative_stock_clamps_to_zero() {
    let raw = RawRecord {
        stock: Some(RawStock::Count(-7.0)),
        ..clean_record()
    };
    let record = normalize(&raw);

    assert_eq!(record.stock, 0);
    assert_eq!(u32::from(record.glitch_score), PENALTY_STOCK_INVALID);
    assert_eq!(record.glitch_report[0].message, "Stock was negative.");
}

#[test]
fn non_numeric_stock_defaults_to_zero() {
    let raw = RawRecord {
        stock: Some(RawStock::Invalid(serde_json::Value::from("lots"))),
        ..clean_record()
    };
    let record = normalize(&raw);

    assert_eq!(record.stock, 0);
    assert_eq!(record.glitch_report[0].message, "Stock is invalid.");
}

#[test]
fn stock_beyond_the_canonical_range_is_invalid_not_saturated() {
    let raw = RawRecord {
        stock: Some(RawStock::Count(1.0e10)),
        ..clean_record()
    };
    let record = normalize(&raw);

    assert_eq!(record.stock, 0);
    assert_eq!(u32::from(record.glitch_score), PENALTY_STOCK_INVALID);
    assert_eq!(record.glitch_report[0].message, "Stock is invalid.");
}

#[test]
fn fractional_stock_truncates_without_penalty() {
    let raw = RawRecord {
        stock: Some(RawStock::Count(2.9)),
        ..clean_record()
    };
    let record = normalize(&raw);

    assert_eq!(record.stock, 2);
    assert_eq!(record.glitch_score, 0);
}

// =========================================================================
// Category
// =========================================================================

#[test]
fn empty_array_category_takes_the_missing_branch() {
    let raw = RawRecord {
        category: RawCategory::Many(vec![]),
        ..clean_record()
    };
    let record = normalize(&raw);

    assert_eq!(record.category, "Uncategorized");
    // The missing penalty, not the array one; only a non-empty array
    // takes the array branch.
    assert_eq!(u32::from(record.glitch_score), PENALTY_CATEGORY_MISSING);
    assert_eq!(
        record.glitch_report[0].message,
        "Category was null or invalid."
    );
}

#[test]
fn non_empty_array_category_collapses_to_first_element() {
    let raw = RawRecord {
        category: RawCategory::Many(vec!["Toys".to_string(), "Games".to_string()]),
        ..clean_record()
    };
    let record = normalize(&raw);

    assert_eq!(record.category, "Toys");
    assert_eq!(u32::from(record.glitch_score), PENALTY_CATEGORY_LIST);
}

#[test]
fn empty_string_category_is_a_plain_string_and_stays_clean() {
    let raw = RawRecord {
        category: RawCategory::One(String::new()),
        ..clean_record()
    };
    let record = normalize(&raw);

    assert_eq!(record.category, "");
    assert_eq!(record.glitch_score, 0);
}

// =========================================================================
// Timestamps
// =========================================================================

#[test]
fn date_only_timestamp_is_accepted_verbatim() {
    let raw = RawRecord {
        updated_at: Some("2024-03-15".to_string()),
        ..clean_record()
    };
    let record = normalize(&raw);

    assert_eq!(record.updated_at.as_deref(), Some("2024-03-15"));
    assert_eq!(record.glitch_score, 0);
}

#[test]
fn missing_timestamp_degrades_to_null() {
    let raw = RawRecord {
        updated_at: None,
        ..clean_record()
    };
    let record = normalize(&raw);

    assert_eq!(record.updated_at, None);
    assert_eq!(u32::from(record.glitch_score), PENALTY_UPDATED_AT_INVALID);
}

// =========================================================================
// Round trip and collections
// =========================================================================

#[test]
fn renormalizing_a_rederived_record_is_a_no_op() {
    let raw = RawRecord {
        name: None,
        price: Some(RawPrice::Text("19,99".to_string())),
        stock: Some(RawStock::Count(-3.0)),
        category: RawCategory::Many(vec!["Toys".to_string()]),
        ..clean_record()
    };
    let first = normalize(&raw);
    assert!(first.glitch_score > 0);

    let second = normalize(&first.to_raw());

    assert_eq!(second.glitch_score, 0);
    assert!(second.glitch_report.is_empty());
    assert_eq!(second.name, first.name);
    assert_eq!(second.price, first.price);
    assert_eq!(second.stock, first.stock);
    assert_eq!(second.category, first.category);
}

#[test]
fn null_timestamp_is_reflagged_on_reingestion() {
    let raw = RawRecord {
        updated_at: Some("whenever".to_string()),
        ..clean_record()
    };
    let first = normalize(&raw);
    assert_eq!(first.updated_at, None);

    // A null timestamp has no clean raw encoding, so it is the one field
    // the round trip flags again.
    let second = normalize(&first.to_raw());
    assert_eq!(u32::from(second.glitch_score), PENALTY_UPDATED_AT_INVALID);
    assert_eq!(second.glitch_report.len(), 1);
    assert_eq!(second.glitch_report[0].field, RecordField::UpdatedAt);
}

#[test]
fn normalize_all_preserves_input_order() {
    let records = vec![
        RawRecord {
            id: "b".to_string(),
            ..clean_record()
        },
        RawRecord {
            id: "a".to_string(),
            ..clean_record()
        },
    ];

    let normalized = normalize_all(&records);

    let ids: Vec<&str> = normalized.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a"]);
}
