//! Per-field normalization rules.
//!
//! Each rule is a total function `&RawRecord -> FieldOutcome<T>`: it always
//! produces a canonical value, plus at most one issue and a penalty when the
//! raw field was degraded. Two asymmetries are deliberate, inherited from
//! the legacy feed contract, and covered by tests so nobody "fixes" them:
//!
//! - a cleanly numeric price is never clamped, even when negative, while
//!   negative stock clamps to 0;
//! - an empty-array category earns the missing/null penalty (15), not the
//!   array penalty (10) — only a non-empty array takes the array branch.

use cq_model::{GlitchIssue, RawCategory, RawPrice, RawRecord, RawStock, RecordField};

/// Sentinel name for records whose raw name was missing or blank.
pub const NAME_FALLBACK: &str = "Unknown Product";
/// Sentinel category for records whose raw category was missing or invalid.
pub const CATEGORY_FALLBACK: &str = "Uncategorized";

pub const PENALTY_NAME_INVALID: u32 = 20;
pub const PENALTY_PRICE_UNPARSEABLE: u32 = 30;
pub const PENALTY_PRICE_TEXT: u32 = 10;
pub const PENALTY_STOCK_INVALID: u32 = 20;
pub const PENALTY_CATEGORY_LIST: u32 = 10;
pub const PENALTY_CATEGORY_MISSING: u32 = 15;
pub const PENALTY_UPDATED_AT_INVALID: u32 = 20;

/// Result of normalizing a single field: the canonical value, the penalty
/// it contributed, and the issue describing the defect (if any).
#[derive(Debug, Clone, PartialEq)]
pub struct FieldOutcome<T> {
    pub value: T,
    pub penalty: u32,
    pub issue: Option<GlitchIssue>,
}

impl<T> FieldOutcome<T> {
    fn clean(value: T) -> Self {
        Self {
            value,
            penalty: 0,
            issue: None,
        }
    }

    fn degraded(value: T, penalty: u32, field: RecordField, message: impl Into<String>) -> Self {
        Self {
            value,
            penalty,
            issue: Some(GlitchIssue::new(field, message)),
        }
    }
}

/// Name rule: clean when non-empty after trimming, otherwise the
/// `"Unknown Product"` sentinel. A clean name is kept verbatim, surrounding
/// whitespace included.
pub fn normalize_name(raw: &RawRecord) -> FieldOutcome<String> {
    match &raw.name {
        Some(name) if !name.trim().is_empty() => FieldOutcome::clean(name.clone()),
        _ => FieldOutcome::degraded(
            NAME_FALLBACK.to_string(),
            PENALTY_NAME_INVALID,
            RecordField::Name,
            "Name is empty or invalid.",
        ),
    }
}

/// Price rule: a numeric price is clean as-is (negative included — only
/// unparseable prices are defaulted). A string price gets one `,` → `.`
/// replacement and a lenient prefix parse; parseable strings cost 10,
/// unparseable strings cost 30. Absent prices and every other JSON shape
/// take the missing branch, also for 30, and default to 0.
pub fn normalize_price(raw: &RawRecord) -> FieldOutcome<f64> {
    match &raw.price {
        Some(RawPrice::Amount(value)) => FieldOutcome::clean(*value),
        Some(RawPrice::Text(text)) => match parse_price_text(text) {
            Some(value) => FieldOutcome::degraded(
                value,
                PENALTY_PRICE_TEXT,
                RecordField::Price,
                "Price was a string format instead of a number.",
            ),
            None => FieldOutcome::degraded(
                0.0,
                PENALTY_PRICE_UNPARSEABLE,
                RecordField::Price,
                format!("Could not parse price string: {text}"),
            ),
        },
        Some(RawPrice::Invalid(_)) | None => FieldOutcome::degraded(
            0.0,
            PENALTY_PRICE_UNPARSEABLE,
            RecordField::Price,
            "Price is missing or totally invalid.",
        ),
    }
}

/// Stock rule: clean when numeric and within the canonical count range
/// (fractional counts truncate toward zero). Negative stock clamps to 0;
/// non-numeric stock and counts beyond [`u32::MAX`] default to 0. The clean
/// branch never alters a value beyond truncation, so a count that would
/// saturate is degraded instead.
pub fn normalize_stock(raw: &RawRecord) -> FieldOutcome<u32> {
    match &raw.stock {
        Some(RawStock::Count(value)) if value.is_nan() => FieldOutcome::degraded(
            0,
            PENALTY_STOCK_INVALID,
            RecordField::Stock,
            "Stock is invalid.",
        ),
        Some(RawStock::Count(value)) if *value < 0.0 => FieldOutcome::degraded(
            0,
            PENALTY_STOCK_INVALID,
            RecordField::Stock,
            "Stock was negative.",
        ),
        Some(RawStock::Count(value)) if *value > f64::from(u32::MAX) => FieldOutcome::degraded(
            0,
            PENALTY_STOCK_INVALID,
            RecordField::Stock,
            "Stock is invalid.",
        ),
        Some(RawStock::Count(value)) => FieldOutcome::clean(*value as u32),
        Some(RawStock::Invalid(_)) | None => FieldOutcome::degraded(
            0,
            PENALTY_STOCK_INVALID,
            RecordField::Stock,
            "Stock is invalid.",
        ),
    }
}

/// Category rule: a plain string is clean. A non-empty array collapses to
/// its first element for 10; an empty array, null, absent, or any other
/// shape takes the missing branch for 15.
pub fn normalize_category(raw: &RawRecord) -> FieldOutcome<String> {
    match &raw.category {
        RawCategory::One(category) => FieldOutcome::clean(category.clone()),
        RawCategory::Many(list) if !list.is_empty() => FieldOutcome::degraded(
            list[0].clone(),
            PENALTY_CATEGORY_LIST,
            RecordField::Category,
            "Category was an array instead of a string.",
        ),
        RawCategory::Many(_) | RawCategory::Missing | RawCategory::Invalid(_) => {
            FieldOutcome::degraded(
                CATEGORY_FALLBACK.to_string(),
                PENALTY_CATEGORY_MISSING,
                RecordField::Category,
                "Category was null or invalid.",
            )
        }
    }
}

/// Timestamp rule: kept verbatim when it parses as an ISO-8601 date or
/// date-time, degraded to `None` otherwise.
pub fn normalize_updated_at(raw: &RawRecord) -> FieldOutcome<Option<String>> {
    match &raw.updated_at {
        Some(text) if is_iso_timestamp(text) => FieldOutcome::clean(Some(text.clone())),
        _ => FieldOutcome::degraded(
            None,
            PENALTY_UPDATED_AT_INVALID,
            RecordField::UpdatedAt,
            "Date format is invalid.",
        ),
    }
}

/// Accepted timestamp shapes: RFC 3339, naive date-time, date-only.
fn is_iso_timestamp(text: &str) -> bool {
    chrono::DateTime::parse_from_rfc3339(text).is_ok()
        || chrono::NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f").is_ok()
        || chrono::NaiveDate::parse_from_str(text, "%Y-%m-%d").is_ok()
}

/// Parse a price string the way the legacy feed consumers did: replace the
/// first comma with a dot, skip leading whitespace, then read the longest
/// numeric prefix (sign, decimal point, optional exponent). `"19,99 EUR"`
/// parses to 19.99; a string with no numeric prefix parses to nothing.
fn parse_price_text(text: &str) -> Option<f64> {
    let cleaned = text.replacen(',', ".", 1);
    let trimmed = cleaned.trim_start();
    numeric_prefix(trimmed)?.parse::<f64>().ok()
}

/// Longest prefix of `s` that reads as a float literal, or `None` when the
/// string does not start with one.
fn numeric_prefix(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(&(b'+' | b'-'))) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut has_digits = end > int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if frac_end > frac_start || has_digits {
            end = frac_end;
            has_digits = has_digits || frac_end > frac_start;
        }
    }
    if !has_digits {
        return None;
    }

    if matches!(bytes.get(end), Some(&(b'e' | b'E'))) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(&(b'+' | b'-'))) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    Some(&s[..end])
}

#[cfg(test)]
mod tests {
    use super::{numeric_prefix, parse_price_text};

    #[test]
    fn prefix_handles_signs_decimals_and_exponents() {
        assert_eq!(numeric_prefix("19.99 EUR"), Some("19.99"));
        assert_eq!(numeric_prefix("-3"), Some("-3"));
        assert_eq!(numeric_prefix(".5kg"), Some(".5"));
        assert_eq!(numeric_prefix("1e3x"), Some("1e3"));
        assert_eq!(numeric_prefix("2.5e-1"), Some("2.5e-1"));
        assert_eq!(numeric_prefix("12."), Some("12."));
        assert_eq!(numeric_prefix("free"), None);
        assert_eq!(numeric_prefix("-"), None);
        assert_eq!(numeric_prefix(""), None);
    }

    #[test]
    fn price_text_replaces_only_the_first_comma() {
        assert_eq!(parse_price_text("19,99"), Some(19.99));
        assert_eq!(parse_price_text("1,234,56"), Some(1.234));
        assert_eq!(parse_price_text("  7,5"), Some(7.5));
        assert_eq!(parse_price_text("gratis"), None);
    }
}
