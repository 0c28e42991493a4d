//! Cell normalization and row processing
//!
//! Turns raw record field values (strings, lists, numbers, nulls, absent
//! fields) into canonical display cells. Absence is data, not failure:
//! anything without displayable content becomes the placeholder.

use serde_json::{Map, Value};

/// Canonical "no data" cell value
pub const PLACEHOLDER: &str = "-";

/// One input record: field name -> raw value, in source insertion order.
///
/// `serde_json` is built with `preserve_order`, so iterating the map
/// yields fields exactly as they appear in the input document. Builders
/// rely on that order for column alignment.
pub type Record = Map<String, Value>;

/// Normalize a raw field value into a display cell.
///
/// Absent values, JSON null, the upstream `"None"` marker, empty strings
/// and a lone dash all collapse to [`PLACEHOLDER`]. Lists are joined with
/// `", "` when `list_aware` is set; otherwise (and for nested objects) the
/// value is serialized back to a JSON string. Scalar text is trimmed and
/// embedded newline/tab runs become `" - "`.
///
/// Pure and idempotent: normalizing an already-normalized cell is a no-op.
pub fn normalize(value: Option<&Value>, list_aware: bool) -> String {
    let value = match value {
        None | Some(Value::Null) => return PLACEHOLDER.to_string(),
        Some(v) => v,
    };

    let text = match value {
        Value::Array(items) if list_aware => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Array(_) | Value::Object(_) => {
            serde_json::to_string(value).unwrap_or_default()
        }
        scalar => display_value(scalar),
    };

    let text = collapse_breaks(text.trim());
    if text.is_empty() || text == PLACEHOLDER || text == "None" {
        PLACEHOLDER.to_string()
    } else {
        text
    }
}

/// Apply the Cell Normalizer across a record, in field insertion order.
///
/// Always yields one cell per field, so the output length equals the
/// record's field count.
pub fn process_row(record: &Record, list_aware: bool) -> Vec<String> {
    record
        .values()
        .map(|value| normalize(Some(value), list_aware))
        .collect()
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => String::new(),
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}

/// Collapse every run of newline/carriage-return/tab characters into a
/// single `" - "` separator.
fn collapse_breaks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_break = false;
    for c in text.chars() {
        if matches!(c, '\n' | '\r' | '\t') {
            if !in_break {
                out.push_str(" - ");
                in_break = true;
            }
        } else {
            out.push(c);
            in_break = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_missing_and_null_become_placeholder() {
        assert_eq!(normalize(None, false), "-");
        assert_eq!(normalize(Some(&Value::Null), false), "-");
        assert_eq!(normalize(Some(&json!("None")), false), "-");
        assert_eq!(normalize(Some(&json!("")), false), "-");
        assert_eq!(normalize(Some(&json!("-")), false), "-");
        assert_eq!(normalize(Some(&json!("   ")), false), "-");
    }

    #[test]
    fn test_placeholder_is_idempotent() {
        assert_eq!(normalize(Some(&json!("-")), false), PLACEHOLDER);
        let once = normalize(Some(&json!("a\nb")), false);
        assert_eq!(normalize(Some(&Value::String(once.clone())), false), once);
    }

    #[test]
    fn test_breaks_collapse_to_separator() {
        assert_eq!(normalize(Some(&json!("a\nb")), false), "a - b");
        assert_eq!(normalize(Some(&json!("a\r\n\tb")), false), "a - b");
        assert_eq!(normalize(Some(&json!("  a\tb  ")), false), "a - b");

        let cell = normalize(Some(&json!("x\n\n\ny")), false);
        assert!(!cell.contains('\n'));
        assert!(!cell.contains('\t'));
        assert_eq!(cell, "x - y");
    }

    #[test]
    fn test_list_aware_joins_elements() {
        let value = json!(["0555 111 2233", "0555 444 5566"]);
        assert_eq!(
            normalize(Some(&value), true),
            "0555 111 2233, 0555 444 5566"
        );
        // Without list mode the raw JSON is kept
        assert_eq!(
            normalize(Some(&json!(["a", "b"])), false),
            r#"["a","b"]"#
        );
    }

    #[test]
    fn test_scalars_display_plainly() {
        assert_eq!(normalize(Some(&json!(true)), false), "true");
        assert_eq!(normalize(Some(&json!(42)), false), "42");
        assert_eq!(normalize(Some(&json!("  Otel A ")), false), "Otel A");
    }

    #[test]
    fn test_process_row_length_matches_record() {
        let r = record(json!({
            "Şehir": "İstanbul",
            "Yer": null,
            "Adres": "Cadde\nNo: 5",
        }));
        let cells = process_row(&r, false);
        assert_eq!(cells.len(), r.len());
        assert_eq!(cells, vec!["İstanbul", "-", "Cadde - No: 5"]);
    }

    #[test]
    fn test_process_row_preserves_field_order() {
        let r = record(json!({"z": "1", "a": "2", "m": "3"}));
        assert_eq!(process_row(&r, false), vec!["1", "2", "3"]);
    }
}
