//! Three-level snapshot model.

use crate::errors::{decode_error, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// A three-level nested mapping: group → item → field → leaf value.
///
/// Iteration order at every level is the insertion order of the source JSON
/// document. Field values are opaque leaves compared by deep structural
/// equality, never descended into. Construction goes through
/// [`Snapshot::from_value`] or [`parse_snapshot_bytes`], which enforce the
/// three-level shape.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Snapshot {
    groups: Map<String, Value>,
}

impl Snapshot {
    /// Build a snapshot from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// * `Decode` — the root, a group value, or an item value is not an object
    pub fn from_value(value: Value) -> Result<Self> {
        let groups = match value {
            Value::Object(map) => map,
            other => {
                return Err(decode_error(format!(
                    "snapshot root must be an object, got: {}",
                    json_type_name(&other)
                )))
            }
        };

        for (group, items) in &groups {
            let items = items.as_object().ok_or_else(|| {
                decode_error(format!(
                    "group \"{}\" must be an object, got: {}",
                    group,
                    json_type_name(items)
                ))
            })?;
            for (item, fields) in items {
                if !fields.is_object() {
                    return Err(decode_error(format!(
                        "item \"{}\" in group \"{}\" must be an object, got: {}",
                        item,
                        group,
                        json_type_name(fields)
                    )));
                }
            }
        }

        Ok(Self { groups })
    }

    /// Number of groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True if the snapshot has no groups
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate groups in insertion order as (name, item map) pairs
    pub fn groups(&self) -> impl Iterator<Item = (&str, &Map<String, Value>)> {
        self.groups
            .iter()
            .filter_map(|(name, items)| items.as_object().map(|m| (name.as_str(), m)))
    }

    /// Get the item map for a group, if present
    pub fn group(&self, name: &str) -> Option<&Map<String, Value>> {
        self.groups.get(name).and_then(Value::as_object)
    }

    /// The snapshot as a plain JSON value (deep clone)
    pub fn to_value(&self) -> Value {
        Value::Object(self.groups.clone())
    }
}

/// Iterate an item map in insertion order as (name, field map) pairs
pub fn item_entries(items: &Map<String, Value>) -> impl Iterator<Item = (&str, &Map<String, Value>)> {
    items
        .iter()
        .filter_map(|(name, fields)| fields.as_object().map(|m| (name.as_str(), m)))
}

/// Parse raw snapshot bytes into a validated `Snapshot`.
///
/// # Errors
///
/// * `Decode` — bytes are not valid UTF-8, not valid JSON, or the three-level
///   shape does not hold
pub fn parse_snapshot_bytes(bytes: &[u8]) -> Result<Snapshot> {
    // 1. UTF-8 decode
    let text = std::str::from_utf8(bytes)
        .map_err(|e| decode_error(format!("snapshot is not valid UTF-8: {}", e)))?;

    // 2. JSON parse to generic Value
    let raw: Value = serde_json::from_str(text)
        .map_err(|e| decode_error(format!("snapshot is not valid JSON: {}", e)))?;

    // 3. Three-level shape validation
    Snapshot::from_value(raw)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_valid_snapshot() {
        let bytes = br#"{"F1": {"img1.png": {"name": "Alice", "age": 30}}}"#;
        let snapshot = parse_snapshot_bytes(bytes).unwrap();
        assert_eq!(snapshot.len(), 1);
        let items = snapshot.group("F1").unwrap();
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_parse_empty_snapshot() {
        let snapshot = parse_snapshot_bytes(b"{}").unwrap();
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_parse_rejects_invalid_utf8() {
        let err = parse_snapshot_bytes(&[0xff, 0xfe, b'{']).unwrap_err();
        assert_eq!(err.code(), "ERR_DECODE");
        assert!(err.to_string().contains("UTF-8"));
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let err = parse_snapshot_bytes(b"{not json").unwrap_err();
        assert_eq!(err.code(), "ERR_DECODE");
        assert!(err.to_string().contains("JSON"));
    }

    #[test]
    fn test_parse_rejects_non_object_root() {
        let err = parse_snapshot_bytes(b"[1, 2, 3]").unwrap_err();
        assert_eq!(err.code(), "ERR_DECODE");
        assert!(err.to_string().contains("root must be an object"));
    }

    #[test]
    fn test_from_value_rejects_scalar_group() {
        let err = Snapshot::from_value(json!({"F1": 42})).unwrap_err();
        assert!(err.to_string().contains("group \"F1\""));
    }

    #[test]
    fn test_from_value_rejects_scalar_item() {
        let err = Snapshot::from_value(json!({"F1": {"img1.png": "not an object"}})).unwrap_err();
        assert!(err.to_string().contains("item \"img1.png\""));
    }

    #[test]
    fn test_iteration_preserves_insertion_order() {
        let bytes = br#"{"zeta": {}, "alpha": {}, "mid": {}}"#;
        let snapshot = parse_snapshot_bytes(bytes).unwrap();
        let order: Vec<&str> = snapshot.groups().map(|(name, _)| name).collect();
        assert_eq!(order, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_item_entries_preserve_insertion_order() {
        let snapshot = Snapshot::from_value(json!({
            "F1": {"b.png": {}, "a.png": {}}
        }))
        .unwrap();
        let items = snapshot.group("F1").unwrap();
        let order: Vec<&str> = item_entries(items).map(|(name, _)| name).collect();
        assert_eq!(order, vec!["b.png", "a.png"]);
    }

    #[test]
    fn test_to_value_round_trips() {
        let value = json!({"F1": {"img1.png": {"name": "Alice", "tags": [1, 2]}}});
        let snapshot = Snapshot::from_value(value.clone()).unwrap();
        assert_eq!(snapshot.to_value(), value);
    }

    #[test]
    fn test_nested_field_values_are_not_validated() {
        // Anything below the field level is an opaque leaf
        let snapshot = Snapshot::from_value(json!({
            "F1": {"img1.png": {"box": {"x": [0, 1], "deep": {"more": null}}}}
        }))
        .unwrap();
        assert_eq!(snapshot.len(), 1);
    }
}
