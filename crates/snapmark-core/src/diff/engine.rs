//! Snapshot change computation engine.
//!
//! The core entry point is [`detect_changes`], which walks the intersection
//! of both snapshots' three nesting levels and records the prior value for
//! every common leaf whose values are not deep-equal.

use crate::diff::model::{ChangeSet, FieldCoord};
use crate::snapshot::{item_entries, Snapshot};
use serde_json::Value;

/// Compare two snapshots and collect the prior values of changed leaves.
///
/// Only coordinates present in both snapshots are eligible: the group must
/// exist in both, the item must exist in both under that group, and the
/// field must exist in both under that item. Field values are compared by
/// deep structural equality (`Value::eq`) and never descended into; an
/// unchanged field is simply absent from the result.
///
/// Empty inputs produce an empty result. No side effects.
pub fn detect_changes(old: &Snapshot, new: &Snapshot) -> ChangeSet {
    let mut changes = ChangeSet::new();

    // Walking the current snapshot and probing the backup yields exactly
    // the key intersection at each level.
    for (group, new_items) in new.groups() {
        let old_items = match old.group(group) {
            Some(items) => items,
            None => continue,
        };

        for (item, new_fields) in item_entries(new_items) {
            let old_fields = match old_items.get(item).and_then(Value::as_object) {
                Some(fields) => fields,
                None => continue,
            };

            for (field, new_value) in new_fields {
                let old_value = match old_fields.get(field) {
                    Some(value) => value,
                    None => continue,
                };
                if old_value != new_value {
                    changes.insert(FieldCoord::new(group, item, field.as_str()), old_value.clone());
                }
            }
        }
    }

    changes
}
