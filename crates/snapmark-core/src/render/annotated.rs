//! Annotated JSONC serializer.

use crate::diff::model::{ChangeSet, FieldCoord};
use crate::errors::{Result, SnapmarkError};
use crate::snapshot::{item_entries, Snapshot};
use serde_json::{Map, Value};

/// Render the current snapshot as annotated JSONC.
///
/// Walks the snapshot's own insertion order at all three levels and emits
/// one line per field entry. Every entry except the last of its block ends
/// with a separator comma; for fields recorded in `changes`, a
/// ` // original: <prior-value>` comment follows the comma. Item keys have
/// every backslash doubled so they remain valid quoted strings; values are
/// serialized compactly on a single line with non-ASCII characters
/// preserved literally.
///
/// The whole string is built in memory: a value that fails to serialize
/// aborts the render, so no truncated output can be observed.
///
/// # Errors
///
/// * `Serialization` — a current or prior field value could not be
///   serialized
pub fn render_annotated(snapshot: &Snapshot, changes: &ChangeSet) -> Result<String> {
    let mut lines: Vec<String> = Vec::new();
    lines.push("{".to_string());

    let groups: Vec<(&str, &Map<String, Value>)> = snapshot.groups().collect();
    for (gi, (group, items)) in groups.iter().enumerate() {
        lines.push(format!("  \"{}\": {{", group));

        let items: Vec<(&str, &Map<String, Value>)> = item_entries(items).collect();
        for (ii, (item, fields)) in items.iter().enumerate() {
            // Double backslashes so the key stays a valid quoted string
            let escaped_item = item.replace('\\', "\\\\");
            lines.push(format!("    \"{}\": {{", escaped_item));

            let field_count = fields.len();
            for (fi, (field, value)) in fields.iter().enumerate() {
                let mut line = format!("      \"{}\": {}", field, to_compact_json(value)?);

                // Separator comma goes before any comment
                if fi + 1 < field_count {
                    line.push(',');
                }

                let coord = FieldCoord::new(*group, *item, field.as_str());
                if let Some(prior) = changes.get(&coord) {
                    line.push_str(&format!(" // original: {}", to_compact_json(prior)?));
                }
                lines.push(line);
            }

            let suffix = if ii + 1 < items.len() { "," } else { "" };
            lines.push(format!("    }}{}", suffix));
        }

        let suffix = if gi + 1 < groups.len() { "," } else { "" };
        lines.push(format!("  }}{}", suffix));
    }

    lines.push("}".to_string());
    Ok(lines.join("\n"))
}

/// Serialize a value compactly on a single line.
fn to_compact_json(value: &Value) -> Result<String> {
    serde_json::to_string(value).map_err(|e| SnapmarkError::Serialization {
        message: e.to_string(),
    })
}
