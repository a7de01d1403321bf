//! Human-readable summary renderer for change sets.

use crate::diff::model::ChangeSet;

/// Render a console summary of a [`ChangeSet`].
///
/// Reports an explicit no-changes notice, or the change count followed by
/// one line per changed coordinate with its prior value. Informational
/// only; the annotated output is produced separately.
pub fn render_change_summary(changes: &ChangeSet) -> String {
    if changes.is_empty() {
        return "No changes detected.".to_string();
    }

    let noun = if changes.len() == 1 { "field" } else { "fields" };
    let mut lines = vec![format!("{} changed {}:", changes.len(), noun)];
    for (coord, prior) in changes {
        lines.push(format!("  {} (original: {})", coord, prior));
    }
    lines.join("\n")
}
