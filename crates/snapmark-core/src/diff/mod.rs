//! Change detection engine.
//!
//! Compares a backup snapshot against the current one and produces a
//! set-like record of every leaf whose value changed, keyed by its
//! (group, item, field) coordinate.
//!
//! ## Entry point
//!
//! ```ignore
//! use snapmark_core::diff::detect_changes;
//!
//! let changes = detect_changes(&backup, &current);
//! let summary = snapmark_core::diff::render_change_summary(&changes);
//! ```
//!
//! ## Guarantees
//!
//! - **Intersection only**: groups, items, or fields present on one side
//!   only are never reported; addition/removal is out of scope.
//! - **Deep equality**: leaf values are compared structurally as whole
//!   values, never partially diffed.
//! - **Determinism**: the result is keyed by a `BTreeMap`, so iteration
//!   over a change set is stable regardless of discovery order.

pub mod engine;
pub mod human_summary;
pub mod model;

pub use engine::detect_changes;
pub use human_summary::render_change_summary;
pub use model::{ChangeSet, FieldCoord};
