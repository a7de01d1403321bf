//! Snapshot model and parsing.
//!
//! A snapshot is a three-level nested mapping: group → item → field → leaf
//! value. Shape validation happens once at construction; the diff engine and
//! the annotated serializer rely on the invariant that every group and item
//! value is a JSON object.
//!
//! ## Entry point
//!
//! ```ignore
//! use snapmark_core::snapshot::parse_snapshot_bytes;
//!
//! let snapshot = parse_snapshot_bytes(&bytes)?;
//! ```
//!
//! ## Guarantees
//!
//! - **Insertion order**: iteration at every level follows the order of the
//!   underlying JSON document (`serde_json` with `preserve_order`).
//! - **Leaf opacity**: field values are held as opaque `serde_json::Value`s;
//!   nothing below the field level is interpreted.

pub mod model;

pub use model::{item_entries, parse_snapshot_bytes, Snapshot};
