//! Snapmark Core - snapshot comparison and annotated rendering
//!
//! This crate provides the in-memory pipeline for snapmark:
//! - Three-level snapshot model (group → item → field → value) with staged
//!   parse validation
//! - Change detection between a backup and a current snapshot
//! - Annotated JSONC rendering with `// original:` comments on changed fields
//! - Canonical error taxonomy and structured logging facility
//!
//! File I/O and command-line handling live in `snapmark-cli`; JSON
//! encoding/decoding is delegated to `serde_json`.

pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod render;
pub mod schema;
pub mod snapshot;

// Re-export commonly used types
pub use diff::{detect_changes, ChangeSet, FieldCoord};
pub use errors::{Result, SnapmarkError};
pub use render::render_annotated;
pub use snapshot::{parse_snapshot_bytes, Snapshot};
