//! Annotated JSONC rendering.
//!
//! Serializes the current snapshot back to a line-oriented JSONC text in
//! which every changed field carries a trailing `// original: <prior-value>`
//! comment. With the comments stripped, the output is plain JSON that
//! re-parses deep-equal to the input snapshot.

pub mod annotated;

pub use annotated::render_annotated;
