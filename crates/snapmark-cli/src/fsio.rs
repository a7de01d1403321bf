//! Whole-file I/O helpers
//!
//! Inputs are read fully into memory; output is written atomically using the
//! temp→rename pattern so no partial file is left behind on failure.

use snapmark_core::errors::{read_error, write_error, Result, SnapmarkError};
use std::fs;
use std::path::Path;

/// Read an input file fully into memory.
///
/// # Errors
///
/// * `MissingInput` — the path does not exist
/// * `Read` — the path exists but could not be read
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(SnapmarkError::MissingInput {
            path: path.display().to_string(),
        });
    }
    fs::read(path).map_err(|e| read_error(path, e))
}

/// Atomically write text to a file
///
/// Uses temp file + rename; creates the parent directory if needed.
pub fn atomic_write(target_path: &Path, content: &str) -> Result<()> {
    // Create parent directory if it doesn't exist
    if let Some(parent) = target_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| write_error(target_path, e))?;
        }
    }

    // Write to a temp file in the same directory
    let temp_path = target_path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| write_error(target_path, e))?;

    // Atomically rename temp to target
    fs::rename(&temp_path, target_path).map_err(|e| write_error(target_path, e))?;

    Ok(())
}
