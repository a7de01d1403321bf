//! Annotate command
//!
//! Compares the backup snapshot against the current one and writes the
//! current snapshot as JSONC with `// original:` comments on changed fields.
//! When no changes are found, nothing is written unless `--force` is given.

use crate::fsio::{atomic_write, read_input};
use clap::Args;
use snapmark_core::diff::{detect_changes, render_change_summary};
use snapmark_core::errors::SnapmarkError;
use snapmark_core::render::render_annotated;
use snapmark_core::snapshot::{parse_snapshot_bytes, Snapshot};
use snapmark_core::{log_op_end, log_op_error, log_op_start};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Debug, Args)]
pub struct AnnotateArgs {
    /// Current snapshot file
    #[arg(long, default_value = "data.json")]
    pub current: PathBuf,

    /// Backup snapshot file to compare against
    #[arg(long, default_value = "data.json.bak")]
    pub backup: PathBuf,

    /// Annotated JSONC output file
    #[arg(long, default_value = "handout/data_v3.jsonc")]
    pub output: PathBuf,

    /// Write the output even when no changes were found
    #[arg(long)]
    pub force: bool,
}

/// Result of one annotate run
#[derive(Debug, PartialEq, Eq)]
pub struct AnnotateOutcome {
    /// Number of changed fields detected
    pub changes: usize,
    /// True if the annotated output file was written
    pub wrote_output: bool,
}

/// Execute annotate command
pub fn execute(args: AnnotateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let started = Instant::now();
    log_op_start!("annotate");

    match run(&args) {
        Ok(outcome) => {
            log_op_end!(
                "annotate",
                duration_ms = started.elapsed().as_millis() as u64,
                changes = outcome.changes,
            );
            Ok(())
        }
        Err(e) => {
            log_op_error!(
                "annotate",
                e,
                duration_ms = started.elapsed().as_millis() as u64
            );
            Err(e.into())
        }
    }
}

fn run(args: &AnnotateArgs) -> Result<AnnotateOutcome, SnapmarkError> {
    let old = load_snapshot(&args.backup)?;
    let new = load_snapshot(&args.current)?;

    let changes = detect_changes(&old, &new);
    println!("{}", render_change_summary(&changes));

    if changes.is_empty() && !args.force {
        return Ok(AnnotateOutcome {
            changes: 0,
            wrote_output: false,
        });
    }

    // Content is built fully in memory before the write attempt
    let content = render_annotated(&new, &changes)?;
    atomic_write(&args.output, &content)?;
    println!("Annotated snapshot written to {}", args.output.display());

    Ok(AnnotateOutcome {
        changes: changes.len(),
        wrote_output: true,
    })
}

/// Load and decode one snapshot, attaching the path to decode diagnostics
fn load_snapshot(path: &Path) -> Result<Snapshot, SnapmarkError> {
    let bytes = read_input(path)?;
    parse_snapshot_bytes(&bytes).map_err(|e| match e {
        SnapmarkError::Decode { reason } => SnapmarkError::Decode {
            reason: format!("{}: {}", path.display(), reason),
        },
        other => other,
    })
}
