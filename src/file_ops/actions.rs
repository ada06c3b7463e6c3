//! File operation functionality
//!
//! This module contains functions for performing file operations like
//! copying, moving, and creating directories.

use std::fs::create_dir_all;
use std::path::PathBuf;

use fs_extra::file::{CopyOptions, copy, move_file};
use log::debug;

use crate::errors::{Result, file_operation_error};
use crate::path_gen::EntryPlan;

/// What happened to a file when its action ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The file was moved to its target
    Moved,
    /// The file was copied to its target
    Copied,
    /// Copying was skipped because the target already exists
    CopySkipped,
    /// Simulation mode, the filesystem was not touched
    Simulated,
}

/// Result of performing a file action
#[derive(Debug, Clone)]
pub struct FileActionResult {
    /// The source path
    pub source_path: PathBuf,
    /// The target path
    pub target_path: PathBuf,
    /// What the action did
    pub outcome: ActionOutcome,
}

/// Performs a file action (copy or move)
///
/// In simulation mode the function returns before touching the filesystem,
/// so no group directory is created either. In copy mode a target that
/// already exists is left alone and the copy is skipped. A move runs as a
/// copy followed by a delete rather than a rename, so a symlinked source
/// arrives at the target as a regular file holding the link target's bytes.
///
/// # Arguments
/// * `plan` - The planned placement of the file
/// * `copy_mode` - Whether to copy the file (true) or move it (false)
/// * `run_execution` - Whether to actually perform the file operation (true) or just simulate it (false)
///
/// # Returns
/// * `Result<FileActionResult>` - The result of the file action or an error
///
/// # Errors
/// * Returns an error if the group directory cannot be created or the file action fails
pub fn perform_file_action(
    plan: &EntryPlan,
    copy_mode: bool,
    run_execution: bool,
) -> Result<FileActionResult> {
    let source_path = &plan.source_path;
    let target_path = &plan.target_path;

    if !run_execution {
        // Simulation mode, don't actually perform the file operation
        debug!(
            "Simulating file action: {} -> {}",
            source_path.display(),
            target_path.display()
        );
        return Ok(FileActionResult {
            source_path: source_path.clone(),
            target_path: target_path.clone(),
            outcome: ActionOutcome::Simulated,
        });
    }

    // Create the group directory if it doesn't exist
    create_dir_all(&plan.target_dir)
        .map_err(|e| file_operation_error(e, plan.target_dir.clone(), "create directory"))?;

    let outcome = if copy_mode {
        if target_path.exists() {
            // The target is already in place, leave it alone
            debug!("Skipping copy, target exists: {}", target_path.display());
            ActionOutcome::CopySkipped
        } else {
            debug!(
                "Copying file: {} -> {}",
                source_path.display(),
                target_path.display()
            );
            let options = CopyOptions::new().skip_exist(true);
            copy(source_path, target_path, &options).map_err(|e| {
                file_operation_error(std::io::Error::other(e), source_path.clone(), "copy")
            })?;
            ActionOutcome::Copied
        }
    } else {
        debug!(
            "Moving file: {} -> {}",
            source_path.display(),
            target_path.display()
        );
        let options = CopyOptions::new();
        move_file(source_path, target_path, &options).map_err(|e| {
            file_operation_error(std::io::Error::other(e), source_path.clone(), "move")
        })?;
        ActionOutcome::Moved
    };

    Ok(FileActionResult {
        source_path: source_path.clone(),
        target_path: target_path.clone(),
        outcome,
    })
}
