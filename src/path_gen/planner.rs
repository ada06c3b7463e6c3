//! Destination path planning functionality
//!
//! This module contains functions for computing where a classified file
//! should end up under the destination root.

use std::path::{Path, PathBuf};

use log::debug;

use crate::discovery::{SourceEntry, extension_group};

/// The planned placement of one source file
#[derive(Debug, Clone)]
pub struct EntryPlan {
    /// The full path of the source file
    pub source_path: PathBuf,
    /// The file's name, decoded lossily for display
    pub filename: String,
    /// The extension group the file belongs to
    pub group: String,
    /// The group subdirectory under the destination root
    pub target_dir: PathBuf,
    /// The full path the file will occupy after the operation
    pub target_path: PathBuf,
}

/// Plans the destination placement for a single file
///
/// The target keeps the original file name, so two sources with the same
/// name and group collide on the same target path.
///
/// # Arguments
/// * `entry` - The scanned file to place
/// * `destination` - The destination root directory
///
/// # Returns
/// * `EntryPlan` - The computed placement
pub fn plan_for_file(entry: &SourceEntry, destination: &Path) -> EntryPlan {
    let group = extension_group(&entry.path);
    let target_dir = destination.join(&group);
    let target_path = match entry.path.file_name() {
        Some(name) => target_dir.join(name),
        None => target_dir.join(&entry.filename),
    };

    debug!(
        "Planned {} -> {}",
        entry.path.display(),
        target_path.display()
    );

    EntryPlan {
        source_path: entry.path.clone(),
        filename: entry.filename.clone(),
        group,
        target_dir,
        target_path,
    }
}
