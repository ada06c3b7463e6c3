//! File classification functionality
//!
//! This module contains functions for deriving a file's extension group.

use std::path::Path;

use crate::constants::NO_EXTENSION_GROUP;

/// Derives the extension group for a file path
///
/// The group is the final extension, lowercased. Files without an extension
/// (including dotfiles like `.bashrc`) fall into the no-extension group.
/// Only the last extension counts, so `archive.tar.gz` groups as `gz`.
///
/// # Arguments
/// * `path` - The file path to classify
///
/// # Returns
/// * `String` - The group name the file belongs to
pub fn extension_group(path: &Path) -> String {
    match path.extension() {
        Some(ext) => ext.to_string_lossy().to_lowercase(),
        None => NO_EXTENSION_GROUP.to_string(),
    }
}
