//! Directory scanning functionality
//!
//! This module contains functions for scanning the source directory.

use std::fs::read_dir;
use std::path::{Path, PathBuf};

use log::debug;

use crate::errors::{Result, directory_scan_error};

/// Kind of a scanned directory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file (symlinks to files included)
    File,
    /// A directory (symlinks to directories included)
    Directory,
}

/// One direct child of the source directory
#[derive(Debug, Clone)]
pub struct SourceEntry {
    /// The full path of the entry
    pub path: PathBuf,
    /// The entry's name, decoded lossily for display
    pub filename: String,
    /// Whether the entry is a file or a directory
    pub kind: EntryKind,
}

impl SourceEntry {
    fn new(path: PathBuf, kind: EntryKind) -> Self {
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        SourceEntry {
            path,
            filename,
            kind,
        }
    }
}

/// Scans one level of the source directory
///
/// Returns the directory's direct children in the order the filesystem
/// enumerates them; the order is not defined and the entries are not sorted.
/// Entries that are neither regular files nor directories (broken symlinks,
/// special files) are dropped, as are entries that cannot be read.
///
/// # Arguments
/// * `directory` - The directory to scan
///
/// # Returns
/// * `Result<Vec<SourceEntry>>` - The entries found or an error
///
/// # Errors
/// Returns an error if the directory itself cannot be opened for reading
pub fn scan_source(directory: &Path) -> Result<Vec<SourceEntry>> {
    debug!("Scanning directory: {}", directory.display());

    let entries: Vec<SourceEntry> = read_dir(directory)
        .map_err(|e| directory_scan_error(e, directory.to_path_buf()))?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter_map(|path| {
            // is_file/is_dir follow symlinks, so a link to a file sorts
            // like the file itself.
            if path.is_file() {
                Some(SourceEntry::new(path, EntryKind::File))
            } else if path.is_dir() {
                Some(SourceEntry::new(path, EntryKind::Directory))
            } else {
                None
            }
        })
        .collect();

    debug!("Found {} entries in directory", entries.len());

    Ok(entries)
}
