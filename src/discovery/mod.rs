//! File discovery module
//!
//! This module contains components for scanning the source directory and
//! classifying its files into extension groups.

mod classifier;
mod scanner;

pub use classifier::extension_group;
pub use scanner::{EntryKind, SourceEntry, scan_source};
