//! Workflow context
//!
//! This module defines the state carried through a sorting run.

use std::path::PathBuf;

use crate::cli::Options;

/// Represents a planned file operation for dry-run mode
#[derive(Debug, Clone)]
pub struct PlannedOperation {
    /// The source path of the file
    pub source: PathBuf,
    /// The destination path of the file
    pub destination: PathBuf,
    /// The extension group the file belongs to
    pub group: String,
    /// The type of operation (copy or move)
    pub operation_type: OperationType,
}

/// Type of file operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationType {
    /// Copy operation
    Copy,
    /// Move operation
    Move,
}

/// Context for a sorting run
///
/// This struct collects what a run did (or, in dry-run mode, would do).
#[derive(Debug, Clone)]
pub struct WorkflowContext {
    /// The resolved options the run was started with
    pub options: Options,
    /// Statistics about the run
    pub stats: RunStats,
    /// Planned operations recorded in dry-run mode
    pub planned_operations: Vec<PlannedOperation>,
}

/// Statistics about a sorting run
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Number of files examined
    pub files_processed: usize,
    /// Number of files moved
    pub files_moved: usize,
    /// Number of files copied
    pub files_copied: usize,
    /// Number of copies skipped because the target already existed
    pub copies_skipped: usize,
    /// Number of directories listed
    pub directories_listed: usize,
    /// Number of errors
    pub errors: usize,
}

impl WorkflowContext {
    /// Creates a new workflow context
    ///
    /// # Arguments
    /// * `options` - The resolved options for the run
    ///
    /// # Returns
    /// * `WorkflowContext` - The new workflow context
    pub fn new(options: Options) -> Self {
        WorkflowContext {
            options,
            stats: RunStats::default(),
            planned_operations: Vec::new(),
        }
    }

    /// Adds a planned operation to the context
    ///
    /// # Arguments
    /// * `operation` - The planned operation to add
    pub fn add_planned_operation(&mut self, operation: PlannedOperation) {
        self.planned_operations.push(operation);
    }

    /// Increments the number of files examined
    pub fn increment_files_processed(&mut self) {
        self.stats.files_processed += 1;
    }

    /// Increments the number of files moved
    pub fn increment_files_moved(&mut self) {
        self.stats.files_moved += 1;
    }

    /// Increments the number of files copied
    pub fn increment_files_copied(&mut self) {
        self.stats.files_copied += 1;
    }

    /// Increments the number of skipped copies
    pub fn increment_copies_skipped(&mut self) {
        self.stats.copies_skipped += 1;
    }

    /// Increments the number of directories listed
    pub fn increment_directories_listed(&mut self) {
        self.stats.directories_listed += 1;
    }

    /// Increments the number of errors
    pub fn increment_errors(&mut self) {
        self.stats.errors += 1;
    }
}
