//! File operations module
//!
//! This module contains components for file operations.

mod actions;

pub use actions::{ActionOutcome, FileActionResult, perform_file_action};
