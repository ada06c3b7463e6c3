//! Workflow module
//!
//! This module contains components for orchestrating the sorting pass.

mod context;
mod engine;

pub use context::{OperationType, PlannedOperation, RunStats, WorkflowContext};
pub use engine::process_directory;
