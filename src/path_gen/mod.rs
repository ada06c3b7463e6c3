//! Path generation module
//!
//! This module contains components for generating destination paths.

mod planner;

pub use planner::{EntryPlan, plan_for_file};
