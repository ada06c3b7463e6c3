//! Workflow engine
//!
//! This module contains the engine that performs the sorting pass.

use colored::Colorize;
use log::{debug, error};

use crate::cli::Options;
use crate::constants::{MODE_COPY, MODE_DRY_RUN, SEPARATOR_LINE, SORTED_DIR};
use crate::discovery::{EntryKind, scan_source};
use crate::errors::Result;
use crate::file_ops::{ActionOutcome, perform_file_action};
use crate::logging::format_message;
use crate::path_gen::plan_for_file;

use super::context::{OperationType, PlannedOperation, WorkflowContext};

/// Prints the run header to stdout
///
/// The mode label is coloured only when stdout is a terminal, so piped
/// output stays byte-stable.
fn print_run_header(options: &Options) {
    let mode = options.mode_label();
    let colored_mode = match mode {
        MODE_DRY_RUN => mode.yellow(),
        MODE_COPY => mode.cyan(),
        _ => mode.green(),
    };

    println!("{SEPARATOR_LINE}");
    println!("Source:      {}", options.source.display());
    println!("Destination: {}", options.destination.display());
    println!(
        "Mode:        {}",
        format_message(mode, &colored_mode.to_string())
    );
    println!("{SEPARATOR_LINE}");
    println!();
}

/// Sorts the top level of the source directory
///
/// This function performs the single pass over the source directory:
/// 1. Print the run header
/// 2. Scan the top level of the source directory
/// 3. Print a line for each directory, skipping the sorted output folder
/// 4. For each file, plan its placement and print the planned action
/// 5. Perform the planned action, unless this is a dry run
///
/// A failed file action is reported to stderr and the pass continues with the
/// next entry. Only a failure to read the source directory itself ends the
/// run early.
///
/// # Arguments
/// * `options` - The resolved options for the run
///
/// # Returns
/// * `Result<WorkflowContext>` - The context with statistics or an error
///
/// # Errors
/// * Returns an error if the source directory cannot be read
pub fn process_directory(options: &Options) -> Result<WorkflowContext> {
    let mut context = WorkflowContext::new(options.clone());

    print_run_header(options);

    let entries = scan_source(&options.source)?;

    // The sorted output folder sits inside the source in the default layout
    // and must never be rescanned.
    let sorted_dir = options.source.join(SORTED_DIR);

    for entry in entries {
        match entry.kind {
            EntryKind::Directory => {
                if entry.path == sorted_dir {
                    debug!("Skipping the sorted output folder");
                    continue;
                }
                println!("DIR:  {}", entry.filename);
                context.increment_directories_listed();
            }
            EntryKind::File => {
                debug!("Processing file: {}", entry.path.display());
                context.increment_files_processed();

                let plan = plan_for_file(&entry, &options.destination);

                // The planned action is printed in every mode, before the
                // action runs and regardless of whether it succeeds.
                println!("[FILE] {}", plan.filename);
                println!("  group : {}", plan.group);
                println!("  target: {}", plan.target_path.display());
                println!();

                match perform_file_action(&plan, options.copy_mode, !options.dry_run) {
                    Ok(action_result) => match action_result.outcome {
                        ActionOutcome::Moved => context.increment_files_moved(),
                        ActionOutcome::Copied => context.increment_files_copied(),
                        ActionOutcome::CopySkipped => context.increment_copies_skipped(),
                        ActionOutcome::Simulated => {
                            context.add_planned_operation(PlannedOperation {
                                source: action_result.source_path,
                                destination: action_result.target_path,
                                group: plan.group.clone(),
                                operation_type: if options.copy_mode {
                                    OperationType::Copy
                                } else {
                                    OperationType::Move
                                },
                            });
                        }
                    },
                    Err(e) => {
                        error!("[MOVE ERROR] {e}");
                        context.increment_errors();
                    }
                }
            }
        }
    }

    debug!(
        "Finished processing {} files ({} errors)",
        context.stats.files_processed, context.stats.errors
    );

    Ok(context)
}
