pub use cli::*;
pub use errors::*;
pub use workflow::*;

mod cli;
pub mod constants;
pub mod discovery;
mod errors;
pub mod file_ops;
pub mod logging;
pub mod path_gen;
mod workflow;

pub mod prelude {
    pub use crate::cli::{Options, check_for_stdout_stream, resolve_options};
    pub use crate::errors::{Error, Result, directory_scan_error, file_operation_error};
    pub use crate::logging::{LogLevel, format_message, init_default_logger, init_logger};
    pub use crate::workflow::{
        OperationType, PlannedOperation, RunStats, WorkflowContext, process_directory,
    };
}
