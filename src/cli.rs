use std::path::{Path, PathBuf};

use atty::Stream;

use crate::constants::{LOG_FILE_DEFAULT, MODE_COPY, MODE_DRY_RUN, MODE_MOVE, SORTED_DIR};
use crate::logging::LogLevel;

/// Resolved run options, immutable after construction
///
/// The destination defaults to `<source>/sorted` and is re-derived every time
/// `--src` is processed, so the final value depends on flag order: a `--dest`
/// given after the last `--src` sticks, one given before it is overwritten.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Directory whose direct children are classified
    pub source: PathBuf,
    /// Root directory receiving one subfolder per extension group
    pub destination: PathBuf,
    /// Preview mode: print the plan, touch nothing (default)
    pub dry_run: bool,
    /// Copy instead of move when dry-run is disabled
    pub copy_mode: bool,
    /// Verbosity for the logging layer
    pub verbosity: LogLevel,
    /// Log file path, empty for console-only logging
    pub log_file: String,
}

impl Options {
    /// The mode label shown in the report header
    ///
    /// Dry-run wins over copy/move for display purposes.
    pub fn mode_label(&self) -> &'static str {
        if self.dry_run {
            MODE_DRY_RUN
        } else if self.copy_mode {
            MODE_COPY
        } else {
            MODE_MOVE
        }
    }
}

/// Resolves run options from the raw argument tokens
///
/// This is a single left-to-right pass over the arguments (the program name
/// already stripped). Every token either matches one of the recognized flags
/// or is ignored; a flag that takes a value consumes the next token verbatim,
/// and is skipped silently when no token follows. Resolution cannot fail.
///
/// # Arguments
/// * `cwd` - The process's current working directory, the default source
/// * `args` - The argument tokens, without the program name
///
/// # Returns
/// * `Options` - The resolved options
pub fn resolve_options<I>(cwd: &Path, args: I) -> Options
where
    I: IntoIterator<Item = String>,
{
    let mut source = cwd.to_path_buf();
    let mut destination = source.join(SORTED_DIR);
    let mut dry_run = true;
    let mut copy_mode = false;
    let mut verbose_count: u8 = 0;
    let mut log_file = LOG_FILE_DEFAULT.to_string();

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--src" => {
                if let Some(value) = args.next() {
                    source = PathBuf::from(value);
                    // Keep the destination tied to the new source; a later
                    // --dest still overrides this.
                    destination = source.join(SORTED_DIR);
                }
            }
            "--dest" => {
                if let Some(value) = args.next() {
                    destination = PathBuf::from(value);
                }
            }
            "--dry-run" => dry_run = true,
            "--no-dry-run" => dry_run = false,
            "--copy" => copy_mode = true,
            "--verbose" => verbose_count = verbose_count.saturating_add(1),
            "--log-file" => {
                if let Some(value) = args.next() {
                    log_file = value;
                }
            }
            _ => {}
        }
    }

    Options {
        source,
        destination,
        dry_run,
        copy_mode,
        verbosity: LogLevel::from_occurrences(verbose_count),
        log_file,
    }
}

/// Checks if stdout is a terminal and waits for user input if it is
///
/// This function is used to prevent the console window from closing
/// immediately after the program finishes when run from a GUI.
pub fn check_for_stdout_stream() {
    if atty::is(Stream::Stdout) {
        dont_disappear::enter_to_continue::default();
    }
}
