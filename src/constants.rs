/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Name of the destination folder created inside the source directory
///
/// This is both the default destination (`<source>/sorted`) and the one
/// directory that is skipped silently during the scan.
pub const SORTED_DIR: &str = "sorted";

/// Classification bucket for files without an extension
pub const NO_EXTENSION_GROUP: &str = "_noext";

/// Separator line framing the report header
pub const SEPARATOR_LINE: &str = "----------------------------------------";

/// Mode label shown in the report header when no files will be touched
pub const MODE_DRY_RUN: &str = "DRY-RUN";

/// Mode label shown in the report header for copy mode
pub const MODE_COPY: &str = "COPY";

/// Mode label shown in the report header for move mode
pub const MODE_MOVE: &str = "MOVE";

/// Default path for the log file
///
/// An empty value disables the file log chain; only the console logger runs.
pub const LOG_FILE_DEFAULT: &str = "";
