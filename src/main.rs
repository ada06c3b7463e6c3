use std::env;

use anyhow::Result;
use human_panic::setup_panic;
use log::debug;

use dir_sort::prelude::*;

fn run() -> Result<()> {
    let cwd = env::current_dir()?;
    let options = resolve_options(&cwd, env::args().skip(1));

    init_logger(options.verbosity, &options.log_file)?;
    debug!("Resolved options: {options:?}");

    process_directory(&options)?;

    check_for_stdout_stream();

    Ok(())
}

fn main() {
    setup_panic!();

    // A failed run still exits 0; the failure is reported on stderr.
    if let Err(e) = run() {
        eprintln!("{e}");
    }
}
