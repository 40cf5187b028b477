//! The `run` command: batch-evaluate a source file.

use std::path::PathBuf;

use monkeyc_drv::{Emit, Session};
use tracing::debug;

use crate::error::Result;

/// Arguments for the run command.
pub struct RunArgs {
    /// The source file to process.
    pub file: PathBuf,
    /// What to print for the file.
    pub emit: Emit,
}

/// Runs the pipeline over the file and prints the selected rendering.
pub fn run_run(args: RunArgs) -> Result<()> {
    debug!(file = %args.file.display(), emit = ?args.emit, "running file");

    let output = Session::new(args.emit).run_file(&args.file)?;
    println!("{}", output);
    Ok(())
}
