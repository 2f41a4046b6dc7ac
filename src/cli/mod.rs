//! Command-line interface layer: argument parsing, command handlers,
//! reporting and exit status.

use anyhow::Result;

pub mod args;
pub mod commands;
mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

/// Run the CLI and print the command's report.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(result) = run::run(args)? else {
        return Ok(ExitStatus::Success);
    };

    report::print(&result);

    Ok(ExitStatus::from(&result))
}
