use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, init::init, pot::pot},
};

/// Dispatches to the command handler for the parsed arguments.
///
/// # Returns
/// - `Ok(None)` if no command was given (help has been printed)
/// - `Ok(Some(CommandResult))` with the command's summary and skipped files
/// - `Err` if the command fails (e.g. unreadable file list, invalid config)
pub fn run(args: Arguments) -> Result<Option<CommandResult>> {
    let Some(Arguments { command }) = args.with_command_or_help() else {
        return Ok(None);
    };

    match command {
        Some(Command::Pot(cmd)) => pot(cmd).map(Some),
        Some(Command::Init) => init().map(Some),
        None => Ok(None),
    }
}
