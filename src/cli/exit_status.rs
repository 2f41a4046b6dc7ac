use std::process::ExitCode;

use super::commands::{CommandResult, CommandSummary};

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed; skipped input files do not fail the run
/// - `Failure` (1): Command could not do what was asked (e.g. config already exists)
/// - `Error` (2): Command failed due to an internal error (unreadable file list, write failure, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command completed without doing its work.
    Failure,
    /// Command failed due to internal error.
    Error,
}

impl From<&CommandResult> for ExitStatus {
    fn from(result: &CommandResult) -> Self {
        match &result.summary {
            CommandSummary::Pot(_) => ExitStatus::Success,
            CommandSummary::Init(summary) if summary.created => ExitStatus::Success,
            CommandSummary::Init(_) => ExitStatus::Failure,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
