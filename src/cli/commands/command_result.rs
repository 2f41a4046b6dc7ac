use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Pot(PotSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct PotSummary {
    /// Output path as given on the command line.
    pub output: String,
    /// Distinct messages written to the catalog.
    pub message_count: usize,
    /// Files listed in the file list.
    pub file_count: usize,
    /// Files successfully extracted.
    pub extracted_file_count: usize,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a command
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Files skipped during the run, in file-list order.
    /// Empty for `init`.
    pub issues: Vec<Issue>,
}
