//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `pot`: Extract translatable strings into a POT template
//! - `init`: Initialize the configuration file

use std::path::PathBuf;

use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Pot(cmd)) => cmd.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

#[derive(Debug, Args)]
pub struct PotCommand {
    /// Path of the POT file to write
    pub output: PathBuf,

    /// File listing the sources to extract, one path per line
    #[arg(long)]
    pub file_list: PathBuf,

    /// Strip leading `*` from block comment lines (overrides config file)
    #[arg(long, action = ArgAction::Set, value_name = "BOOL")]
    pub format_comments: Option<bool>,

    /// Value of the Report-Msgid-Bugs-To header (overrides config file)
    #[arg(long, value_name = "URL")]
    pub issue_tracker: Option<String>,

    /// Print each file as it is parsed
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract translatable strings from the listed files into a POT template
    Pot(PotCommand),
    /// Initialize a new .tree-gettext.json configuration file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pot_command() {
        let args = Arguments::try_parse_from([
            "tree-gettext",
            "pot",
            "po/app.pot",
            "--file-list",
            "po/POTFILES",
            "--format-comments",
            "false",
            "--issue-tracker",
            "https://example.org/issues",
        ])
        .unwrap();

        let Some(Command::Pot(cmd)) = args.command else {
            panic!("expected pot command");
        };
        assert_eq!(cmd.output, PathBuf::from("po/app.pot"));
        assert_eq!(cmd.file_list, PathBuf::from("po/POTFILES"));
        assert_eq!(cmd.format_comments, Some(false));
        assert_eq!(cmd.issue_tracker.as_deref(), Some("https://example.org/issues"));
        assert!(!cmd.verbose);
    }

    #[test]
    fn test_pot_requires_file_list() {
        assert!(Arguments::try_parse_from(["tree-gettext", "pot", "out.pot"]).is_err());
    }

    #[test]
    fn test_format_comments_defaults_to_unset() {
        let args =
            Arguments::try_parse_from(["tree-gettext", "pot", "out.pot", "--file-list", "files", "-v"])
                .unwrap();
        assert!(args.verbose());
        let Some(Command::Pot(cmd)) = args.command else {
            panic!("expected pot command");
        };
        assert_eq!(cmd.format_comments, None);
    }
}
