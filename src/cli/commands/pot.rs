use std::{env, fs};

use anyhow::{Context, Result};

use super::super::args::PotCommand;
use super::super::report::{print_output_path, print_progress};
use super::{CommandResult, CommandSummary, PotSummary};
use crate::{
    catalog::{PotHeader, render_catalog},
    config::{Config, load_config},
    core::{ExtractOptions, ExtractorRegistry, build_catalog, parse_file_list},
};

/// Settings for one `pot` run after merging the config file and CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PotSettings {
    pub format_comments: bool,
    pub issue_tracker: String,
}

impl PotSettings {
    /// CLI values win over config values.
    pub fn resolve(cmd: &PotCommand, config: &Config) -> Self {
        Self {
            format_comments: cmd.format_comments.unwrap_or(config.format_comments),
            issue_tracker: cmd
                .issue_tracker
                .clone()
                .unwrap_or_else(|| config.issue_tracker.clone()),
        }
    }
}

pub fn pot(cmd: PotCommand) -> Result<CommandResult> {
    let base_dir = env::current_dir().context("Failed to determine working directory")?;
    let config = load_config(&base_dir)?;
    let settings = PotSettings::resolve(&cmd, &config);

    let contents = fs::read_to_string(&cmd.file_list)
        .with_context(|| format!("Failed to read file list: {}", cmd.file_list.display()))?;
    let files = parse_file_list(&contents);

    let options = ExtractOptions {
        format_comments: settings.format_comments,
    };
    let run = build_catalog(
        &files,
        &base_dir,
        &ExtractorRegistry::default(),
        &options,
        |entry| {
            if cmd.verbose {
                print_progress(entry);
            }
        },
    );

    let output = cmd.output.display().to_string();
    print_output_path(&output);

    let header = PotHeader::now(settings.issue_tracker);
    fs::write(&cmd.output, render_catalog(&run.catalog, &header))
        .with_context(|| format!("Failed to write catalog: {}", output))?;

    Ok(CommandResult {
        summary: CommandSummary::Pot(PotSummary {
            output,
            message_count: run.catalog.len(),
            file_count: files.len(),
            extracted_file_count: run.files_extracted,
        }),
        issues: run.issues,
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn command(format_comments: Option<bool>, issue_tracker: Option<&str>) -> PotCommand {
        PotCommand {
            output: PathBuf::from("out.pot"),
            file_list: PathBuf::from("files"),
            format_comments,
            issue_tracker: issue_tracker.map(str::to_string),
            verbose: false,
        }
    }

    #[test]
    fn test_settings_default_to_config() {
        let config = Config {
            issue_tracker: "https://example.org/issues".to_string(),
            format_comments: false,
        };
        let settings = PotSettings::resolve(&command(None, None), &config);
        assert_eq!(
            settings,
            PotSettings {
                format_comments: false,
                issue_tracker: "https://example.org/issues".to_string(),
            }
        );
    }

    #[test]
    fn test_cli_overrides_config() {
        let config = Config {
            issue_tracker: "https://example.org/issues".to_string(),
            format_comments: false,
        };
        let settings = PotSettings::resolve(&command(Some(true), Some("https://other.org")), &config);
        assert!(settings.format_comments);
        assert_eq!(settings.issue_tracker, "https://other.org");
    }
}
