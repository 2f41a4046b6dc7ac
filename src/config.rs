use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".tree-gettext.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Written to the `Report-Msgid-Bugs-To` header field.
    #[serde(default)]
    pub issue_tracker: String,
    /// Strip `*` continuation markers from block comments.
    #[serde(default = "default_format_comments")]
    pub format_comments: bool,
}

fn default_format_comments() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            issue_tracker: String::new(),
            format_comments: default_format_comments(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// The issue tracker is written inside a quoted header line, so it may not
    /// contain quotes or line breaks.
    pub fn validate(&self) -> Result<()> {
        if self
            .issue_tracker
            .chars()
            .any(|c| matches!(c, '"' | '\n' | '\r'))
        {
            bail!(
                "Invalid 'issueTracker': \"{}\" must not contain quotes or line breaks",
                self.issue_tracker.escape_default()
            );
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Load the nearest config file, or the defaults when there is none.
pub fn load_config(start_dir: &Path) -> Result<Config> {
    let Some(path) = find_config_file(start_dir) else {
        return Ok(Config::default());
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    config.validate()?;
    Ok(config)
}
