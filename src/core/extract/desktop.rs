//! freedesktop `.desktop` entry extraction.
//!
//! ```ini
//! [Desktop Entry]
//! Name=Text Editor
//! Comment=Edit text files
//! ```
//!
//! Reported lines are offset by one past the physical line, matching the
//! references other gettext tooling writes for desktop entries.

use anyhow::Result;

use super::{ExtractOptions, Extractor};
use crate::core::types::ExtractionResult;

const TRANSLATED_KEYS: &[&str] = &["Name", "Description", "Comment"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DesktopExtractor;

impl Extractor for DesktopExtractor {
    fn name(&self) -> &'static str {
        "Desktop entry"
    }

    fn extract(
        &self,
        source: &str,
        file_name: &str,
        _options: &ExtractOptions,
    ) -> Result<Vec<ExtractionResult>> {
        let results = source
            .split('\n')
            .enumerate()
            .filter_map(|(index, line)| {
                let (key, value) = line.split_once('=')?;
                let (key, value) = (key.trim(), value.trim());
                if !TRANSLATED_KEYS.contains(&key) || value.is_empty() {
                    return None;
                }
                Some(ExtractionResult::new(file_name, value).with_line(index + 2))
            })
            .collect();

        Ok(results)
    }
}
