//! Drives extraction over a file list and collects the results into a
//! catalog.
//!
//! Files are processed one at a time in list order. A file that cannot be
//! read, has no extractor or fails to parse becomes an [`Issue`] and the run
//! moves on; nothing here aborts the run.

use std::{fs, path::Path};

use super::extract::{ExtractOptions, Extractor};
use super::registry::ExtractorRegistry;
use super::types::ExtractionResult;
use crate::catalog::Catalog;
use crate::issues::{Issue, ParseErrorIssue, UnreadableFileIssue, UnsupportedFileIssue};

/// Entries of a newline-separated file list.
///
/// Entries are trimmed; blank lines and lines starting with `#` are skipped.
pub fn parse_file_list(contents: &str) -> Vec<&str> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

/// Extract one file. `entry` is the path as written in the file list; it is
/// resolved against `base_dir` for reading and used verbatim in references.
pub fn extract_file(
    entry: &str,
    base_dir: &Path,
    registry: &ExtractorRegistry,
    options: &ExtractOptions,
) -> Result<Vec<ExtractionResult>, Issue> {
    let Some(extractor) = registry.resolve(entry) else {
        return Err(UnsupportedFileIssue {
            file_path: entry.to_string(),
        }
        .into());
    };

    let source = fs::read_to_string(base_dir.join(entry)).map_err(|err| UnreadableFileIssue {
        file_path: entry.to_string(),
        error: err.to_string(),
    })?;

    extractor.extract(&source, entry, options).map_err(|err| {
        ParseErrorIssue {
            file_path: entry.to_string(),
            error: format!("{:#}", err),
        }
        .into()
    })
}

/// Outcome of extracting a whole file list.
#[derive(Debug, Default)]
pub struct CatalogRun {
    pub catalog: Catalog,
    /// Skipped files, in list order.
    pub issues: Vec<Issue>,
    /// Files whose strings made it into the catalog.
    pub files_extracted: usize,
    /// Extraction results added, before deduplication.
    pub strings_extracted: usize,
}

/// Extract every listed file into a single catalog.
///
/// `on_file` is called with each entry before it is processed.
pub fn build_catalog<F>(
    files: &[&str],
    base_dir: &Path,
    registry: &ExtractorRegistry,
    options: &ExtractOptions,
    mut on_file: F,
) -> CatalogRun
where
    F: FnMut(&str),
{
    let mut run = CatalogRun::default();

    for entry in files {
        on_file(entry);
        match extract_file(entry, base_dir, registry, options) {
            Ok(results) => {
                run.files_extracted += 1;
                run.strings_extracted += results.len();
                run.catalog.extend(results);
            }
            Err(issue) => run.issues.push(issue),
        }
    }

    run
}
