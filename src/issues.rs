//! Recoverable problems found while building a catalog.
//!
//! A file that cannot be read, has no extractor, or fails to parse is skipped
//! and reported; the rest of the run continues. Each issue carries everything
//! the reporter needs to print it.

use enum_dispatch::enum_dispatch;

// ============================================================
// Rule
// ============================================================

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    UnreadableFile,
    UnsupportedFile,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::UnreadableFile => write!(f, "unreadable-file"),
            Rule::UnsupportedFile => write!(f, "unsupported-file"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Input file listed but could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreadableFileIssue {
    pub file_path: String,
    pub error: String,
}

impl UnreadableFileIssue {
    pub fn rule() -> Rule {
        Rule::UnreadableFile
    }
}

/// No extractor handles the file's extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedFileIssue {
    pub file_path: String,
}

impl UnsupportedFileIssue {
    pub fn rule() -> Rule {
        Rule::UnsupportedFile
    }
}

/// The extractor could not process the file (e.g. malformed markup).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A file skipped during catalog construction.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    UnreadableFile(UnreadableFileIssue),
    UnsupportedFile(UnsupportedFileIssue),
    ParseError(ParseErrorIssue),
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Trait for types that can be reported to CLI.
#[enum_dispatch]
pub trait Report {
    /// Path of the skipped file, as written in the file list.
    fn file_path(&self) -> &str;

    /// Primary message to display.
    fn message(&self) -> String;

    fn report_rule(&self) -> Rule;
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for UnreadableFileIssue {
    fn file_path(&self) -> &str {
        &self.file_path
    }

    fn message(&self) -> String {
        format!("Failed to read file: {}", self.error)
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for UnsupportedFileIssue {
    fn file_path(&self) -> &str {
        &self.file_path
    }

    fn message(&self) -> String {
        "No parser for file".to_string()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for ParseErrorIssue {
    fn file_path(&self) -> &str {
        &self.file_path
    }

    fn message(&self) -> String {
        format!("Failed to parse file: {}", self.error)
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}
