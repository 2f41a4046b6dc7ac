//! Extraction data model shared by every extractor and the catalog.
//!
//! An [`ExtractionResult`] is the handoff point between the extractors in
//! `core::extract` and the catalog builder in `crate::catalog`. Each result
//! describes one translatable message found at one source location.

use std::fmt;

/// Source language of a call-site extraction.
///
/// Determines the `#, <language>-format` flag written for format strings and
/// which directive markers suppress format detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    C,
    JavaScript,
}

impl Language {
    /// Name used in the catalog flag line, e.g. `c` in `#, c-format`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::C => "c",
            Language::JavaScript => "javascript",
        }
    }

    /// printf-style placeholders that mark a string as a format string.
    pub fn format_tokens(&self) -> &'static [&'static str] {
        match self {
            Language::C => &["%s", "%i", "%d", "%f", "%u"],
            Language::JavaScript => &["%s", "%f", "%d"],
        }
    }

    /// Directive markers that disable format detection for a call site.
    ///
    /// JavaScript sources historically reuse the C marker, so both are honored.
    pub fn format_suppression_markers(&self) -> &'static [&'static str] {
        match self {
            Language::C => &["no-c-format"],
            Language::JavaScript => &["no-javascript-format", "no-c-format"],
        }
    }

    /// Returns true if any of `strings` contains a placeholder of this language.
    pub fn detect_format<S: AsRef<str>>(&self, strings: &[S]) -> bool {
        let tokens = self.format_tokens();
        strings
            .iter()
            .any(|s| tokens.iter().any(|token| s.as_ref().contains(token)))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `file:line` pair rendered in the `#:` reference lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReference {
    pub file_name: String,
    /// 1-based line, when the extractor could determine one.
    pub line: Option<usize>,
}

impl fmt::Display for FileReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}", self.file_name, line),
            None => f.write_str(&self.file_name),
        }
    }
}

/// One translatable message found in a source file.
///
/// `strings` holds either the singular form alone or the singular and plural
/// forms. Extractors never produce a result whose first string is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    pub strings: Vec<String>,
    pub context: Option<String>,
    pub language: Option<Language>,
    pub is_format: bool,
    pub file_name: String,
    pub line: Option<usize>,
    /// Comments associated with the message, in source order.
    pub comments: Vec<String>,
}

impl ExtractionResult {
    /// Creates a singular result with no context, language or comments.
    pub fn new(file_name: impl Into<String>, msgid: impl Into<String>) -> Self {
        Self {
            strings: vec![msgid.into()],
            context: None,
            language: None,
            is_format: false,
            file_name: file_name.into(),
            line: None,
            comments: Vec::new(),
        }
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_plural(mut self, plural: impl Into<String>) -> Self {
        self.strings.truncate(1);
        self.strings.push(plural.into());
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_comments(mut self, comments: Vec<String>) -> Self {
        self.comments = comments;
        self
    }

    /// The singular source string.
    pub fn msgid(&self) -> &str {
        self.strings.first().map(String::as_str).unwrap_or_default()
    }

    /// The plural source string, if this is a plural message.
    pub fn msgid_plural(&self) -> Option<&str> {
        self.strings.get(1).map(String::as_str)
    }

    pub fn reference(&self) -> FileReference {
        FileReference {
            file_name: self.file_name.clone(),
            line: self.line,
        }
    }
}
