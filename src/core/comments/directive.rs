//! Translator directive comments.
//!
//! A comment whose trimmed text begins with `xgettext:` or `tree-gettext:` is
//! not a description for translators; it carries catalog flags instead:
//!
//! ```c
//! /* xgettext:no-c-format */
//! printf (_("100% done"));
//! ```
//!
//! renders the entry with `#, no-c-format` and turns off format detection.

use crate::core::types::Language;

/// Prefixes that mark a comment as a directive.
pub const DIRECTIVE_PREFIXES: &[&str] = &["xgettext:", "tree-gettext:"];

/// A directive comment with the flag text that follows the first `:`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive<'a> {
    pub flags: &'a str,
}

impl<'a> Directive<'a> {
    /// Parse a directive from comment text.
    ///
    /// Returns `None` for ordinary descriptive comments.
    pub fn parse(comment: &'a str) -> Option<Self> {
        let trimmed = comment.trim();
        if !DIRECTIVE_PREFIXES
            .iter()
            .any(|prefix| trimmed.starts_with(prefix))
        {
            return None;
        }

        let (_, flags) = comment.split_once(':')?;
        Some(Self { flags })
    }
}

/// Returns true if any comment disables format detection for `language`.
pub fn suppresses_format<S: AsRef<str>>(comments: &[S], language: Language) -> bool {
    comments.iter().any(|comment| {
        let comment = comment.as_ref();
        DIRECTIVE_PREFIXES.iter().any(|prefix| {
            language
                .format_suppression_markers()
                .iter()
                .any(|marker| comment.contains(&format!("{}{}", prefix, marker)))
        })
    })
}
