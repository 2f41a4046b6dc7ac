//! Rendering of a [`Catalog`] as a POT template.
//!
//! Each entry is written as:
//!
//! ```text
//! #. translator comment
//! #: src/main.c:12 src/window.c:40
//! #, directive flags
//! #, c-format
//! msgctxt "context"
//! msgid "text"
//! msgstr ""
//! ```
//!
//! with plural entries ending in `msgid_plural`, `msgstr[0]` and `msgstr[1]`
//! instead. Entries are separated by one blank line and the output does not
//! end with a newline.

use chrono::{DateTime, Utc};

use super::builder::{Catalog, CatalogEntry};
use crate::core::comments::Directive;

/// Maximum width of a reference line and of a one-line `msgid`.
pub const LINE_WIDTH: usize = 80;

/// Budget for the continuation lines of a wrapped `msgid`, leaving room for
/// the closing quote.
const CONTINUATION_WIDTH: usize = LINE_WIDTH - 2;

/// Fields substituted into the catalog header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PotHeader {
    /// `Report-Msgid-Bugs-To` value; may be empty.
    pub issue_tracker: String,
    /// `POT-Creation-Date` value, see [`creation_timestamp`].
    pub creation_date: String,
}

impl PotHeader {
    pub fn new(issue_tracker: impl Into<String>, creation_date: impl Into<String>) -> Self {
        Self {
            issue_tracker: issue_tracker.into(),
            creation_date: creation_date.into(),
        }
    }

    /// Header dated now.
    pub fn now(issue_tracker: impl Into<String>) -> Self {
        Self::new(issue_tracker, creation_timestamp(Utc::now()))
    }
}

/// `YYYY-MM-DD HH:MM+0000` in UTC.
pub fn creation_timestamp(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%d %H:%M+0000").to_string()
}

pub fn render_header(header: &PotHeader) -> String {
    format!(
        r#"# SOME DESCRIPTIVE TITLE.
# Copyright (C) YEAR THE PACKAGE'S COPYRIGHT HOLDER
# This file is distributed under the same license as the PACKAGE package.
# FIRST AUTHOR <EMAIL@ADDRESS>, YEAR.
#
#, fuzzy
msgid ""
msgstr ""
"Project-Id-Version: PACKAGE VERSION\n"
"Report-Msgid-Bugs-To: {}\n"
"POT-Creation-Date: {}\n"
"PO-Revision-Date: YEAR-MO-DA HO:MI+ZONE\n"
"Last-Translator: FULL NAME <EMAIL@ADDRESS>\n"
"Language-Team: LANGUAGE <LL@li.org>\n"
"Language: \n"
"MIME-Version: 1.0\n"
"Content-Type: text/plain; charset=UTF-8\n"
"Content-Transfer-Encoding: 8bit\n"
"Plural-Forms: nplurals=INTEGER; plural=EXPRESSION;\n"
"#,
        header.issue_tracker, header.creation_date
    )
}

/// Render the whole catalog: header, then every entry in insertion order.
pub fn render_catalog(catalog: &Catalog, header: &PotHeader) -> String {
    let mut output = render_header(header);
    output.push('\n');

    for entry in catalog.entries() {
        output.push_str(&render_entry(entry));
        output.push('\n');
    }

    match output.strip_suffix("\n\n") {
        Some(trimmed) => trimmed.to_string(),
        None => output,
    }
}

/// Render one entry, ending with a newline.
pub fn render_entry(entry: &CatalogEntry) -> String {
    let result = &entry.representative;
    let mut lines: Vec<String> = Vec::new();
    let mut directives: Vec<String> = Vec::new();

    for comment in &entry.comments {
        if let Some(directive) = Directive::parse(comment) {
            directives.push(format!("#, {}", directive.flags));
            continue;
        }
        lines.extend(
            comment
                .split('\n')
                .map(|line| format!("#. {}", line.trim()).trim().to_string()),
        );
    }

    lines.extend(reference_lines(entry));
    lines.extend(directives);

    if let Some(language) = result.language
        && result.is_format
    {
        lines.push(format!("#, {}-format", language));
    }

    if let Some(context) = &result.context {
        lines.push(format!("msgctxt \"{}\"", escape_msgid(context)));
    }

    lines.extend(msgid_lines("msgid", &escape_msgid(result.msgid())));
    match result.msgid_plural() {
        Some(plural) => {
            lines.extend(msgid_lines("msgid_plural", &escape_msgid(plural)));
            lines.push("msgstr[0] \"\"".to_string());
            lines.push("msgstr[1] \"\"".to_string());
        }
        None => lines.push("msgstr \"\"".to_string()),
    }

    let mut rendered = lines.join("\n");
    rendered.push('\n');
    rendered
}

/// `#:` lines listing every reference, wrapped at [`LINE_WIDTH`].
fn reference_lines(entry: &CatalogEntry) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut width = 0;

    for reference in &entry.references {
        let text = reference.to_string();
        let text_width = text.chars().count() + 1;

        if current.is_empty() {
            current = format!("#: {}", text);
            width = 3 + text_width;
        } else if width + text_width > LINE_WIDTH {
            lines.push(std::mem::take(&mut current));
            current = format!("#: {}", text);
            width = 3 + text_width;
        } else {
            current.push(' ');
            current.push_str(&text);
            width += text_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Escape double quotes not already preceded by a backslash, and turn
/// newlines, carriage returns and tabs into their escape sequences.
pub fn escape_msgid(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    let mut previous = None;

    for c in text.chars() {
        match c {
            '"' if previous != Some('\\') => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
        previous = Some(c);
    }

    escaped
}

/// Lines of a `msgid`-style field for already escaped text.
///
/// Fits on one line when `key "text"` is at most [`LINE_WIDTH`] characters.
/// Otherwise the first line is `key ""` and the text follows in quoted lines
/// broken at spaces, each kept under the continuation budget where a single
/// word allows it.
pub fn msgid_lines(key: &str, text: &str) -> Vec<String> {
    let single = format!("{} \"{}\"", key, text);
    if single.chars().count() <= LINE_WIDTH {
        return vec![single];
    }

    let mut words = text.split(' ');
    let mut lines = vec![format!("{} \"\"", key)];
    let mut current = format!("\"{}", words.next().unwrap_or_default());

    for word in words {
        let appended = format!("{} {}", current, word);
        if appended.chars().count() < CONTINUATION_WIDTH {
            current = appended;
        } else {
            lines.push(format!("{} \"", current));
            current = format!("\"{}", word);
        }
    }
    lines.push(format!("{}\"", current));

    lines
}
