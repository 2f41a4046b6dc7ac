//! Markup extraction for the XML-based formats.
//!
//! The document is walked depth-first in pre-order. Which elements yield a
//! string depends on the [`Dialect`]:
//!
//! | Dialect    | Translatable element                                         |
//! |------------|--------------------------------------------------------------|
//! | `Ui`       | has a non-empty `translatable` attribute                     |
//! | `Schema`   | named `name`, `description` or `summary`                     |
//! | `Metainfo` | schema names plus `developer_name` and `caption`             |
//! | `Xml`      | has a `description` attribute, else a `name` attribute       |
//!
//! Element text is whitespace-normalized; `Xml` attribute values are taken
//! verbatim. A comment is held until the next string found in document order,
//! even when that string sits in a different subtree.

use anyhow::Result;

use super::{ExtractOptions, Extractor};
use crate::core::parsers::xml::{XmlElement, XmlNode, parse_document};
use crate::core::types::ExtractionResult;

const SCHEMA_ELEMENTS: &[&str] = &["name", "description", "summary"];
const METAINFO_ELEMENTS: &[&str] = &["name", "description", "summary", "developer_name", "caption"];

/// Markup schema variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Generic XML: `description`/`name` attributes.
    Xml,
    /// GtkBuilder interface definitions.
    Ui,
    /// GSettings schemas.
    Schema,
    /// AppStream metainfo (formerly appdata).
    Metainfo,
}

impl Dialect {
    /// The string `element` contributes under this dialect, if any.
    fn element_string(&self, element: &XmlElement) -> Option<String> {
        match self {
            Dialect::Xml => element
                .attribute("description")
                .filter(|value| !value.is_empty())
                .or_else(|| element.attribute("name").filter(|value| !value.is_empty()))
                .map(str::to_string),
            Dialect::Ui => {
                element
                    .attribute("translatable")
                    .filter(|value| !value.is_empty())?;
                element_text(element)
            }
            Dialect::Schema => named_element_text(element, SCHEMA_ELEMENTS),
            Dialect::Metainfo => named_element_text(element, METAINFO_ELEMENTS),
        }
    }
}

fn named_element_text(element: &XmlElement, names: &[&str]) -> Option<String> {
    if !names.contains(&element.name.as_str()) {
        return None;
    }
    element_text(element)
}

/// Normalized text of an element's first meaningful child.
fn element_text(element: &XmlElement) -> Option<String> {
    let text = element.first_content()?.first_text()?;
    let cleaned = clean_text(text);
    (!cleaned.is_empty()).then_some(cleaned)
}

/// Trim every line, join the lines with single spaces and trim the result.
pub fn clean_text(text: &str) -> String {
    text.split('\n')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

/// Comment waiting for the next string found in document order.
#[derive(Debug, Default)]
struct PendingComment {
    text: Option<String>,
}

impl PendingComment {
    /// Hold `comment`, replacing any comment already held.
    fn hold(&mut self, comment: &str) {
        self.text = Some(comment.to_string());
    }

    /// Comments for a string being emitted. Clears the held comment; a blank
    /// one yields nothing.
    fn attach(&mut self) -> Vec<String> {
        self.text
            .take()
            .map(|comment| comment.trim().to_string())
            .filter(|comment| !comment.is_empty())
            .into_iter()
            .collect()
    }
}

/// Extractor for one markup dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkupExtractor {
    pub dialect: Dialect,
}

impl MarkupExtractor {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }
}

impl Extractor for MarkupExtractor {
    fn name(&self) -> &'static str {
        match self.dialect {
            Dialect::Xml => "XML",
            Dialect::Ui => "UI",
            Dialect::Schema => "GSettings schema",
            Dialect::Metainfo => "AppStream metainfo",
        }
    }

    fn extract(
        &self,
        source: &str,
        file_name: &str,
        _options: &ExtractOptions,
    ) -> Result<Vec<ExtractionResult>> {
        let document = parse_document(source)?;

        let mut results = Vec::new();
        let mut pending = PendingComment::default();
        let mut stack: Vec<&XmlNode> = document.children.iter().rev().collect();

        while let Some(node) = stack.pop() {
            match node {
                XmlNode::Comment(comment) => pending.hold(comment),
                XmlNode::Text(_) => {}
                XmlNode::Element(element) => {
                    if let Some(string) = self.dialect.element_string(element) {
                        results.push(
                            ExtractionResult::new(file_name, string)
                                .with_line(element.line(source))
                                .with_comments(pending.attach()),
                        );
                    }
                    stack.extend(element.children.iter().rev());
                }
            }
        }

        Ok(results)
    }
}
