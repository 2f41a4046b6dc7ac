//! JavaScript source extraction.
//!
//! Recognized call shapes:
//!
//! ```js
//! _("Open");                      // plain identifier
//! Gettext.ngettext("%d file", "%d files", n);  // member access, by property name
//! _("Hello, " + "world");         // concatenation of literals
//! _(`Welcome ${user}`);           // template, substitutions become ${0}, ${1}, ...
//! _`Welcome ${user}`;             // tagged template
//! ```

use std::sync::LazyLock;

use anyhow::Result;
use regex::{Captures, Regex};
use tree_sitter::{Language as Grammar, Node};

use super::calls::{CallLanguage, scan_calls, strip_delimiters};
use super::{ExtractOptions, Extractor};
use crate::core::parsers::tree::node_text;
use crate::core::patterns::{JAVASCRIPT_PATTERNS, PatternTable};
use crate::core::types::{ExtractionResult, Language};

const CALL_QUERY: &str = r#"
(call_expression function: (identifier) @fn)
(call_expression function: (member_expression object: (_) property: (property_identifier)) @memberfn)
"#;

static UNICODE_ESCAPE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\\u(?:\{([0-9a-fA-F]{1,6})\}|([dD][89abAB][0-9a-fA-F]{2})\\u([dD][c-fC-F][0-9a-fA-F]{2})|([0-9a-fA-F]{4}))",
    )
    .unwrap()
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JavaScriptExtractor;

impl CallLanguage for JavaScriptExtractor {
    fn language(&self) -> Language {
        Language::JavaScript
    }

    fn grammar(&self) -> Grammar {
        tree_sitter_javascript::LANGUAGE.into()
    }

    fn call_query(&self) -> &'static str {
        CALL_QUERY
    }

    fn patterns(&self) -> &'static PatternTable {
        &JAVASCRIPT_PATTERNS
    }

    fn callee_name<'s>(&self, function: Node<'_>, source: &'s str) -> Option<&'s str> {
        match function.kind() {
            "identifier" => Some(node_text(&function, source)),
            "member_expression" => function
                .child_by_field_name("property")
                .map(|property| node_text(&property, source)),
            _ => None,
        }
    }

    fn string_argument(&self, argument: Node<'_>, source: &str) -> Option<String> {
        match argument.kind() {
            "string" | "binary_expression" => concatenated_string(argument, source),
            "template_string" => Some(template_text(argument, source)),
            _ => None,
        }
    }

    fn template_argument(&self, arguments: Node<'_>, source: &str) -> Option<String> {
        (arguments.kind() == "template_string").then(|| template_text(arguments, source))
    }
}

impl Extractor for JavaScriptExtractor {
    fn name(&self) -> &'static str {
        "JavaScript"
    }

    fn extract(
        &self,
        source: &str,
        file_name: &str,
        options: &ExtractOptions,
    ) -> Result<Vec<ExtractionResult>> {
        scan_calls(self, source, file_name, options)
    }
}

/// A string literal, or a `+` chain made only of string literals.
fn concatenated_string(node: Node<'_>, source: &str) -> Option<String> {
    match node.kind() {
        "string" => Some(unescape_unicode(strip_delimiters(node_text(&node, source)))),
        "binary_expression" => {
            let operator = node.child_by_field_name("operator")?;
            if node_text(&operator, source) != "+" {
                return None;
            }
            let left = concatenated_string(node.child_by_field_name("left")?, source)?;
            let right = concatenated_string(node.child_by_field_name("right")?, source)?;
            Some(left + &right)
        }
        _ => None,
    }
}

/// Literal text of a template string with each substitution replaced by
/// `${0}`, `${1}`, ... in order of appearance.
fn template_text(template: Node<'_>, source: &str) -> String {
    let start = template.start_byte() + 1;
    let end = template.end_byte().saturating_sub(1).max(start);

    let mut text = String::new();
    let mut cursor = start;
    let mut walker = template.walk();
    for (index, substitution) in template
        .named_children(&mut walker)
        .filter(|child| child.kind() == "template_substitution")
        .enumerate()
    {
        text.push_str(source.get(cursor..substitution.start_byte()).unwrap_or_default());
        text.push_str(&format!("${{{}}}", index));
        cursor = substitution.end_byte();
    }
    text.push_str(source.get(cursor..end).unwrap_or_default());

    text
}

/// Decode `\uXXXX`, surrogate pairs and `\u{X...}` escapes to characters.
///
/// Other escapes are left as written.
fn unescape_unicode(text: &str) -> String {
    UNICODE_ESCAPE_REGEX
        .replace_all(text, |caps: &Captures| {
            let code_point = if let Some(braced) = caps.get(1) {
                u32::from_str_radix(braced.as_str(), 16).ok()
            } else if let (Some(high), Some(low)) = (caps.get(2), caps.get(3)) {
                let high = u32::from_str_radix(high.as_str(), 16).ok();
                let low = u32::from_str_radix(low.as_str(), 16).ok();
                high.zip(low)
                    .map(|(high, low)| 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00))
            } else {
                caps.get(4)
                    .and_then(|hex| u32::from_str_radix(hex.as_str(), 16).ok())
            };

            code_point
                .and_then(char::from_u32)
                .map(String::from)
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
