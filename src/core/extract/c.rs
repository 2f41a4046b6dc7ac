//! C source extraction.
//!
//! String arguments are taken verbatim between their quotes: C escape
//! sequences are already valid in the catalog format. Adjacent literals
//! (`"Hello " "world"`) are concatenated; macro pieces such as `PRIu64`
//! inside a concatenation are skipped.

use anyhow::Result;
use tree_sitter::{Language as Grammar, Node};

use super::calls::{CallLanguage, scan_calls};
use super::{ExtractOptions, Extractor};
use crate::core::parsers::tree::node_text;
use crate::core::patterns::{C_PATTERNS, PatternTable};
use crate::core::types::{ExtractionResult, Language};

const CALL_QUERY: &str = "(call_expression function: (identifier) @fn)";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CExtractor;

impl CallLanguage for CExtractor {
    fn language(&self) -> Language {
        Language::C
    }

    fn grammar(&self) -> Grammar {
        tree_sitter_c::LANGUAGE.into()
    }

    fn call_query(&self) -> &'static str {
        CALL_QUERY
    }

    fn patterns(&self) -> &'static PatternTable {
        &C_PATTERNS
    }

    fn callee_name<'s>(&self, function: Node<'_>, source: &'s str) -> Option<&'s str> {
        (function.kind() == "identifier").then(|| node_text(&function, source))
    }

    fn string_argument(&self, argument: Node<'_>, source: &str) -> Option<String> {
        match argument.kind() {
            "string_literal" => Some(literal_body(node_text(&argument, source)).to_string()),
            "concatenated_string" => {
                let mut walker = argument.walk();
                let text = argument
                    .named_children(&mut walker)
                    .filter(|part| part.kind() == "string_literal")
                    .map(|part| literal_body(node_text(&part, source)))
                    .collect::<String>();
                Some(text)
            }
            _ => None,
        }
    }
}

impl Extractor for CExtractor {
    fn name(&self) -> &'static str {
        "C"
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

/// Text between the first and last `"` of a literal, skipping any encoding
/// prefix such as `L` or `u8`.
fn literal_body(literal: &str) -> &str {
    match (literal.find('"'), literal.rfind('"')) {
        (Some(start), Some(end)) if end > start => &literal[start + 1..end],
        _ => "",
    }
}
