//! Call-site scanning shared by the C and JavaScript extractors.
//!
//! A language describes its grammar, the query locating candidate calls, its
//! pattern table and how to read string arguments; [`scan_calls`] does the
//! rest:
//!
//! 1. Query the tree for call expressions whose callee may be a translation
//!    function.
//! 2. Resolve the callee name and look it up in the pattern table.
//! 3. Read the context and string arguments at the mapped positions.
//! 4. Attach the preceding comments and decide whether the strings are
//!    format strings.

use anyhow::Result;
use tree_sitter::{Language as Grammar, Node};

use super::ExtractOptions;
use crate::core::comments::{preceding_comments, suppresses_format};
use crate::core::parsers::tree::{capture_nodes, node_line, node_text, parse_source};
use crate::core::patterns::{Pattern, PatternTable};
use crate::core::types::{ExtractionResult, Language};

const CALL_EXPRESSION: &str = "call_expression";

/// What the scanner needs to know about a call-based language.
pub trait CallLanguage {
    fn language(&self) -> Language;

    fn grammar(&self) -> Grammar;

    /// Query capturing the callee of every candidate call expression.
    fn call_query(&self) -> &'static str;

    fn patterns(&self) -> &'static PatternTable;

    /// Name of the called function, given the call's `function` node.
    fn callee_name<'s>(&self, function: Node<'_>, source: &'s str) -> Option<&'s str>;

    /// Text of a string argument, or `None` if the argument is not a string.
    fn string_argument(&self, argument: Node<'_>, source: &str) -> Option<String>;

    /// Text of a tagged template used in place of an argument list.
    fn template_argument(&self, _arguments: Node<'_>, _source: &str) -> Option<String> {
        None
    }
}

/// Message fields read from one call, before comments are attached.
#[derive(Debug)]
struct CallMessage {
    strings: Vec<String>,
    context: Option<String>,
    line: usize,
}

/// Extract every recognized translation call from `source`.
pub fn scan_calls<L: CallLanguage>(
    language: &L,
    source: &str,
    file_name: &str,
    options: &ExtractOptions,
) -> Result<Vec<ExtractionResult>> {
    let grammar = language.grammar();
    let tree = parse_source(&grammar, source)?;
    let root = tree.root_node();

    let callees = capture_nodes(&grammar, language.call_query(), root, source)?;

    let results = callees
        .into_iter()
        .filter_map(|callee| callee.parent())
        .filter(|call| call.kind() == CALL_EXPRESSION)
        .filter_map(|call| {
            let message = read_call(language, call, source)?;
            let comments = preceding_comments(root, call, source, options.format_comments);

            let lang = language.language();
            let is_format =
                !suppresses_format(&comments, lang) && lang.detect_format(&message.strings);

            Some(ExtractionResult {
                strings: message.strings,
                context: message.context,
                language: Some(lang),
                is_format,
                file_name: file_name.to_string(),
                line: Some(message.line),
                comments,
            })
        })
        .collect();

    Ok(results)
}

fn read_call<L: CallLanguage>(language: &L, call: Node<'_>, source: &str) -> Option<CallMessage> {
    let function = call.child_by_field_name("function")?;
    let name = language.callee_name(function, source)?;
    let pattern = language.patterns().lookup(name)?;
    let arguments = call.child_by_field_name("arguments")?;

    if let Some(text) = language.template_argument(arguments, source) {
        if text.is_empty() {
            return None;
        }
        return Some(CallMessage {
            strings: vec![text],
            context: None,
            line: node_line(&arguments),
        });
    }

    read_arguments(language, pattern, arguments, source)
}

fn read_arguments<L: CallLanguage>(
    language: &L,
    pattern: &Pattern,
    arguments: Node<'_>,
    source: &str,
) -> Option<CallMessage> {
    let mut walker = arguments.walk();
    let args: Vec<Node<'_>> = arguments
        .named_children(&mut walker)
        .filter(|arg| !arg.is_extra())
        .collect();

    if args.len() < pattern.highest_position() {
        return None;
    }

    let context = pattern
        .context
        .map(|position| {
            let arg = args[position - 1];
            language
                .string_argument(arg, source)
                .unwrap_or_else(|| strip_delimiters(node_text(&arg, source)).to_string())
        })
        .filter(|context| !context.is_empty());

    let strings: Vec<String> = pattern
        .strings
        .iter()
        .filter_map(|&position| language.string_argument(args[position - 1], source))
        .filter(|text| !text.is_empty())
        .collect();

    if strings.is_empty() {
        return None;
    }

    let first = pattern.strings.first().map(|&position| args[position - 1])?;

    Some(CallMessage {
        strings,
        context,
        line: node_line(&first),
    })
}

/// Drop the first and last character of a literal (its quotes).
pub fn strip_delimiters(text: &str) -> &str {
    let mut chars = text.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}
