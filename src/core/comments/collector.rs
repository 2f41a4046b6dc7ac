//! Associates the comments written above a call with that call.
//!
//! The scan has two stages:
//!
//! 1. **Sibling walk.** Climb from the call to the outermost node that still
//!    starts on the call's line, then walk backwards through previous
//!    siblings collecting comments. A non-comment sibling ending on the line
//!    of the last collected comment is skipped (and the walk climbs to the
//!    parent when the level is exhausted); any other sibling stops the scan.
//! 2. **Position probe.** If the walk found nothing, probe the node at the
//!    call's column on each line above the call, collecting consecutive
//!    comments until something else is hit.
//!
//! ```c
//! /* Translators: shown in the title bar */
//! title = _("Untitled");
//! ```
//!
//! Both stages are plain loops over the immutable tree, so nesting depth never
//! turns into recursion depth.

use tree_sitter::{Node, Point};

use crate::core::parsers::tree::node_text;

const COMMENT_KIND: &str = "comment";

/// Collect the comments preceding `call`, in source order.
///
/// `format_comments` strips the leading `*` of block-comment continuation
/// lines. Finding no comment is a normal outcome and yields an empty list.
pub fn preceding_comments(
    root: Node<'_>,
    call: Node<'_>,
    source: &str,
    format_comments: bool,
) -> Vec<String> {
    let call_row = call.start_position().row;
    if call_row == 0 {
        return Vec::new();
    }

    let comments = sibling_comments(call, source, format_comments);
    if !comments.is_empty() {
        return comments;
    }

    probed_comments(root, call, source, format_comments)
}

fn sibling_comments(call: Node<'_>, source: &str, format_comments: bool) -> Vec<String> {
    let call_row = call.start_position().row;

    let mut anchor = call;
    while let Some(parent) = anchor.parent()
        && parent.start_position().row == call_row
    {
        anchor = parent;
    }

    // Collected bottom-up, reversed at the end.
    let mut comments = Vec::new();
    let mut comment_row: Option<usize> = None;
    let mut cursor = anchor.prev_sibling();

    while let Some(node) = cursor {
        if node.kind() == COMMENT_KIND {
            comment_row = Some(node.start_position().row);
            if let Some(text) = comment_text(node_text(&node, source), format_comments) {
                comments.push(text);
            }
            cursor = node.prev_sibling();
        } else if comment_row == Some(node.end_position().row) {
            cursor = match node.prev_sibling() {
                Some(previous) => Some(previous),
                None => node.parent().and_then(|parent| parent.prev_sibling()),
            };
        } else {
            break;
        }
    }

    comments.reverse();
    comments
}

fn probed_comments(
    root: Node<'_>,
    call: Node<'_>,
    source: &str,
    format_comments: bool,
) -> Vec<String> {
    let column = call.start_position().column;

    let mut comments = Vec::new();
    let mut row = call.start_position().row - 1;

    loop {
        let point = Point::new(row, column);
        let Some(node) = root.descendant_for_point_range(point, point) else {
            break;
        };
        if node.kind() != COMMENT_KIND {
            break;
        }

        if let Some(text) = comment_text(node_text(&node, source), format_comments) {
            comments.push(text);
        }

        let start_row = node.start_position().row;
        if start_row == 0 {
            break;
        }
        row = start_row - 1;
    }

    comments.reverse();
    comments
}

/// Strip comment delimiters from raw comment source.
///
/// Returns `None` for comment syntaxes other than `//` and `/* */`.
pub fn comment_text(raw: &str, format_comments: bool) -> Option<String> {
    let raw = raw.trim();

    if let Some(body) = raw.strip_prefix("/*") {
        let body = body.strip_prefix(' ').unwrap_or(body);
        let body = body.strip_suffix("*/").unwrap_or(body);
        let body = body.strip_suffix(' ').unwrap_or(body);

        if !format_comments {
            return Some(body.to_string());
        }

        let lines: Vec<&str> = body
            .split('\n')
            .map(|line| {
                let line = line.trim();
                line.strip_prefix('*').unwrap_or(line).trim()
            })
            .collect();
        return Some(lines.join("\n"));
    }

    if let Some(body) = raw.strip_prefix("//") {
        return Some(body.strip_prefix(' ').unwrap_or(body).to_string());
    }

    None
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tree_sitter::Tree;

    use super::*;
    use crate::core::parsers::tree::{capture_nodes, parse_source};

    fn parse_c(source: &str) -> Tree {
        parse_source(&tree_sitter_c::LANGUAGE.into(), source).unwrap()
    }

    /// Comments for the call to `target` in a C snippet.
    fn comments_for(source: &str, target: &str, format_comments: bool) -> Vec<String> {
        let tree = parse_c(source);
        let root = tree.root_node();
        let callee = capture_nodes(
            &tree_sitter_c::LANGUAGE.into(),
            "(call_expression function: (identifier) @fn)",
            root,
            source,
        )
        .unwrap()
        .into_iter()
        .find(|node| node_text(node, source) == target)
        .unwrap();
        let call = callee.parent().unwrap();
        preceding_comments(root, call, source, format_comments)
    }

    #[test]
    fn test_comment_text_line_and_block() {
        assert_eq!(comment_text("// hello", false).as_deref(), Some("hello"));
        assert_eq!(comment_text("//hello", false).as_deref(), Some("hello"));
        assert_eq!(comment_text("/* hello */", false).as_deref(), Some("hello"));
        assert_eq!(comment_text("#!shebang", false), None);
    }

    #[test]
    fn test_comment_text_formats_continuation_lines() {
        let raw = "/* First line\n * second line\n   * third */";
        assert_eq!(
            comment_text(raw, true).as_deref(),
            Some("First line\nsecond line\nthird")
        );
        assert_eq!(
            comment_text(raw, false).as_deref(),
            Some("First line\n * second line\n   * third")
        );
    }

    #[test]
    fn test_first_line_call_has_no_comments() {
        let source = "int x = _(\"Hello\");\n";
        assert!(comments_for(source, "_", true).is_empty());
    }

    #[test]
    fn test_sibling_comment_above_statement() {
        let source = r#"
void f(void) {
  int a = 0;
  /* Translators: greeting */
  puts(_("Hello"));
}
"#;
        assert_eq!(comments_for(source, "_", true), vec!["Translators: greeting"]);
    }

    #[test]
    fn test_consecutive_comments_are_in_source_order() {
        let source = r#"
void f(void) {
  // first
  // second
  puts(_("Hello"));
}
"#;
        assert_eq!(comments_for(source, "_", true), vec!["first", "second"]);
    }

    #[test]
    fn test_code_between_comment_and_call_stops_scan() {
        let source = r#"
void f(void) {
  // unrelated
  int a = 0;
  puts(_("Hello"));
}
"#;
        assert!(comments_for(source, "_", true).is_empty());
    }

    #[test]
    fn test_comment_inside_argument_list() {
        let source = r#"
void f(void) {
  g(1,
    // Translators: second argument
    _("Nested"));
}
"#;
        assert_eq!(
            comments_for(source, "_", true),
            vec!["Translators: second argument"]
        );
    }

    #[test]
    fn test_comment_between_arguments_found_by_column() {
        // The comment precedes `b`, not the call, so only the column probe sees it.
        let source = "void f(void) {\n  g(a,\n    /* Translators: hi */\n    b, _(\"x\"));\n}\n";
        assert_eq!(comments_for(source, "_", true), vec!["Translators: hi"]);
    }

    #[test]
    fn test_column_probe_stops_at_first_line() {
        let source = "int v = g(1, /* Translators: top */\n             b, _(\"x\"));\n";
        assert_eq!(comments_for(source, "_", true), vec!["Translators: top"]);
    }

    #[test]
    fn test_code_on_comment_line_is_skipped() {
        let source = "void f(void) {\n  int a = 0; /* Translators: same line */\n  puts(_(\"x\"));\n}\n";
        assert_eq!(
            comments_for(source, "_", true),
            vec!["Translators: same line"]
        );

        let source = "void f(void) {\n  /* first */ int a = 0; /* second */\n  puts(_(\"x\"));\n}\n";
        assert_eq!(comments_for(source, "_", true), vec!["first", "second"]);
    }

    #[test]
    fn test_walk_climbs_to_parent_when_siblings_run_out() {
        let source = "/* Translators: outer */ void f(void) { /* Translators: inner */\n  puts(_(\"x\"));\n}\n";
        assert_eq!(
            comments_for(source, "_", true),
            vec!["Translators: outer", "Translators: inner"]
        );
    }

    #[test]
    fn test_probe_stops_at_code() {
        let source = "int abcdefghij;\nint b = _(\"x\");\n";
        let tree = parse_c(source);
        let root = tree.root_node();
        let call = root
            .descendant_for_point_range(Point::new(1, 8), Point::new(1, 8))
            .and_then(|node| node.parent())
            .unwrap();
        assert!(probed_comments(root, call, source, true).is_empty());
    }

    #[test]
    fn test_no_comment_yields_empty_list() {
        let source = "\nvoid f(void) {\n  puts(_(\"Hello\"));\n}\n";
        assert!(comments_for(source, "_", true).is_empty());
    }
}
