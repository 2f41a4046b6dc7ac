//! Thin wrapper over tree-sitter: parse a source file and run capture queries.

use anyhow::{Context, Result, anyhow};
use tree_sitter::{Language as Grammar, Node, Parser, Query, QueryCursor, StreamingIterator, Tree};

/// Parse source text with the given grammar.
///
/// tree-sitter is error tolerant: malformed input still yields a tree with
/// `ERROR` nodes, so this only fails if the grammar itself cannot be loaded.
pub fn parse_source(grammar: &Grammar, source: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(grammar)
        .context("Failed to load tree-sitter grammar")?;

    parser
        .parse(source, None)
        .ok_or_else(|| anyhow!("tree-sitter returned no syntax tree"))
}

/// Run a capture query and return every captured node in document order.
pub fn capture_nodes<'tree>(
    grammar: &Grammar,
    query_source: &str,
    root: Node<'tree>,
    source: &str,
) -> Result<Vec<Node<'tree>>> {
    let query = Query::new(grammar, query_source)
        .with_context(|| format!("Invalid tree-sitter query: {}", query_source.trim()))?;

    let mut cursor = QueryCursor::new();
    let mut captures = cursor.captures(&query, root, source.as_bytes());

    let mut nodes = Vec::new();
    while let Some((query_match, capture_index)) = captures.next() {
        nodes.push(query_match.captures[*capture_index].node);
    }

    Ok(nodes)
}

/// Source text spanned by `node`.
pub fn node_text<'a>(node: &Node<'_>, source: &'a str) -> &'a str {
    source.get(node.byte_range()).unwrap_or_default()
}

/// 1-based line on which `node` starts.
pub fn node_line(node: &Node<'_>) -> usize {
    node.start_position().row + 1
}
