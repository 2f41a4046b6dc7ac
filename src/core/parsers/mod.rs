//! Syntax providers consumed by the extractors.
//!
//! - `tree`: tree-sitter parsing and capture queries for C and JavaScript
//! - `xml`: ordered XML document tree with comments and byte offsets

pub mod tree;
pub mod xml;
