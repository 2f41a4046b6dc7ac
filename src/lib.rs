//! tree-gettext - gettext template extraction built on tree-sitter
//!
//! Extracts translatable strings from C and JavaScript sources, GtkBuilder
//! UI files, GSettings schemas, AppStream metainfo, generic XML and desktop
//! entries, and writes them as a deduplicated POT template.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine (patterns, parsers, comments, extractors)
//! - `catalog`: Deduplication and POT rendering
//! - `issues`: Files skipped during a run and how they are reported

pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
