//! Source comments attached to extracted messages.
//!
//! - `collector`: finds the comments preceding a call expression
//! - `directive`: `xgettext:` / `tree-gettext:` flag comments

pub mod collector;
pub mod directive;

pub use collector::{comment_text, preceding_comments};
pub use directive::{DIRECTIVE_PREFIXES, Directive, suppresses_format};
