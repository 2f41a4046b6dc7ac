//! Extractors turning one source file into extraction results.
//!
//! Every file format implements [`Extractor`] on its own; there is no shared
//! base type. The call-based languages reuse the scanning routine in
//! [`calls`] by describing themselves through [`calls::CallLanguage`].
//!
//! - `c`: C sources (`gettext`, `ngettext`, GLib `C_`, ...)
//! - `javascript`: JavaScript sources, including member calls and tagged templates
//! - `markup`: GtkBuilder UI, GSettings schema, AppStream metainfo and generic XML
//! - `desktop`: freedesktop `.desktop` entries

pub mod c;
pub mod calls;
pub mod desktop;
pub mod javascript;
pub mod markup;

use anyhow::Result;
use enum_dispatch::enum_dispatch;

pub use c::CExtractor;
pub use desktop::DesktopExtractor;
pub use javascript::JavaScriptExtractor;
pub use markup::{Dialect, MarkupExtractor};

use crate::core::types::ExtractionResult;

/// Options shared by all extractors for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Strip `*` continuation markers from block comments.
    pub format_comments: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            format_comments: true,
        }
    }
}

/// Capability of turning a file's contents into extraction results.
///
/// An `Err` means the file as a whole could not be processed; the caller
/// reports it and moves on to the next file.
#[enum_dispatch]
pub trait Extractor {
    /// Short human-readable name of the format.
    fn name(&self) -> &'static str;

    fn extract(
        &self,
        source: &str,
        file_name: &str,
        options: &ExtractOptions,
    ) -> Result<Vec<ExtractionResult>>;
}

/// Every extractor known to the registry.
#[enum_dispatch(Extractor)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceExtractor {
    C(CExtractor),
    JavaScript(JavaScriptExtractor),
    Markup(MarkupExtractor),
    Desktop(DesktopExtractor),
}
