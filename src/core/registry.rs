//! Chooses the extractor for a file from its name.
//!
//! Build-template suffixes are removed first (`app.desktop.in` is handled as
//! `app.desktop`), then the name is matched against a suffix table, longest
//! suffix first so `.gschema.xml` wins over `.xml`.

use std::borrow::Cow;

use super::extract::{
    CExtractor, DesktopExtractor, Dialect, JavaScriptExtractor, MarkupExtractor, SourceExtractor,
};

const TEMPLATE_SUFFIX: &str = ".in";

/// Remove every `.in` segment that ends the name or is followed by another
/// extension.
pub fn normalize_file_name(file_name: &str) -> Cow<'_, str> {
    if !file_name.contains(TEMPLATE_SUFFIX) {
        return Cow::Borrowed(file_name);
    }

    let mut normalized = String::with_capacity(file_name.len());
    let mut rest = file_name;
    while let Some(position) = rest.find(TEMPLATE_SUFFIX) {
        let end = position + TEMPLATE_SUFFIX.len();
        let after = &rest[end..];
        if after.is_empty() || after.starts_with('.') {
            normalized.push_str(&rest[..position]);
        } else {
            normalized.push_str(&rest[..end]);
        }
        rest = after;
    }
    normalized.push_str(rest);

    Cow::Owned(normalized)
}

/// Suffix → extractor table.
#[derive(Debug, Clone)]
pub struct ExtractorRegistry {
    entries: Vec<(&'static str, SourceExtractor)>,
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        let markup = |dialect| SourceExtractor::from(MarkupExtractor::new(dialect));

        Self::new(vec![
            (".gschema.xml", markup(Dialect::Schema)),
            (".metainfo.xml", markup(Dialect::Metainfo)),
            (".appdata.xml", markup(Dialect::Metainfo)),
            (".xml", markup(Dialect::Xml)),
            (".ui", markup(Dialect::Ui)),
            (".desktop", DesktopExtractor.into()),
            (".c", CExtractor.into()),
            (".h", CExtractor.into()),
            (".js", JavaScriptExtractor.into()),
            (".mjs", JavaScriptExtractor.into()),
            (".cjs", JavaScriptExtractor.into()),
        ])
    }
}

impl ExtractorRegistry {
    pub fn new(mut entries: Vec<(&'static str, SourceExtractor)>) -> Self {
        // Stable sort keeps registration order among equal lengths.
        entries.sort_by_key(|(suffix, _)| std::cmp::Reverse(suffix.len()));
        Self { entries }
    }

    /// Extractor for `file_name`, or `None` if the format is not supported.
    pub fn resolve(&self, file_name: &str) -> Option<SourceExtractor> {
        let normalized = normalize_file_name(file_name);
        self.entries
            .iter()
            .find(|(suffix, _)| normalized.ends_with(suffix))
            .map(|(_, extractor)| *extractor)
    }
}
