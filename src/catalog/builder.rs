use std::collections::HashMap;

use crate::core::types::{ExtractionResult, FileReference};

/// Identity of a catalog entry: context and singular string.
///
/// A missing context and an empty one are the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CatalogKey(String);

impl CatalogKey {
    pub fn new(context: Option<&str>, msgid: &str) -> Self {
        Self(format!("{}:{}", context.unwrap_or_default(), msgid))
    }

    pub fn of(result: &ExtractionResult) -> Self {
        Self::new(result.context.as_deref(), result.msgid())
    }
}

/// One deduplicated message with every place it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// First result seen for the key; supplies strings, context, language
    /// and the format flag.
    pub representative: ExtractionResult,
    /// One reference per result merged into the entry, in insertion order.
    pub references: Vec<FileReference>,
    /// Distinct comments across all merged results, first appearance first.
    pub comments: Vec<String>,
}

impl CatalogEntry {
    fn from_result(result: ExtractionResult) -> Self {
        let mut entry = Self {
            references: vec![result.reference()],
            comments: Vec::new(),
            representative: result,
        };
        let comments = entry.representative.comments.clone();
        entry.merge_comments(comments);
        entry
    }

    fn merge(&mut self, result: ExtractionResult) {
        self.references.push(result.reference());
        self.merge_comments(result.comments);
    }

    fn merge_comments(&mut self, comments: Vec<String>) {
        for comment in comments {
            if !self.comments.contains(&comment) {
                self.comments.push(comment);
            }
        }
    }
}

/// Insertion-ordered, deduplicated collection of extraction results.
///
/// The first result added for a key is kept as the entry's representative;
/// later results only contribute references and comments.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<CatalogKey, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, result: ExtractionResult) {
        let key = CatalogKey::of(&result);
        match self.index.get(&key) {
            Some(&position) => self.entries[position].merge(result),
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push(CatalogEntry::from_result(result));
            }
        }
    }

    pub fn get(&self, context: Option<&str>, msgid: &str) -> Option<&CatalogEntry> {
        self.index
            .get(&CatalogKey::new(context, msgid))
            .map(|&position| &self.entries[position])
    }

    /// Entries in first-insertion order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Extend<ExtractionResult> for Catalog {
    fn extend<I: IntoIterator<Item = ExtractionResult>>(&mut self, results: I) {
        for result in results {
            self.add(result);
        }
    }
}
