//! Extraction engine.
//!
//! - `patterns`: translation functions and their argument positions
//! - `parsers`: syntax-tree and XML document providers
//! - `comments`: translator comments and directives preceding a call
//! - `extract`: per-format extractors
//! - `registry`: file name → extractor dispatch
//! - `pipeline`: file list → catalog
//! - `types`: the extraction data model

pub mod comments;
pub mod extract;
pub mod parsers;
pub mod patterns;
pub mod pipeline;
pub mod registry;
pub mod types;

pub use extract::{ExtractOptions, Extractor, SourceExtractor};
pub use pipeline::{CatalogRun, build_catalog, extract_file, parse_file_list};
pub use registry::{ExtractorRegistry, normalize_file_name};
pub use types::{ExtractionResult, FileReference, Language};
