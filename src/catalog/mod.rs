//! Catalog assembly and POT rendering.
//!
//! - `builder`: deduplicates extraction results by context and msgid
//! - `pofile`: renders the catalog with header, references and wrapping

pub mod builder;
pub mod pofile;

pub use builder::{Catalog, CatalogEntry, CatalogKey};
pub use pofile::{PotHeader, creation_timestamp, render_catalog, render_entry, render_header};
