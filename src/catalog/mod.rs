//! Catalog loading.
//!
//! This module turns the single data document into an in-memory `Catalog`:
//! a `DocumentSource` retrieves the body, `schema` checks its shape, and
//! `model` decodes it. `CatalogLoader` ties the three together and maps
//! failures onto `FetchError` / `ParseError`.

pub mod loader;
pub mod model;
pub mod schema;
pub mod source;

pub use loader::CatalogLoader;
pub use model::{Catalog, Resource, Section, parse_catalog};
pub use source::{DataLocation, DocumentSource, FetchedDocument, FileSource, HttpSource};
