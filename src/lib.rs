//! Shared library for the learning hub page.
//!
//! The crate loads one catalog document, renders it into cards grouped by
//! section, derives the filter bar from the broad categories the cards'
//! tags classify into, and toggles card and section visibility when a filter
//! is selected. Rendering targets an in-memory `DisplaySurface`; `html` turns
//! a surface into a static page, which is what the `learning-hub` binary
//! writes.

pub mod app;
pub mod catalog;
pub mod category;
pub mod classify;
pub mod config;
pub mod error;
pub mod filter;
pub mod hover;
pub mod html;
pub mod render;
pub mod view;

pub use app::{FALLBACK_MESSAGE, LearningHub, UiEvent};
pub use catalog::{
    Catalog, CatalogLoader, DataLocation, DocumentSource, FetchedDocument, FileSource, HttpSource,
    Resource, Section, parse_catalog,
};
pub use category::{Category, FilterSelection, SHOW_ALL_LABEL};
pub use classify::{classify, normalize_tag};
pub use config::HubConfig;
pub use error::{FetchError, LoadError, ParseError};
pub use filter::{FilterController, apply_filter, build_filters};
pub use hover::{BoundingBox, HoverDecorator, PointerEvent, PointerTarget};
pub use render::{icon_for_type, render};
pub use view::{
    Card, CardId, DisplaySurface, FilterButton, GlowPosition, RenderedCatalog, RootContent,
    SectionView,
};
