//! Deserializable representation of the learning hub data document.
//!
//! The document wraps the section list as
//! `{"learningHubData": {"sections": [...]}}`. The types below mirror it so
//! the renderer never touches ad-hoc JSON. Everything is immutable once
//! loaded.

use crate::catalog::schema::validate_document;
use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// One learning resource as listed in the document.
pub struct Resource {
    pub name: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// A titled group of resources; resource order is display order.
pub struct Section {
    pub title: String,
    pub description: String,
    pub resources: Vec<Resource>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Ordered list of sections, the root of a loaded document.
pub struct Catalog {
    pub sections: Vec<Section>,
}

#[derive(Debug, Deserialize)]
struct HubDocument {
    #[serde(rename = "learningHubData")]
    data: Catalog,
}

impl Catalog {
    /// Total number of resources across all sections.
    pub fn resource_count(&self) -> usize {
        self.resources().count()
    }

    /// Iterate every resource in display order.
    pub fn resources(&self) -> impl Iterator<Item = &Resource> {
        self.sections
            .iter()
            .flat_map(|section| section.resources.iter())
    }
}

/// Parse a document body: JSON syntax first, then shape, then typed decode.
pub fn parse_catalog(body: &str) -> Result<Catalog, ParseError> {
    let value: Value = serde_json::from_str(body)?;
    validate_document(&value)?;
    let document: HubDocument = serde_json::from_value(value)?;
    Ok(document.data)
}
