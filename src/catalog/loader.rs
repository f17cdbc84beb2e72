use crate::catalog::model::{Catalog, parse_catalog};
use crate::catalog::source::DocumentSource;
use crate::error::{FetchError, LoadError};
use tracing::info;

/// Fetches and parses the catalog document from a single source.
pub struct CatalogLoader {
    source: Box<dyn DocumentSource>,
}

impl CatalogLoader {
    pub fn new(source: Box<dyn DocumentSource>) -> Self {
        Self { source }
    }

    pub fn location(&self) -> String {
        self.source.location()
    }

    /// Load the catalog. A single failure propagates; there is no retry.
    pub async fn load(&self) -> Result<Catalog, LoadError> {
        let location = self.source.location();
        let fetched = self.source.fetch().await?;
        if !fetched.is_success() {
            return Err(FetchError::Status {
                location,
                status: fetched.status,
            }
            .into());
        }
        let catalog = parse_catalog(&fetched.body)?;
        info!(
            %location,
            sections = catalog.sections.len(),
            resources = catalog.resource_count(),
            "loaded catalog"
        );
        Ok(catalog)
    }
}
