//! Where the data document comes from.
//!
//! `DocumentSource` is the single suspension point of the application: one
//! fetch, no retries, no timeout. HTTP locations go through reqwest; anything
//! else is read from the local filesystem.

use crate::error::FetchError;
use async_trait::async_trait;
use std::fmt;
use std::path::PathBuf;
use tracing::debug;

/// Raw response to a document fetch, before any status interpretation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchedDocument {
    pub status: u16,
    pub body: String,
}

impl FetchedDocument {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Human-readable location used in logs and error messages.
    fn location(&self) -> String;

    /// Retrieve the document once. A non-success status is returned as a
    /// `FetchedDocument`, not an error; the loader decides what it means.
    async fn fetch(&self) -> Result<FetchedDocument, FetchError>;
}

/// Parsed `--data` / `LEARNING_HUB_DATA` value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataLocation {
    Url(String),
    Path(PathBuf),
}

impl DataLocation {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            DataLocation::Url(trimmed.to_string())
        } else {
            DataLocation::Path(PathBuf::from(trimmed))
        }
    }

    /// Build the matching source for this location.
    pub fn into_source(self) -> Box<dyn DocumentSource> {
        match self {
            DataLocation::Url(url) => Box::new(HttpSource::new(url)),
            DataLocation::Path(path) => Box::new(FileSource::new(path)),
        }
    }
}

impl fmt::Display for DataLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataLocation::Url(url) => f.write_str(url),
            DataLocation::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// GET a document over HTTP(S).
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl DocumentSource for HttpSource {
    fn location(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<FetchedDocument, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|err| FetchError::transport(&self.url, err))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| FetchError::transport(&self.url, err))?;
        debug!(url = %self.url, status, bytes = body.len(), "fetched catalog document");
        Ok(FetchedDocument { status, body })
    }
}

/// Read a document from disk. A readable file always reports status 200.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DocumentSource for FileSource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    /// Bytes are decoded lossily, like an HTTP body; a bad byte surfaces as a
    /// parse failure rather than a fetch failure.
    async fn fetch(&self) -> Result<FetchedDocument, FetchError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|err| FetchError::transport(self.location(), err))?;
        let body = String::from_utf8_lossy(&bytes).into_owned();
        debug!(path = %self.path.display(), bytes = body.len(), "read catalog document");
        Ok(FetchedDocument::ok(body))
    }
}
