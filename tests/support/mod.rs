#![allow(dead_code)]

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use learning_hub::{CatalogLoader, DocumentSource, FetchError, FetchedDocument};
use serde_json::{Value, json};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::NamedTempFile;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Source that replays a canned response.
pub struct StubSource {
    pub status: u16,
    pub body: String,
}

#[async_trait]
impl DocumentSource for StubSource {
    fn location(&self) -> String {
        "stub://data.json".to_string()
    }

    async fn fetch(&self) -> Result<FetchedDocument, FetchError> {
        Ok(FetchedDocument {
            status: self.status,
            body: self.body.clone(),
        })
    }
}

/// Source whose transport always fails.
pub struct UnreachableSource;

#[async_trait]
impl DocumentSource for UnreachableSource {
    fn location(&self) -> String {
        "stub://unreachable".to_string()
    }

    async fn fetch(&self) -> Result<FetchedDocument, FetchError> {
        Err(FetchError::transport(
            self.location(),
            std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused"),
        ))
    }
}

pub fn stub_loader(status: u16, body: impl Into<String>) -> CatalogLoader {
    CatalogLoader::new(Box::new(StubSource {
        status,
        body: body.into(),
    }))
}

pub fn resource(name: &str, kind: &str, tags: &[&str]) -> Value {
    json!({
        "name": name,
        "url": format!("https://example.org/{}", name.to_lowercase().replace(' ', "-")),
        "type": kind,
        "description": format!("{name} description"),
        "tags": tags,
    })
}

pub fn document(sections: Vec<Value>) -> Value {
    json!({ "learningHubData": { "sections": sections } })
}

pub fn section(title: &str, resources: Vec<Value>) -> Value {
    json!({
        "title": title,
        "description": format!("{title} description"),
        "resources": resources,
    })
}

/// One section, two resources tagged Beginner and Algorithms.
pub fn foundations_document() -> Value {
    document(vec![section(
        "Foundations",
        vec![
            resource("Intro", "Website", &["Beginner"]),
            resource("Sorting", "Article", &["Algorithms"]),
        ],
    )])
}

/// A broader catalog spread over several sections.
pub fn full_document() -> Value {
    document(vec![
        foundations_document()["learningHubData"]["sections"][0].clone(),
        section(
            "Web Development",
            vec![
                resource("MDN", "Docs", &["Web", "HTML", "Free", "Recommended"]),
                resource("Fullstack Open", "Online Course", &["Full-Stack", "free to audit"]),
            ],
        ),
        section(
            "Computer Science",
            vec![
                resource("SICP", "Book", &["Book", "Functional", "Theory"]),
                resource("Nand2Tetris", "YouTube Playlist", &["Hardware", "Projects"]),
                resource("Mystery", "Website", &["nonexistent-tag"]),
            ],
        ),
    ])
}

pub fn write_fixture(value: &Value) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new().context("failed to allocate fixture file")?;
    serde_json::to_writer(&mut file, value)?;
    Ok(file)
}

pub fn write_raw_fixture(bytes: &[u8]) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new().context("failed to allocate fixture file")?;
    file.write_all(bytes)?;
    file.flush()?;
    Ok(file)
}

/// Serve each canned `(status, body)` to one connection, in order, on a
/// loopback port. Returns the base URL.
pub async fn serve_responses(responses: Vec<(u16, String)>) -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .context("failed to bind loopback listener")?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        for (status, body) in responses {
            let Ok((mut stream, _)) = listener.accept().await else {
                return;
            };
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }
            let response = format!(
                "HTTP/1.1 {status} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    });
    Ok(format!("http://{addr}/data.json"))
}

pub fn hub_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_learning-hub"))
}

pub fn run_hub(args: &[&str]) -> Result<Output> {
    let mut cmd = Command::new(hub_binary());
    cmd.args(args)
        .env_remove("LEARNING_HUB_DATA")
        .env("LEARNING_HUB_LOG", "off");
    cmd.output()
        .with_context(|| format!("failed to run command: {:?}", cmd))
}

pub fn run_hub_ok(args: &[&str]) -> Result<Output> {
    let output = run_hub(args)?;
    if !output.status.success() {
        bail!(
            "learning-hub {:?} failed: status {:?}\nstderr: {}",
            args,
            output.status.code(),
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(output)
}
