// src/source/mod.rs
use crate::utils::error::SourceError;
use reqwest::header;
use std::path::{Path, PathBuf};

const USER_AGENT: &str = concat!("markdown-indexer/", env!("CARGO_PKG_VERSION"));
const MARKDOWN_EXTENSION: &str = "md";
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Where a markdown document comes from: a local `.md` file or a remote URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkdownSource {
    File(PathBuf),
    Remote(String),
}

impl MarkdownSource {
    /// `http://` and `https://` locations are fetched; anything else is a file path.
    pub fn parse(location: &str) -> Self {
        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Remote(location.to_string())
        } else {
            Self::File(PathBuf::from(location))
        }
    }

    /// A filesystem-safe stem used to name output files.
    pub fn name(&self) -> String {
        let raw = match self {
            Self::File(path) => path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default(),
            Self::Remote(url) => url
                .trim_end_matches('/')
                .rsplit('/')
                .next()
                .map(|last| last.trim_end_matches(".md").to_string())
                .unwrap_or_default(),
        };

        let cleaned: String = raw
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        if cleaned.is_empty() {
            "document".to_string()
        } else {
            cleaned
        }
    }

    pub async fn load(&self) -> Result<String, SourceError> {
        match self {
            Self::File(path) => read_markdown_file(path).await,
            Self::Remote(url) => fetch_markdown(url).await,
        }
    }
}

impl std::fmt::Display for MarkdownSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Remote(url) => f.write_str(url),
        }
    }
}

/// Reads a local markdown file. Only `.md` files are accepted.
pub async fn read_markdown_file(path: &Path) -> Result<String, SourceError> {
    let is_markdown = path
        .extension()
        .map(|ext| ext == MARKDOWN_EXTENSION)
        .unwrap_or(false);
    if !is_markdown {
        tracing::warn!("Rejecting non-markdown file: {}", path.display());
        return Err(SourceError::UnsupportedFileType(path.display().to_string()));
    }

    tracing::info!("Reading markdown file: {}", path.display());
    let bytes = tokio::fs::read(path).await?;
    let content = String::from_utf8(bytes)
        .map_err(|e| SourceError::InvalidContent(format!("{}: {}", path.display(), e)))?;
    // Drop a UTF-8 byte-order mark so line 1 matches like any other line
    let content = match content.strip_prefix(BYTE_ORDER_MARK) {
        Some(rest) => rest.to_string(),
        None => content,
    };

    tracing::debug!("Read {} bytes from {}", content.len(), path.display());
    Ok(content)
}

fn build_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
}

/// Downloads markdown content from a URL.
pub async fn fetch_markdown(url: &str) -> Result<String, SourceError> {
    let client = build_client()?;

    tracing::info!("Downloading markdown from: {}", url);
    let response = client
        .get(url)
        .header(header::ACCEPT, "text/markdown,text/plain,*/*")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        tracing::error!("HTTP error status: {} for URL: {}", status, url);
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound(url.to_string()));
        }
        return Err(SourceError::Http(status));
    }

    let body = response.text().await?;
    tracing::debug!("Successfully downloaded {} bytes from {}", body.len(), url);
    Ok(body)
}
