use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::CACHE_CONTROL;
use url::Url;

use super::loader::resource_name;
use crate::error::LoadError;

/// Raw response for one document: status plus body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched {
    pub status: StatusCode,
    pub body: String,
}

impl Fetched {
    #[must_use]
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn status(status: StatusCode) -> Self {
        Self {
            status,
            body: String::new(),
        }
    }
}

/// Where the static documents are served from.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch the document at `path`, relative to the source root.
    ///
    /// Non-success statuses are returned as `Fetched`, not as errors.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` when no response could be obtained at all.
    async fn fetch(&self, path: &'static str) -> Result<Fetched, LoadError>;
}

/// Documents served over HTTP below a base URL, always bypassing caches.
#[derive(Clone)]
pub struct HttpDataSource {
    client: reqwest::Client,
    base: Url,
}

impl HttpDataSource {
    #[must_use]
    pub fn new(mut base: Url) -> Self {
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Self {
            client: reqwest::Client::new(),
            base,
        }
    }

    #[must_use]
    pub fn base(&self) -> &Url {
        &self.base
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    async fn fetch(&self, path: &'static str) -> Result<Fetched, LoadError> {
        let resource = resource_name(path);
        let url = self
            .base
            .join(path)
            .map_err(|source| LoadError::Url { resource, source })?;
        let response = self
            .client
            .get(url)
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(|source| LoadError::Http { resource, source })?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| LoadError::Http { resource, source })?;
        Ok(Fetched { status, body })
    }
}

/// Documents read from a local directory; a missing file reads as 404.
#[derive(Debug, Clone)]
pub struct DirDataSource {
    root: PathBuf,
}

impl DirDataSource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl DataSource for DirDataSource {
    async fn fetch(&self, path: &'static str) -> Result<Fetched, LoadError> {
        match tokio::fs::read_to_string(self.root.join(path)).await {
            Ok(body) => Ok(Fetched::ok(body)),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Ok(Fetched::status(StatusCode::NOT_FOUND))
            }
            Err(source) => Err(LoadError::Io {
                resource: resource_name(path),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_base_gets_trailing_slash() {
        let source = HttpDataSource::new(Url::parse("https://example.test/training").unwrap());
        assert_eq!(source.base().as_str(), "https://example.test/training/");
        let joined = source.base().join("assets/data/catalog.json").unwrap();
        assert_eq!(
            joined.as_str(),
            "https://example.test/training/assets/data/catalog.json"
        );
    }

    #[tokio::test]
    async fn dir_source_maps_missing_file_to_404() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirDataSource::new(dir.path());
        let fetched = source.fetch("assets/data/catalog.json").await.unwrap();
        assert_eq!(fetched.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn dir_source_reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("assets/data")).unwrap();
        std::fs::write(dir.path().join("assets/data/quizzes.json"), "{}").unwrap();
        let source = DirDataSource::new(dir.path());
        let fetched = source.fetch("assets/data/quizzes.json").await.unwrap();
        assert_eq!(fetched, Fetched::ok("{}"));
    }
}
