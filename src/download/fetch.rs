//! ImageFetcher: one GET against the random image endpoint, one file on disk.
//!
//! - Fixed endpoint and query, bounded timeout, no retry
//! - Rejects responses whose `Content-Type` does not mention `image`
//! - Names the file after the current time with microsecond precision
//! - Creates the storage directory lazily, only once there is something to write

use chrono::Local;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use std::path::{Path, PathBuf};
use url::Url;

use crate::core::config::FetcherConfig;
use crate::core::error::AppResult;
use crate::download::error::FetchError;
use crate::download::image::{FetchedImage, ImageExtension};

/// Downloads random images into a storage directory.
pub struct ImageFetcher {
    client: Client,
    request_url: Url,
    storage_dir: PathBuf,
}

impl ImageFetcher {
    /// Build the HTTP client once; every [`fetch`](Self::fetch) reuses it.
    pub fn new(storage_dir: impl Into<PathBuf>, config: &FetcherConfig) -> AppResult<Self> {
        if config.accept_invalid_certs {
            log::warn!(
                "TLS certificate validation is disabled for {}",
                config.endpoint.host_str().unwrap_or("<no host>")
            );
        }

        let client = Client::builder()
            .user_agent(concat!("nachoneko/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        let mut request_url = config.endpoint.clone();
        if !config.query.is_empty() {
            request_url.query_pairs_mut().extend_pairs(config.query.iter());
        }

        Ok(Self {
            client,
            request_url,
            storage_dir: storage_dir.into(),
        })
    }

    /// URL requested on every fetch, query included.
    pub fn request_url(&self) -> &Url {
        &self.request_url
    }

    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    /// Fetch one image and store it.
    ///
    /// Every outcome is logged here; the caller only inspects the tag.
    pub async fn fetch(&self) -> Result<FetchedImage, FetchError> {
        log::info!("📥 Fetching random image: {}", self.request_url);

        let result = self.download().await;
        match &result {
            Ok(image) => log::info!("✅ Image saved: {}", image.path().display()),
            Err(FetchError::Transport(e)) => log::error!("❌ Network request failed: {} ({:?})", e, e),
            Err(e) => log::error!("❌ Image fetch failed [{}]: {}", e.kind(), e),
        }
        result
    }

    async fn download(&self) -> Result<FetchedImage, FetchError> {
        let response = self
            .client
            .get(self.request_url.clone())
            .send()
            .await
            .map_err(classify_request_error)?;

        let url = response.url().clone();
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus { status, url });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        if !content_type.contains("image") {
            return Err(FetchError::InvalidContentType { content_type, url });
        }

        let extension = ImageExtension::from_content_type(Some(&content_type));
        let body = response.bytes().await.map_err(classify_request_error)?;

        fs_err::tokio::create_dir_all(&self.storage_dir).await?;

        let created_at = Local::now();
        let path = self.storage_dir.join(FetchedImage::file_name(created_at, extension));
        fs_err::tokio::write(&path, &body).await?;

        log::debug!("Wrote {} bytes ({}) to {}", body.len(), content_type, path.display());

        Ok(FetchedImage::new(path, extension, created_at))
    }
}

/// Builder errors mean the request never left the process.
fn classify_request_error(e: reqwest::Error) -> FetchError {
    if e.is_builder() {
        FetchError::Unexpected(e.to_string())
    } else {
        FetchError::Transport(e)
    }
}
