//! Test fixtures for integration testing
//!
//! Provides TestEnvironment that sets up everything a test needs:
//! - Mock image endpoint (wiremock)
//! - Temporary storage directory
//! - Plugin wired to both

#![allow(dead_code)]

use nachoneko::{FetcherConfig, ImageFetcher, NekoConfig, NekoPlugin};
use std::path::PathBuf;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path the mock endpoint is served under
pub const ENDPOINT_PATH: &str = "/api/xb/api/gcmm.php";

/// Complete test environment
///
/// # Example
/// ```ignore
/// let env = TestEnvironment::new().await;
/// mount_image(&env.server, image_response("image/png", 50)).await;
///
/// let image = env.fetcher().fetch().await?;
/// assert!(image.path().starts_with(&env.storage_dir));
/// ```
pub struct TestEnvironment {
    /// Mock image endpoint
    pub server: MockServer,

    /// Storage directory; not created up front
    pub storage_dir: PathBuf,

    /// Keeps the temporary directory alive
    _tmp: TempDir,
}

impl TestEnvironment {
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let tmp = tempfile::tempdir().unwrap();
        let storage_dir = tmp.path().join("downloaded_images");

        Self {
            server,
            storage_dir,
            _tmp: tmp,
        }
    }

    pub fn fetcher_config(&self) -> FetcherConfig {
        FetcherConfig {
            accept_invalid_certs: false,
            ..FetcherConfig::with_endpoint(&format!("{}{}", self.server.uri(), ENDPOINT_PATH)).unwrap()
        }
    }

    pub fn config(&self) -> NekoConfig {
        NekoConfig {
            storage_dir: self.storage_dir.clone(),
            fetcher: self.fetcher_config(),
            ..NekoConfig::default()
        }
    }

    pub fn fetcher(&self) -> ImageFetcher {
        ImageFetcher::new(self.storage_dir.clone(), &self.fetcher_config()).unwrap()
    }

    pub fn plugin(&self) -> NekoPlugin {
        NekoPlugin::new(&self.config()).unwrap()
    }

    /// File names currently in the storage directory, sorted
    pub fn stored_files(&self) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(&self.storage_dir) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

/// 200 response with the given content type and a body of `len` bytes
pub fn image_response(content_type: &str, len: usize) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(vec![0x5a_u8; len], content_type)
}

/// Serve `response` for `GET <ENDPOINT_PATH>?type=1`
pub async fn mount_image(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(ENDPOINT_PATH))
        .and(query_param("type", "1"))
        .respond_with(response)
        .mount(server)
        .await;
}
