use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::core::error::AppResult;

/// Random image endpoint queried by the `neko` command
pub const DEFAULT_ENDPOINT: &str = "https://xiaobapi.top/api/xb/api/gcmm.php";

/// Network configuration
pub mod network {
    use super::Duration;

    /// Request timeout for the image fetch (in seconds)
    pub const REQUEST_TIMEOUT_SECS: u64 = 15;

    /// Query parameter selecting the image category on the endpoint
    pub const IMAGE_TYPE_PARAM: (&str, &str) = ("type", "1");

    /// The origin serves a broken certificate chain, so validation is off
    /// unless the operator asks for it.
    pub const ACCEPT_INVALID_CERTS: bool = true;

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}

/// Storage configuration
pub mod storage {
    /// Directory holding fetched images, relative to the working directory
    pub const DEFAULT_SAVE_FOLDER: &str = "downloaded_images";

    /// Extensions treated as images when listing or cleaning the storage directory
    pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

    /// Prefix of every fetched image filename
    pub const FILE_PREFIX: &str = "image_";

    /// chrono format for the timestamp embedded in filenames (microsecond precision)
    pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S%6f";
}

/// Logging configuration
pub mod logging {
    /// Directory holding daily log files
    pub const DEFAULT_LOG_FOLDER: &str = "logs";

    /// Prefix of the daily log file, followed by `YYYYMMDD.log`
    pub const LOG_FILE_PREFIX: &str = "downloader_";
}

/// Settings baked into an [`crate::download::ImageFetcher`] at construction.
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Endpoint queried for a random image
    pub endpoint: Url,
    /// Fixed query parameters appended to every request
    pub query: Vec<(String, String)>,
    /// Total request timeout
    pub timeout: Duration,
    /// Skip TLS certificate validation
    pub accept_invalid_certs: bool,
}

impl FetcherConfig {
    /// Same defaults, different endpoint.
    pub fn with_endpoint(endpoint: &str) -> AppResult<Self> {
        Ok(Self {
            endpoint: Url::parse(endpoint)?,
            ..Self::default()
        })
    }
}

impl Default for FetcherConfig {
    // DEFAULT_ENDPOINT is a compile-time literal
    #[allow(clippy::expect_used)]
    fn default() -> Self {
        let (key, value) = network::IMAGE_TYPE_PARAM;
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("DEFAULT_ENDPOINT is a valid URL"),
            query: vec![(key.to_string(), value.to_string())],
            timeout: network::timeout(),
            accept_invalid_certs: network::ACCEPT_INVALID_CERTS,
        }
    }
}

/// Everything the plugin needs to run.
#[derive(Debug, Clone)]
pub struct NekoConfig {
    pub storage_dir: PathBuf,
    pub log_dir: PathBuf,
    pub fetcher: FetcherConfig,
}

impl Default for NekoConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(storage::DEFAULT_SAVE_FOLDER),
            log_dir: PathBuf::from(logging::DEFAULT_LOG_FOLDER),
            fetcher: FetcherConfig::default(),
        }
    }
}
