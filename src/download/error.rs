use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

/// Tagged failure of a single image fetch.
///
/// The fetcher logs every variant before handing it back, so callers only need
/// to branch on the tag to pick a user-facing message.
#[derive(Error, Debug)]
pub enum FetchError {
    /// DNS, connect, TLS, timeout or body read failure
    #[error("network request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The endpoint answered with a non-2xx status
    #[error("endpoint answered {status} for {url}")]
    HttpStatus { status: StatusCode, url: Url },

    /// The response does not declare an image body
    #[error("invalid content type '{content_type}' | URL: {url}")]
    InvalidContentType { content_type: String, url: Url },

    /// Creating the storage directory or writing the file failed
    #[error("file operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// Anything that does not fit the categories above
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl FetchError {
    /// Short tag used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Transport(_) => "transport",
            FetchError::HttpStatus { .. } => "http_status",
            FetchError::InvalidContentType { .. } => "invalid_content_type",
            FetchError::Io(_) => "io",
            FetchError::Unexpected(_) => "unexpected",
        }
    }

    /// True when nothing reached the local disk because of the remote side
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            FetchError::Transport(_) | FetchError::HttpStatus { .. } | FetchError::InvalidContentType { .. }
        )
    }
}
