use thiserror::Error;

/// Centralized error types for the plugin
///
/// Everything outside the fetcher's tagged result is converted to this enum
/// for consistent handling and logging.
///
/// # Example
///
/// ```no_run
/// use nachoneko::core::error::AppError;
///
/// fn handle_error(err: AppError) {
///     eprintln!("Error: {}", err);
/// }
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// HTTP client errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// URL parsing errors
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Chat delivery errors reported by the host's sink
    #[error("Chat error: {0}")]
    Chat(String),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: AppError = io.into();
        assert!(matches!(err, AppError::Io(_)));
        assert_eq!(err.to_string(), "IO error: gone");
    }

    #[test]
    fn test_chat_error_display() {
        let err = AppError::Chat("upload rejected".to_string());
        assert_eq!(err.to_string(), "Chat error: upload rejected");
    }
}
