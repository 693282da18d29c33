use async_trait::async_trait;
use std::path::Path;

use super::ChatSink;
use crate::core::error::AppError;

/// Prints replies to stdout. Used by the CLI in place of a real chat.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

#[async_trait]
impl ChatSink for ConsoleSink {
    async fn send_text(&self, text: &str) -> Result<(), AppError> {
        println!("{}", text);
        Ok(())
    }

    async fn send_image(&self, path: &Path) -> Result<(), AppError> {
        if !tokio::fs::try_exists(path).await.unwrap_or(false) {
            return Err(AppError::Chat(format!("no such image: {}", path.display())));
        }
        println!("[image] {}", path.display());
        Ok(())
    }
}
