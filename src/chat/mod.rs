//! Chat-facing side of the plugin.
//!
//! The host framework owns routing and delivery; it reaches us through
//! [`NekoPlugin`] and we answer through a [`ChatSink`].

pub mod console;
pub mod plugin;

use async_trait::async_trait;
use std::path::Path;

use crate::core::error::AppError;

pub use console::ConsoleSink;
pub use plugin::{NekoOutcome, NekoPlugin};

/// Delivery collaborator provided by the host for one chat context.
#[async_trait]
pub trait ChatSink: Send + Sync {
    /// Send a plain-text message.
    async fn send_text(&self, text: &str) -> Result<(), AppError>;

    /// Send the image stored at `path` as an attachment.
    async fn send_image(&self, path: &Path) -> Result<(), AppError>;
}
