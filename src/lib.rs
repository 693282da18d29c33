//! Nachoneko - chat-bot plugin that fetches a random image, delivers it and
//! deletes the local copy.
//!
//! # Module Structure
//!
//! - `core`: configuration, errors, logging
//! - `download`: the image fetcher and the storage directory bookkeeping
//! - `chat`: the `neko` command flow and the host's delivery seam
//! - `cli`: command-line front-end

pub mod chat;
pub mod cli;
pub mod core;
pub mod download;

// Re-export commonly used types for convenience
pub use chat::{ChatSink, NekoOutcome, NekoPlugin};
pub use crate::core::{AppError, AppResult, FetcherConfig, NekoConfig};
pub use download::{CleanupReport, FetchError, FetchedImage, ImageExtension, ImageFetcher, ImageStore};
