//! The `neko` command and the shutdown hook.

use std::path::{Path, PathBuf};

use super::ChatSink;
use crate::core::config::NekoConfig;
use crate::core::error::AppResult;
use crate::download::{CleanupReport, ImageFetcher, ImageStore};

/// User-facing replies
pub mod messages {
    pub const ACK: &str = "Meow meow meow~";
    pub const FETCH_FAILED: &str = "Failed to get an image, please try again later.";
    pub const FILE_MISSING: &str = "The image file went missing, please try again later.";
    pub const SEND_FAILED_PREFIX: &str = "Failed to send the image: ";
    pub const CLEANUP_FAILED: &str = "The image was sent, but cleanup failed.";
}

/// How one `neko` invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NekoOutcome {
    /// Image delivered and removed from disk
    Delivered(PathBuf),
    /// Nothing was downloaded
    FetchFailed,
    /// Downloaded, but gone before it could be handed over
    FileMissing(PathBuf),
    /// The sink refused the image; the file is left for shutdown cleanup
    DeliveryFailed(PathBuf),
    /// Delivered, but the local copy could not be removed
    CleanupFailed(PathBuf),
}

impl NekoOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, NekoOutcome::Delivered(_) | NekoOutcome::CleanupFailed(_))
    }
}

/// Owns the fetcher and the store for one plugin instance.
pub struct NekoPlugin {
    fetcher: ImageFetcher,
    store: ImageStore,
}

impl NekoPlugin {
    pub fn new(config: &NekoConfig) -> AppResult<Self> {
        Ok(Self {
            fetcher: ImageFetcher::new(config.storage_dir.clone(), &config.fetcher)?,
            store: ImageStore::new(config.storage_dir.clone()),
        })
    }

    pub fn fetcher(&self) -> &ImageFetcher {
        &self.fetcher
    }

    pub fn store(&self) -> &ImageStore {
        &self.store
    }

    /// Acknowledge, fetch, deliver, delete.
    ///
    /// Every failure ends up as a text reply; nothing escapes to the host.
    pub async fn handle_neko(&self, sink: &dyn ChatSink) -> NekoOutcome {
        reply(sink, messages::ACK).await;

        let outcome = self.send_neko_image(sink).await;
        log::info!("neko command finished: {:?}", outcome);
        outcome
    }

    async fn send_neko_image(&self, sink: &dyn ChatSink) -> NekoOutcome {
        let image = match self.fetcher.fetch().await {
            Ok(image) => image,
            Err(_) => {
                // Already logged by the fetcher
                reply(sink, messages::FETCH_FAILED).await;
                return NekoOutcome::FetchFailed;
            }
        };

        self.deliver(sink, image.into_path()).await
    }

    /// Hand a stored image to the sink, then delete it.
    async fn deliver(&self, sink: &dyn ChatSink, path: PathBuf) -> NekoOutcome {
        // A concurrent cleanup may have removed it in the meantime.
        if !file_exists(&path).await {
            log::warn!("Fetched image vanished before delivery: {}", path.display());
            reply(sink, messages::FILE_MISSING).await;
            return NekoOutcome::FileMissing(path);
        }

        if let Err(e) = sink.send_image(&path).await {
            log::error!("Failed to send image {}: {}", path.display(), e);
            reply(sink, &format!("{}{}", messages::SEND_FAILED_PREFIX, e)).await;
            return NekoOutcome::DeliveryFailed(path);
        }
        log::info!("Image sent: {}", path.display());

        if let Err(e) = self.store.remove(&path).await {
            log::error!("Failed to delete sent image {}: {}", path.display(), e);
            reply(sink, messages::CLEANUP_FAILED).await;
            return NekoOutcome::CleanupFailed(path);
        }

        NekoOutcome::Delivered(path)
    }

    /// Shutdown hook: remove whatever is still in the storage directory.
    pub async fn terminate(&self) -> CleanupReport {
        let report = self.store.cleanup().await;
        log::info!(
            "Plugin shutdown cleanup: {} removed, {} failed",
            report.removed,
            report.failed
        );
        report
    }
}

async fn reply(sink: &dyn ChatSink, text: &str) {
    if let Err(e) = sink.send_text(text).await {
        log::error!("Failed to send reply {:?}: {}", text, e);
    }
}

async fn file_exists(path: &Path) -> bool {
    tokio::fs::try_exists(path).await.unwrap_or(false)
}
