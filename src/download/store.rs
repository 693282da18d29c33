//! ImageStore: the storage directory is the index of what we still hold.

use std::io;
use std::path::{Path, PathBuf};

use crate::core::config::storage;
use crate::core::error::AppResult;

/// Outcome of a bulk cleanup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanupReport {
    pub removed: usize,
    pub failed: usize,
}

impl CleanupReport {
    pub fn total(&self) -> usize {
        self.removed + self.failed
    }
}

/// Lists and removes images in one storage directory.
#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Entries whose extension is on the image allow-list.
    ///
    /// A missing directory is simply empty. Order follows the directory
    /// listing and is not stable.
    pub async fn list_images(&self) -> Vec<PathBuf> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                log::error!("Failed to list images in {}: {}", self.dir.display(), e);
                return Vec::new();
            }
        };

        let mut images = Vec::new();
        loop {
            match entries.next_entry().await {
                Ok(Some(entry)) => {
                    let path = entry.path();
                    if is_image_path(&path) {
                        images.push(path);
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    log::error!("Failed to read entry in {}: {}", self.dir.display(), e);
                    break;
                }
            }
        }
        images
    }

    /// Delete a single image.
    pub async fn remove(&self, path: &Path) -> AppResult<()> {
        fs_err::tokio::remove_file(path).await?;
        log::info!("🗑️ Removed image: {}", path.display());
        Ok(())
    }

    /// Delete every listed image, one at a time.
    ///
    /// A failing entry is counted and skipped; it never stops the rest.
    pub async fn cleanup(&self) -> CleanupReport {
        let mut report = CleanupReport::default();

        for path in self.list_images().await {
            // list_images yields dir.join(name), so this only trips on foreign paths
            if !is_owned_entry(&self.dir, &path) {
                log::warn!("Skipping malformed image path: {:?}", path);
                report.failed += 1;
                continue;
            }

            match fs_err::tokio::remove_file(&path).await {
                Ok(()) => {
                    log::info!("Cleaned up image: {}", path.display());
                    report.removed += 1;
                }
                Err(e) => {
                    log::error!("Failed to clean up image: {}", e);
                    report.failed += 1;
                }
            }
        }

        report
    }
}

/// Case-insensitive match against the image extension allow-list.
pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .is_some_and(|ext| storage::IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// A named entry sitting directly inside `dir`.
fn is_owned_entry(dir: &Path, path: &Path) -> bool {
    path.file_name().is_some() && path.parent() == Some(dir)
}
