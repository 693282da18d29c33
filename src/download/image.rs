//! Identity of a fetched image: where it lives, what it is, when it was made.

use chrono::{DateTime, Local};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::config::storage;

/// File extension assigned from the declared content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageExtension {
    Jpg,
    Png,
    Gif,
}

impl ImageExtension {
    /// Map a `Content-Type` header value to an extension.
    ///
    /// Parameters after `;` are ignored. Unknown or missing types fall back to `jpg`.
    pub fn from_content_type(content_type: Option<&str>) -> Self {
        let mime = content_type
            .unwrap_or_default()
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match mime.as_str() {
            "image/jpeg" => ImageExtension::Jpg,
            "image/png" => ImageExtension::Png,
            "image/gif" => ImageExtension::Gif,
            _ => ImageExtension::Jpg,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageExtension::Jpg => "jpg",
            ImageExtension::Png => "png",
            ImageExtension::Gif => "gif",
        }
    }
}

impl fmt::Display for ImageExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One downloaded image on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedImage {
    path: PathBuf,
    extension: ImageExtension,
    created_at: DateTime<Local>,
}

impl FetchedImage {
    pub fn new(path: PathBuf, extension: ImageExtension, created_at: DateTime<Local>) -> Self {
        Self {
            path,
            extension,
            created_at,
        }
    }

    /// `image_<YYYYMMDDHHMMSSffffff>.<ext>`
    pub fn file_name(created_at: DateTime<Local>, extension: ImageExtension) -> String {
        format!(
            "{}{}.{}",
            storage::FILE_PREFIX,
            created_at.format(storage::TIMESTAMP_FORMAT),
            extension
        )
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn extension(&self) -> ImageExtension {
        self.extension
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }
}
