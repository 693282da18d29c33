//! Image download and local bookkeeping

pub mod error;
pub mod fetch;
pub mod image;
pub mod store;

// Re-exports for convenience
pub use error::FetchError;
pub use fetch::ImageFetcher;
pub use image::{FetchedImage, ImageExtension};
pub use store::{CleanupReport, ImageStore};
