//! Chat sink that records everything the plugin sends

#![allow(dead_code)]

use async_trait::async_trait;
use nachoneko::{AppError, ChatSink};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// One message delivered to the chat
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    Text(String),
    /// Image attachment, with the file size seen at delivery time
    Image { path: PathBuf, bytes: Option<u64> },
}

/// Records deliveries; can be told to misbehave in a few ways.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<ChatEvent>>,
    reject_images: bool,
    delete_on_send: bool,
    rejected_text: Option<String>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose image uploads always fail
    pub fn rejecting_images() -> Self {
        Self {
            reject_images: true,
            ..Self::default()
        }
    }

    /// A sink that consumes the file while uploading it
    pub fn deleting_on_send() -> Self {
        Self {
            delete_on_send: true,
            ..Self::default()
        }
    }

    /// A sink that fails to deliver one particular text
    pub fn rejecting_text(text: &str) -> Self {
        Self {
            rejected_text: Some(text.to_string()),
            ..Self::default()
        }
    }

    pub fn events(&self) -> Vec<ChatEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ChatEvent::Text(text) => Some(text),
                ChatEvent::Image { .. } => None,
            })
            .collect()
    }

    pub fn images(&self) -> Vec<PathBuf> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ChatEvent::Image { path, .. } => Some(path),
                ChatEvent::Text(_) => None,
            })
            .collect()
    }
}

#[async_trait]
impl ChatSink for RecordingSink {
    async fn send_text(&self, text: &str) -> Result<(), AppError> {
        if self.rejected_text.as_deref() == Some(text) {
            return Err(AppError::Chat("message rejected".to_string()));
        }
        self.events.lock().unwrap().push(ChatEvent::Text(text.to_string()));
        Ok(())
    }

    async fn send_image(&self, path: &Path) -> Result<(), AppError> {
        if self.reject_images {
            return Err(AppError::Chat("upload rejected".to_string()));
        }
        let bytes = std::fs::metadata(path).ok().map(|m| m.len());
        self.events.lock().unwrap().push(ChatEvent::Image {
            path: path.to_path_buf(),
            bytes,
        });
        if self.delete_on_send {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}
