//! Common test utilities
//!
//! This module is shared across all integration tests

pub mod fixtures;
pub mod recorder;

#[allow(unused_imports)]
pub use fixtures::{ENDPOINT_PATH, TestEnvironment, image_response, mount_image};
#[allow(unused_imports)]
pub use recorder::{ChatEvent, RecordingSink};
