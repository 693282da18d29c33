use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::config::{self, FetcherConfig, NekoConfig};
use crate::core::error::AppResult;

#[derive(Parser)]
#[command(name = "nachoneko")]
#[command(author, version, about = "Fetch a random Nachoneko image, deliver it and clean up", long_about = None)]
pub struct Cli {
    /// Directory holding fetched images
    #[arg(long, global = true, default_value = config::storage::DEFAULT_SAVE_FOLDER)]
    pub storage_dir: PathBuf,

    /// Directory holding daily log files
    #[arg(long, global = true, default_value = config::logging::DEFAULT_LOG_FOLDER)]
    pub log_dir: PathBuf,

    /// Random image endpoint
    #[arg(long, global = true, default_value = config::DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Validate the endpoint's TLS certificate
    #[arg(long, global = true)]
    pub verify_tls: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the neko command once against the console, then clean up
    Neko,

    /// Fetch one image and keep it
    Fetch,

    /// List stored images
    List,

    /// Delete every stored image
    Cleanup,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Map flags onto the plugin configuration.
    pub fn to_config(&self) -> AppResult<NekoConfig> {
        let mut fetcher = FetcherConfig::with_endpoint(&self.endpoint)?;
        if self.verify_tls {
            fetcher.accept_invalid_certs = false;
        }

        Ok(NekoConfig {
            storage_dir: self.storage_dir.clone(),
            log_dir: self.log_dir.clone(),
            fetcher,
        })
    }
}
