use anyhow::Result;

use nachoneko::chat::{ConsoleSink, NekoPlugin};
use nachoneko::cli::{Cli, Commands};
use nachoneko::core::init_logger;

/// Entry point
///
/// Parses CLI arguments and dispatches to the subcommand. `neko` is the default.
///
/// # Errors
/// Returns an error if initialization fails (logging, configuration, HTTP client).
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();
    let config = cli.to_config()?;

    // Initialize logger (console + daily file)
    let log_file = init_logger(&config.log_dir)?;
    log::info!("Logging to {}", log_file.display());

    let plugin = NekoPlugin::new(&config)?;

    match cli.command.unwrap_or(Commands::Neko) {
        Commands::Neko => {
            let outcome = plugin.handle_neko(&ConsoleSink).await;
            plugin.terminate().await;
            if !outcome.is_delivered() {
                return Err(anyhow::anyhow!("neko command failed: {:?}", outcome));
            }
        }
        Commands::Fetch => {
            let image = plugin.fetcher().fetch().await?;
            println!("{}", image.path().display());
        }
        Commands::List => {
            for path in plugin.store().list_images().await {
                println!("{}", path.display());
            }
        }
        Commands::Cleanup => {
            let report = plugin.terminate().await;
            println!("removed: {}, failed: {}", report.removed, report.failed);
        }
    }

    Ok(())
}
