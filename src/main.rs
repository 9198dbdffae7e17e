//! git-guide - An interactive terminal guide to Git and GitHub
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use gitguide_app::config::{default_config_path, load_settings};
use gitguide_app::storage::FileBackend;
use gitguide_app::{Environment, PreferenceStore};
use tracing::{info, warn};

/// git-guide - An interactive terminal guide to Git and GitHub
#[derive(Parser, Debug)]
#[command(name = "gitguide")]
#[command(about = "An interactive terminal guide to Git and GitHub", long_about = None)]
struct Args {
    /// Path to the config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Path to the preference store (JSON)
    #[arg(long, value_name = "FILE")]
    storage: Option<PathBuf>,

    /// Keep preferences in memory only; nothing is saved
    #[arg(long, conflicts_with = "storage")]
    ephemeral: bool,

    /// Behave as if the system asked for reduced motion
    #[arg(long)]
    reduced_motion: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    gitguide_core::logging::init()?;

    let config_path = args.config.unwrap_or_else(default_config_path);
    let settings = load_settings(&config_path);

    let mut environment = Environment::detect();
    environment.reduced_motion |= args.reduced_motion;

    let store = if args.ephemeral {
        PreferenceStore::in_memory()
    } else {
        let path = args.storage.unwrap_or_else(FileBackend::default_path);
        match FileBackend::open(&path) {
            Ok(backend) => PreferenceStore::open(Box::new(backend)),
            Err(e) => {
                warn!("Preferences will not be saved: {}", e);
                PreferenceStore::unavailable()
            }
        }
    };

    info!("git-guide starting (storage: {:?})", store.location());
    gitguide_tui::run(settings, store, environment).await?;
    Ok(())
}
