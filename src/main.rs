//! Contact Book - Main entry point
//!
//! Opens the file-backed store and runs the terminal form on stdin/stdout.

use anyhow::{Context, Result};
use contact_book::{Config, ContactForm, ContactStore, FileStorage};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize logging (stderr only to keep stdout for the form)
    let fallback = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let storage = FileStorage::open(&config.data_dir).with_context(|| {
        format!("Failed to open data directory {}", config.data_dir.display())
    })?;
    info!("Using data directory {}", storage.dir().display());

    let mut store = ContactStore::load_with_key(storage, config.storage_key.as_str());

    println!("\n--- Contact Book ---");
    let stdin = io::stdin();
    ContactForm::new(&mut store, stdin.lock(), io::stdout()).run()?;

    info!("Contact Book shutdown complete");
    Ok(())
}
