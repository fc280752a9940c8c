use clap::Parser;
use inquire::InquireError;
use std::path::Path;

mod cli;
mod clipboard;
mod core;
mod crypto;
mod generators;
mod logging;
mod models;
mod utils;

use crate::cli::menu::{self, SessionError};
use crate::cli::Args;
use crate::clipboard::SystemClipboard;
use crate::core::config::Config;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let (config, config_warnings) = Config::load();

    logging::init(&config)?;
    for warning in &config_warnings {
        log::warn!("{}", warning);
    }
    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

    let mut clipboard = SystemClipboard::new();
    let result = if args.batch {
        menu::run_batch(&config, &args, &mut clipboard)
    } else {
        menu::run_interactive(&config, &args, &mut clipboard)
    };

    match result {
        Ok(()) => Ok(()),
        Err(e) if e.is_cancelled() => {
            log::info!("Session cancelled by user");
            eprintln!("\n{}", utils::warning("Cancelled. No password generated."));
            Ok(())
        }
        Err(SessionError::Prompt(InquireError::NotTTY)) => {
            log::error!("Interactive mode needs a terminal");
            Err(anyhow::anyhow!(
                "interactive mode needs a terminal; use --batch to generate without prompts"
            ))
        }
        Err(e) => {
            log::error!("{}", e);
            Err(e.into())
        }
    }
}
