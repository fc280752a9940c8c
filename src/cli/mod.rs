// src/cli/mod.rs
use clap::Parser;

pub mod menu;
pub mod prompts;

use crate::core::config::Config;
use crate::models::PasswordGenerationOptions;

#[derive(Parser, Debug, Default)]
#[command(
    author,
    version,
    about = "Generate a random password and rate its strength",
    long_about = None
)]
pub struct Args {
    /// Password length (the prompt default in interactive mode)
    #[arg(long, short)]
    pub length: Option<usize>,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lowercase: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_digits: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Generate without prompting, using flags and environment defaults
    #[arg(long, short)]
    pub batch: bool,

    /// Copy the password to the clipboard (batch mode)
    #[arg(long, short, requires = "batch")]
    pub copy: bool,

    /// Print only the password (batch mode)
    #[arg(long, short, requires = "batch")]
    pub quiet: bool,

    /// Skip the banner
    #[arg(long)]
    pub no_banner: bool,
}

impl Args {
    /// Options described by the flags alone, before any prompting.
    pub fn initial_options(&self, config: &Config) -> PasswordGenerationOptions {
        PasswordGenerationOptions {
            length: self.length.unwrap_or(config.default_password_length),
            include_uppercase: !self.no_uppercase,
            include_lowercase: !self.no_lowercase,
            include_digits: !self.no_digits,
            include_symbols: !self.no_symbols,
        }
    }
}
