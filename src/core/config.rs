// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

use crate::models::MAX_PASSWORD_LENGTH;

// Configuration for the password generator
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub min_password_length: usize,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: 12,
            min_password_length: 8,

            // Logging
            log_level: LevelFilter::Warn,
            log_file: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables. Problems found while
    /// loading are returned rather than logged, since the logger is only
    /// installed once the config is known.
    pub fn load() -> (Self, Vec<String>) {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source. Unparsable values
    /// keep their defaults and add a warning.
    pub fn load_from<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        // Password Generation
        if let Some(val) = lookup("PASSGEN_DEFAULT_LENGTH") {
            match val.trim().parse() {
                Ok(length) => config.default_password_length = length,
                Err(_) => {
                    warnings.push(format!("Ignoring invalid PASSGEN_DEFAULT_LENGTH '{}'", val))
                }
            }
        }

        if let Some(val) = lookup("PASSGEN_MIN_LENGTH") {
            match val.trim().parse() {
                Ok(min) => config.min_password_length = min,
                Err(_) => {
                    warnings.push(format!("Ignoring invalid PASSGEN_MIN_LENGTH '{}'", val))
                }
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => warnings.push(format!(
                    "Unknown log level '{}', using {}",
                    level, config.log_level
                )),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config.validate(&mut warnings);
        (config, warnings)
    }

    // Keep the length settings consistent with each other and within bounds
    pub fn validate(&mut self, warnings: &mut Vec<String>) {
        if self.min_password_length == 0 {
            self.min_password_length = 1;
        }
        if self.min_password_length > MAX_PASSWORD_LENGTH {
            warnings.push(format!(
                "Minimum length {} exceeds the maximum {}, lowering it",
                self.min_password_length, MAX_PASSWORD_LENGTH
            ));
            self.min_password_length = MAX_PASSWORD_LENGTH;
        }
        if self.default_password_length < self.min_password_length {
            warnings.push(format!(
                "Default length {} is below the minimum {}, raising it",
                self.default_password_length, self.min_password_length
            ));
            self.default_password_length = self.min_password_length;
        }
        if self.default_password_length > MAX_PASSWORD_LENGTH {
            warnings.push(format!(
                "Default length {} exceeds the maximum {}, lowering it",
                self.default_password_length, MAX_PASSWORD_LENGTH
            ));
            self.default_password_length = MAX_PASSWORD_LENGTH;
        }
    }
}
