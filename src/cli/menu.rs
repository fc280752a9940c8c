// src/cli/menu.rs
use console::style;
use inquire::InquireError;
use thiserror::Error;

use crate::cli::prompts::{check_length, prompt_length, prompt_yes_no, InputError};
use crate::cli::Args;
use crate::clipboard::{copy_to_clipboard, Clipboard, ClipboardError};
use crate::core::config::Config;
use crate::generators::PasswordGenerator;
use crate::models::{GeneratedPassword, PasswordGenerationOptions, StrengthReport};
use crate::utils;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Prompt failed: {0}")]
    Prompt(#[from] InquireError),

    #[error("{0}")]
    Input(#[from] InputError),
}

impl SessionError {
    /// Esc or Ctrl+C at a prompt. Not treated as a failure.
    pub fn is_cancelled(&self) -> bool {
        matches!(
            self,
            SessionError::Prompt(InquireError::OperationCanceled)
                | SessionError::Prompt(InquireError::OperationInterrupted)
        )
    }
}

// Interactive session: collect options, build, score, report, offer to copy
pub fn run_interactive<C: Clipboard>(
    config: &Config,
    args: &Args,
    clipboard: &mut C,
) -> Result<(), SessionError> {
    if !args.no_banner {
        println!("{}", utils::banner());
    }

    println!("{}", style("Password Generator Configuration").bold());
    println!("{}", utils::rule());

    let defaults = args.initial_options(config);
    let options = PasswordGenerationOptions {
        length: prompt_length(defaults.length, config.min_password_length)?,
        include_uppercase: prompt_yes_no("Include uppercase letters", defaults.include_uppercase)?,
        include_lowercase: prompt_yes_no("Include lowercase letters", defaults.include_lowercase)?,
        include_digits: prompt_yes_no("Include digits", defaults.include_digits)?,
        include_symbols: prompt_yes_no("Include symbols", defaults.include_symbols)?,
    };
    log::debug!("Interactive options: {:?}", options);

    let mut generator = PasswordGenerator::new();
    let (generated, report) = generate_and_score(&mut generator, &options);

    for line in report_lines(&generated, &report) {
        println!("{}", line);
    }

    if prompt_yes_no("Copy to clipboard", false)? {
        println!();
        println!("{}", clipboard_outcome(clipboard, &generated));
    }

    println!();
    println!("{}", utils::success("Secure password generated!"));
    Ok(())
}

// Non-interactive run driven entirely by flags and config
pub fn run_batch<C: Clipboard>(
    config: &Config,
    args: &Args,
    clipboard: &mut C,
) -> Result<(), SessionError> {
    let mut options = args.initial_options(config);
    options.length = check_length(options.length, config.min_password_length)?;
    log::debug!("Batch options: {:?}", options);

    let mut generator = PasswordGenerator::new();
    let (generated, report) = generate_and_score(&mut generator, &options);

    if args.quiet {
        println!("{}", generated.password);
    } else {
        for line in report_lines(&generated, &report) {
            println!("{}", line);
        }
    }

    if args.copy {
        // Keep stdout clean for piping in quiet mode
        eprintln!("{}", clipboard_outcome(clipboard, &generated));
    }
    Ok(())
}

fn generate_and_score<R: rand::RngCore>(
    generator: &mut PasswordGenerator<R>,
    options: &PasswordGenerationOptions,
) -> (GeneratedPassword, StrengthReport) {
    let generated = generator.generate_password(options);
    let report = generator.analyze_password_strength(generated.password.as_str());
    log::info!(
        "Generated password: {} chars from {:?}, diversity {}, score {} ({})",
        generated.password.char_len(),
        generated.classes,
        report.diversity,
        report.score,
        report.label
    );
    (generated, report)
}

fn report_lines(generated: &GeneratedPassword, report: &StrengthReport) -> Vec<String> {
    let mut lines = Vec::new();
    if generated.used_fallback {
        lines.push(utils::warning("Warning: Using all character types"));
    }
    lines.extend(utils::format_report(&generated.password, report));
    lines
}

fn clipboard_outcome<C: Clipboard + ?Sized>(
    clipboard: &mut C,
    generated: &GeneratedPassword,
) -> String {
    match copy_to_clipboard(clipboard, generated.password.as_str()) {
        Ok(()) => utils::success("✓ Password copied to clipboard!"),
        Err(ClipboardError::Unsupported) => utils::warning(
            "Clipboard support not available. Rebuild with '--features clipboard' to enable it",
        ),
        Err(e) => utils::warning(&format!("Could not copy to clipboard: {}", e)),
    }
}
