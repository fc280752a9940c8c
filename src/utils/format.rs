// src/utils/format.rs
use console::{style, StyledObject};

use crate::models::{Password, StrengthLabel, StrengthReport};

pub const RULE_WIDTH: usize = 40;

const BANNER: &str = r"
 ================================================================================
                                ║║║║║║║║║║║║║║║║
                               ║╚╚╚╚╚╚╚╚╚╚╚╚╚╚╚╚║
                               ║╚ PASSWORD GEN ╚║
                               ║╚╚╚╚╚╚╚╚╚╚╚╚╚╚╚╚║
                                ║║║║║║║║║║║║║║║║
================================================================================
";

pub fn banner() -> String {
    style(BANNER).magenta().bright().to_string()
}

// Horizontal rule used around the configuration and result sections
pub fn rule() -> String {
    style("=".repeat(RULE_WIDTH)).cyan().bright().to_string()
}

fn label_style<D>(label: StrengthLabel, value: D) -> StyledObject<D> {
    let styled = style(value).bright();
    match label {
        StrengthLabel::Weak => styled.red(),
        StrengthLabel::Medium => styled.yellow(),
        StrengthLabel::Strong => styled.green(),
    }
}

/// `■■■■■□□□ Label (NN%)`, with the filled part and label colored by strength.
pub fn format_strength(report: &StrengthReport) -> String {
    let (filled, empty) = report.bar_segments();
    format!(
        "{}{} {}",
        label_style(report.label, filled),
        empty,
        label_style(report.label, format!("{} ({}%)", report.label, report.score)),
    )
}

/// Result block printed after generation.
pub fn format_report(password: &Password, report: &StrengthReport) -> Vec<String> {
    vec![
        String::new(),
        rule(),
        format!(
            "{} {}",
            style("Generated Password:").bold(),
            style(password.as_str()).green().bright()
        ),
        format!("{} {}", style("Password Strength:").bold(), format_strength(report)),
        rule(),
    ]
}

pub fn warning(message: &str) -> String {
    style(message).yellow().bright().to_string()
}

pub fn success(message: &str) -> String {
    style(message).green().bright().to_string()
}
