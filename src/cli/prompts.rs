// src/cli/prompts.rs
use inquire::validator::Validation;
use inquire::{Confirm, CustomUserError, InquireError, Text};
use thiserror::Error;

pub use crate::models::MAX_PASSWORD_LENGTH;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid number. Please enter a valid integer")]
    InvalidNumber,

    #[error("Value too small. Minimum is {min}")]
    TooSmall { min: usize },

    #[error("Value too large. Maximum is {max}")]
    TooLarge { max: usize },

    #[error("Invalid input. Please enter 'y' or 'n'")]
    InvalidYesNo,
}

/// Parse a length answer. Empty input selects `default`, which must satisfy
/// the same bounds as a typed answer.
pub fn parse_length(input: &str, default: usize, min: usize) -> Result<usize, InputError> {
    let input = input.trim();
    if input.is_empty() {
        return check_length(default, min);
    }

    let value: i64 = input.parse().map_err(|_| InputError::InvalidNumber)?;
    if value < min as i64 {
        return Err(InputError::TooSmall { min });
    }

    let value = value as u64;
    if value > MAX_PASSWORD_LENGTH as u64 {
        return Err(InputError::TooLarge { max: MAX_PASSWORD_LENGTH });
    }
    Ok(value as usize)
}

/// Check a length supplied on the command line against the same bounds.
pub fn check_length(length: usize, min: usize) -> Result<usize, InputError> {
    if length < min {
        Err(InputError::TooSmall { min })
    } else if length > MAX_PASSWORD_LENGTH {
        Err(InputError::TooLarge { max: MAX_PASSWORD_LENGTH })
    } else {
        Ok(length)
    }
}

/// Parse a yes/no answer. Empty input selects `default`.
pub fn parse_yes_no(input: &str, default: bool) -> Result<bool, InputError> {
    match input.trim().to_lowercase().as_str() {
        "" => Ok(default),
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err(InputError::InvalidYesNo),
    }
}

/// Pull a prompt's `(default, min)` inside `1..=MAX_PASSWORD_LENGTH`, with the
/// default no lower than the minimum.
pub fn length_prompt_bounds(default: usize, min: usize) -> (usize, usize) {
    let min = min.clamp(1, MAX_PASSWORD_LENGTH);
    (default.clamp(min, MAX_PASSWORD_LENGTH), min)
}

// Ask for the password length until a valid answer is given
pub fn prompt_length(default: usize, min: usize) -> Result<usize, InquireError> {
    let (default, min) = length_prompt_bounds(default, min);
    let message = format!("Password length (default: {}):", default);
    let placeholder = default.to_string();

    let validator = move |input: &str| -> Result<Validation, CustomUserError> {
        match parse_length(input, default, min) {
            Ok(_) => Ok(Validation::Valid),
            Err(e) => Ok(Validation::Invalid(e.to_string().into())),
        }
    };

    let answer = Text::new(&message)
        .with_placeholder(&placeholder)
        .with_help_message(&format!("Minimum {}", min))
        .with_validator(validator)
        .prompt()?;

    parse_length(&answer, default, min).map_err(|e| InquireError::Custom(Box::new(e)))
}

// Ask a yes/no question until a valid answer is given
pub fn prompt_yes_no(message: &str, default: bool) -> Result<bool, InquireError> {
    let parser = move |answer: &str| -> Result<bool, ()> {
        parse_yes_no(answer, default).map_err(|_| ())
    };

    Confirm::new(message)
        .with_default(default)
        .with_parser(&parser)
        .with_error_message(&InputError::InvalidYesNo.to_string())
        .prompt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_length_accepts_valid_values() {
        assert_eq!(parse_length("16", 12, 8), Ok(16));
        assert_eq!(parse_length("  8 ", 12, 8), Ok(8));
        assert_eq!(parse_length("4096", 12, 8), Ok(4096));
    }

    #[test]
    fn test_parse_length_empty_is_default() {
        assert_eq!(parse_length("", 12, 8), Ok(12));
        assert_eq!(parse_length("   ", 20, 8), Ok(20));
    }

    #[test]
    fn test_parse_length_rejects_garbage() {
        assert_eq!(parse_length("twelve", 12, 8), Err(InputError::InvalidNumber));
        assert_eq!(parse_length("12.5", 12, 8), Err(InputError::InvalidNumber));
        assert_eq!(parse_length("99999999999999999999999", 12, 8), Err(InputError::InvalidNumber));
    }

    #[test]
    fn test_parse_length_bounds() {
        assert_eq!(parse_length("7", 12, 8), Err(InputError::TooSmall { min: 8 }));
        assert_eq!(parse_length("-3", 12, 8), Err(InputError::TooSmall { min: 8 }));
        assert_eq!(parse_length("4097", 12, 8), Err(InputError::TooLarge { max: 4096 }));
        assert_eq!(
            InputError::TooSmall { min: 8 }.to_string(),
            "Value too small. Minimum is 8"
        );
    }

    #[test]
    fn test_parse_length_empty_default_is_bounded() {
        assert_eq!(parse_length("", 5000, 8), Err(InputError::TooLarge { max: 4096 }));
        assert_eq!(parse_length("", usize::MAX, 8), Err(InputError::TooLarge { max: 4096 }));
        assert_eq!(parse_length("", 4, 8), Err(InputError::TooSmall { min: 8 }));
        assert_eq!(parse_length("", 4096, 8), Ok(4096));
    }

    #[test]
    fn test_length_prompt_bounds() {
        assert_eq!(length_prompt_bounds(12, 8), (12, 8));
        assert_eq!(length_prompt_bounds(5000, 8), (4096, 8));
        assert_eq!(length_prompt_bounds(4, 8), (8, 8));
        assert_eq!(length_prompt_bounds(0, 0), (1, 1));

        // An oversized default still answers an empty input with a valid length
        let (default, min) = length_prompt_bounds(5000, 8);
        assert_eq!(parse_length("", default, min), Ok(4096));
    }

    #[test]
    fn test_check_length() {
        assert_eq!(check_length(8, 8), Ok(8));
        assert_eq!(check_length(3, 8), Err(InputError::TooSmall { min: 8 }));
        assert!(check_length(MAX_PASSWORD_LENGTH + 1, 8).is_err());
    }

    #[test]
    fn test_parse_yes_no() {
        assert_eq!(parse_yes_no("y", false), Ok(true));
        assert_eq!(parse_yes_no("YES", false), Ok(true));
        assert_eq!(parse_yes_no("n", true), Ok(false));
        assert_eq!(parse_yes_no(" No ", true), Ok(false));
        assert_eq!(parse_yes_no("", true), Ok(true));
        assert_eq!(parse_yes_no("", false), Ok(false));
        assert_eq!(parse_yes_no("maybe", true), Err(InputError::InvalidYesNo));
        assert_eq!(parse_yes_no("yy", true), Err(InputError::InvalidYesNo));
    }
}
