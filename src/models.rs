// src/models.rs
use std::fmt;

/// Width of the strength indicator bar, in units.
pub const STRENGTH_BAR_WIDTH: usize = 20;

/// Upper bound on password length, to keep a typo from exhausting memory.
pub const MAX_PASSWORD_LENGTH: usize = 4096;

/// A category of characters a password can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// All classes, in the order passwords are seeded from them.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "abcdefghijklmnopqrstuvwxyz",
            CharacterClass::Uppercase => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            CharacterClass::Digit => "0123456789",
            CharacterClass::Symbol => "!@#$%^&*()_+-=[]{}|;:,.<>?",
        }
    }

    /// The class whose alphabet contains `c`, if any.
    pub fn of(c: char) -> Option<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .find(|class| class.alphabet().contains(c))
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterClass::Lowercase => write!(f, "lowercase"),
            CharacterClass::Uppercase => write!(f, "uppercase"),
            CharacterClass::Digit => write!(f, "digit"),
            CharacterClass::Symbol => write!(f, "symbol"),
        }
    }
}

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: 12,
            include_uppercase: true,
            include_lowercase: true,
            include_digits: true,
            include_symbols: true,
        }
    }
}

impl PasswordGenerationOptions {
    pub fn includes(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lowercase => self.include_lowercase,
            CharacterClass::Uppercase => self.include_uppercase,
            CharacterClass::Digit => self.include_digits,
            CharacterClass::Symbol => self.include_symbols,
        }
    }

    /// Enabled classes in canonical order. Empty when nothing was selected.
    pub fn enabled_classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| self.includes(*class))
            .collect()
    }
}

/// A generated password. Never logged.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters, not bytes.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl From<String> for Password {
    fn from(value: String) -> Self {
        Password(value)
    }
}

impl FromIterator<char> for Password {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Password(iter.into_iter().collect())
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Keep secrets out of debug output and log lines
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars>)", self.char_len())
    }
}

/// Output of the builder: the password plus how it was built.
#[derive(Debug, Clone)]
pub struct GeneratedPassword {
    pub password: Password,
    pub classes: Vec<CharacterClass>,
    /// Set when no class was selected and all four were used instead.
    pub used_fallback: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLabel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=39 => StrengthLabel::Weak,
            40..=69 => StrengthLabel::Medium,
            _ => StrengthLabel::Strong,
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthLabel::Weak => write!(f, "Weak"),
            StrengthLabel::Medium => write!(f, "Medium"),
            StrengthLabel::Strong => write!(f, "Strong"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthReport {
    pub score: u8,
    pub diversity: u8,
    pub label: StrengthLabel,
}

impl StrengthReport {
    pub fn new(score: u8, diversity: u8) -> Self {
        let score = score.min(100);
        Self {
            score,
            diversity,
            label: StrengthLabel::from_score(score),
        }
    }

    pub fn filled_units(&self) -> usize {
        STRENGTH_BAR_WIDTH * self.score as usize / 100
    }

    /// Filled and empty parts of the bar, e.g. (`■■■■`, `□□□□…`).
    pub fn bar_segments(&self) -> (String, String) {
        let filled = self.filled_units();
        ("■".repeat(filled), "□".repeat(STRENGTH_BAR_WIDTH - filled))
    }
}
