// src/crypto.rs
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{
    CharacterClass, GeneratedPassword, Password, PasswordGenerationOptions, StrengthReport,
};

// Generate a password from the given options using the caller's RNG
pub fn generate_password<R: Rng + ?Sized>(
    options: &PasswordGenerationOptions,
    rng: &mut R,
) -> GeneratedPassword {
    let mut classes = options.enabled_classes();
    let used_fallback = classes.is_empty();

    if used_fallback {
        log::info!("No character classes selected, using all character types");
        classes = CharacterClass::ALL.to_vec();
    }

    let all_chars: Vec<char> = classes
        .iter()
        .flat_map(|class| class.alphabet().chars())
        .collect();

    // One character from each selected class goes in first
    let mut password: Vec<char> = Vec::with_capacity(options.length.max(classes.len()));
    for class in &classes {
        let alphabet: Vec<char> = class.alphabet().chars().collect();
        if let Some(&c) = alphabet.choose(rng) {
            password.push(c);
        }
    }

    // When length is shorter than the class count the result stays at the class count
    let remaining = options.length.saturating_sub(password.len());
    for _ in 0..remaining {
        if let Some(&c) = all_chars.choose(rng) {
            password.push(c);
        }
    }

    password.shuffle(rng);

    log::debug!(
        "Generated password of {} chars from {} classes (requested {})",
        password.len(),
        classes.len(),
        options.length
    );

    GeneratedPassword {
        password: password.into_iter().collect::<Password>(),
        classes,
        used_fallback,
    }
}

// Analyze password strength
pub fn analyze_password_strength(password: &str) -> StrengthReport {
    let length = password.chars().count();

    let mut present = [false; 4];
    for c in password.chars() {
        if let Some(class) = CharacterClass::of(c) {
            present[class as usize] = true;
        }
    }
    let diversity = present.iter().filter(|p| **p).count();

    let raw = length
        .saturating_mul(3)
        .saturating_add(diversity * 15)
        .min(100);

    StrengthReport::new(raw as u8, diversity as u8)
}
