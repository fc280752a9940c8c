// src/generators/password.rs
use rand::rngs::OsRng;
use rand::RngCore;

use crate::models::{GeneratedPassword, PasswordGenerationOptions, StrengthReport};

/// Builds and scores passwords. Backed by the operating system CSPRNG unless
/// another source is supplied with [`PasswordGenerator::with_rng`].
pub struct PasswordGenerator<R: RngCore = OsRng> {
    rng: R,
}

impl PasswordGenerator<OsRng> {
    pub fn new() -> Self {
        Self::with_rng(OsRng)
    }
}

impl Default for PasswordGenerator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> PasswordGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        PasswordGenerator { rng }
    }

    pub fn generate_password(&mut self, options: &PasswordGenerationOptions) -> GeneratedPassword {
        crate::crypto::generate_password(options, &mut self.rng)
    }

    pub fn analyze_password_strength(&self, password: &str) -> StrengthReport {
        crate::crypto::analyze_password_strength(password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StrengthLabel;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_same_seed_same_password() {
        let options = PasswordGenerationOptions::default();
        let mut a = PasswordGenerator::with_rng(StdRng::seed_from_u64(1234));
        let mut b = PasswordGenerator::with_rng(StdRng::seed_from_u64(1234));

        assert_eq!(
            a.generate_password(&options).password,
            b.generate_password(&options).password
        );
    }

    #[test]
    fn test_default_generator_round() {
        let mut generator = PasswordGenerator::new();
        let generated = generator.generate_password(&PasswordGenerationOptions::default());
        let report = generator.analyze_password_strength(generated.password.as_str());

        // 12 chars with all four classes always scores 96
        assert_eq!(report.score, 96);
        assert_eq!(report.label, StrengthLabel::Strong);
    }
}
