use crate::domain::model::PasswordPolicy;
use crate::utils::error::{Result, ToolError};
use crate::utils::validation::validate_range;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.?/";

pub fn generate(policy: &PasswordPolicy) -> Result<String> {
    validate_range("length", policy.length, 4, 128)?;

    let mut classes: Vec<&str> = Vec::new();
    if policy.lowercase {
        classes.push(LOWERCASE);
    }
    if policy.uppercase {
        classes.push(UPPERCASE);
    }
    if policy.digits {
        classes.push(DIGITS);
    }
    if policy.symbols {
        classes.push(SYMBOLS);
    }

    if classes.is_empty() {
        return Err(ToolError::InvalidFieldValue {
            field: "character_classes".to_string(),
            value: "none".to_string(),
            reason: "At least one character class must be enabled".to_string(),
        });
    }

    let mut rng = StdRng::from_os_rng();
    let mut chars: Vec<char> = Vec::with_capacity(policy.length);

    // 每個啟用的類別保證至少出現一個字元
    for class in &classes {
        chars.push(pick(&mut rng, class));
    }

    let pool: String = classes.concat();
    while chars.len() < policy.length {
        chars.push(pick(&mut rng, &pool));
    }

    chars.shuffle(&mut rng);
    Ok(chars.into_iter().collect())
}

fn pick(rng: &mut StdRng, pool: &str) -> char {
    let bytes = pool.as_bytes();
    bytes[rng.random_range(0..bytes.len())] as char
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_is_respected() {
        for length in [4, 16, 128] {
            let policy = PasswordPolicy {
                length,
                ..PasswordPolicy::default()
            };
            assert_eq!(generate(&policy).unwrap().chars().count(), length);
        }
    }

    #[test]
    fn test_every_enabled_class_is_present() {
        let policy = PasswordPolicy {
            length: 8,
            ..PasswordPolicy::default()
        };
        for _ in 0..20 {
            let password = generate(&policy).unwrap();
            assert!(password.chars().any(|c| c.is_ascii_lowercase()), "{password}");
            assert!(password.chars().any(|c| c.is_ascii_uppercase()), "{password}");
            assert!(password.chars().any(|c| c.is_ascii_digit()), "{password}");
            assert!(password.chars().any(|c| SYMBOLS.contains(c)), "{password}");
        }
    }

    #[test]
    fn test_disabled_classes_never_appear() {
        let policy = PasswordPolicy {
            length: 32,
            lowercase: true,
            uppercase: false,
            digits: true,
            symbols: false,
        };
        let password = generate(&policy).unwrap();
        assert!(password
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_no_classes_is_rejected() {
        let policy = PasswordPolicy {
            length: 12,
            lowercase: false,
            uppercase: false,
            digits: false,
            symbols: false,
        };
        assert!(generate(&policy).is_err());
    }

    #[test]
    fn test_length_bounds() {
        let too_short = PasswordPolicy {
            length: 3,
            ..PasswordPolicy::default()
        };
        let too_long = PasswordPolicy {
            length: 129,
            ..PasswordPolicy::default()
        };
        assert!(generate(&too_short).is_err());
        assert!(generate(&too_long).is_err());
    }
}
