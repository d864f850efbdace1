//! Short key generation and format validation.
//!
//! Keys are drawn from a 62-symbol base62 alphabet (digits, uppercase,
//! lowercase). The default generated length of 7 gives a space of
//! 62^7 ≈ 3.5e12 keys, so random generation collides only negligibly often.

use crate::error::AppError;
use rand::Rng;

/// The base62 alphabet used for all short keys.
pub const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Length of generated short keys.
pub const DEFAULT_KEY_LENGTH: usize = 7;

/// Maximum accepted length for caller-supplied custom keys.
pub const MAX_KEY_LENGTH: usize = 8;

/// Generates a random base62 key of the given length.
pub fn generate_key(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Validates the shape of a caller-supplied short key.
///
/// # Rules
///
/// - Length: 1 to [`MAX_KEY_LENGTH`] characters
/// - Allowed characters: the base62 [`ALPHABET`]
///
/// Availability of the key is a separate concern, checked against the key
/// pool and persistent storage by the caller.
///
/// # Errors
///
/// Returns [`AppError::InvalidKey`] with a human-readable reason.
pub fn validate_key_format(key: &str) -> Result<(), AppError> {
    if key.is_empty() || key.len() > MAX_KEY_LENGTH {
        return Err(AppError::invalid_key(format!(
            "length must be between 1 and {} characters, got {}",
            MAX_KEY_LENGTH,
            key.len()
        )));
    }

    if !key.bytes().all(|b| ALPHABET.contains(&b)) {
        return Err(AppError::invalid_key(
            "only digits and ASCII letters are allowed",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_key_has_requested_length() {
        assert_eq!(generate_key(7).len(), 7);
        assert_eq!(generate_key(1).len(), 1);
        assert_eq!(generate_key(8).len(), 8);
    }

    #[test]
    fn test_generate_key_uses_alphabet_only() {
        let key = generate_key(64);
        assert!(key.bytes().all(|b| ALPHABET.contains(&b)));
    }

    #[test]
    fn test_generate_key_produces_unique_keys() {
        let mut keys = HashSet::new();

        for _ in 0..1000 {
            keys.insert(generate_key(DEFAULT_KEY_LENGTH));
        }

        assert_eq!(keys.len(), 1000);
    }

    #[test]
    fn test_validate_empty_key() {
        let result = validate_key_format("");
        assert!(result.is_err());

        let err = result.unwrap_err();
        assert!(err.to_string().contains("length"));
    }

    #[test]
    fn test_validate_too_long() {
        let result = validate_key_format(&"a".repeat(9));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_max_length_ok() {
        assert!(validate_key_format(&"a".repeat(8)).is_ok());
    }

    #[test]
    fn test_validate_single_char_ok() {
        assert!(validate_key_format("x").is_ok());
    }

    #[test]
    fn test_validate_bad_characters() {
        let result = validate_key_format("a!b");
        assert!(result.is_err());

        let err = result.unwrap_err();
        assert!(err.to_string().contains("ASCII letters"));
    }

    #[test]
    fn test_validate_unicode_rejected() {
        assert!(validate_key_format("abcé").is_err());
    }

    #[test]
    fn test_validate_mixed_case_ok() {
        assert!(validate_key_format("aB3xY9z").is_ok());
    }
}
