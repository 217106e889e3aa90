//! Short code generation.
//!
//! Codes are 5 characters drawn uniformly, with replacement, from the
//! 52-letter alphabet `a-z` + `A-Z`.

use rand::Rng;

/// Characters a short code may contain.
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of characters in a generated short code.
pub const CODE_LENGTH: usize = 5;

/// Generates a random short code.
///
/// Uses the thread-local generator from [`rand::rng`], which is seeded once
/// from the operating system and never reseeded per call.
///
/// # Examples
///
/// ```
/// use shrinkit::utils::code_generator::{generate_code, is_short_code};
///
/// let code = generate_code();
/// assert_eq!(code.len(), 5);
/// assert!(is_short_code(&code));
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Returns true if `code` has the shape of a generated short code.
pub fn is_short_code(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| b.is_ascii_alphabetic())
}
