//! Vigenère encryption and decryption over the lowercase alphabet.

use crate::alphabet::{add_char, subtract_char};
use crate::{Error, Result};

/// Encrypts text with the Vigenère cipher, cycling through the key.
///
/// # Arguments
///
/// * `text` - The plaintext, lowercase alphabet only.
/// * `key` - The key string, lowercase alphabet only, non-empty.
///
/// # Returns
///
/// A `String` containing the ciphertext.
pub fn encrypt(text: &str, key: &str) -> Result<String> {
    apply(text, key, add_char)
}

/// Decrypts text with the Vigenère cipher, cycling through the key.
///
/// # Arguments
///
/// * `text` - The ciphertext, lowercase alphabet only.
/// * `key` - The key string, lowercase alphabet only, non-empty.
///
/// # Returns
///
/// A `String` containing the plaintext.
pub fn decrypt(text: &str, key: &str) -> Result<String> {
    apply(text, key, subtract_char)
}

fn apply(
    text: &str,
    key: &str,
    combine: fn(char, char) -> Result<char>,
) -> Result<String> {
    if key.is_empty() {
        return Err(Error::EmptyInput);
    }

    let key_chars: Vec<char> = key.chars().collect();
    let mut result = String::with_capacity(text.len());

    for (i, c) in text.chars().enumerate() {
        result.push(combine(c, key_chars[i % key_chars.len()])?);
    }

    Ok(result)
}
