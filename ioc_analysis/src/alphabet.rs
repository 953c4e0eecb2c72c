//! Modular character arithmetic over the 26-letter lowercase alphabet.

use crate::{Error, Result};

/// Number of symbols in the supported alphabet (a-z).
pub const ALPHABET_LEN: u8 = 26;

/// Converts a letter to its alphabet rank (a=0, b=1, ..., z=25).
///
/// # Arguments
///
/// * `c` - The character to convert.
///
/// # Returns
///
/// The rank 0-25, or `Error::InvalidCharacter` for anything outside a-z.
pub fn rank(c: char) -> Result<u8> {
    if c.is_ascii_lowercase() {
        Ok(c as u8 - b'a')
    } else {
        Err(Error::InvalidCharacter(c))
    }
}

/// Converts an alphabet rank back to its letter.
fn char_at(rank: u8) -> char {
    (b'a' + rank % ALPHABET_LEN) as char
}

/// Adds two letters modulo the alphabet size: the Vigenère encryption step.
///
/// `add_char('a', k)` shifts forward by the rank of `k`.
pub fn add_char(c1: char, c2: char) -> Result<char> {
    let combined = (rank(c1)? + rank(c2)?) % ALPHABET_LEN;
    Ok(char_at(combined))
}

/// Subtracts the second letter from the first modulo the alphabet size: the
/// Vigenère decryption step, and the inverse of [`add_char`].
pub fn subtract_char(c1: char, c2: char) -> Result<char> {
    let combined = (rank(c1)? + ALPHABET_LEN - rank(c2)?) % ALPHABET_LEN;
    Ok(char_at(combined))
}
