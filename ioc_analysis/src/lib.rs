//! Index of coincidence cryptanalysis for Vigenère-style ciphers.
//!
//! Estimates the unknown repeating-key length of a ciphertext via the index
//! of coincidence, recovers the most probable key from per-position letter
//! frequencies, and decrypts with the recovered key. The ciphertext is
//! expected to be a contiguous sequence over the 26-letter lowercase
//! alphabet; normalization (case folding, punctuation stripping) is the
//! caller's job.
//!
//! # Modules
//! - `alphabet` - Modular character arithmetic over the lowercase alphabet
//! - `frequency` - Letter frequency tables and index of coincidence
//! - `analysis` - Key length scan and selection
//! - `language` - Language profiles and identification by IoC
//! - `key_recovery` - Key reconstruction from section frequencies
//! - `vigenere` - Vigenère encryption/decryption

pub mod alphabet;
pub mod analysis;
pub mod frequency;
pub mod key_recovery;
pub mod language;
pub mod vigenere;

pub use alphabet::{add_char, subtract_char, ALPHABET_LEN};
pub use analysis::{analyze, select_key_length, KeyLengthCandidate};
pub use frequency::FrequencyTable;
pub use key_recovery::{recover_key, substitute_by_rank};
pub use language::{
    identify_language, LanguageProfile, DEFAULT_PROFILES, ENGLISH, PORTUGUESE,
};
pub use vigenere::{decrypt, encrypt};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("character {0:?} is outside the supported alphabet")]
    InvalidCharacter(char),

    #[error(
        "section of length {section_len} is too short for an index of \
         coincidence (need at least 2 characters)"
    )]
    InsufficientSectionLength { section_len: usize },

    #[error("no candidates to select from")]
    NoCandidates,

    #[error("input is empty")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, Error>;
