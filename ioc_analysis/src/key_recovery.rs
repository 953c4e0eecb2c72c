//! Key reconstruction from per-section letter frequencies.

use crate::alphabet::subtract_char;
use crate::frequency::FrequencyTable;
use crate::{Error, Result};

/// Recovers the repeating key from the section frequency tables of the
/// chosen key length candidate.
///
/// Each section was encrypted with a single fixed shift, so its most
/// frequent cipher letter should line up with the language's most frequent
/// plaintext letter; the shift between the two is that section's key
/// letter. The approximation degrades on short sections or skewed text, and
/// no confidence signal is produced — callers should sanity-check the
/// decrypted output.
///
/// # Arguments
///
/// * `section_tables` - One frequency table per section, in section order.
/// * `plain_char` - The assumed most frequent plaintext letter, e.g. the
///   first letter of an identified language's frequency rank, or simply 'e'.
///
/// # Returns
///
/// The key, one letter per section.
pub fn recover_key(
    section_tables: &[FrequencyTable],
    plain_char: char,
) -> Result<String> {
    if section_tables.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut key = String::with_capacity(section_tables.len());
    for table in section_tables {
        key.push(subtract_char(table.most_frequent(), plain_char)?);
    }

    Ok(key)
}

/// Diagnostic decoder: substitutes each letter with the language letter of
/// equal frequency rank within its section.
///
/// Per section, the observed letters sorted by descending count are mapped
/// onto `frequency_rank` position by position. The output is a rough,
/// error-prone guess meant for manual inspection only, not a verified
/// decryption.
///
/// # Arguments
///
/// * `text` - The ciphertext (or a sample of it), lowercase alphabet only.
/// * `section_tables` - One frequency table per section, in section order.
/// * `frequency_rank` - The language's 26 letters, most frequent first.
pub fn substitute_by_rank(
    text: &str,
    section_tables: &[FrequencyTable],
    frequency_rank: &str,
) -> Result<String> {
    if section_tables.is_empty() {
        return Err(Error::EmptyInput);
    }

    let substitutions: Vec<[char; 26]> = section_tables
        .iter()
        .map(|table| {
            let mut map = ['a'; 26];
            for (observed, substitute) in
                table.ranked().into_iter().zip(frequency_rank.chars())
            {
                map[(observed as u8 - b'a') as usize] = substitute;
            }
            map
        })
        .collect();

    let mut result = String::with_capacity(text.len());
    for (i, c) in text.chars().enumerate() {
        if !c.is_ascii_lowercase() {
            return Err(Error::InvalidCharacter(c));
        }
        let map = &substitutions[i % substitutions.len()];
        result.push(map[(c as u8 - b'a') as usize]);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::divide_into_sections;
    use crate::vigenere::encrypt;

    fn tables_for(text: &str, key_length: usize) -> Vec<FrequencyTable> {
        divide_into_sections(text, key_length)
            .iter()
            .map(|s| FrequencyTable::count(s).unwrap())
            .collect()
    }

    #[test]
    fn test_recovers_shift_of_dominant_letter() {
        // Plaintext dominated by 'e' in every position, key "cab"
        let plaintext = "eeeeeeeeeeee";
        let ciphertext = encrypt(plaintext, "cab").unwrap();
        let tables = tables_for(&ciphertext, 3);
        assert_eq!(recover_key(&tables, 'e').unwrap(), "cab");
    }

    #[test]
    fn test_recover_with_no_sections() {
        assert_eq!(recover_key(&[], 'e'), Err(Error::EmptyInput));
    }

    #[test]
    fn test_substitution_maps_ranks() {
        // Single section: 'b' is most frequent, then 'a'; with rank "et..."
        // every 'b' becomes 'e' and every 'a' becomes 't'
        let tables = tables_for("bbba", 1);
        let result =
            substitute_by_rank("abab", &tables, "etaoinshrdlcumwfgypbvkjxqz")
                .unwrap();
        assert_eq!(result, "tete");
    }

    #[test]
    fn test_substitution_cycles_sections() {
        // Two sections with different dominant letters map independently
        let tables = tables_for("azazaz", 2);
        let result =
            substitute_by_rank("az", &tables, "etaoinshrdlcumwfgypbvkjxqz")
                .unwrap();
        assert_eq!(result, "ee");
    }
}
