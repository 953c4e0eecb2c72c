//! Letter frequency tables and the index of coincidence.

use crate::alphabet::{rank, ALPHABET_LEN};
use crate::{Error, Result};

/// Occurrence counts for each letter of the alphabet within one text section.
///
/// Every letter is present (zero-initialized) even if unseen, so the sum of
/// all counts equals the length of the counted text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrequencyTable {
    counts: [u32; ALPHABET_LEN as usize],
}

impl FrequencyTable {
    /// Counts the frequency of each letter in the given text.
    ///
    /// # Arguments
    ///
    /// * `text` - The input text to count; must contain only a-z.
    ///
    /// # Returns
    ///
    /// The populated table, or `Error::InvalidCharacter` on the first
    /// character outside the alphabet.
    pub fn count(text: &str) -> Result<Self> {
        let mut counts = [0u32; ALPHABET_LEN as usize];

        for c in text.chars() {
            counts[rank(c)? as usize] += 1;
        }

        Ok(Self { counts })
    }

    /// Occurrence count for a single letter.
    pub fn get(&self, c: char) -> Result<u32> {
        Ok(self.counts[rank(c)? as usize])
    }

    /// Total number of characters counted.
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Calculates the index of coincidence for the counted text, normalized
    /// by the alphabet size so random text scores near 1.0 and natural
    /// language scores well above it (English ≈ 1.73).
    ///
    /// Formula: `sum(count * (count - 1)) / ((n * (n - 1)) / 26)` for a
    /// section of n characters.
    ///
    /// # Returns
    ///
    /// The IoC value, or `Error::InsufficientSectionLength` for fewer than
    /// two counted characters, where the statistic is undefined.
    pub fn index_of_coincidence(&self) -> Result<f64> {
        let n = self.total() as u64;
        if n < 2 {
            return Err(Error::InsufficientSectionLength {
                section_len: n as usize,
            });
        }

        let numerator: u64 = self
            .counts
            .iter()
            .map(|&count| count as u64 * (count as u64).saturating_sub(1))
            .sum();

        let denominator = (n * (n - 1)) as f64 / ALPHABET_LEN as f64;
        Ok(numerator as f64 / denominator)
    }

    /// The most frequent letter; ties go to the alphabetically smallest.
    pub fn most_frequent(&self) -> char {
        let index = self
            .counts
            .iter()
            .enumerate()
            .max_by(|&(i, a), &(j, b)| a.cmp(b).then(j.cmp(&i)))
            .map(|(index, _)| index)
            .unwrap_or(0);

        (b'a' + index as u8) as char
    }

    /// All 26 letters ordered by descending count, ties alphabetical.
    pub fn ranked(&self) -> Vec<char> {
        let mut indexed: Vec<(usize, u32)> =
            self.counts.iter().copied().enumerate().collect();
        // Stable sort keeps equal counts in alphabet order
        indexed.sort_by(|a, b| b.1.cmp(&a.1));
        indexed
            .into_iter()
            .map(|(index, _)| (b'a' + index as u8) as char)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_zero_initialized() {
        let table = FrequencyTable::count("aab").unwrap();
        assert_eq!(table.get('a').unwrap(), 2);
        assert_eq!(table.get('b').unwrap(), 1);
        assert_eq!(table.get('z').unwrap(), 0);
        assert_eq!(table.total(), 3);
    }

    #[test]
    fn test_count_rejects_invalid() {
        assert_eq!(
            FrequencyTable::count("ab c"),
            Err(Error::InvalidCharacter(' '))
        );
    }

    #[test]
    fn test_ioc_single_letter_text() {
        // All 26 pairs coincide: IoC = n(n-1) / (n(n-1)/26) = 26
        let table = FrequencyTable::count("aaaa").unwrap();
        let ioc = table.index_of_coincidence().unwrap();
        assert!((ioc - 26.0).abs() < 1e-9);
    }

    #[test]
    fn test_ioc_flat_distribution() {
        // One of each letter: no pair coincides, IoC = 0
        let text: String = ('a'..='z').collect();
        let table = FrequencyTable::count(&text).unwrap();
        assert_eq!(table.index_of_coincidence().unwrap(), 0.0);
    }

    #[test]
    fn test_ioc_undefined_below_two_chars() {
        let table = FrequencyTable::count("a").unwrap();
        assert_eq!(
            table.index_of_coincidence(),
            Err(Error::InsufficientSectionLength { section_len: 1 })
        );
    }

    #[test]
    fn test_most_frequent_tie_breaks_alphabetically() {
        let table = FrequencyTable::count("ccbbaa").unwrap();
        assert_eq!(table.most_frequent(), 'a');

        let table = FrequencyTable::count("zzy").unwrap();
        assert_eq!(table.most_frequent(), 'z');
    }

    #[test]
    fn test_ranked_orders_by_count_then_alphabet() {
        let table = FrequencyTable::count("bbbccaa").unwrap();
        let ranked = table.ranked();
        assert_eq!(&ranked[..3], &['b', 'a', 'c']);
        // Unseen letters follow in alphabet order
        assert_eq!(&ranked[3..6], &['d', 'e', 'f']);
        assert_eq!(ranked.len(), 26);
    }
}
