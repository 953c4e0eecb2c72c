//! Key length estimation via index of coincidence analysis.

use crate::frequency::FrequencyTable;
use crate::{Error, Result};

/// Analysis result for one assumed key length.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyLengthCandidate {
    /// The assumed key length.
    pub key_length: usize,
    /// Average index of coincidence over the candidate's sections.
    pub ioc: f64,
    /// One frequency table per section, in section order.
    pub section_tables: Vec<FrequencyTable>,
}

/// Splits text into interleaved sections for an assumed key length.
///
/// The character at index `i` goes to section `i % n`, preserving encounter
/// order within each section, so every section collects the characters
/// encrypted with the same key letter.
///
/// # Arguments
///
/// * `text` - The text to split.
/// * `n` - The number of sections; must be at least 1.
pub fn divide_into_sections(text: &str, n: usize) -> Vec<String> {
    assert!(n >= 1, "section count must be at least 1");
    let mut sections: Vec<String> = (0..n)
        .map(|_| String::with_capacity(text.len() / n + 1))
        .collect();

    for (i, c) in text.chars().enumerate() {
        sections[i % n].push(c);
    }

    sections
}

/// Computes the index of coincidence for every key length from 1 to
/// `max_key_len`.
///
/// For each length the text is divided into that many sections, and the
/// candidate's IoC is the arithmetic mean of the per-section IoC values.
/// A length whose sections are too short for a meaningful IoC is reported
/// as a failed entry rather than a misleading value; the scan continues
/// with the remaining lengths.
///
/// # Arguments
///
/// * `text` - The ciphertext, lowercase alphabet only.
/// * `max_key_len` - Upper bound for the key length scan.
///
/// # Returns
///
/// One entry per key length in ascending order, or `Error::EmptyInput` /
/// `Error::InvalidCharacter` for the whole call.
pub fn analyze(
    text: &str,
    max_key_len: usize,
) -> Result<Vec<Result<KeyLengthCandidate>>> {
    if text.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut results = Vec::with_capacity(max_key_len);

    for key_length in 1..=max_key_len {
        let sections = divide_into_sections(text, key_length);

        let mut total_ioc = 0.0;
        let mut section_tables = Vec::with_capacity(key_length);
        let mut failed = None;

        for section in &sections {
            let table = FrequencyTable::count(section)?;
            match table.index_of_coincidence() {
                Ok(ioc) => total_ioc += ioc,
                Err(err) => {
                    failed = Some(err);
                    break;
                }
            }
            section_tables.push(table);
        }

        results.push(match failed {
            Some(err) => Err(err),
            None => Ok(KeyLengthCandidate {
                key_length,
                ioc: total_ioc / key_length as f64,
                section_tables,
            }),
        });
    }

    Ok(results)
}

/// Selects the most likely true key length from an analysis scan.
///
/// The IoC for multiples of the real key length scores just as high as the
/// real length itself, so instead of taking the maximum outright this picks
/// the first (smallest) length whose IoC is within `delta` of the best.
///
/// # Arguments
///
/// * `results` - Entries from [`analyze`], in ascending length order.
/// * `delta` - Tolerance for "as good as the best" (reference value 0.001).
///
/// # Returns
///
/// The chosen candidate, or `Error::NoCandidates` if no entry succeeded.
pub fn select_key_length(
    results: &[Result<KeyLengthCandidate>],
    delta: f64,
) -> Result<&KeyLengthCandidate> {
    let candidates: Vec<&KeyLengthCandidate> =
        results.iter().filter_map(|r| r.as_ref().ok()).collect();

    let best_ioc = candidates
        .iter()
        .map(|c| c.ioc)
        .fold(f64::NEG_INFINITY, f64::max);

    candidates
        .into_iter()
        .find(|c| (c.ioc - best_ioc).abs() < delta)
        .ok_or(Error::NoCandidates)
}
