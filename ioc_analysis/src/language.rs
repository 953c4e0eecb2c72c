//! Language statistics for matching an observed index of coincidence.

use crate::{Error, Result};

/// Letter statistics for one language.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LanguageProfile {
    pub name: &'static str,
    /// Expected index of coincidence, normalized by the alphabet size.
    /// Source: https://en.wikipedia.org/wiki/Index_of_coincidence
    pub expected_ioc: f64,
    /// The 26 letters ordered from most to least frequent ("etaoin").
    /// Source: https://pt.wikipedia.org/wiki/Frequ%C3%AAncia_de_letras
    pub frequency_rank: &'static str,
}

pub const ENGLISH: LanguageProfile = LanguageProfile {
    name: "English",
    expected_ioc: 1.73,
    frequency_rank: "etaoinshrdlcumwfgypbvkjxqz",
};

pub const PORTUGUESE: LanguageProfile = LanguageProfile {
    name: "Portuguese",
    expected_ioc: 1.94,
    frequency_rank: "aeosrindmutclpvghqbfzjxkwy",
};

/// The built-in profiles, in identification priority order.
pub const DEFAULT_PROFILES: [LanguageProfile; 2] = [ENGLISH, PORTUGUESE];

/// Returns the profile whose expected IoC is closest to the observed value.
///
/// Ties go to the earliest profile in the slice, so the caller's ordering
/// is significant.
///
/// # Arguments
///
/// * `observed_ioc` - IoC measured on the text under analysis.
/// * `profiles` - Candidate profiles; must be non-empty.
pub fn identify_language<'a>(
    observed_ioc: f64,
    profiles: &'a [LanguageProfile],
) -> Result<&'a LanguageProfile> {
    let mut best: Option<(&LanguageProfile, f64)> = None;

    for profile in profiles {
        let difference = (profile.expected_ioc - observed_ioc).abs();
        // Strict comparison keeps the earliest profile on a tie
        if best.map_or(true, |(_, score)| difference < score) {
            best = Some((profile, difference));
        }
    }

    best.map(|(profile, _)| profile).ok_or(Error::NoCandidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifies_closest_profile() {
        let profile = identify_language(1.70, &DEFAULT_PROFILES).unwrap();
        assert_eq!(profile.name, "English");

        let profile = identify_language(2.10, &DEFAULT_PROFILES).unwrap();
        assert_eq!(profile.name, "Portuguese");
    }

    #[test]
    fn test_tie_goes_to_earliest_profile() {
        // 1.835 is equidistant from 1.73 and 1.94
        let profile = identify_language(1.835, &DEFAULT_PROFILES).unwrap();
        assert_eq!(profile.name, "English");
    }

    #[test]
    fn test_empty_profile_list() {
        assert_eq!(identify_language(1.73, &[]).err(), Some(Error::NoCandidates));
    }

    #[test]
    fn test_profiles_cover_full_alphabet() {
        for profile in &DEFAULT_PROFILES {
            let mut letters: Vec<char> = profile.frequency_rank.chars().collect();
            letters.sort_unstable();
            letters.dedup();
            assert_eq!(letters.len(), 26);
        }
    }
}
