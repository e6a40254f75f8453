//! Match modes
//!
//! A mode decides where in a word the pattern has to line up.

use super::compare::sequence_matches;
use crate::core::{Pattern, PhonemeFeatures};
use crate::error::SearchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// Where a pattern must align within a word
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// Pattern aligned at phoneme 0
    #[default]
    BeginsWith,
    /// Pattern aligned against the final phonemes
    EndsWith,
    /// Pattern aligned at any offset
    Contains,
    /// Pattern aligned at phoneme 0 and the lengths are equal
    ExactlyMatches,
}

impl MatchMode {
    pub const ALL: [Self; 4] = [
        Self::BeginsWith,
        Self::EndsWith,
        Self::Contains,
        Self::ExactlyMatches,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BeginsWith => "begins-with",
            Self::EndsWith => "ends-with",
            Self::Contains => "contains",
            Self::ExactlyMatches => "exactly-matches",
        }
    }

    /// Phoneme index range the pattern aligned to, or `None` if it does not match
    ///
    /// `Contains` reports the leftmost window. An empty pattern yields an
    /// empty range.
    ///
    /// # Examples
    /// ```
    /// use phonolex::core::{Inventory, PhonemeConstraint, PhonemeType, Pattern, WordRecord};
    /// use phonolex::matcher::MatchMode;
    ///
    /// let cat = WordRecord::from_transcription("cat", "K AE1 T", Inventory::arpabet()).unwrap();
    /// let vowel = Pattern::new().then(PhonemeConstraint::wildcard().with_type(PhonemeType::Vowel));
    ///
    /// assert_eq!(MatchMode::Contains.span(cat.phonemes(), &vowel), Some(1..2));
    /// assert_eq!(MatchMode::BeginsWith.span(cat.phonemes(), &vowel), None);
    /// ```
    #[must_use]
    pub fn span(self, word: &[PhonemeFeatures], pattern: &Pattern) -> Option<Range<usize>> {
        let pattern = pattern.phonemes();
        let length = pattern.len();
        if length > word.len() {
            return None;
        }

        match self {
            Self::BeginsWith => sequence_matches(word, pattern).then_some(0..length),
            Self::EndsWith => {
                let start = word.len() - length;
                sequence_matches(&word[start..], pattern).then_some(start..word.len())
            }
            Self::Contains => (0..=word.len() - length)
                .find(|&start| sequence_matches(&word[start..], pattern))
                .map(|start| start..start + length),
            Self::ExactlyMatches => {
                (length == word.len() && sequence_matches(word, pattern)).then_some(0..length)
            }
        }
    }

    /// True if the pattern aligns with the word under this mode
    #[inline]
    #[must_use]
    pub fn matches(self, word: &[PhonemeFeatures], pattern: &Pattern) -> bool {
        self.span(word, pattern).is_some()
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MatchMode {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match key.as_str() {
            "begins-with" | "beginswith" | "begins" | "prefix" | "start" => Ok(Self::BeginsWith),
            "ends-with" | "endswith" | "ends" | "suffix" | "end" => Ok(Self::EndsWith),
            "contains" | "contain" | "infix" | "any" => Ok(Self::Contains),
            "exactly-matches" | "exactlymatches" | "exact" | "exactly" | "whole" => {
                Ok(Self::ExactlyMatches)
            }
            _ => Err(SearchError::UnknownMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Inventory, Manner, PhonemeConstraint, PhonemeType, WordRecord};

    fn word(transcription: &str) -> WordRecord {
        WordRecord::from_transcription("w", transcription, Inventory::arpabet()).unwrap()
    }

    fn stop() -> PhonemeConstraint {
        PhonemeConstraint::wildcard().with_manner(&[Manner::Stop])
    }

    fn vowel() -> PhonemeConstraint {
        PhonemeConstraint::wildcard().with_type(PhonemeType::Vowel)
    }

    #[test]
    fn parse_names_and_aliases() {
        assert_eq!("begins-with".parse::<MatchMode>().unwrap(), MatchMode::BeginsWith);
        assert_eq!("ENDS_WITH".parse::<MatchMode>().unwrap(), MatchMode::EndsWith);
        assert_eq!("contains".parse::<MatchMode>().unwrap(), MatchMode::Contains);
        assert_eq!("exact".parse::<MatchMode>().unwrap(), MatchMode::ExactlyMatches);
        assert!(matches!(
            "sideways".parse::<MatchMode>(),
            Err(SearchError::UnknownMode(_))
        ));

        for mode in MatchMode::ALL {
            assert_eq!(mode.to_string().parse::<MatchMode>().unwrap(), mode);
        }
    }

    #[test]
    fn ends_with_aligns_to_tail() {
        let stop_word = word("S T AA1 P");
        let pattern = Pattern::new().then(vowel()).then(stop());

        assert_eq!(MatchMode::EndsWith.span(stop_word.phonemes(), &pattern), Some(2..4));
        assert_eq!(MatchMode::BeginsWith.span(stop_word.phonemes(), &pattern), None);
    }

    #[test]
    fn begins_and_ends_are_dual_under_reversal() {
        let patterns = [
            Pattern::new().then(stop()),
            Pattern::new().then(stop()).then(vowel()),
            Pattern::new().then(vowel()).then(PhonemeConstraint::wildcard()).then(stop()),
        ];
        let words = ["K AE1 T", "B EY1 B IY0", "T AH0 P", "AH0 B AW1 T", "G OW1"];

        for transcription in words {
            let forward = word(transcription);
            let reversed: Vec<_> = forward.phonemes().iter().rev().copied().collect();
            for pattern in &patterns {
                let reversed_pattern: Pattern = pattern.iter().rev().copied().collect();
                assert_eq!(
                    MatchMode::EndsWith.matches(forward.phonemes(), pattern),
                    MatchMode::BeginsWith.matches(&reversed, &reversed_pattern),
                    "{transcription} / {pattern}"
                );
            }
        }
    }

    #[test]
    fn contains_finds_leftmost_window() {
        let baby = word("B EY1 B IY0");
        let pattern = Pattern::new().then(stop());

        assert_eq!(MatchMode::Contains.span(baby.phonemes(), &pattern), Some(0..1));

        let stop_vowel = Pattern::new().then(stop()).then(vowel());
        let about = word("AH0 B AW1 T");
        assert_eq!(MatchMode::Contains.span(about.phonemes(), &stop_vowel), Some(1..3));
    }

    #[test]
    fn contains_is_superset_of_begins_and_ends() {
        let words = ["K AE1 T", "S T AA1 P", "AH0 B AW1 T", "IY1 T"];
        let pattern = Pattern::new().then(stop()).then(vowel());

        for transcription in words {
            let record = word(transcription);
            if MatchMode::BeginsWith.matches(record.phonemes(), &pattern)
                || MatchMode::EndsWith.matches(record.phonemes(), &pattern)
            {
                assert!(MatchMode::Contains.matches(record.phonemes(), &pattern));
            }
        }
    }

    #[test]
    fn exactly_matches_requires_equal_length() {
        let cat = word("K AE1 T");
        let two = Pattern::new().then(stop()).then(vowel());
        let three = two.clone().then(stop());
        let four = three.clone().then(PhonemeConstraint::wildcard());

        assert!(!MatchMode::ExactlyMatches.matches(cat.phonemes(), &two));
        assert_eq!(MatchMode::ExactlyMatches.span(cat.phonemes(), &three), Some(0..3));
        assert!(!MatchMode::ExactlyMatches.matches(cat.phonemes(), &four));
    }

    #[test]
    fn empty_pattern() {
        let cat = word("K AE1 T");
        let empty = Pattern::new();

        assert_eq!(MatchMode::BeginsWith.span(cat.phonemes(), &empty), Some(0..0));
        assert_eq!(MatchMode::EndsWith.span(cat.phonemes(), &empty), Some(3..3));
        assert_eq!(MatchMode::Contains.span(cat.phonemes(), &empty), Some(0..0));
        assert!(!MatchMode::ExactlyMatches.matches(cat.phonemes(), &empty));
        assert!(MatchMode::ExactlyMatches.matches(&[], &empty));
    }

    #[test]
    fn pattern_longer_than_word_never_matches() {
        let go = word("G OW1");
        let pattern = Pattern::new()
            .then(PhonemeConstraint::wildcard())
            .then(PhonemeConstraint::wildcard())
            .then(PhonemeConstraint::wildcard());

        for mode in MatchMode::ALL {
            assert!(!mode.matches(go.phonemes(), &pattern), "{mode}");
        }
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&MatchMode::ExactlyMatches).unwrap();
        assert_eq!(json, "\"exactly-matches\"");
    }
}
