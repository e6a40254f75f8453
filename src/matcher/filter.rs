//! Word-level prefilter
//!
//! Cheap checks on stored counts, run before any phoneme comparison.

use crate::core::WordRecord;
use crate::error::FilterError;
use serde::Serialize;
use std::ops::RangeInclusive;

/// Bounds on word-level counts
///
/// The default admits 1-20 characters, 1-20 phonemes and 1-10 syllables,
/// and excludes words containing a diphthong.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordFilter {
    characters: RangeInclusive<usize>,
    phonemes: RangeInclusive<usize>,
    syllables: RangeInclusive<usize>,
    allow_diphthongs: bool,
}

impl Default for WordFilter {
    fn default() -> Self {
        Self {
            characters: 1..=20,
            phonemes: 1..=20,
            syllables: 1..=10,
            allow_diphthongs: false,
        }
    }
}

fn checked(name: &'static str, min: usize, max: usize) -> Result<RangeInclusive<usize>, FilterError> {
    if min > max {
        return Err(FilterError::InvalidRange { name, min, max });
    }
    Ok(min..=max)
}

impl WordFilter {
    /// A filter that admits every word
    #[must_use]
    pub const fn unrestricted() -> Self {
        Self {
            characters: 0..=usize::MAX,
            phonemes: 0..=usize::MAX,
            syllables: 0..=usize::MAX,
            allow_diphthongs: true,
        }
    }

    /// # Errors
    /// Returns [`FilterError::InvalidRange`] if `min > max`.
    pub fn with_characters(mut self, min: usize, max: usize) -> Result<Self, FilterError> {
        self.characters = checked("characters", min, max)?;
        Ok(self)
    }

    /// # Errors
    /// Returns [`FilterError::InvalidRange`] if `min > max`.
    pub fn with_phonemes(mut self, min: usize, max: usize) -> Result<Self, FilterError> {
        self.phonemes = checked("phonemes", min, max)?;
        Ok(self)
    }

    /// # Errors
    /// Returns [`FilterError::InvalidRange`] if `min > max`.
    pub fn with_syllables(mut self, min: usize, max: usize) -> Result<Self, FilterError> {
        self.syllables = checked("syllables", min, max)?;
        Ok(self)
    }

    #[must_use]
    pub const fn with_diphthongs(mut self, allow: bool) -> Self {
        self.allow_diphthongs = allow;
        self
    }

    #[must_use]
    pub const fn characters(&self) -> &RangeInclusive<usize> {
        &self.characters
    }

    #[must_use]
    pub const fn phonemes(&self) -> &RangeInclusive<usize> {
        &self.phonemes
    }

    #[must_use]
    pub const fn syllables(&self) -> &RangeInclusive<usize> {
        &self.syllables
    }

    #[must_use]
    pub const fn allows_diphthongs(&self) -> bool {
        self.allow_diphthongs
    }

    /// True if the word passes every bound
    ///
    /// # Examples
    /// ```
    /// use phonolex::core::{Inventory, WordRecord};
    /// use phonolex::matcher::WordFilter;
    ///
    /// let cat = WordRecord::from_transcription("cat", "K AE1 T", Inventory::arpabet()).unwrap();
    /// let day = WordRecord::from_transcription("day", "D EY1", Inventory::arpabet()).unwrap();
    ///
    /// let filter = WordFilter::default();
    /// assert!(filter.accepts(&cat));
    /// assert!(!filter.accepts(&day));
    /// assert!(filter.with_diphthongs(true).accepts(&day));
    /// ```
    #[must_use]
    pub fn accepts(&self, word: &WordRecord) -> bool {
        self.characters.contains(&word.character_length())
            && self.phonemes.contains(&word.phoneme_length())
            && self.syllables.contains(&word.syllables())
            && (self.allow_diphthongs || !word.contains_diphthong())
    }
}

/// Parse `"MIN-MAX"` or a single number `"N"` (meaning `N-N`)
///
/// # Errors
/// Returns [`FilterError::Malformed`] if the text is not of either form.
///
/// # Examples
/// ```
/// use phonolex::matcher::parse_bounds;
///
/// assert_eq!(parse_bounds("2-5").unwrap(), (2, 5));
/// assert_eq!(parse_bounds("3").unwrap(), (3, 3));
/// assert!(parse_bounds("two").is_err());
/// ```
pub fn parse_bounds(text: &str) -> Result<(usize, usize), FilterError> {
    let malformed = || FilterError::Malformed(text.to_string());
    let number = |part: &str| part.trim().parse::<usize>().map_err(|_| malformed());

    match text.split_once(['-', ':']) {
        Some((min, max)) => Ok((number(min)?, number(max)?)),
        None => {
            let value = number(text)?;
            Ok((value, value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Inventory;

    fn record(word: &str, transcription: &str) -> WordRecord {
        WordRecord::from_transcription(word, transcription, Inventory::arpabet()).unwrap()
    }

    #[test]
    fn defaults() {
        let filter = WordFilter::default();
        assert_eq!(filter.characters(), &(1..=20));
        assert_eq!(filter.phonemes(), &(1..=20));
        assert_eq!(filter.syllables(), &(1..=10));
        assert!(!filter.allows_diphthongs());
    }

    #[test]
    fn syllable_bound_excludes_short_words() {
        let cat = record("cat", "K AE1 T");
        let baby = record("baby", "B EY1 B IY0");
        let filter = WordFilter::default()
            .with_syllables(2, 10)
            .unwrap()
            .with_diphthongs(true);

        assert!(!filter.accepts(&cat));
        assert!(filter.accepts(&baby));
    }

    #[test]
    fn length_bounds_are_inclusive() {
        let cat = record("cat", "K AE1 T");

        assert!(WordFilter::default().with_characters(3, 3).unwrap().accepts(&cat));
        assert!(!WordFilter::default().with_characters(4, 8).unwrap().accepts(&cat));
        assert!(WordFilter::default().with_phonemes(1, 3).unwrap().accepts(&cat));
        assert!(!WordFilter::default().with_phonemes(1, 2).unwrap().accepts(&cat));
    }

    #[test]
    fn inverted_range_is_rejected() {
        assert_eq!(
            WordFilter::default().with_phonemes(5, 2),
            Err(FilterError::InvalidRange {
                name: "phonemes",
                min: 5,
                max: 2
            })
        );
    }

    #[test]
    fn unrestricted_accepts_everything() {
        let rhythm = record("rhythm", "R IH1 DH AH0 M");
        let day = record("day", "D EY1");

        assert!(WordFilter::unrestricted().accepts(&rhythm));
        assert!(WordFilter::unrestricted().accepts(&day));
    }

    #[test]
    fn parse_bounds_forms() {
        assert_eq!(parse_bounds(" 1 - 4 ").unwrap(), (1, 4));
        assert_eq!(parse_bounds("2:6").unwrap(), (2, 6));
        assert_eq!(parse_bounds("7").unwrap(), (7, 7));
        assert!(matches!(parse_bounds("1-"), Err(FilterError::Malformed(_))));
        assert!(matches!(parse_bounds(""), Err(FilterError::Malformed(_))));
    }
}
