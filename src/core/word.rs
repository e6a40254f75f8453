//! Dictionary word records
//!
//! A record stores the word-level counts used by the prefilter together with
//! the ordered phoneme feature-maps used by the matcher. Records are built
//! once when a corpus loads and are read-only afterwards.

use super::inventory::{Inventory, strip_stress};
use super::phoneme::PhonemeFeatures;
use crate::error::EntryError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A word with its precomputed features
///
/// The serialized form is the `.jsonl` corpus format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    word: String,
    character_length: usize,
    phoneme_length: usize,
    syllables: usize,
    contains_diphthong: bool,
    /// Transcription symbols, when the record came from one
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phonemes: Vec<String>,
    features: Vec<PhonemeFeatures>,
}

impl WordRecord {
    /// Build a record from an ARPAbet transcription such as `"K AE1 T"`
    ///
    /// Syllables are counted as vowel phonemes; the diphthong flag is set if
    /// any phoneme is a diphthong.
    ///
    /// # Errors
    /// Returns an error if the word or transcription is empty, or if a
    /// symbol is not in the inventory.
    ///
    /// # Examples
    /// ```
    /// use phonolex::core::{Inventory, WordRecord};
    ///
    /// let cat = WordRecord::from_transcription("cat", "K AE1 T", Inventory::arpabet()).unwrap();
    /// assert_eq!(cat.phoneme_length(), 3);
    /// assert_eq!(cat.syllables(), 1);
    /// assert!(!cat.contains_diphthong());
    /// ```
    pub fn from_transcription(
        word: &str,
        transcription: &str,
        inventory: &Inventory,
    ) -> Result<Self, EntryError> {
        let word = word.trim();
        if word.is_empty() {
            return Err(EntryError::EmptyWord);
        }

        let mut symbols = Vec::new();
        let mut features = Vec::new();
        let mut contains_diphthong = false;

        for symbol in transcription.split_whitespace() {
            let info = inventory
                .lookup(symbol)
                .ok_or_else(|| EntryError::UnknownSymbol {
                    word: word.to_string(),
                    symbol: symbol.to_string(),
                })?;
            contains_diphthong |= info.is_diphthong();
            symbols.push(strip_stress(symbol).to_ascii_uppercase());
            features.push(*info.features());
        }

        if features.is_empty() {
            return Err(EntryError::MissingTranscription(word.to_string()));
        }

        Ok(Self {
            word: word.to_string(),
            character_length: word.chars().count(),
            phoneme_length: features.len(),
            syllables: features.iter().filter(|phoneme| phoneme.is_vowel()).count(),
            contains_diphthong,
            phonemes: symbols,
            features,
        })
    }

    /// Build a record directly from feature-maps
    ///
    /// Syllables are counted as vowel phonemes and the diphthong flag is
    /// cleared; use [`WordRecord::with_diphthong`] to set it.
    #[must_use]
    pub fn from_features(word: &str, features: Vec<PhonemeFeatures>) -> Self {
        Self {
            word: word.to_string(),
            character_length: word.chars().count(),
            phoneme_length: features.len(),
            syllables: features.iter().filter(|phoneme| phoneme.is_vowel()).count(),
            contains_diphthong: false,
            phonemes: Vec::new(),
            features,
        }
    }

    #[must_use]
    pub const fn with_diphthong(mut self, contains_diphthong: bool) -> Self {
        self.contains_diphthong = contains_diphthong;
        self
    }

    #[must_use]
    pub const fn with_syllables(mut self, syllables: usize) -> Self {
        self.syllables = syllables;
        self
    }

    /// Check that stored counts agree with the phoneme list
    ///
    /// # Errors
    /// Returns [`EntryError::Inconsistent`] describing the first mismatch.
    pub fn validate(&self) -> Result<(), EntryError> {
        let inconsistent = |reason: String| EntryError::Inconsistent {
            word: self.word.clone(),
            reason,
        };

        if self.word.trim().is_empty() {
            return Err(EntryError::EmptyWord);
        }
        if self.phoneme_length != self.features.len() {
            return Err(inconsistent(format!(
                "phoneme_length is {} but {} feature-maps are listed",
                self.phoneme_length,
                self.features.len()
            )));
        }
        if !self.phonemes.is_empty() && self.phonemes.len() != self.features.len() {
            return Err(inconsistent(format!(
                "{} symbols listed for {} feature-maps",
                self.phonemes.len(),
                self.features.len()
            )));
        }
        Ok(())
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn character_length(&self) -> usize {
        self.character_length
    }

    #[inline]
    #[must_use]
    pub const fn phoneme_length(&self) -> usize {
        self.phoneme_length
    }

    #[inline]
    #[must_use]
    pub const fn syllables(&self) -> usize {
        self.syllables
    }

    #[inline]
    #[must_use]
    pub const fn contains_diphthong(&self) -> bool {
        self.contains_diphthong
    }

    /// Transcription symbols; empty if the record was built from features
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[String] {
        &self.phonemes
    }

    /// The ordered phoneme feature-maps the matcher works on
    #[inline]
    #[must_use]
    pub fn phonemes(&self) -> &[PhonemeFeatures] {
        &self.features
    }

    /// Space-separated transcription, or `"?"` per phoneme if unknown
    #[must_use]
    pub fn transcription(&self) -> String {
        if self.phonemes.is_empty() {
            vec!["?"; self.features.len()].join(" ")
        } else {
            self.phonemes.join(" ")
        }
    }
}

impl fmt::Display for WordRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}
