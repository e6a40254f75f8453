//! Word lookup command
//!
//! Shows a word's stored counts and the feature-map of each phoneme.

use crate::core::{Category, Inventory};
use crate::corpus::Corpus;
use crate::error::CorpusError;
use serde::Serialize;

/// One phoneme of a looked-up word
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhonemeDetail {
    /// `None` when the record carries no transcription symbols
    pub symbol: Option<String>,
    pub ipa: Option<&'static str>,
    pub features: Vec<(Category, Vec<&'static str>)>,
}

/// Result of looking up a word
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordDetails {
    pub word: String,
    pub transcription: String,
    pub character_length: usize,
    pub phoneme_length: usize,
    pub syllables: usize,
    pub contains_diphthong: bool,
    pub phonemes: Vec<PhonemeDetail>,
}

/// Look up a word in the corpus
///
/// # Errors
/// Returns [`CorpusError::WordNotFound`] if the corpus has no such word.
pub fn describe_word(corpus: &Corpus, word: &str) -> Result<WordDetails, CorpusError> {
    let record = corpus
        .get(word)
        .ok_or_else(|| CorpusError::WordNotFound(word.to_string()))?;
    let inventory = Inventory::arpabet();

    let phonemes = record
        .phonemes()
        .iter()
        .enumerate()
        .map(|(index, features)| {
            let symbol = record.symbols().get(index).cloned();
            let ipa = symbol
                .as_deref()
                .and_then(|symbol| inventory.lookup(symbol))
                .map(|info| info.ipa());
            PhonemeDetail {
                symbol,
                ipa,
                features: features.describe(),
            }
        })
        .collect();

    Ok(WordDetails {
        word: record.text().to_string(),
        transcription: record.transcription(),
        character_length: record.character_length(),
        phoneme_length: record.phoneme_length(),
        syllables: record.syllables(),
        contains_diphthong: record.contains_diphthong(),
        phonemes,
    })
}
