//! Word corpora
//!
//! Three corpora are compiled into the binary, each a superset of the one
//! before it:
//!
//! - `common_lemmas`: common base forms
//! - `common_words`: common lemmas plus their frequent inflections
//! - `all_words`: everything, including rarer words
//!
//! A corpus can also be loaded from a file (see [`loader`]).

mod embedded;
pub mod loader;

pub use embedded::{
    ALL_WORDS, ALL_WORDS_COUNT, COMMON_LEMMAS, COMMON_LEMMAS_COUNT, COMMON_WORDS,
    COMMON_WORDS_COUNT,
};

use crate::core::{Inventory, WordRecord};
use crate::error::CorpusError;
use rustc_hash::FxHashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

/// One of the bundled corpora
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CorpusSource {
    #[default]
    CommonLemmas,
    CommonWords,
    AllWords,
}

impl CorpusSource {
    pub const ALL: [Self; 3] = [Self::CommonLemmas, Self::CommonWords, Self::AllWords];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CommonLemmas => "common_lemmas",
            Self::CommonWords => "common_words",
            Self::AllWords => "all_words",
        }
    }

    /// The embedded transcription table
    #[must_use]
    pub const fn entries(self) -> &'static [&'static str] {
        match self {
            Self::CommonLemmas => COMMON_LEMMAS,
            Self::CommonWords => COMMON_WORDS,
            Self::AllWords => ALL_WORDS,
        }
    }
}

impl fmt::Display for CorpusSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CorpusSource {
    type Err = CorpusError;

    /// Accepts `_`, `-` or a space as the separator, in any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|source| source.name() == key)
            .ok_or_else(|| CorpusError::UnknownSource(s.to_string()))
    }
}

/// A loaded corpus with a case-insensitive word index
#[derive(Debug, Clone)]
pub struct Corpus {
    name: String,
    words: Vec<WordRecord>,
    index: FxHashMap<String, usize>,
}

impl Corpus {
    /// Build a corpus from records; the first occurrence of a word wins lookups
    #[must_use]
    pub fn from_records(name: impl Into<String>, words: Vec<WordRecord>) -> Self {
        let mut index = FxHashMap::default();
        for (position, word) in words.iter().enumerate() {
            index.entry(word.text().to_lowercase()).or_insert(position);
        }
        Self {
            name: name.into(),
            words,
            index,
        }
    }

    /// Load a bundled corpus
    ///
    /// # Errors
    /// Returns [`CorpusError::InvalidEntry`] if an embedded entry is bad.
    ///
    /// # Examples
    /// ```
    /// use phonolex::corpus::{Corpus, CorpusSource};
    ///
    /// let corpus = Corpus::load(CorpusSource::CommonLemmas).unwrap();
    /// assert!(corpus.get("cat").is_some());
    /// ```
    pub fn load(source: CorpusSource) -> Result<Self, CorpusError> {
        let words = loader::records_from_slice(source.name(), source.entries(), Inventory::arpabet())?;
        info!(corpus = source.name(), words = words.len(), "loaded bundled corpus");
        Ok(Self::from_records(source.name(), words))
    }

    /// Load a corpus file
    ///
    /// # Errors
    /// See [`loader::load_from_file`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let words = loader::load_from_file(path, Inventory::arpabet())?;
        Ok(Self::from_records(path.display().to_string(), words))
    }

    /// Open a corpus by bundled name, or else by file path
    ///
    /// # Errors
    /// Returns [`CorpusError::UnknownSource`] if `name` is neither a bundled
    /// corpus nor an existing file, or any error from loading it.
    pub fn open(name: &str) -> Result<Self, CorpusError> {
        match name.parse::<CorpusSource>() {
            Ok(source) => Self::load(source),
            Err(unknown) => {
                if Path::new(name).is_file() {
                    Self::from_file(name)
                } else {
                    Err(unknown)
                }
            }
        }
    }

    /// Look up a word, ignoring case
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&WordRecord> {
        self.index
            .get(&word.trim().to_lowercase())
            .map(|&position| &self.words[position])
    }

    #[must_use]
    pub fn words(&self) -> &[WordRecord] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
