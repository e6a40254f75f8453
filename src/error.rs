//! Error types for pattern parsing, corpus loading and searching.

use crate::core::Category;
use std::path::PathBuf;
use thiserror::Error;

/// Errors in a single pattern phoneme.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    /// The category key is not one of TYPE, VOICE, MANNER, PLACE, SHAPE, HEIGHT, DEPTH.
    #[error("unknown feature category '{0}'")]
    UnknownCategory(String),

    /// The value is outside the category's domain.
    #[error("unknown {category} value '{value}'")]
    UnknownValue { category: Category, value: String },

    /// A bare value that belongs to no category.
    #[error("'{0}' is not a feature value")]
    UnrecognizedValue(String),

    /// A category was listed with nothing in it.
    #[error("{0} is listed without a value")]
    EmptyValue(Category),

    /// TYPE is a scalar.
    #[error("TYPE takes a single value, got {0}")]
    MultipleTypes(usize),

    /// A bare value list mixed values from different categories.
    #[error("'{value}' is a {found} value, expected {expected}")]
    MixedCategories {
        value: String,
        expected: Category,
        found: Category,
    },

    /// The token is not a symbol of the phoneme inventory.
    #[error("unknown phoneme symbol '{0}'")]
    UnknownSymbol(String),
}

/// Errors building a pattern.
#[derive(Debug, Error)]
pub enum PatternError {
    /// A pattern phoneme is ill-formed. Positions are 1-based.
    #[error("pattern phoneme {position}: {source}")]
    InvalidPhoneme {
        position: usize,
        #[source]
        source: ConstraintError,
    },

    /// A `[` without its `]`.
    #[error("unclosed '[' at character {0}")]
    UnclosedBracket(usize),

    /// A `]` without its `[`, or a `[` nested inside a group.
    #[error("unexpected '{bracket}' at character {offset}")]
    UnexpectedBracket { bracket: char, offset: usize },

    /// Pattern JSON could not be decoded.
    #[error("invalid pattern JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors in a single corpus entry.
#[derive(Debug, Error)]
pub enum EntryError {
    #[error("entry has no word")]
    EmptyWord,

    #[error("'{0}' has no transcription")]
    MissingTranscription(String),

    #[error("'{word}' uses unknown phoneme symbol '{symbol}'")]
    UnknownSymbol { word: String, symbol: String },

    /// Counts stored in a record disagree with its phoneme list.
    #[error("'{word}': {reason}")]
    Inconsistent { word: String, reason: String },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Errors loading or querying a corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// Not one of the bundled sources and not an existing file.
    #[error("invalid corpus '{0}'; expected one of common_lemmas, common_words, all_words, or a file path")]
    UnknownSource(String),

    /// An entry failed to parse. Lines are 1-based.
    #[error("{origin}, line {line}: {source}")]
    InvalidEntry {
        origin: String,
        line: usize,
        #[source]
        source: EntryError,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("word '{0}' is not in the corpus")]
    WordNotFound(String),
}

/// Errors in word-level filter bounds.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("{name} range {min}-{max} is empty")]
    InvalidRange {
        name: &'static str,
        min: usize,
        max: usize,
    },

    #[error("invalid range '{0}'; expected MIN-MAX or a single number")]
    Malformed(String),
}

/// Top-level error for search requests.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error(transparent)]
    Corpus(#[from] CorpusError),

    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error("unknown matching mode '{0}'; expected begins-with, ends-with, contains or exactly-matches")]
    UnknownMode(String),
}

/// A specialized `Result` type for search operations.
pub type Result<T, E = SearchError> = std::result::Result<T, E>;
