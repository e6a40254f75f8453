//! PhonoLex
//!
//! Search a word dictionary by phoneme-feature patterns. A pattern is an
//! ordered sequence of partial feature-maps (manner, place, height, ...), and
//! a word matches when its phonemes line up with the pattern at the start,
//! the end, anywhere, or exactly.
//!
//! # Quick Start
//!
//! ```rust
//! use phonolex::core::{Inventory, ValidationMode, parse_pattern};
//! use phonolex::corpus::{Corpus, CorpusSource};
//! use phonolex::matcher::{MatchMode, SearchEngine, SearchRequest};
//!
//! let corpus = Corpus::load(CorpusSource::CommonLemmas).unwrap();
//!
//! // A voiceless stop followed by any vowel
//! let pattern = parse_pattern("[consonant unvoiced stop] [vowel]", Inventory::arpabet(), ValidationMode::Strict)
//!     .unwrap();
//!
//! let results = SearchEngine::new(corpus.words()).search(&SearchRequest::new(pattern, MatchMode::BeginsWith));
//! assert!(results.words().any(|word| word.text() == "cat"));
//! ```

// Core domain types
pub mod core;

// Pattern matching and search
pub mod matcher;

// Word corpora
pub mod corpus;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Error types
pub mod error;

pub use error::{Result, SearchError};
