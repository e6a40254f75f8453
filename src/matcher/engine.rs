//! Search engine
//!
//! Runs a search request over a borrowed corpus: prefilter first, then
//! pattern matching. The corpus is never modified and result order is
//! always corpus order.

use super::filter::WordFilter;
use super::mode::MatchMode;
use crate::core::{Pattern, WordRecord};
use rayon::prelude::*;
use serde::Serialize;
use std::ops::Range;
use tracing::debug;

/// How the per-word predicate is evaluated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Execution {
    #[default]
    Sequential,
    /// Split across the rayon thread pool; results keep corpus order
    Parallel,
}

/// Everything one search needs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub pattern: Pattern,
    pub mode: MatchMode,
    pub filter: WordFilter,
    #[serde(skip)]
    pub execution: Execution,
}

impl SearchRequest {
    /// A request with the default filter and sequential execution
    #[must_use]
    pub fn new(pattern: Pattern, mode: MatchMode) -> Self {
        Self {
            pattern,
            mode,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_filter(mut self, filter: WordFilter) -> Self {
        self.filter = filter;
        self
    }

    #[must_use]
    pub const fn with_execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }
}

/// A matched word and the phoneme range the pattern aligned to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordMatch<'a> {
    pub word: &'a WordRecord,
    pub span: Range<usize>,
}

/// Outcome of a search
///
/// An empty `matches` list is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults<'a> {
    pub matches: Vec<WordMatch<'a>>,
    pub corpus_size: usize,
    /// Words that passed the prefilter
    pub prefiltered: usize,
    pub mode: MatchMode,
}

impl<'a> SearchResults<'a> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Matched words in corpus order
    pub fn words(&self) -> impl Iterator<Item = &'a WordRecord> + '_ {
        self.matches.iter().map(|found| found.word)
    }
}

/// Search engine over a read-only corpus
pub struct SearchEngine<'a> {
    words: &'a [WordRecord],
}

impl<'a> SearchEngine<'a> {
    #[must_use]
    pub const fn new(words: &'a [WordRecord]) -> Self {
        Self { words }
    }

    #[must_use]
    pub const fn corpus_size(&self) -> usize {
        self.words.len()
    }

    /// Run a search
    ///
    /// # Examples
    /// ```
    /// use phonolex::core::{Inventory, PhonemeConstraint, PhonemeType, Pattern, WordRecord};
    /// use phonolex::matcher::{MatchMode, SearchEngine, SearchRequest};
    ///
    /// let inventory = Inventory::arpabet();
    /// let words = vec![
    ///     WordRecord::from_transcription("cat", "K AE1 T", inventory).unwrap(),
    ///     WordRecord::from_transcription("ant", "AE1 N T", inventory).unwrap(),
    /// ];
    /// let vowel = Pattern::new().then(PhonemeConstraint::wildcard().with_type(PhonemeType::Vowel));
    ///
    /// let results = SearchEngine::new(&words).search(&SearchRequest::new(vowel, MatchMode::BeginsWith));
    /// let found: Vec<&str> = results.words().map(WordRecord::text).collect();
    /// assert_eq!(found, vec!["ant"]);
    /// ```
    #[must_use]
    pub fn search(&self, request: &SearchRequest) -> SearchResults<'a> {
        let candidates: Vec<&'a WordRecord> = self
            .words
            .iter()
            .filter(|word| request.filter.accepts(word))
            .collect();

        let check = |&word: &&'a WordRecord| {
            request
                .mode
                .span(word.phonemes(), &request.pattern)
                .map(|span| WordMatch { word, span })
        };

        let matches: Vec<WordMatch<'a>> = match request.execution {
            Execution::Sequential => candidates.iter().filter_map(check).collect(),
            Execution::Parallel => candidates.par_iter().filter_map(check).collect(),
        };

        debug!(
            mode = %request.mode,
            pattern = %request.pattern,
            corpus = self.words.len(),
            prefiltered = candidates.len(),
            matched = matches.len(),
            "search complete"
        );

        SearchResults {
            matches,
            corpus_size: self.words.len(),
            prefiltered: candidates.len(),
            mode: request.mode,
        }
    }

    /// Count matching words without collecting them
    #[must_use]
    pub fn count(&self, request: &SearchRequest) -> usize {
        let accepted = |word: &&WordRecord| {
            request.filter.accepts(word) && request.mode.matches(word.phonemes(), &request.pattern)
        };

        match request.execution {
            Execution::Sequential => self.words.iter().filter(accepted).count(),
            Execution::Parallel => self.words.par_iter().filter(accepted).count(),
        }
    }
}
