//! Pattern matching over word corpora
//!
//! This module holds the phoneme and sequence comparators, the four match
//! modes, the word-level prefilter and the search engine that ties them
//! together.

mod compare;
mod engine;
mod filter;
mod mode;

pub use compare::{phoneme_matches, sequence_matches};
pub use engine::{Execution, SearchEngine, SearchRequest, SearchResults, WordMatch};
pub use filter::{WordFilter, parse_bounds};
pub use mode::MatchMode;

use crate::core::{Pattern, WordRecord};

/// Words whose phonemes match `pattern` under `mode`, in corpus order
///
/// No prefilter is applied.
#[must_use]
pub fn filter_words<'a>(words: &'a [WordRecord], pattern: &Pattern, mode: MatchMode) -> Vec<&'a WordRecord> {
    words
        .iter()
        .filter(|word| mode.matches(word.phonemes(), pattern))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Inventory, PhonemeConstraint, PhonemeType};

    #[test]
    fn filter_words_skips_prefilter() {
        let inventory = Inventory::arpabet();
        let words = vec![
            WordRecord::from_transcription("day", "D EY1", inventory).unwrap(),
            WordRecord::from_transcription("cat", "K AE1 T", inventory).unwrap(),
        ];
        let pattern = Pattern::new()
            .then(PhonemeConstraint::wildcard())
            .then(PhonemeConstraint::wildcard().with_type(PhonemeType::Vowel));

        let found: Vec<&str> = filter_words(&words, &pattern, MatchMode::BeginsWith)
            .into_iter()
            .map(WordRecord::text)
            .collect();
        assert_eq!(found, vec!["day", "cat"]);
    }
}
