//! Search command
//!
//! Runs one search request against a corpus and packages the outcome for
//! display or JSON output.

use crate::core::{Category, Pattern};
use crate::corpus::Corpus;
use crate::matcher::{MatchMode, SearchEngine, SearchRequest, WordFilter, WordMatch};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index;
use serde::Serialize;
use std::ops::Range;
use std::time::{Duration, Instant};

/// Search command settings
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    pub request: SearchRequest,
    /// Show at most this many rows
    pub limit: Option<usize>,
    /// Show a random sample of this many rows, kept in corpus order
    pub sample: Option<usize>,
    /// Seed for `sample`; random when unset
    pub seed: Option<u64>,
}

/// One pattern phoneme as shown in the pattern table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternRow {
    pub position: usize,
    pub constraints: Vec<(Category, Vec<&'static str>)>,
}

/// One matched word
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    pub word: String,
    pub transcription: String,
    pub symbols: Vec<String>,
    pub span: Range<usize>,
    pub character_length: usize,
    pub phoneme_length: usize,
    pub syllables: usize,
    pub contains_diphthong: bool,
}

impl From<&WordMatch<'_>> for ResultRow {
    fn from(found: &WordMatch<'_>) -> Self {
        let word = found.word;
        Self {
            word: word.text().to_string(),
            transcription: word.transcription(),
            symbols: word.symbols().to_vec(),
            span: found.span.clone(),
            character_length: word.character_length(),
            phoneme_length: word.phoneme_length(),
            syllables: word.syllables(),
            contains_diphthong: word.contains_diphthong(),
        }
    }
}

/// Everything the search command reports
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    pub corpus: String,
    pub mode: MatchMode,
    pub pattern: Pattern,
    pub pattern_rows: Vec<PatternRow>,
    pub filter: WordFilter,
    pub corpus_size: usize,
    pub prefiltered: usize,
    /// Matches before `limit` or `sample` were applied
    pub total_matches: usize,
    pub sampled: bool,
    pub results: Vec<ResultRow>,
    #[serde(skip)]
    pub duration: Duration,
}

impl SearchReport {
    /// True if nothing matched
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_matches == 0
    }

    /// True if fewer rows are shown than matched
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.results.len() < self.total_matches
    }
}

/// Table rows describing each pattern phoneme; wildcards have no constraints
#[must_use]
pub fn pattern_rows(pattern: &Pattern) -> Vec<PatternRow> {
    pattern
        .iter()
        .enumerate()
        .map(|(index, constraint)| PatternRow {
            position: index + 1,
            constraints: constraint.describe(),
        })
        .collect()
}

fn sample_indices(len: usize, amount: usize, seed: Option<u64>) -> Vec<usize> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let mut picked = index::sample(&mut rng, len, amount).into_vec();
    picked.sort_unstable();
    picked
}

/// Run a search and build its report
///
/// # Examples
/// ```
/// use phonolex::commands::{SearchConfig, run_search};
/// use phonolex::core::{Inventory, ValidationMode, parse_pattern};
/// use phonolex::corpus::{Corpus, CorpusSource};
/// use phonolex::matcher::{MatchMode, SearchRequest};
///
/// let corpus = Corpus::load(CorpusSource::CommonLemmas).unwrap();
/// let pattern = parse_pattern("K AE", Inventory::arpabet(), ValidationMode::Strict).unwrap();
/// let config = SearchConfig {
///     request: SearchRequest::new(pattern, MatchMode::BeginsWith),
///     ..SearchConfig::default()
/// };
///
/// let report = run_search(&corpus, &config);
/// assert!(report.results.iter().any(|row| row.word == "cat"));
/// ```
#[must_use]
pub fn run_search(corpus: &Corpus, config: &SearchConfig) -> SearchReport {
    let start = Instant::now();
    let results = SearchEngine::new(corpus.words()).search(&config.request);
    let duration = start.elapsed();

    let total_matches = results.len();
    let (rows, sampled): (Vec<ResultRow>, bool) = match config.sample {
        Some(amount) if amount < total_matches => {
            let rows = sample_indices(total_matches, amount, config.seed)
                .into_iter()
                .map(|position| ResultRow::from(&results.matches[position]))
                .collect();
            (rows, true)
        }
        _ => (results.matches.iter().map(ResultRow::from).collect(), false),
    };

    let rows = match config.limit {
        Some(limit) => rows.into_iter().take(limit).collect(),
        None => rows,
    };

    SearchReport {
        corpus: corpus.name().to_string(),
        mode: results.mode,
        pattern: config.request.pattern.clone(),
        pattern_rows: pattern_rows(&config.request.pattern),
        filter: config.request.filter.clone(),
        corpus_size: results.corpus_size,
        prefiltered: results.prefiltered,
        total_matches,
        sampled,
        results: rows,
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Inventory, PhonemeConstraint, PhonemeType, ValidationMode, parse_pattern};
    use crate::corpus::CorpusSource;

    fn lemmas() -> Corpus {
        Corpus::load(CorpusSource::CommonLemmas).unwrap()
    }

    fn config(text: &str, mode: MatchMode) -> SearchConfig {
        let pattern = parse_pattern(text, Inventory::arpabet(), ValidationMode::Strict).unwrap();
        SearchConfig {
            request: SearchRequest::new(pattern, mode),
            ..SearchConfig::default()
        }
    }

    #[test]
    fn contains_reports_span() {
        let corpus = lemmas();
        let report = run_search(&corpus, &config("[vowel]", MatchMode::Contains));

        let cat = report.results.iter().find(|row| row.word == "cat").unwrap();
        assert_eq!(cat.span, 1..2);
        assert_eq!(cat.transcription, "K AE T");
        assert_eq!(report.total_matches, report.results.len());
        assert!(!report.sampled);
    }

    #[test]
    fn no_matches_is_not_an_error() {
        let corpus = lemmas();
        let report = run_search(&corpus, &config("ZH ZH ZH", MatchMode::ExactlyMatches));

        assert!(report.is_empty());
        assert!(report.results.is_empty());
        assert_eq!(report.corpus_size, corpus.len());
    }

    #[test]
    fn limit_truncates_rows() {
        let corpus = lemmas();
        let mut settings = config("", MatchMode::Contains);
        settings.limit = Some(5);
        let report = run_search(&corpus, &settings);

        assert_eq!(report.results.len(), 5);
        assert!(report.is_truncated());
        assert!(report.total_matches > 5);
    }

    #[test]
    fn seeded_sample_is_reproducible_and_ordered() {
        let corpus = lemmas();
        let mut settings = config("*", MatchMode::BeginsWith);
        settings.sample = Some(10);
        settings.seed = Some(7);

        let first = run_search(&corpus, &settings);
        let second = run_search(&corpus, &settings);

        assert!(first.sampled);
        assert_eq!(first.results, second.results);
        assert_eq!(first.results.len(), 10);

        let order: Vec<usize> = first
            .results
            .iter()
            .map(|row| corpus.words().iter().position(|word| word.text() == row.word).unwrap())
            .collect();
        assert!(order.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn sample_larger_than_matches_keeps_everything() {
        let corpus = lemmas();
        let mut settings = config("K AE T", MatchMode::ExactlyMatches);
        settings.sample = Some(50);
        let report = run_search(&corpus, &settings);

        assert!(!report.sampled);
        assert_eq!(report.results.len(), report.total_matches);
    }

    #[test]
    fn pattern_rows_describe_each_position() {
        let pattern = Pattern::new()
            .then(PhonemeConstraint::wildcard())
            .then(PhonemeConstraint::wildcard().with_type(PhonemeType::Vowel));
        let rows = pattern_rows(&pattern);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].position, 1);
        assert!(rows[0].constraints.is_empty());
        assert_eq!(rows[1].constraints, vec![(Category::Type, vec!["vowel"])]);
    }

    #[test]
    fn report_serializes() {
        let corpus = lemmas();
        let report = run_search(&corpus, &config("K", MatchMode::BeginsWith));
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["mode"], "begins-with");
        assert_eq!(json["corpus"], "common_lemmas");
        assert!(json["results"].as_array().is_some());
    }
}
