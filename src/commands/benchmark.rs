//! Benchmark command
//!
//! Times random patterns through every match mode.

use crate::core::{Category, Inventory, Pattern, PhonemeConstraint, ValidationMode};
use crate::corpus::Corpus;
use crate::error::{ConstraintError, PatternError};
use crate::matcher::{Execution, MatchMode, SearchEngine, SearchRequest, WordFilter};
use indicatif::{ProgressBar, ProgressStyle};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

/// Benchmark settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkConfig {
    /// Number of random patterns
    pub patterns: usize,
    /// Longest pattern generated, in phonemes
    pub max_length: usize,
    /// Seed for pattern generation; random when unset
    pub seed: Option<u64>,
    pub execution: Execution,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            patterns: 100,
            max_length: 3,
            seed: None,
            execution: Execution::Sequential,
            show_progress: true,
        }
    }
}

/// Timings for one match mode
#[derive(Debug, Clone, PartialEq)]
pub struct ModeTiming {
    pub mode: MatchMode,
    pub total: Duration,
    pub mean: Duration,
    pub total_matches: usize,
    pub searches_per_second: f64,
}

/// Result of a benchmark run
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    pub patterns: usize,
    pub corpus_size: usize,
    pub execution: Execution,
    pub modes: Vec<ModeTiming>,
    pub duration: Duration,
}

/// Build one random pattern phoneme
///
/// Each phoneme is a wildcard, a bare `TYPE`, or one value of one category
/// taken from a real phoneme, so every generated constraint is satisfiable.
fn random_constraint<R: Rng + ?Sized>(
    rng: &mut R,
    inventory: &Inventory,
) -> Result<PhonemeConstraint, ConstraintError> {
    let mut constraint = PhonemeConstraint::wildcard();
    let entries: Vec<_> = inventory.iter().collect();
    let Some(info) = entries.choose(rng) else {
        return Ok(constraint);
    };
    let described = info.features().describe();

    match rng.random_range(0..3) {
        0 => {}
        1 => constraint.add_values(
            Category::Type,
            &[info.features().kind().name()],
            ValidationMode::Strict,
        )?,
        _ => {
            if let Some((category, names)) = described.choose(rng)
                && let Some(&name) = names.choose(rng)
            {
                constraint.add_values(*category, &[name], ValidationMode::Strict)?;
            }
        }
    }

    Ok(constraint)
}

/// Build a random pattern of 1 to `max_length` phonemes
///
/// # Errors
/// Returns [`PatternError::InvalidPhoneme`] if a generated phoneme is
/// rejected, which only happens if the inventory holds unknown values.
pub fn random_pattern<R: Rng + ?Sized>(
    rng: &mut R,
    inventory: &Inventory,
    max_length: usize,
) -> Result<Pattern, PatternError> {
    let length = rng.random_range(1..=max_length.max(1));
    let mut pattern = Pattern::new();
    for position in 1..=length {
        let constraint = random_constraint(rng, inventory)
            .map_err(|source| PatternError::InvalidPhoneme { position, source })?;
        pattern.push(constraint);
    }
    Ok(pattern)
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        bar.set_style(style.progress_chars("█▓▒░"));
    }
    bar
}

/// Run random patterns through every mode and time each search
///
/// The filter admits every word so timings cover the whole corpus.
///
/// # Errors
/// See [`random_pattern`].
#[allow(clippy::cast_precision_loss)]
pub fn run_benchmark(corpus: &Corpus, config: &BenchmarkConfig) -> Result<BenchmarkResult, PatternError> {
    let mut rng = config
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let inventory = Inventory::arpabet();
    let engine = SearchEngine::new(corpus.words());

    let mut totals = [Duration::ZERO; MatchMode::ALL.len()];
    let mut matches = [0usize; MatchMode::ALL.len()];

    let bar = progress_bar(config.patterns, config.show_progress);
    let start = Instant::now();

    for _ in 0..config.patterns {
        let pattern = random_pattern(&mut rng, inventory, config.max_length)?;
        bar.set_message(pattern.to_string());

        for (slot, mode) in MatchMode::ALL.into_iter().enumerate() {
            let request = SearchRequest::new(pattern.clone(), mode)
                .with_filter(WordFilter::unrestricted())
                .with_execution(config.execution);

            let search_start = Instant::now();
            let found = engine.count(&request);
            totals[slot] += search_start.elapsed();
            matches[slot] += found;
        }
        bar.inc(1);
    }

    bar.finish_and_clear();
    let duration = start.elapsed();

    let modes = MatchMode::ALL
        .into_iter()
        .enumerate()
        .map(|(slot, mode)| {
            let total = totals[slot];
            let runs = u32::try_from(config.patterns.max(1)).unwrap_or(u32::MAX);
            let seconds = total.as_secs_f64();
            ModeTiming {
                mode,
                total,
                mean: total / runs,
                total_matches: matches[slot],
                searches_per_second: if seconds > 0.0 {
                    config.patterns as f64 / seconds
                } else {
                    0.0
                },
            }
        })
        .collect();

    Ok(BenchmarkResult {
        patterns: config.patterns,
        corpus_size: corpus.len(),
        execution: config.execution,
        modes,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::CorpusSource;

    fn quiet(patterns: usize) -> BenchmarkConfig {
        BenchmarkConfig {
            patterns,
            seed: Some(42),
            show_progress: false,
            ..BenchmarkConfig::default()
        }
    }

    #[test]
    fn benchmark_runs() {
        let corpus = Corpus::load(CorpusSource::CommonLemmas).unwrap();
        let result = run_benchmark(&corpus, &quiet(10)).unwrap();

        assert_eq!(result.patterns, 10);
        assert_eq!(result.corpus_size, corpus.len());
        assert_eq!(result.modes.len(), 4);
        for (timing, mode) in result.modes.iter().zip(MatchMode::ALL) {
            assert_eq!(timing.mode, mode);
        }
    }

    #[test]
    fn contains_finds_at_least_as_many_as_begins_with() {
        let corpus = Corpus::load(CorpusSource::CommonWords).unwrap();
        let result = run_benchmark(&corpus, &quiet(20)).unwrap();

        let count = |mode: MatchMode| {
            result
                .modes
                .iter()
                .find(|timing| timing.mode == mode)
                .map(|timing| timing.total_matches)
                .unwrap()
        };

        assert!(count(MatchMode::Contains) >= count(MatchMode::BeginsWith));
        assert!(count(MatchMode::Contains) >= count(MatchMode::EndsWith));
        assert!(count(MatchMode::BeginsWith) >= count(MatchMode::ExactlyMatches));
    }

    #[test]
    fn seeded_runs_match() {
        let corpus = Corpus::load(CorpusSource::CommonLemmas).unwrap();
        let first = run_benchmark(&corpus, &quiet(15)).unwrap();
        let second = run_benchmark(&corpus, &quiet(15)).unwrap();

        let totals = |result: &BenchmarkResult| -> Vec<usize> {
            result.modes.iter().map(|timing| timing.total_matches).collect()
        };
        assert_eq!(totals(&first), totals(&second));
    }

    #[test]
    fn random_patterns_respect_length_and_satisfiability() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let pattern = random_pattern(&mut rng, Inventory::arpabet(), 4).unwrap();
            assert!((1..=4).contains(&pattern.len()));
            assert!(pattern.iter().all(PhonemeConstraint::is_satisfiable));
        }
    }

    #[test]
    fn benchmark_with_no_patterns() {
        let corpus = Corpus::load(CorpusSource::CommonLemmas).unwrap();
        let result = run_benchmark(&corpus, &quiet(0)).unwrap();

        assert_eq!(result.patterns, 0);
        assert!(result.modes.iter().all(|timing| timing.total_matches == 0));
    }
}
