//! PhonoLex - CLI
//!
//! Search a word dictionary by phoneme-feature patterns.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use phonolex::{
    commands::{BenchmarkConfig, SearchConfig, describe_word, run_benchmark, run_search},
    core::{Inventory, Pattern, ValidationMode, parse_pattern},
    corpus::Corpus,
    matcher::{Execution, MatchMode, SearchRequest, WordFilter, parse_bounds},
    output::{print_benchmark_result, print_inventory, print_search_report, print_word_details},
};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "phonolex",
    about = "Search a word dictionary by phoneme-feature patterns",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Corpus: common_lemmas (default), common_words, all_words, or path to a .tsv/.jsonl file
    #[arg(short, long, global = true, env = "PHONOLEX_CORPUS", default_value = "common_lemmas")]
    corpus: String,

    /// Drop unknown categories and values instead of rejecting the pattern
    #[arg(long, global = true)]
    permissive: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the corpus with a phoneme pattern
    Search(SearchArgs),

    /// Show a word's transcription and phoneme features
    Show {
        /// The word to look up
        word: String,
    },

    /// List the phoneme inventory
    Inventory,

    /// Time random patterns through every match mode
    Benchmark {
        /// Number of random patterns
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Longest pattern generated, in phonemes
        #[arg(short = 'l', long, default_value = "3")]
        max_length: usize,

        /// Seed for reproducible patterns
        #[arg(short, long)]
        seed: Option<u64>,

        /// Split each search across threads
        #[arg(long)]
        parallel: bool,
    },
}

#[derive(Args)]
struct SearchArgs {
    /// Pattern in text syntax, e.g. "[consonant stop] * [vowel close]" or "K AE"
    #[arg(required_unless_present = "pattern_file", allow_hyphen_values = true)]
    pattern: Option<String>,

    /// Read the pattern from a file (.json for a JSON array, otherwise text syntax)
    #[arg(short = 'f', long, conflicts_with = "pattern")]
    pattern_file: Option<PathBuf>,

    /// Match mode: begins-with (default), ends-with, contains, exactly-matches
    #[arg(short, long, default_value = "begins-with")]
    mode: MatchMode,

    /// Character length bounds, e.g. 1-20 or 5
    #[arg(long, default_value = "1-20")]
    chars: String,

    /// Phoneme length bounds
    #[arg(long, default_value = "1-20")]
    phonemes: String,

    /// Syllable count bounds
    #[arg(long, default_value = "1-10")]
    syllables: String,

    /// Include words containing a diphthong
    #[arg(long)]
    diphthongs: bool,

    /// Show at most N results
    #[arg(long)]
    limit: Option<usize>,

    /// Show a random sample of N results
    #[arg(long)]
    sample: Option<usize>,

    /// Seed for --sample
    #[arg(long, requires = "sample")]
    seed: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Split the search across threads
    #[arg(long)]
    parallel: bool,
}

/// Initialize logging to stderr
///
/// `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let validation = if cli.permissive {
        ValidationMode::Permissive
    } else {
        ValidationMode::Strict
    };

    match cli.command {
        Commands::Search(args) => run_search_command(&cli.corpus, validation, &args),
        Commands::Show { word } => run_show_command(&cli.corpus, &word),
        Commands::Inventory => {
            print_inventory(Inventory::arpabet());
            Ok(())
        }
        Commands::Benchmark {
            count,
            max_length,
            seed,
            parallel,
        } => run_benchmark_command(&cli.corpus, count, max_length, seed, parallel),
    }
}

fn load_corpus(name: &str) -> Result<Corpus> {
    let corpus = Corpus::open(name).with_context(|| format!("failed to load corpus '{name}'"))?;
    info!(corpus = corpus.name(), words = corpus.len(), "corpus ready");
    Ok(corpus)
}

fn read_pattern(args: &SearchArgs, validation: ValidationMode) -> Result<Pattern> {
    let inventory = Inventory::arpabet();

    if let Some(path) = &args.pattern_file {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read pattern file {}", path.display()))?;
        let is_json = path
            .extension()
            .is_some_and(|extension| extension.eq_ignore_ascii_case("json"));
        let pattern = if is_json {
            Pattern::from_json(&content, validation)
        } else {
            parse_pattern(&content, inventory, validation)
        };
        return pattern.with_context(|| format!("invalid pattern in {}", path.display()));
    }

    let text = args.pattern.as_deref().unwrap_or_default();
    parse_pattern(text, inventory, validation).with_context(|| format!("invalid pattern '{text}'"))
}

fn build_filter(args: &SearchArgs) -> Result<WordFilter> {
    let (chars_min, chars_max) = parse_bounds(&args.chars).context("--chars")?;
    let (phonemes_min, phonemes_max) = parse_bounds(&args.phonemes).context("--phonemes")?;
    let (syllables_min, syllables_max) = parse_bounds(&args.syllables).context("--syllables")?;

    Ok(WordFilter::default()
        .with_characters(chars_min, chars_max)?
        .with_phonemes(phonemes_min, phonemes_max)?
        .with_syllables(syllables_min, syllables_max)?
        .with_diphthongs(args.diphthongs))
}

fn run_search_command(corpus: &str, validation: ValidationMode, args: &SearchArgs) -> Result<()> {
    let pattern = read_pattern(args, validation)?;
    let filter = build_filter(args)?;
    let corpus = load_corpus(corpus)?;

    let execution = if args.parallel {
        Execution::Parallel
    } else {
        Execution::Sequential
    };

    let config = SearchConfig {
        request: SearchRequest::new(pattern, args.mode)
            .with_filter(filter)
            .with_execution(execution),
        limit: args.limit,
        sample: args.sample,
        seed: args.seed,
    };
    debug!(pattern = %config.request.pattern, mode = %args.mode, "running search");

    let report = run_search(&corpus, &config);

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
        println!("{json}");
    } else {
        print_search_report(&report);
    }
    Ok(())
}

fn run_show_command(corpus: &str, word: &str) -> Result<()> {
    let corpus = load_corpus(corpus)?;
    let details = describe_word(&corpus, word)?;
    print_word_details(&details);
    Ok(())
}

fn run_benchmark_command(
    corpus: &str,
    count: usize,
    max_length: usize,
    seed: Option<u64>,
    parallel: bool,
) -> Result<()> {
    let corpus = load_corpus(corpus)?;
    println!(
        "⏱️  Benchmarking {count} random patterns against {} ({} words)...",
        corpus.name(),
        corpus.len()
    );

    let config = BenchmarkConfig {
        patterns: count,
        max_length,
        seed,
        execution: if parallel {
            Execution::Parallel
        } else {
            Execution::Sequential
        },
        show_progress: true,
    };
    let result = run_benchmark(&corpus, &config).context("benchmark failed")?;
    print_benchmark_result(&result);
    Ok(())
}
