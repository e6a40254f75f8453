//! Command implementations

pub mod benchmark;
pub mod search;
pub mod show;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, ModeTiming, run_benchmark};
pub use search::{PatternRow, ResultRow, SearchConfig, SearchReport, pattern_rows, run_search};
pub use show::{PhonemeDetail, WordDetails, describe_word};
