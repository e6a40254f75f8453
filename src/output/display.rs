//! Display functions for command results

use super::formatters::{create_progress_bar, format_constraints, format_range, split_span};
use crate::commands::{BenchmarkResult, SearchReport, WordDetails};
use crate::core::{Inventory, PhonemeInfo};
use colored::Colorize;

fn heading(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

/// Print the pattern table followed by the matched words
pub fn print_search_report(report: &SearchReport) {
    heading(&format!("SEARCH: {} ({})", report.mode, report.corpus));

    println!("\n🔎 {}", "Pattern:".bright_cyan().bold());
    if report.pattern_rows.is_empty() {
        println!("   {}", "(empty pattern)".bright_black());
    }
    for row in &report.pattern_rows {
        println!(
            "   {:>2}. {}",
            row.position,
            format_constraints(&row.constraints).bright_yellow()
        );
    }

    let filter = &report.filter;
    println!("\n⚙️  {}", "Filter:".bright_cyan().bold());
    println!("   Characters:   {}", format_range(filter.characters()));
    println!("   Phonemes:     {}", format_range(filter.phonemes()));
    println!("   Syllables:    {}", format_range(filter.syllables()));
    println!(
        "   Diphthongs:   {}",
        if filter.allows_diphthongs() { "allowed" } else { "excluded" }
    );

    println!();
    if report.is_empty() {
        println!("{}", "No matches found.".yellow().bold());
        println!(
            "   {} of {} words passed the filter",
            report.prefiltered, report.corpus_size
        );
        return;
    }

    println!("📋 {}", "Results:".bright_cyan().bold());
    for row in &report.results {
        let (before, matched, after) = split_span(&row.symbols, &row.span);
        let transcription = if row.symbols.is_empty() {
            row.transcription.normal()
        } else {
            format!("{before} {} {after}", matched.green().bold())
                .trim()
                .normal()
        };
        println!(
            "   {:<16} /{}/  {}",
            row.word.bright_white().bold(),
            transcription,
            format!("{} syl", row.syllables).bright_black()
        );
    }

    let shown = report.results.len();
    println!();
    let summary = if report.sampled {
        format!("Showing a random sample of {shown} of {} matches", report.total_matches)
    } else if report.is_truncated() {
        format!("Showing {shown} of {} matches", report.total_matches)
    } else {
        format!("{} matches", report.total_matches)
    };
    println!("{}", summary.green().bold());
    println!(
        "   {} of {} words passed the filter  ({:.2}ms)",
        report.prefiltered,
        report.corpus_size,
        report.duration.as_secs_f64() * 1000.0
    );
}

/// Print a word's counts and per-phoneme features
pub fn print_word_details(details: &WordDetails) {
    heading(&format!("WORD: {}", details.word.to_uppercase()));

    println!("\n   Transcription:  /{}/", details.transcription.bright_yellow());
    println!("   Characters:     {}", details.character_length);
    println!("   Phonemes:       {}", details.phoneme_length);
    println!("   Syllables:      {}", details.syllables);
    println!(
        "   Diphthong:      {}",
        if details.contains_diphthong { "yes" } else { "no" }
    );

    println!("\n🔤 {}", "Phonemes:".bright_cyan().bold());
    for (index, phoneme) in details.phonemes.iter().enumerate() {
        let symbol = phoneme.symbol.as_deref().unwrap_or("?");
        let ipa = phoneme.ipa.unwrap_or("");
        println!(
            "   {:>2}. {:<3} {:<3} {}",
            index + 1,
            symbol.bright_white().bold(),
            ipa,
            format_constraints(&phoneme.features)
        );
    }
}

fn print_inventory_row(info: &PhonemeInfo) {
    let features = format_constraints(&info.features().describe());
    let marker = if info.is_diphthong() { " (diphthong)" } else { "" };
    println!(
        "   {:<3} {:<3} {:<10} {}{}",
        info.symbol().bright_white().bold(),
        info.ipa(),
        info.example().bright_black(),
        features,
        marker.yellow()
    );
}

/// Print the phoneme inventory, consonants first
pub fn print_inventory(inventory: &Inventory) {
    heading("PHONEME INVENTORY");

    let (vowels, consonants): (Vec<&PhonemeInfo>, Vec<&PhonemeInfo>) =
        inventory.iter().partition(|info| info.features().is_vowel());

    println!("\n🗣️  {} ({})", "Consonants:".bright_cyan().bold(), consonants.len());
    for info in consonants {
        print_inventory_row(info);
    }

    println!("\n🎵 {} ({})", "Vowels:".bright_cyan().bold(), vowels.len());
    for info in vowels {
        print_inventory_row(info);
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    heading("BENCHMARK RESULTS");

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Patterns:         {}", result.patterns);
    println!("   Corpus words:     {}", result.corpus_size);
    println!("   Execution:        {:?}", result.execution);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    let slowest = result
        .modes
        .iter()
        .map(|timing| timing.total.as_secs_f64())
        .fold(0.0, f64::max);

    println!("\n⏱️  {}", "Per mode:".bright_cyan().bold());
    for timing in &result.modes {
        let bar = create_progress_bar(timing.total.as_secs_f64(), slowest, 30);
        println!(
            "   {:<16} {} {:>9.3}ms mean {:>9.1}/s {:>8} matches",
            timing.mode.to_string(),
            bar.green(),
            timing.mean.as_secs_f64() * 1000.0,
            timing.searches_per_second,
            timing.total_matches
        );
    }
}
