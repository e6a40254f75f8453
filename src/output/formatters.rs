//! Formatting utilities for terminal output

use crate::core::Category;
use std::ops::{Range, RangeInclusive};

/// Split a transcription around a matched span: `(before, matched, after)`
///
/// Out-of-range spans are clamped to the symbol list.
#[must_use]
pub fn split_span(symbols: &[String], span: &Range<usize>) -> (String, String, String) {
    let end = span.end.min(symbols.len());
    let start = span.start.min(end);

    (
        symbols[..start].join(" "),
        symbols[start..end].join(" "),
        symbols[end..].join(" "),
    )
}

/// Format an inclusive bound as `"1-20"`, `"3"` or `"2+"`
#[must_use]
pub fn format_range(range: &RangeInclusive<usize>) -> String {
    let (min, max) = (*range.start(), *range.end());
    if max == usize::MAX {
        format!("{min}+")
    } else if min == max {
        min.to_string()
    } else {
        format!("{min}-{max}")
    }
}

/// Format one pattern phoneme's constraints, e.g. `TYPE=vowel HEIGHT=close,mid`
#[must_use]
pub fn format_constraints(constraints: &[(Category, Vec<&'static str>)]) -> String {
    if constraints.is_empty() {
        return "any phoneme".to_string();
    }

    constraints
        .iter()
        .map(|(category, names)| format!("{category}={}", names.join(",")))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(text: &str) -> Vec<String> {
        text.split_whitespace().map(ToString::to_string).collect()
    }

    #[test]
    fn split_span_middle() {
        let (before, matched, after) = split_span(&symbols("AH B AW T"), &(1..3));
        assert_eq!(before, "AH");
        assert_eq!(matched, "B AW");
        assert_eq!(after, "T");
    }

    #[test]
    fn split_span_empty_and_clamped() {
        let cat = symbols("K AE T");

        let (before, matched, after) = split_span(&cat, &(0..0));
        assert_eq!((before.as_str(), matched.as_str(), after.as_str()), ("", "", "K AE T"));

        let (_, matched, after) = split_span(&cat, &(2..9));
        assert_eq!(matched, "T");
        assert_eq!(after, "");

        let (before, matched, after) = split_span(&[], &(0..2));
        assert!(before.is_empty() && matched.is_empty() && after.is_empty());
    }

    #[test]
    fn format_range_forms() {
        assert_eq!(format_range(&(1..=20)), "1-20");
        assert_eq!(format_range(&(3..=3)), "3");
        assert_eq!(format_range(&(0..=usize::MAX)), "0+");
    }

    #[test]
    fn format_constraints_forms() {
        assert_eq!(format_constraints(&[]), "any phoneme");
        assert_eq!(
            format_constraints(&[
                (Category::Type, vec!["vowel"]),
                (Category::Height, vec!["close", "near-close"])
            ]),
            "TYPE=vowel HEIGHT=close,near-close"
        );
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }
}
