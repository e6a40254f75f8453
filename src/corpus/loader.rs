//! Corpus loading utilities
//!
//! Builds word records from transcription tables, either embedded or read
//! from a file. Two file formats are understood:
//!
//! - `word<TAB>transcription` lines (`.tsv`, `.txt` and anything else)
//! - one JSON word record per line (`.jsonl`)
//!
//! Blank lines and lines starting with `#` are skipped in both.

use crate::core::{Inventory, WordRecord};
use crate::error::{CorpusError, EntryError};
use std::fs;
use std::path::Path;
use tracing::info;

fn is_content(line: &str) -> bool {
    !line.is_empty() && !line.starts_with('#')
}

/// Parse a single `word<TAB>transcription` entry
///
/// A tab separates the word from its transcription; without one the first
/// whitespace does.
///
/// # Errors
/// Returns an [`EntryError`] if the line has no transcription or contains
/// an unknown symbol.
///
/// # Examples
/// ```
/// use phonolex::core::Inventory;
/// use phonolex::corpus::loader::parse_entry;
///
/// let stop = parse_entry("stop\tS T AA1 P", Inventory::arpabet()).unwrap();
/// assert_eq!(stop.text(), "stop");
/// assert_eq!(stop.phoneme_length(), 4);
/// ```
pub fn parse_entry(line: &str, inventory: &Inventory) -> Result<WordRecord, EntryError> {
    let line = line.trim();
    let (word, transcription) = line
        .split_once('\t')
        .or_else(|| line.split_once(char::is_whitespace))
        .ok_or_else(|| EntryError::MissingTranscription(line.to_string()))?;

    WordRecord::from_transcription(word, transcription, inventory)
}

/// Parse a single JSON word record and check its counts
///
/// # Errors
/// Returns [`EntryError::Json`] for malformed JSON or
/// [`EntryError::Inconsistent`] if the counts disagree with the phonemes.
pub fn parse_json_entry(line: &str) -> Result<WordRecord, EntryError> {
    let record: WordRecord = serde_json::from_str(line)?;
    record.validate()?;
    Ok(record)
}

fn collect_records<'l>(
    origin: &str,
    lines: impl Iterator<Item = &'l str>,
    parse: impl Fn(&str) -> Result<WordRecord, EntryError>,
) -> Result<Vec<WordRecord>, CorpusError> {
    lines
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| is_content(line))
        .map(|(line_number, line)| {
            parse(line).map_err(|source| CorpusError::InvalidEntry {
                origin: origin.to_string(),
                line: line_number,
                source,
            })
        })
        .collect()
}

/// Convert an embedded table to word records
///
/// # Errors
/// Returns [`CorpusError::InvalidEntry`] naming the first bad entry.
///
/// # Examples
/// ```
/// use phonolex::core::Inventory;
/// use phonolex::corpus::loader::records_from_slice;
/// use phonolex::corpus::COMMON_LEMMAS;
///
/// let words = records_from_slice("common_lemmas", COMMON_LEMMAS, Inventory::arpabet()).unwrap();
/// assert_eq!(words.len(), COMMON_LEMMAS.len());
/// ```
pub fn records_from_slice(
    origin: &str,
    slice: &[&str],
    inventory: &Inventory,
) -> Result<Vec<WordRecord>, CorpusError> {
    collect_records(origin, slice.iter().copied(), |line| parse_entry(line, inventory))
}

/// Load word records from a file
///
/// Files ending in `.jsonl` are read as JSON word records; anything else is
/// read as a transcription table.
///
/// # Errors
/// Returns [`CorpusError::Io`] if the file cannot be read, or
/// [`CorpusError::InvalidEntry`] naming the first bad line.
///
/// # Examples
/// ```no_run
/// use phonolex::core::Inventory;
/// use phonolex::corpus::loader::load_from_file;
///
/// let words = load_from_file("data/all_words.tsv", Inventory::arpabet()).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, inventory: &Inventory) -> Result<Vec<WordRecord>, CorpusError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let origin = path.display().to_string();

    let is_jsonl = path
        .extension()
        .is_some_and(|extension| extension.eq_ignore_ascii_case("jsonl"));

    let words = if is_jsonl {
        collect_records(&origin, content.lines(), parse_json_entry)?
    } else {
        collect_records(&origin, content.lines(), |line| parse_entry(line, inventory))?
    };

    info!(path = %origin, words = words.len(), jsonl = is_jsonl, "loaded corpus file");
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("phonolex-{}-{name}", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn parse_entry_splits_on_tab_or_space() {
        let inventory = Inventory::arpabet();

        let tab = parse_entry("cat\tK AE1 T", inventory).unwrap();
        let space = parse_entry("cat K AE1 T", inventory).unwrap();
        assert_eq!(tab, space);

        assert!(matches!(
            parse_entry("cat", inventory),
            Err(EntryError::MissingTranscription(_))
        ));
    }

    #[test]
    fn records_from_slice_skips_comments_and_blanks() {
        let input = &["# header", "", "cat\tK AE1 T", "   ", "dog\tD AO1 G"];
        let words = records_from_slice("test", input, Inventory::arpabet()).unwrap();

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "cat");
        assert_eq!(words[1].text(), "dog");
    }

    #[test]
    fn records_from_slice_reports_line() {
        let input = &["cat\tK AE1 T", "# note", "dog\tD QQ G"];
        let error = records_from_slice("test", input, Inventory::arpabet()).unwrap_err();

        match error {
            CorpusError::InvalidEntry { origin, line, source } => {
                assert_eq!(origin, "test");
                assert_eq!(line, 3);
                assert!(matches!(source, EntryError::UnknownSymbol { .. }));
            }
            other => panic!("expected InvalidEntry, got {other:?}"),
        }
    }

    #[test]
    fn records_from_slice_empty() {
        let input: &[&str] = &[];
        let words = records_from_slice("empty", input, Inventory::arpabet()).unwrap();
        assert!(words.is_empty());
    }

    #[test]
    fn load_tsv_file() {
        let path = temp_file("words.tsv", "# word\tARPAbet\nsing\tS IH1 NG\nthing\tTH IH1 NG\n");
        let words = load_from_file(&path, Inventory::arpabet()).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 2);
        assert_eq!(words[1].symbols(), ["TH", "IH", "NG"]);
    }

    #[test]
    fn load_jsonl_file() {
        let cat = WordRecord::from_transcription("cat", "K AE1 T", Inventory::arpabet()).unwrap();
        let line = serde_json::to_string(&cat).unwrap();
        let path = temp_file("words.jsonl", &format!("{line}\n\n{line}\n"));

        let words = load_from_file(&path, Inventory::arpabet()).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words, vec![cat.clone(), cat]);
    }

    #[test]
    fn load_jsonl_rejects_inconsistent_record() {
        let json = r#"{"word": "a", "character_length": 1, "phoneme_length": 3, "syllables": 1, "contains_diphthong": false, "features": []}"#;
        let path = temp_file("bad.jsonl", json);

        let result = load_from_file(&path, Inventory::arpabet());
        fs::remove_file(&path).unwrap();

        assert!(matches!(
            result,
            Err(CorpusError::InvalidEntry {
                line: 1,
                source: EntryError::Inconsistent { .. },
                ..
            })
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_from_file("/nonexistent/phonolex/words.tsv", Inventory::arpabet());
        assert!(matches!(result, Err(CorpusError::Io { .. })));
    }
}
