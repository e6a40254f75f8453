//! ARPAbet phoneme inventory
//!
//! The 39 phonemes of the CMU Pronouncing Dictionary with their feature-maps.
//! Bundled corpora are stored as ARPAbet transcriptions and resolved through
//! this table; the pattern syntax also accepts these symbols directly.

use super::features::{Depth, Height, Manner, Place, Shape, Voice};
use super::phoneme::PhonemeFeatures;
use rustc_hash::FxHashMap;
use std::sync::LazyLock;

/// One inventory entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhonemeInfo {
    symbol: &'static str,
    ipa: &'static str,
    example: &'static str,
    features: PhonemeFeatures,
    diphthong: bool,
}

impl PhonemeInfo {
    /// ARPAbet symbol without stress digit, e.g. `"AE"`
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    #[must_use]
    pub const fn ipa(&self) -> &'static str {
        self.ipa
    }

    /// A word containing the phoneme
    #[must_use]
    pub const fn example(&self) -> &'static str {
        self.example
    }

    #[must_use]
    pub const fn features(&self) -> &PhonemeFeatures {
        &self.features
    }

    #[must_use]
    pub const fn is_diphthong(&self) -> bool {
        self.diphthong
    }
}

/// A phoneme inventory indexed by symbol
#[derive(Debug, Clone)]
pub struct Inventory {
    entries: Vec<PhonemeInfo>,
    by_symbol: FxHashMap<&'static str, usize>,
}

static ARPABET: LazyLock<Inventory> = LazyLock::new(Inventory::build_arpabet);

/// Remove a trailing ARPAbet stress marker (`AE1` -> `AE`)
///
/// # Examples
/// ```
/// use phonolex::core::strip_stress;
///
/// assert_eq!(strip_stress("AE1"), "AE");
/// assert_eq!(strip_stress("K"), "K");
/// ```
#[must_use]
pub fn strip_stress(symbol: &str) -> &str {
    symbol.trim_end_matches(|c: char| c.is_ascii_digit())
}

impl Inventory {
    /// The shared ARPAbet inventory
    #[must_use]
    pub fn arpabet() -> &'static Self {
        &ARPABET
    }

    /// Look up a symbol; case and stress digits are ignored
    #[must_use]
    pub fn lookup(&self, symbol: &str) -> Option<&PhonemeInfo> {
        let symbol = strip_stress(symbol.trim()).to_ascii_uppercase();
        self.by_symbol
            .get(symbol.as_str())
            .map(|&index| &self.entries[index])
    }

    /// Entries in table order: consonants first, then vowels
    pub fn iter(&self) -> std::slice::Iter<'_, PhonemeInfo> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn from_entries(entries: Vec<PhonemeInfo>) -> Self {
        let by_symbol = entries
            .iter()
            .enumerate()
            .map(|(index, info)| (info.symbol, index))
            .collect();
        Self { entries, by_symbol }
    }

    #[allow(clippy::too_many_lines)] // One row per phoneme
    fn build_arpabet() -> Self {
        use Depth::{Back, Central, Front, NearBack, NearFront};
        use Height::{Close, CloseMid, Mid, NearClose, NearOpen, Open, OpenMid};
        use Manner::{Affricate, Fricative, Glide, Lateral, Liquid, Nasal, Rhotic, Stop};
        use Place::{
            Alveolar, Alveopalatal, Bilabial, Dental, Glottal, Labiodental, Labiovelar, Palatal,
            Postalveolar, Velar,
        };
        use Shape::{Rounded, Unrounded};
        use Voice::{Unvoiced, Voiced};

        let consonant = |symbol, ipa, example, voice, manner: &[Manner], place: &[Place]| PhonemeInfo {
            symbol,
            ipa,
            example,
            features: PhonemeFeatures::consonant(voice, manner, place),
            diphthong: false,
        };
        let vowel = |symbol, ipa, example, shape, height: &[Height], depth: &[Depth], diphthong| {
            PhonemeInfo {
                symbol,
                ipa,
                example,
                features: PhonemeFeatures::vowel(shape, height, depth),
                diphthong,
            }
        };

        Self::from_entries(vec![
            // Stops
            consonant("P", "p", "pig", Unvoiced, &[Stop], &[Bilabial]),
            consonant("B", "b", "bed", Voiced, &[Stop], &[Bilabial]),
            consonant("T", "t", "tree", Unvoiced, &[Stop], &[Alveolar]),
            consonant("D", "d", "dog", Voiced, &[Stop], &[Alveolar]),
            consonant("K", "k", "cat", Unvoiced, &[Stop], &[Velar]),
            consonant("G", "ɡ", "go", Voiced, &[Stop], &[Velar]),
            // Affricates
            consonant("CH", "tʃ", "child", Unvoiced, &[Affricate], &[Alveopalatal]),
            consonant("JH", "dʒ", "jump", Voiced, &[Affricate], &[Alveopalatal]),
            // Fricatives
            consonant("F", "f", "fish", Unvoiced, &[Fricative], &[Labiodental]),
            consonant("V", "v", "voice", Voiced, &[Fricative], &[Labiodental]),
            consonant("TH", "θ", "thing", Unvoiced, &[Fricative], &[Dental]),
            consonant("DH", "ð", "mother", Voiced, &[Fricative], &[Dental]),
            consonant("S", "s", "sun", Unvoiced, &[Fricative], &[Alveolar]),
            consonant("Z", "z", "zoo", Voiced, &[Fricative], &[Alveolar]),
            consonant("SH", "ʃ", "ship", Unvoiced, &[Fricative], &[Postalveolar]),
            consonant("ZH", "ʒ", "treasure", Voiced, &[Fricative], &[Postalveolar]),
            consonant("HH", "h", "hat", Unvoiced, &[Fricative], &[Glottal]),
            // Nasals
            consonant("M", "m", "moon", Voiced, &[Nasal], &[Bilabial]),
            consonant("N", "n", "name", Voiced, &[Nasal], &[Alveolar]),
            consonant("NG", "ŋ", "sing", Voiced, &[Nasal], &[Velar]),
            // Approximants
            consonant("L", "l", "light", Voiced, &[Liquid, Lateral], &[Alveolar]),
            consonant("R", "ɹ", "red", Voiced, &[Liquid, Rhotic], &[Alveolar, Postalveolar]),
            consonant("W", "w", "walk", Voiced, &[Glide], &[Labiovelar]),
            consonant("Y", "j", "yellow", Voiced, &[Glide], &[Palatal]),
            // Monophthongs
            vowel("IY", "i", "see", Unrounded, &[Close], &[Front], false),
            vowel("IH", "ɪ", "sit", Unrounded, &[NearClose], &[NearFront], false),
            vowel("EH", "ɛ", "bed", Unrounded, &[OpenMid], &[Front], false),
            vowel("AE", "æ", "cat", Unrounded, &[NearOpen], &[Front], false),
            vowel("AA", "ɑ", "stop", Unrounded, &[Open], &[Back], false),
            vowel("AH", "ʌ", "cup", Unrounded, &[OpenMid, Mid], &[Central, Back], false),
            vowel("AO", "ɔ", "talk", Rounded, &[OpenMid], &[Back], false),
            vowel("UH", "ʊ", "book", Rounded, &[NearClose], &[NearBack], false),
            vowel("UW", "u", "food", Rounded, &[Close], &[Back], false),
            vowel("ER", "ɝ", "bird", Unrounded, &[Mid], &[Central], false),
            // Diphthongs carry the features of both targets
            vowel("EY", "eɪ", "day", Unrounded, &[CloseMid, NearClose], &[Front, NearFront], true),
            vowel("AY", "aɪ", "time", Unrounded, &[Open, NearClose], &[Front, NearFront], true),
            vowel("OW", "oʊ", "go", Rounded, &[CloseMid, NearClose], &[Back, NearBack], true),
            vowel("AW", "aʊ", "house", Unrounded, &[Open, NearClose], &[Front, NearBack], true),
            vowel("OY", "ɔɪ", "boy", Rounded, &[OpenMid, NearClose], &[Back, NearFront], true),
        ])
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a PhonemeInfo;
    type IntoIter = std::slice::Iter<'a, PhonemeInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PhonemeType;

    #[test]
    fn arpabet_has_39_phonemes() {
        let inventory = Inventory::arpabet();
        assert_eq!(inventory.len(), 39);

        let vowels = inventory.iter().filter(|info| info.features().is_vowel()).count();
        assert_eq!(vowels, 15);
    }

    #[test]
    fn lookup_ignores_stress_and_case() {
        let inventory = Inventory::arpabet();
        let ae = inventory.lookup("ae1").unwrap();

        assert_eq!(ae.symbol(), "AE");
        assert_eq!(ae.features().kind(), PhonemeType::Vowel);
        assert!(ae.features().height().contains(Height::NearOpen));
        assert!(inventory.lookup("Q").is_none());
    }

    #[test]
    fn diphthongs() {
        let inventory = Inventory::arpabet();
        let diphthongs: Vec<&str> = inventory
            .iter()
            .filter(|info| info.is_diphthong())
            .map(PhonemeInfo::symbol)
            .collect();

        assert_eq!(diphthongs, vec!["EY", "AY", "OW", "AW", "OY"]);
    }

    #[test]
    fn consonants_have_voice_manner_place() {
        for info in Inventory::arpabet() {
            let features = info.features();
            if features.is_vowel() {
                assert_eq!(features.shape().len(), 1, "{}", info.symbol());
                assert!(!features.height().is_empty(), "{}", info.symbol());
                assert!(!features.depth().is_empty(), "{}", info.symbol());
            } else {
                assert_eq!(features.voice().len(), 1, "{}", info.symbol());
                assert!(!features.manner().is_empty(), "{}", info.symbol());
                assert!(!features.place().is_empty(), "{}", info.symbol());
            }
        }
    }

    #[test]
    fn strip_stress_keeps_bare_symbols() {
        assert_eq!(strip_stress("AH0"), "AH");
        assert_eq!(strip_stress("NG"), "NG");
        assert_eq!(strip_stress(""), "");
    }
}
