//! Phonological feature categories and their value domains
//!
//! Every phoneme is described by seven categories. `TYPE` is a scalar
//! (consonant or vowel); the other six hold sets of values from a closed
//! domain. Value names are unique across categories, so a bare value name
//! such as `"fricative"` identifies its category on its own.

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// A value from one of the closed feature domains
pub trait FeatureValue: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Category this domain belongs to
    const CATEGORY: Category;

    /// Every value of the domain, in canonical order
    const ALL: &'static [Self];

    /// Canonical lowercase name, e.g. `"near-open"`
    fn name(self) -> &'static str;

    /// Bit used for this value inside a [`FeatureSet`]
    fn bit(self) -> u16;

    /// Look up a value by its canonical name
    #[must_use]
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|value| value.name() == name)
    }
}

macro_rules! feature_values {
    (
        $(#[$meta:meta])*
        $name:ident in $category:ident {
            $($(#[$variant_meta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($(#[$variant_meta])* $variant),+
        }

        impl FeatureValue for $name {
            const CATEGORY: Category = Category::$category;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }

            fn bit(self) -> u16 {
                1 << (self as u16)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

feature_values! {
    /// Consonant voicing
    Voice in Voice {
        Voiced => "voiced",
        Unvoiced => "unvoiced",
    }
}

feature_values! {
    /// Consonant manner of articulation
    Manner in Manner {
        Stop => "stop",
        Affricate => "affricate",
        Fricative => "fricative",
        Liquid => "liquid",
        Glide => "glide",
        Lateral => "lateral",
        Rhotic => "rhotic",
        Nasal => "nasal",
    }
}

feature_values! {
    /// Consonant place of articulation
    Place in Place {
        Bilabial => "bilabial",
        Labiodental => "labiodental",
        Dental => "dental",
        Labiovelar => "labiovelar",
        Alveolar => "alveolar",
        Postalveolar => "postalveolar",
        Alveopalatal => "alveopalatal",
        Palatal => "palatal",
        Velar => "velar",
        Glottal => "glottal",
    }
}

feature_values! {
    /// Vowel lip rounding
    Shape in Shape {
        Rounded => "rounded",
        Unrounded => "unrounded",
    }
}

feature_values! {
    /// Vowel height, from open to close
    Height in Height {
        Open => "open",
        NearOpen => "near-open",
        OpenMid => "open-mid",
        Mid => "mid",
        CloseMid => "close-mid",
        NearClose => "near-close",
        Close => "close",
    }
}

feature_values! {
    /// Vowel backness, from front to back
    Depth in Depth {
        Front => "front",
        NearFront => "near-front",
        Central => "central",
        NearBack => "near-back",
        Back => "back",
    }
}

/// Phoneme type, the only scalar category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhonemeType {
    Consonant,
    Vowel,
}

impl PhonemeType {
    pub const ALL: &'static [Self] = &[Self::Consonant, Self::Vowel];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Consonant => "consonant",
            Self::Vowel => "vowel",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for PhonemeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Feature category names as they appear in patterns and corpus records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Type,
    Voice,
    Manner,
    Place,
    Shape,
    Height,
    Depth,
}

impl Category {
    pub const ALL: &'static [Self] = &[
        Self::Type,
        Self::Voice,
        Self::Manner,
        Self::Place,
        Self::Shape,
        Self::Height,
        Self::Depth,
    ];

    /// Uppercase key, e.g. `"MANNER"`
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Type => "TYPE",
            Self::Voice => "VOICE",
            Self::Manner => "MANNER",
            Self::Place => "PLACE",
            Self::Shape => "SHAPE",
            Self::Height => "HEIGHT",
            Self::Depth => "DEPTH",
        }
    }

    /// Parse a category key, ignoring case and surrounding whitespace
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.name().eq_ignore_ascii_case(name))
    }

    /// The phoneme type this category describes, `None` for `TYPE` itself
    #[must_use]
    pub const fn applies_to(self) -> Option<PhonemeType> {
        match self {
            Self::Type => None,
            Self::Voice | Self::Manner | Self::Place => Some(PhonemeType::Consonant),
            Self::Shape | Self::Height | Self::Depth => Some(PhonemeType::Vowel),
        }
    }

    /// Canonical names of every value in this category's domain
    #[must_use]
    pub fn value_names(self) -> Vec<&'static str> {
        fn names<T: FeatureValue>() -> Vec<&'static str> {
            T::ALL.iter().map(|value| value.name()).collect()
        }

        match self {
            Self::Type => PhonemeType::ALL.iter().map(|kind| kind.name()).collect(),
            Self::Voice => names::<Voice>(),
            Self::Manner => names::<Manner>(),
            Self::Place => names::<Place>(),
            Self::Shape => names::<Shape>(),
            Self::Height => names::<Height>(),
            Self::Depth => names::<Depth>(),
        }
    }

    /// Find the category whose domain contains `value`
    ///
    /// # Examples
    /// ```
    /// use phonolex::core::Category;
    ///
    /// assert_eq!(Category::of_value("fricative"), Some(Category::Manner));
    /// assert_eq!(Category::of_value("near-close"), Some(Category::Height));
    /// assert_eq!(Category::of_value("purple"), None);
    /// ```
    #[must_use]
    pub fn of_value(value: &str) -> Option<Self> {
        let value = normalize_value(value);
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.value_names().contains(&value.as_str()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalize user-supplied value text: trimmed, lowercase, `_` read as `-`
#[must_use]
pub fn normalize_value(value: &str) -> String {
    value.trim().to_ascii_lowercase().replace('_', "-")
}

/// A set of values from one feature domain, stored as a bitmask
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeatureSet<T> {
    bits: u16,
    marker: PhantomData<T>,
}

impl<T: FeatureValue> FeatureSet<T> {
    /// The empty set
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            bits: 0,
            marker: PhantomData,
        }
    }

    #[must_use]
    pub fn from_values(values: &[T]) -> Self {
        values.iter().copied().collect()
    }

    pub fn insert(&mut self, value: T) {
        self.bits |= value.bit();
    }

    #[must_use]
    pub fn contains(self, value: T) -> bool {
        self.bits & value.bit() != 0
    }

    /// True if the two sets share at least one value
    #[inline]
    #[must_use]
    pub fn intersects(self, other: Self) -> bool {
        self.bits & other.bits != 0
    }

    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
            marker: PhantomData,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Values in canonical domain order
    pub fn iter(self) -> impl Iterator<Item = T> {
        T::ALL.iter().copied().filter(move |&value| self.contains(value))
    }

    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        self.iter().map(FeatureValue::name).collect()
    }
}

impl<T: FeatureValue> Default for FeatureSet<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: FeatureValue> FromIterator<T> for FeatureSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::empty();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl<T: FeatureValue> fmt::Debug for FeatureSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: FeatureValue> fmt::Display for FeatureSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names().join(","))
    }
}

impl<T: FeatureValue> Serialize for FeatureSet<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(FeatureValue::name))
    }
}

impl<'de, T: FeatureValue> Deserialize<'de> for FeatureSet<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let names = Vec::<String>::deserialize(deserializer)?;
        names
            .iter()
            .map(|name| {
                T::from_name(&normalize_value(name)).ok_or_else(|| {
                    de::Error::custom(format!(
                        "unknown {} value '{name}'",
                        T::CATEGORY.name()
                    ))
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_names_round_trip() {
        for &height in Height::ALL {
            assert_eq!(Height::from_name(height.name()), Some(height));
        }
        assert_eq!(Manner::from_name("stop"), Some(Manner::Stop));
        assert_eq!(Manner::from_name("STOP"), None);
    }

    #[test]
    fn value_names_unique_across_categories() {
        let mut seen = std::collections::HashSet::new();
        for &category in Category::ALL {
            for name in category.value_names() {
                assert!(seen.insert(name), "'{name}' appears in two categories");
            }
        }
    }

    #[test]
    fn category_from_name_ignores_case() {
        assert_eq!(Category::from_name("manner"), Some(Category::Manner));
        assert_eq!(Category::from_name(" Height "), Some(Category::Height));
        assert_eq!(Category::from_name("TONE"), None);
    }

    #[test]
    fn category_applies_to() {
        assert_eq!(Category::Type.applies_to(), None);
        assert_eq!(Category::Place.applies_to(), Some(PhonemeType::Consonant));
        assert_eq!(Category::Depth.applies_to(), Some(PhonemeType::Vowel));
    }

    #[test]
    fn of_value_normalizes_input() {
        assert_eq!(Category::of_value("Near_Open"), Some(Category::Height));
        assert_eq!(Category::of_value("vowel"), Some(Category::Type));
        assert_eq!(Category::of_value("unvoiced"), Some(Category::Voice));
    }

    #[test]
    fn feature_set_intersection() {
        let stops = FeatureSet::from_values(&[Manner::Stop, Manner::Affricate]);
        let fricatives = FeatureSet::from_values(&[Manner::Fricative]);
        let mixed = FeatureSet::from_values(&[Manner::Fricative, Manner::Stop]);

        assert!(stops.intersects(mixed));
        assert!(!stops.intersects(fricatives));
        assert!(!FeatureSet::<Manner>::empty().intersects(stops));
    }

    #[test]
    fn feature_set_iterates_in_domain_order() {
        let set = FeatureSet::from_values(&[Depth::Back, Depth::Front, Depth::Central]);
        assert_eq!(set.names(), vec!["front", "central", "back"]);
        assert_eq!(set.len(), 3);
        assert_eq!(set.to_string(), "front,central,back");
    }

    #[test]
    fn feature_set_serde() {
        let set = FeatureSet::from_values(&[Place::Alveolar, Place::Bilabial]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["bilabial","alveolar"]"#);

        let back: FeatureSet<Place> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);

        let bad = serde_json::from_str::<FeatureSet<Place>>(r#"["uvular"]"#);
        assert!(bad.is_err());
    }
}
