//! Fully populated phoneme feature-maps
//!
//! These describe the phonemes of dictionary words. Categories that do not
//! apply to a phoneme's type (e.g. `MANNER` on a vowel) are empty sets.

use super::features::{Category, Depth, FeatureSet, Height, Manner, PhonemeType, Place, Shape, Voice};
use serde::{Deserialize, Serialize};

/// The feature-map of a single word phoneme
///
/// Serializes with the uppercase category keys used by corpus files:
/// `{"TYPE": "consonant", "VOICE": ["unvoiced"], "MANNER": ["stop"], ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhonemeFeatures {
    #[serde(rename = "TYPE")]
    kind: PhonemeType,
    #[serde(rename = "VOICE", default)]
    voice: FeatureSet<Voice>,
    #[serde(rename = "MANNER", default)]
    manner: FeatureSet<Manner>,
    #[serde(rename = "PLACE", default)]
    place: FeatureSet<Place>,
    #[serde(rename = "SHAPE", default)]
    shape: FeatureSet<Shape>,
    #[serde(rename = "HEIGHT", default)]
    height: FeatureSet<Height>,
    #[serde(rename = "DEPTH", default)]
    depth: FeatureSet<Depth>,
}

impl PhonemeFeatures {
    /// A consonant with the given voicing, manners and places
    ///
    /// # Examples
    /// ```
    /// use phonolex::core::{Manner, PhonemeFeatures, PhonemeType, Place, Voice};
    ///
    /// let k = PhonemeFeatures::consonant(Voice::Unvoiced, &[Manner::Stop], &[Place::Velar]);
    /// assert_eq!(k.kind(), PhonemeType::Consonant);
    /// assert!(k.height().is_empty());
    /// ```
    #[must_use]
    pub fn consonant(voice: Voice, manner: &[Manner], place: &[Place]) -> Self {
        Self {
            kind: PhonemeType::Consonant,
            voice: FeatureSet::from_values(&[voice]),
            manner: FeatureSet::from_values(manner),
            place: FeatureSet::from_values(place),
            shape: FeatureSet::empty(),
            height: FeatureSet::empty(),
            depth: FeatureSet::empty(),
        }
    }

    /// A vowel with the given rounding, heights and depths
    ///
    /// Diphthongs carry both qualities in `height` and `depth`.
    #[must_use]
    pub fn vowel(shape: Shape, height: &[Height], depth: &[Depth]) -> Self {
        Self {
            kind: PhonemeType::Vowel,
            voice: FeatureSet::empty(),
            manner: FeatureSet::empty(),
            place: FeatureSet::empty(),
            shape: FeatureSet::from_values(&[shape]),
            height: FeatureSet::from_values(height),
            depth: FeatureSet::from_values(depth),
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> PhonemeType {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn is_vowel(&self) -> bool {
        self.kind == PhonemeType::Vowel
    }

    #[inline]
    #[must_use]
    pub const fn voice(&self) -> FeatureSet<Voice> {
        self.voice
    }

    #[inline]
    #[must_use]
    pub const fn manner(&self) -> FeatureSet<Manner> {
        self.manner
    }

    #[inline]
    #[must_use]
    pub const fn place(&self) -> FeatureSet<Place> {
        self.place
    }

    #[inline]
    #[must_use]
    pub const fn shape(&self) -> FeatureSet<Shape> {
        self.shape
    }

    #[inline]
    #[must_use]
    pub const fn height(&self) -> FeatureSet<Height> {
        self.height
    }

    #[inline]
    #[must_use]
    pub const fn depth(&self) -> FeatureSet<Depth> {
        self.depth
    }

    /// Value names per category, skipping categories that are empty
    #[must_use]
    pub fn describe(&self) -> Vec<(Category, Vec<&'static str>)> {
        let entries = [
            (Category::Type, vec![self.kind.name()]),
            (Category::Voice, self.voice.names()),
            (Category::Manner, self.manner.names()),
            (Category::Place, self.place.names()),
            (Category::Shape, self.shape.names()),
            (Category::Height, self.height.names()),
            (Category::Depth, self.depth.names()),
        ];

        entries
            .into_iter()
            .filter(|(_, names)| !names.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consonant_leaves_vowel_categories_empty() {
        let s = PhonemeFeatures::consonant(Voice::Unvoiced, &[Manner::Fricative], &[Place::Alveolar]);

        assert!(!s.is_vowel());
        assert!(s.voice().contains(Voice::Unvoiced));
        assert!(s.shape().is_empty());
        assert!(s.height().is_empty());
        assert!(s.depth().is_empty());
    }

    #[test]
    fn vowel_leaves_consonant_categories_empty() {
        let iy = PhonemeFeatures::vowel(Shape::Unrounded, &[Height::Close], &[Depth::Front]);

        assert!(iy.is_vowel());
        assert!(iy.voice().is_empty());
        assert!(iy.manner().is_empty());
        assert!(iy.place().is_empty());
    }

    #[test]
    fn describe_lists_populated_categories() {
        let l = PhonemeFeatures::consonant(
            Voice::Voiced,
            &[Manner::Liquid, Manner::Lateral],
            &[Place::Alveolar],
        );

        let described = l.describe();
        assert_eq!(described.len(), 4);
        assert_eq!(described[0], (Category::Type, vec!["consonant"]));
        assert_eq!(described[2], (Category::Manner, vec!["liquid", "lateral"]));
    }

    #[test]
    fn serde_uses_category_keys() {
        let t = PhonemeFeatures::consonant(Voice::Unvoiced, &[Manner::Stop], &[Place::Alveolar]);
        let json = serde_json::to_value(t).unwrap();

        assert_eq!(json["TYPE"], "consonant");
        assert_eq!(json["MANNER"], serde_json::json!(["stop"]));
        assert_eq!(json["HEIGHT"], serde_json::json!([]));

        let parsed: PhonemeFeatures =
            serde_json::from_str(r#"{"TYPE": "vowel", "SHAPE": ["rounded"], "HEIGHT": ["close"]}"#)
                .unwrap();
        assert!(parsed.is_vowel());
        assert!(parsed.depth().is_empty());
        assert!(parsed.height().contains(Height::Close));
    }
}
