//! Phoneme patterns
//!
//! A pattern is an ordered sequence of pattern phonemes. Order is the order
//! in which phonemes must line up against a word. Patterns only grow: there
//! is no reordering or removal, and starting over means building a new one.

use super::constraint::{PhonemeConstraint, RawConstraint, ValidationMode};
use crate::error::PatternError;
use serde::ser::{Serialize, Serializer};
use std::fmt;
use tracing::warn;

/// An ordered sequence of phoneme constraints
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Pattern {
    phonemes: Vec<PhonemeConstraint>,
}

impl Pattern {
    /// The empty pattern
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phonemes: Vec::new(),
        }
    }

    /// Append a phoneme to the end of the pattern
    pub fn push(&mut self, constraint: PhonemeConstraint) {
        if !constraint.is_satisfiable() {
            warn!(
                position = self.phonemes.len() + 1,
                %constraint,
                "pattern phoneme mixes consonant and vowel features and can never match"
            );
        }
        self.phonemes.push(constraint);
    }

    /// Builder form of [`Pattern::push`]
    #[must_use]
    pub fn then(mut self, constraint: PhonemeConstraint) -> Self {
        self.push(constraint);
        self
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.phonemes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phonemes.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn phonemes(&self) -> &[PhonemeConstraint] {
        &self.phonemes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PhonemeConstraint> {
        self.phonemes.iter()
    }

    /// Build a pattern from decoded JSON objects
    ///
    /// # Errors
    /// Returns [`PatternError::InvalidPhoneme`] naming the 1-based position of
    /// the first phoneme rejected under `validation`.
    pub fn from_raw(raw: &[RawConstraint], validation: ValidationMode) -> Result<Self, PatternError> {
        let mut pattern = Self::new();
        for (index, entry) in raw.iter().enumerate() {
            let constraint = PhonemeConstraint::from_raw(entry, validation).map_err(|source| {
                PatternError::InvalidPhoneme {
                    position: index + 1,
                    source,
                }
            })?;
            pattern.push(constraint);
        }
        Ok(pattern)
    }

    /// Parse a JSON array of pattern phonemes
    ///
    /// # Errors
    /// Returns [`PatternError::Json`] for malformed JSON, otherwise the same
    /// errors as [`Pattern::from_raw`].
    ///
    /// # Examples
    /// ```
    /// use phonolex::core::{Pattern, ValidationMode};
    ///
    /// let pattern = Pattern::from_json(
    ///     r#"[{"TYPE": "consonant", "MANNER": ["stop"]}, {}, {"TYPE": "vowel"}]"#,
    ///     ValidationMode::Strict,
    /// )
    /// .unwrap();
    /// assert_eq!(pattern.len(), 3);
    /// assert!(pattern.phonemes()[1].is_wildcard());
    /// ```
    pub fn from_json(json: &str, validation: ValidationMode) -> Result<Self, PatternError> {
        let raw: Vec<RawConstraint> = serde_json::from_str(json)?;
        Self::from_raw(&raw, validation)
    }

    /// The JSON form of this pattern
    #[must_use]
    pub fn to_raw(&self) -> Vec<RawConstraint> {
        self.phonemes.iter().map(PhonemeConstraint::to_raw).collect()
    }
}

impl FromIterator<PhonemeConstraint> for Pattern {
    fn from_iter<I: IntoIterator<Item = PhonemeConstraint>>(iter: I) -> Self {
        let mut pattern = Self::new();
        for constraint in iter {
            pattern.push(constraint);
        }
        pattern
    }
}

impl<'a> IntoIterator for &'a Pattern {
    type Item = &'a PhonemeConstraint;
    type IntoIter = std::slice::Iter<'a, PhonemeConstraint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_raw().serialize(serializer)
    }
}

impl fmt::Display for Pattern {
    /// Writes the text syntax, which parses back to an equal pattern
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens: Vec<String> = self.phonemes.iter().map(ToString::to_string).collect();
        f.write_str(&tokens.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Category, Manner, PhonemeType};
    use crate::error::ConstraintError;

    #[test]
    fn empty_pattern() {
        let pattern = Pattern::new();
        assert!(pattern.is_empty());
        assert_eq!(pattern.len(), 0);
        assert_eq!(pattern.to_string(), "");
    }

    #[test]
    fn push_preserves_order() {
        let stop = PhonemeConstraint::wildcard().with_manner(&[Manner::Stop]);
        let vowel = PhonemeConstraint::wildcard().with_type(PhonemeType::Vowel);

        let pattern = Pattern::new().then(stop).then(PhonemeConstraint::wildcard()).then(vowel);

        assert_eq!(pattern.len(), 3);
        assert_eq!(pattern.phonemes()[0], stop);
        assert!(pattern.phonemes()[1].is_wildcard());
        assert_eq!(pattern.phonemes()[2], vowel);
    }

    #[test]
    fn from_json_reports_position() {
        let result = Pattern::from_json(
            r#"[{"TYPE": "vowel"}, {"MANNER": ["trill"]}]"#,
            ValidationMode::Strict,
        );

        match result {
            Err(PatternError::InvalidPhoneme { position, source }) => {
                assert_eq!(position, 2);
                assert_eq!(
                    source,
                    ConstraintError::UnknownValue {
                        category: Category::Manner,
                        value: "trill".to_string(),
                    }
                );
            }
            other => panic!("expected InvalidPhoneme, got {other:?}"),
        }
    }

    #[test]
    fn from_json_rejects_conflicting_type_keys() {
        let result = Pattern::from_json(
            r#"[{"TYPE": "vowel", "type": "consonant"}]"#,
            ValidationMode::Strict,
        );
        assert!(matches!(
            result,
            Err(PatternError::InvalidPhoneme {
                position: 1,
                source: ConstraintError::MultipleTypes(2)
            })
        ));
    }

    #[test]
    fn from_json_rejects_malformed_json() {
        let result = Pattern::from_json("[{\"TYPE\": ", ValidationMode::Strict);
        assert!(matches!(result, Err(PatternError::Json(_))));
    }

    #[test]
    fn from_json_accepts_form_style_objects() {
        // Every key present, unset ones null
        let json = r#"[{"TYPE": "consonant", "VOICE": ["voiced"], "MANNER": null,
                        "PLACE": null, "SHAPE": null, "HEIGHT": null, "DEPTH": null}]"#;
        let pattern = Pattern::from_json(json, ValidationMode::Strict).unwrap();

        assert_eq!(
            pattern.phonemes()[0].categories(),
            vec![Category::Type, Category::Voice]
        );
    }

    #[test]
    fn serializes_as_raw_objects() {
        let pattern = Pattern::new().then(PhonemeConstraint::wildcard().with_type(PhonemeType::Vowel));
        let json = serde_json::to_value(&pattern).unwrap();

        assert_eq!(json[0]["TYPE"], "vowel");
        assert!(json[0]["MANNER"].is_null());
    }
}
