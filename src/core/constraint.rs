//! Pattern phonemes: partial feature-maps that a word phoneme must satisfy
//!
//! Every category is either absent (unconstrained) or a non-empty set of
//! accepted values. A constraint with no categories is a wildcard.

use super::features::{
    Category, Depth, FeatureSet, FeatureValue, Height, Manner, PhonemeType, Place, Shape, Voice,
    normalize_value,
};
use super::phoneme::PhonemeFeatures;
use crate::error::ConstraintError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// How unknown categories, unknown values and empty values are handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Reject the pattern phoneme with an error
    #[default]
    Strict,
    /// Treat the offending item as absent and keep going
    Permissive,
}

/// A category value as written in pattern JSON: one name or a list of names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    One(String),
    Many(Vec<String>),
}

impl RawValue {
    fn values(&self) -> Vec<&str> {
        match self {
            Self::One(value) => vec![value.as_str()],
            Self::Many(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

/// An unvalidated pattern phoneme keyed by category name; `null` means absent
pub type RawConstraint = BTreeMap<String, Option<RawValue>>;

/// A single pattern phoneme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PhonemeConstraint {
    kind: Option<PhonemeType>,
    voice: Option<FeatureSet<Voice>>,
    manner: Option<FeatureSet<Manner>>,
    place: Option<FeatureSet<Place>>,
    shape: Option<FeatureSet<Shape>>,
    height: Option<FeatureSet<Height>>,
    depth: Option<FeatureSet<Depth>>,
}

/// `Some(set)` for a non-empty slice, `None` otherwise
fn present<T: FeatureValue>(values: &[T]) -> Option<FeatureSet<T>> {
    let set = FeatureSet::from_values(values);
    (!set.is_empty()).then_some(set)
}

fn present_set<T: FeatureValue>(set: FeatureSet<T>) -> Option<FeatureSet<T>> {
    (!set.is_empty()).then_some(set)
}

impl PhonemeConstraint {
    /// A constraint that matches any phoneme
    #[must_use]
    pub fn wildcard() -> Self {
        Self::default()
    }

    /// The constraint that accepts exactly the values of `features`
    ///
    /// # Examples
    /// ```
    /// use phonolex::core::{Manner, PhonemeConstraint, PhonemeFeatures, Place, Voice};
    ///
    /// let k = PhonemeFeatures::consonant(Voice::Unvoiced, &[Manner::Stop], &[Place::Velar]);
    /// let constraint = PhonemeConstraint::exact(&k);
    /// assert!(!constraint.is_wildcard());
    /// assert!(constraint.height().is_none());
    /// ```
    #[must_use]
    pub fn exact(features: &PhonemeFeatures) -> Self {
        Self {
            kind: Some(features.kind()),
            voice: present_set(features.voice()),
            manner: present_set(features.manner()),
            place: present_set(features.place()),
            shape: present_set(features.shape()),
            height: present_set(features.height()),
            depth: present_set(features.depth()),
        }
    }

    #[must_use]
    pub const fn with_type(mut self, kind: PhonemeType) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Empty slices leave the category unconstrained; the same holds for the
    /// other `with_*` builders.
    #[must_use]
    pub fn with_voice(mut self, values: &[Voice]) -> Self {
        self.voice = present(values);
        self
    }

    #[must_use]
    pub fn with_manner(mut self, values: &[Manner]) -> Self {
        self.manner = present(values);
        self
    }

    #[must_use]
    pub fn with_place(mut self, values: &[Place]) -> Self {
        self.place = present(values);
        self
    }

    #[must_use]
    pub fn with_shape(mut self, values: &[Shape]) -> Self {
        self.shape = present(values);
        self
    }

    #[must_use]
    pub fn with_height(mut self, values: &[Height]) -> Self {
        self.height = present(values);
        self
    }

    #[must_use]
    pub fn with_depth(mut self, values: &[Depth]) -> Self {
        self.depth = present(values);
        self
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> Option<PhonemeType> {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn voice(&self) -> Option<FeatureSet<Voice>> {
        self.voice
    }

    #[inline]
    #[must_use]
    pub const fn manner(&self) -> Option<FeatureSet<Manner>> {
        self.manner
    }

    #[inline]
    #[must_use]
    pub const fn place(&self) -> Option<FeatureSet<Place>> {
        self.place
    }

    #[inline]
    #[must_use]
    pub const fn shape(&self) -> Option<FeatureSet<Shape>> {
        self.shape
    }

    #[inline]
    #[must_use]
    pub const fn height(&self) -> Option<FeatureSet<Height>> {
        self.height
    }

    #[inline]
    #[must_use]
    pub const fn depth(&self) -> Option<FeatureSet<Depth>> {
        self.depth
    }

    /// True if no category is constrained
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.categories().is_empty()
    }

    /// Categories this constraint sets, in canonical order
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        let flags = [
            (Category::Type, self.kind.is_some()),
            (Category::Voice, self.voice.is_some()),
            (Category::Manner, self.manner.is_some()),
            (Category::Place, self.place.is_some()),
            (Category::Shape, self.shape.is_some()),
            (Category::Height, self.height.is_some()),
            (Category::Depth, self.depth.is_some()),
        ];

        flags
            .into_iter()
            .filter_map(|(category, set)| set.then_some(category))
            .collect()
    }

    /// False if no phoneme can satisfy this constraint
    ///
    /// That happens when consonant and vowel categories are mixed, or when
    /// `TYPE` contradicts the categories that are set.
    #[must_use]
    pub fn is_satisfiable(&self) -> bool {
        let mut implied: Option<PhonemeType> = self.kind;
        for category in self.categories() {
            let Some(kind) = category.applies_to() else {
                continue;
            };
            match implied {
                Some(existing) if existing != kind => return false,
                _ => implied = Some(kind),
            }
        }
        true
    }

    /// Value names per set category, in canonical order
    #[must_use]
    pub fn describe(&self) -> Vec<(Category, Vec<&'static str>)> {
        let entries = [
            (Category::Type, self.kind.map(|kind| vec![kind.name()])),
            (Category::Voice, self.voice.map(FeatureSet::names)),
            (Category::Manner, self.manner.map(FeatureSet::names)),
            (Category::Place, self.place.map(FeatureSet::names)),
            (Category::Shape, self.shape.map(FeatureSet::names)),
            (Category::Height, self.height.map(FeatureSet::names)),
            (Category::Depth, self.depth.map(FeatureSet::names)),
        ];

        entries
            .into_iter()
            .filter_map(|(category, names)| names.map(|names| (category, names)))
            .collect()
    }

    /// Build a constraint from its JSON form
    ///
    /// # Errors
    /// In [`ValidationMode::Strict`], returns an error for an unknown
    /// category, an unknown value, an empty value, or more than one `TYPE`.
    /// In [`ValidationMode::Permissive`] those items are dropped instead.
    pub fn from_raw(raw: &RawConstraint, validation: ValidationMode) -> Result<Self, ConstraintError> {
        let mut constraint = Self::wildcard();

        for (key, value) in raw {
            let Some(category) = Category::from_name(key) else {
                reject(validation, ConstraintError::UnknownCategory(key.clone()))?;
                continue;
            };
            if let Some(value) = value {
                constraint.add_values(category, &value.values(), validation)?;
            }
        }

        Ok(constraint)
    }

    /// The JSON form of this constraint; every category key is present
    #[must_use]
    pub fn to_raw(&self) -> RawConstraint {
        let described = self.describe();
        Category::ALL
            .iter()
            .map(|&category| {
                let value = described
                    .iter()
                    .find(|(set, _)| *set == category)
                    .map(|(_, names)| {
                        if category == Category::Type {
                            RawValue::One(names.join(""))
                        } else {
                            RawValue::Many(names.iter().map(ToString::to_string).collect())
                        }
                    });
                (category.name().to_string(), value)
            })
            .collect()
    }

    /// Add named values to a category, merging with values already there
    ///
    /// Value names are matched case-insensitively with `_` read as `-`.
    ///
    /// # Errors
    /// Same rules as [`PhonemeConstraint::from_raw`].
    pub fn add_values(
        &mut self,
        category: Category,
        values: &[&str],
        validation: ValidationMode,
    ) -> Result<(), ConstraintError> {
        match category {
            Category::Type => {
                let kinds = parse_values(category, values, validation, PhonemeType::from_name)?;
                match kinds.as_slice() {
                    [] => {}
                    [kind] => {
                        // TYPE is a scalar: a second, different value is a conflict
                        if let Some(existing) = self.kind
                            && existing != *kind
                        {
                            reject(validation, ConstraintError::MultipleTypes(2))?;
                        }
                        self.kind = Some(*kind);
                    }
                    _ => reject(validation, ConstraintError::MultipleTypes(kinds.len()))?,
                }
            }
            Category::Voice => self.voice = merge(self.voice, parse_set(values, validation)?),
            Category::Manner => self.manner = merge(self.manner, parse_set(values, validation)?),
            Category::Place => self.place = merge(self.place, parse_set(values, validation)?),
            Category::Shape => self.shape = merge(self.shape, parse_set(values, validation)?),
            Category::Height => self.height = merge(self.height, parse_set(values, validation)?),
            Category::Depth => self.depth = merge(self.depth, parse_set(values, validation)?),
        }
        Ok(())
    }
}

/// Strict mode turns the problem into an error, permissive mode logs it
pub(crate) fn reject(validation: ValidationMode, error: ConstraintError) -> Result<(), ConstraintError> {
    match validation {
        ValidationMode::Strict => Err(error),
        ValidationMode::Permissive => {
            debug!(%error, "ignoring pattern item");
            Ok(())
        }
    }
}

fn parse_values<T>(
    category: Category,
    values: &[&str],
    validation: ValidationMode,
    lookup: impl Fn(&str) -> Option<T>,
) -> Result<Vec<T>, ConstraintError> {
    let mut parsed = Vec::with_capacity(values.len());

    for raw in values {
        let value = normalize_value(raw);
        if value.is_empty() {
            continue;
        }
        match lookup(&value) {
            Some(parsed_value) => parsed.push(parsed_value),
            None => reject(
                validation,
                ConstraintError::UnknownValue {
                    category,
                    value: raw.trim().to_string(),
                },
            )?,
        }
    }

    if parsed.is_empty() {
        reject(validation, ConstraintError::EmptyValue(category))?;
    }

    Ok(parsed)
}

fn parse_set<T: FeatureValue>(
    values: &[&str],
    validation: ValidationMode,
) -> Result<FeatureSet<T>, ConstraintError> {
    let parsed = parse_values(T::CATEGORY, values, validation, T::from_name)?;
    Ok(parsed.into_iter().collect())
}

fn merge<T: FeatureValue>(
    existing: Option<FeatureSet<T>>,
    added: FeatureSet<T>,
) -> Option<FeatureSet<T>> {
    match existing {
        Some(set) => Some(set.union(added)),
        None => present_set(added),
    }
}

impl fmt::Display for PhonemeConstraint {
    /// Writes the text-syntax form, e.g. `[TYPE=vowel HEIGHT=close,near-close]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<String> = self
            .describe()
            .into_iter()
            .map(|(category, names)| format!("{category}={}", names.join(",")))
            .collect();
        write!(f, "[{}]", entries.join(" "))
    }
}
