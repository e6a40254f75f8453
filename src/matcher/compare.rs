//! Phoneme and sequence comparison
//!
//! These are the two predicates every match mode is built from.

use crate::core::{FeatureSet, FeatureValue, PhonemeConstraint, PhonemeFeatures};

/// A set category passes if unconstrained or if it shares a value with the word
#[inline]
fn category_matches<T: FeatureValue>(word: FeatureSet<T>, constraint: Option<FeatureSet<T>>) -> bool {
    constraint.is_none_or(|accepted| accepted.intersects(word))
}

/// Check one word phoneme against one pattern phoneme
///
/// `TYPE` must be equal; every other constrained category must share at
/// least one value with the word phoneme. Categories that do not apply to
/// the word phoneme's type are empty and never match. A wildcard matches
/// anything.
///
/// # Examples
/// ```
/// use phonolex::core::{Manner, PhonemeConstraint, PhonemeFeatures, Place, Voice};
/// use phonolex::matcher::phoneme_matches;
///
/// let k = PhonemeFeatures::consonant(Voice::Unvoiced, &[Manner::Stop], &[Place::Velar]);
///
/// assert!(phoneme_matches(&k, &PhonemeConstraint::wildcard()));
/// assert!(phoneme_matches(&k, &PhonemeConstraint::wildcard().with_manner(&[Manner::Stop, Manner::Nasal])));
/// assert!(!phoneme_matches(&k, &PhonemeConstraint::wildcard().with_manner(&[Manner::Fricative])));
/// ```
#[must_use]
pub fn phoneme_matches(word: &PhonemeFeatures, constraint: &PhonemeConstraint) -> bool {
    constraint.kind().is_none_or(|kind| kind == word.kind())
        && category_matches(word.voice(), constraint.voice())
        && category_matches(word.manner(), constraint.manner())
        && category_matches(word.place(), constraint.place())
        && category_matches(word.shape(), constraint.shape())
        && category_matches(word.height(), constraint.height())
        && category_matches(word.depth(), constraint.depth())
}

/// Check a pattern against the start of a phoneme sequence
///
/// Fails if the pattern is longer than the word; trailing word phonemes are
/// ignored.
#[must_use]
pub fn sequence_matches(word: &[PhonemeFeatures], pattern: &[PhonemeConstraint]) -> bool {
    pattern.len() <= word.len()
        && word
            .iter()
            .zip(pattern)
            .all(|(phoneme, constraint)| phoneme_matches(phoneme, constraint))
}
