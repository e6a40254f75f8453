//! Core domain types for phoneme search
//!
//! Feature categories, word phonemes, pattern phonemes and patterns, the
//! ARPAbet inventory and word records. Nothing here performs I/O.

mod constraint;
mod features;
mod inventory;
mod pattern;
mod phoneme;
mod syntax;
mod word;

pub use constraint::{PhonemeConstraint, RawConstraint, RawValue, ValidationMode};
pub use features::{
    Category, Depth, FeatureSet, FeatureValue, Height, Manner, PhonemeType, Place, Shape, Voice,
    normalize_value,
};
pub use inventory::{Inventory, PhonemeInfo, strip_stress};
pub use pattern::Pattern;
pub use phoneme::PhonemeFeatures;
pub use syntax::parse_pattern;
pub use word::WordRecord;
