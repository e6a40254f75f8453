//! Text syntax for patterns
//!
//! A pattern is a whitespace-separated list of phoneme tokens:
//!
//! - `[]`, `*` or `_` is a wildcard phoneme
//! - `[KEY=v1,v2 KEY=v3]` constrains categories; entries may also be
//!   separated by `;` and values by `|`. Keys are case-insensitive.
//! - `[v1,v2]` is a bare value list; its category is the one the first value
//!   belongs to, and every value must belong to that same category
//! - an ARPAbet symbol such as `K` or `AE1` stands for that phoneme's
//!   complete feature-map
//!
//! ```text
//! [TYPE=consonant MANNER=stop] * [vowel close,near-close] T
//! ```

use super::constraint::{PhonemeConstraint, ValidationMode, reject};
use super::features::Category;
use super::inventory::Inventory;
use super::pattern::Pattern;
use crate::error::{ConstraintError, PatternError};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token<'a> {
    Group(&'a str),
    Word(&'a str),
}

fn tokenize(text: &str) -> Result<Vec<Token<'_>>, PatternError> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some(&(start, ch)) = chars.peek() {
        if ch.is_whitespace() {
            chars.next();
            continue;
        }

        match ch {
            '[' => {
                chars.next();
                let body_start = start + ch.len_utf8();
                let mut end = None;
                for (offset, inner) in chars.by_ref() {
                    match inner {
                        ']' => {
                            end = Some(offset);
                            break;
                        }
                        '[' => {
                            return Err(PatternError::UnexpectedBracket {
                                bracket: '[',
                                offset: char_position(text, offset),
                            });
                        }
                        _ => {}
                    }
                }
                let end = end.ok_or_else(|| PatternError::UnclosedBracket(char_position(text, start)))?;
                tokens.push(Token::Group(&text[body_start..end]));
            }
            ']' => {
                return Err(PatternError::UnexpectedBracket {
                    bracket: ']',
                    offset: char_position(text, start),
                });
            }
            _ => {
                let mut end = text.len();
                while let Some(&(offset, inner)) = chars.peek() {
                    if inner.is_whitespace() || inner == '[' || inner == ']' {
                        end = offset;
                        break;
                    }
                    chars.next();
                }
                tokens.push(Token::Word(&text[start..end]));
            }
        }
    }

    Ok(tokens)
}

/// 1-based character position of a byte offset, for error messages
fn char_position(text: &str, byte_offset: usize) -> usize {
    text[..byte_offset].chars().count() + 1
}

fn split_values(list: &str) -> Vec<&str> {
    list.split([',', '|'])
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .collect()
}

fn parse_group(body: &str, validation: ValidationMode) -> Result<PhonemeConstraint, ConstraintError> {
    let mut constraint = PhonemeConstraint::wildcard();

    for entry in body.split(|c: char| c.is_whitespace() || c == ';') {
        if entry.is_empty() {
            continue;
        }

        if let Some((key, list)) = entry.split_once('=') {
            let Some(category) = Category::from_name(key) else {
                reject(validation, ConstraintError::UnknownCategory(key.to_string()))?;
                continue;
            };
            constraint.add_values(category, &split_values(list), validation)?;
        } else {
            parse_bare_values(&mut constraint, &split_values(entry), validation)?;
        }
    }

    Ok(constraint)
}

fn parse_bare_values(
    constraint: &mut PhonemeConstraint,
    values: &[&str],
    validation: ValidationMode,
) -> Result<(), ConstraintError> {
    let mut category = None;
    let mut accepted = Vec::with_capacity(values.len());

    for &value in values {
        let Some(found) = Category::of_value(value) else {
            reject(validation, ConstraintError::UnrecognizedValue(value.to_string()))?;
            continue;
        };
        match category {
            None => category = Some(found),
            Some(expected) if expected != found => {
                reject(
                    validation,
                    ConstraintError::MixedCategories {
                        value: value.to_string(),
                        expected,
                        found,
                    },
                )?;
                continue;
            }
            Some(_) => {}
        }
        accepted.push(value);
    }

    match category {
        Some(category) => constraint.add_values(category, &accepted, validation),
        None => Ok(()),
    }
}

fn parse_word(word: &str, inventory: &Inventory) -> Result<PhonemeConstraint, ConstraintError> {
    if word == "*" || word == "_" {
        return Ok(PhonemeConstraint::wildcard());
    }

    inventory
        .lookup(word)
        .map(|info| PhonemeConstraint::exact(info.features()))
        .ok_or_else(|| ConstraintError::UnknownSymbol(word.to_string()))
}

/// Parse the text pattern syntax
///
/// Unknown phoneme symbols are errors in both validation modes, since
/// dropping one would shift every later position.
///
/// # Errors
/// Returns a [`PatternError`] for unbalanced brackets or, with the 1-based
/// position, for a phoneme rejected under `validation`.
///
/// # Examples
/// ```
/// use phonolex::core::{Inventory, PhonemeType, ValidationMode, parse_pattern};
///
/// let pattern = parse_pattern(
///     "[TYPE=consonant MANNER=stop] * [vowel] T",
///     Inventory::arpabet(),
///     ValidationMode::Strict,
/// )
/// .unwrap();
///
/// assert_eq!(pattern.len(), 4);
/// assert!(pattern.phonemes()[1].is_wildcard());
/// assert_eq!(pattern.phonemes()[2].kind(), Some(PhonemeType::Vowel));
/// ```
pub fn parse_pattern(
    text: &str,
    inventory: &Inventory,
    validation: ValidationMode,
) -> Result<Pattern, PatternError> {
    let mut pattern = Pattern::new();

    for (index, token) in tokenize(text)?.into_iter().enumerate() {
        let constraint = match token {
            Token::Group(body) => parse_group(body, validation),
            Token::Word(word) => parse_word(word, inventory),
        }
        .map_err(|source| PatternError::InvalidPhoneme {
            position: index + 1,
            source,
        })?;
        pattern.push(constraint);
    }

    Ok(pattern)
}
