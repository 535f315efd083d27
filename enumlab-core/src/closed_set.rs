//! The closed value set abstraction.
//!
//! A closed set is a Rust `enum` without payloads whose variants are listed
//! by `strum::EnumIter`. Raw values are an optional second layer: a scalar
//! bound one-to-one to each variant, used for lookup and display but never
//! for equality (equality is derived `PartialEq` on the variant itself).
//!
//! ```ignore
//! use enumlab_core::prelude::*;
//!
//! assert_eq!(Month::from_raw(3), Some(Month::March));
//! assert_eq!(Month::from_raw(13), None);
//! ```

use std::fmt;

use serde::Serialize;
use strum::IntoEnumIterator;

use crate::error::{EnumlabError, EnumlabResult};

/// A finite, ordered set of named variants fixed at definition time.
///
/// Implementors derive `EnumIter` and `IntoStaticStr`; everything else
/// has a default built on the declared variant order.
pub trait ClosedSet:
    Copy + Eq + fmt::Debug + IntoEnumIterator + Into<&'static str> + 'static
{
    /// Name of the set as shown in listings and errors.
    const SET_NAME: &'static str;

    /// The variant's declared name.
    fn name(self) -> &'static str {
        self.into()
    }

    /// All variants in declaration order.
    fn variants() -> Vec<Self> {
        Self::iter().collect()
    }

    /// Zero-based position in declaration order.
    fn ordinal(self) -> usize {
        Self::iter().take_while(|v| *v != self).count()
    }

    /// Selects a variant by its declared name.
    fn from_name(name: &str) -> Option<Self> {
        Self::iter().find(|v| v.name() == name)
    }

    /// Like [`ClosedSet::from_name`], with a typed error for callers that
    /// need to report the failure.
    fn parse_name(name: &str) -> EnumlabResult<Self> {
        Self::from_name(name).ok_or_else(|| EnumlabError::unknown_variant(Self::SET_NAME, name))
    }

    /// Whether this value is one of `group`.
    ///
    /// Groups are fixed variant lists, so membership never depends on
    /// how raw values were assigned.
    fn is_in(self, group: &[Self]) -> bool {
        group.contains(&self)
    }
}

/// How a set's raw values were assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RawAssignment {
    /// Text raw values equal the variant name
    ImplicitText,
    /// Text raw values written out per variant
    ExplicitText,
    /// Integer raw values counted up by one from `start`
    ImplicitInt { start: i64 },
    /// Integer raw values written out per variant
    ExplicitInt,
}

impl fmt::Display for RawAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImplicitText => f.write_str("implicit text"),
            Self::ExplicitText => f.write_str("explicit text"),
            Self::ImplicitInt { start } => write!(f, "implicit integer from {}", start),
            Self::ExplicitInt => f.write_str("explicit integer"),
        }
    }
}

/// Scalar types usable as raw values.
pub trait RawScalar: Copy + PartialEq + fmt::Display + fmt::Debug {
    /// Compares this raw value against user input.
    ///
    /// Returns `Err` when the input cannot be read as this scalar type at
    /// all, which is different from reading fine and matching nothing.
    fn matches_input(self, input: &str) -> Result<bool, String>;
}

impl RawScalar for i64 {
    fn matches_input(self, input: &str) -> Result<bool, String> {
        input
            .trim()
            .parse::<i64>()
            .map(|n| n == self)
            .map_err(|e| format!("'{}' is not an integer: {}", input, e))
    }
}

impl RawScalar for &'static str {
    fn matches_input(self, input: &str) -> Result<bool, String> {
        Ok(self == input)
    }
}

/// A closed set whose variants each carry a raw value.
pub trait RawValued: ClosedSet {
    /// The underlying scalar type.
    type Raw: RawScalar;

    /// The assignment rule, for listings and sequence checks.
    const ASSIGNMENT: RawAssignment;

    /// The variant's raw value.
    fn raw_value(self) -> Self::Raw;

    /// Looks up the variant whose raw value equals `raw`.
    ///
    /// No partial or default match: anything else is `None`.
    fn from_raw(raw: Self::Raw) -> Option<Self> {
        Self::iter().find(|v| v.raw_value() == raw)
    }

    /// Looks up a variant from textual input.
    ///
    /// `Ok(None)` means the input was well-formed but no variant carries it.
    fn from_raw_str(input: &str) -> EnumlabResult<Option<Self>> {
        for variant in Self::iter() {
            let hit = variant
                .raw_value()
                .matches_input(input)
                .map_err(|msg| EnumlabError::invalid_raw(Self::SET_NAME, msg))?;
            if hit {
                return Ok(Some(variant));
            }
        }
        Ok(None)
    }

    /// Every variant paired with its raw value, in declaration order.
    fn raw_table() -> Vec<(Self, Self::Raw)> {
        Self::iter().map(|v| (v, v.raw_value())).collect()
    }
}

/// Generation rule for implicit integer raw values: `start`, `start + 1`, ...
pub fn implicit_int_raw_values(start: i64, count: usize) -> Vec<i64> {
    (0..count as i64).map(|offset| start + offset).collect()
}

/// Checks an integer-backed set against its declared assignment.
///
/// For `ImplicitInt` sets the raw values must follow
/// [`implicit_int_raw_values`]; for every set the raw values must be
/// distinct so that lookup is one-to-one.
pub fn verify_int_assignment<T>() -> EnumlabResult<()>
where
    T: RawValued<Raw = i64>,
{
    let actual: Vec<i64> = T::iter().map(RawValued::raw_value).collect();

    if let RawAssignment::ImplicitInt { start } = T::ASSIGNMENT {
        let expected = implicit_int_raw_values(start, actual.len());
        if actual != expected {
            return Err(EnumlabError::invalid_raw(
                T::SET_NAME,
                format!("expected raw values {:?}, found {:?}", expected, actual),
            ));
        }
    }

    for (i, raw) in actual.iter().enumerate() {
        if actual[..i].contains(raw) {
            return Err(EnumlabError::invalid_raw(
                T::SET_NAME,
                format!("raw value {} is assigned twice", raw),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_implicit_sequence_from_zero() {
        assert_eq!(implicit_int_raw_values(0, 4), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_implicit_sequence_from_start() {
        assert_eq!(implicit_int_raw_values(1, 3), vec![1, 2, 3]);
        assert!(implicit_int_raw_values(5, 0).is_empty());
    }

    #[test]
    fn test_int_matches_input() {
        assert_eq!(7i64.matches_input("7"), Ok(true));
        assert_eq!(7i64.matches_input(" 7 "), Ok(true));
        assert_eq!(7i64.matches_input("8"), Ok(false));
        assert!(7i64.matches_input("seven").is_err());
    }

    #[test]
    fn test_text_matches_input() {
        assert_eq!(":-)".matches_input(":-)"), Ok(true));
        assert_eq!(":-)".matches_input(":-("), Ok(false));
    }

    #[test]
    fn test_assignment_display() {
        assert_eq!(
            RawAssignment::ImplicitInt { start: 1 }.to_string(),
            "implicit integer from 1"
        );
        assert_eq!(RawAssignment::ExplicitText.to_string(), "explicit text");
    }
}
