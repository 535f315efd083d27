//! The lesson's closed value sets and their matching functions.
//!
//! # Sets
//!
//! ```text
//! FirstQuarterCourse   identity only
//! Weekday              identity only
//! WeekdayIndex         implicit integer, from 0
//! WeekdayNumber        implicit integer, from 1
//! Face                 implicit text (the variant name)
//! Emoticon             explicit text
//! CardinalDirection    explicit text (arrows)
//! Month                explicit integer, 1..=12
//! ```
//!
//! [`catalog`] and [`lookup_raw`] expose all of them by name, for listing
//! and for raw-value lookups driven by user input.

pub mod course;
pub mod direction;
pub mod face;
pub mod month;
pub mod weekday;

use serde::Serialize;
use tracing::debug;

use crate::closed_set::{ClosedSet, RawAssignment, RawValued};
use crate::error::{EnumlabError, EnumlabResult};

pub use course::{
    compare_courses, course_kind, course_name, is_mobile_course, FirstQuarterCourse, MOBILE,
};
pub use direction::{help, CardinalDirection, HOMEWARD};
pub use face::{Emoticon, Face};
pub use month::{month_position, Month};
pub use weekday::{is_it_finally_weekend, weekday_name, Weekday, WeekdayIndex, WeekdayNumber, WEEKEND};

/// One variant as shown in a listing.
#[derive(Debug, Clone, Serialize)]
pub struct VariantListing {
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

/// A set with its variants in declaration order.
#[derive(Debug, Clone, Serialize)]
pub struct SetListing {
    pub name: &'static str,
    /// `None` for identity-only sets
    pub raw: Option<RawAssignment>,
    pub variants: Vec<VariantListing>,
}

fn plain_listing<T: ClosedSet>() -> SetListing {
    SetListing {
        name: T::SET_NAME,
        raw: None,
        variants: T::iter()
            .map(|v| VariantListing {
                name: v.name(),
                raw: None,
            })
            .collect(),
    }
}

fn raw_listing<T: RawValued>() -> SetListing {
    SetListing {
        name: T::SET_NAME,
        raw: Some(T::ASSIGNMENT),
        variants: T::raw_table()
            .into_iter()
            .map(|(v, raw)| VariantListing {
                name: v.name(),
                raw: Some(raw.to_string()),
            })
            .collect(),
    }
}

/// Every set in the lesson, in the order the pages introduce them.
pub fn catalog() -> Vec<SetListing> {
    vec![
        plain_listing::<FirstQuarterCourse>(),
        plain_listing::<Weekday>(),
        raw_listing::<Face>(),
        raw_listing::<Emoticon>(),
        raw_listing::<WeekdayIndex>(),
        raw_listing::<WeekdayNumber>(),
        raw_listing::<CardinalDirection>(),
        raw_listing::<Month>(),
    ]
}

fn find_by_raw<T: RawValued>(input: &str) -> EnumlabResult<Option<&'static str>> {
    Ok(T::from_raw_str(input)?.map(ClosedSet::name))
}

/// Looks up a variant by raw value in the set called `set`.
///
/// Set names match case-insensitively. Returns `Ok(None)` when the raw
/// value is well-formed but no variant carries it.
pub fn lookup_raw(set: &str, input: &str) -> EnumlabResult<Option<&'static str>> {
    debug!(set = %set, input = %input, "raw lookup");

    match set.to_ascii_lowercase().as_str() {
        "face" => find_by_raw::<Face>(input),
        "emoticon" => find_by_raw::<Emoticon>(input),
        "weekdayindex" => find_by_raw::<WeekdayIndex>(input),
        "weekdaynumber" => find_by_raw::<WeekdayNumber>(input),
        "cardinaldirection" => find_by_raw::<CardinalDirection>(input),
        "month" => find_by_raw::<Month>(input),
        "firstquartercourse" => Err(EnumlabError::invalid_raw(
            FirstQuarterCourse::SET_NAME,
            "set has no raw values",
        )),
        "weekday" => Err(EnumlabError::invalid_raw(
            Weekday::SET_NAME,
            "set has no raw values",
        )),
        _ => Err(EnumlabError::unknown_set(set)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lists_every_set_once() {
        let names: Vec<_> = catalog().iter().map(|s| s.name).collect();
        assert_eq!(names.len(), 8);
        for (i, name) in names.iter().enumerate() {
            assert!(!names[..i].contains(name), "{} listed twice", name);
        }
    }

    #[test]
    fn test_plain_sets_have_no_raw() {
        let listing = plain_listing::<Weekday>();
        assert!(listing.raw.is_none());
        assert_eq!(listing.variants.len(), 7);
        assert!(listing.variants.iter().all(|v| v.raw.is_none()));
    }

    #[test]
    fn test_lookup_case_insensitive_set() {
        assert_eq!(lookup_raw("month", "2").unwrap(), Some("February"));
        assert_eq!(lookup_raw("MONTH", "12").unwrap(), Some("December"));
    }

    #[test]
    fn test_lookup_not_found() {
        assert_eq!(lookup_raw("Month", "13").unwrap(), None);
        assert_eq!(lookup_raw("Emoticon", "XD").unwrap(), None);
    }

    #[test]
    fn test_lookup_errors() {
        assert!(matches!(
            lookup_raw("Month", "march"),
            Err(EnumlabError::InvalidRaw { .. })
        ));
        assert!(matches!(
            lookup_raw("Weekday", "1"),
            Err(EnumlabError::InvalidRaw { .. })
        ));
        assert!(matches!(
            lookup_raw("Planet", "3"),
            Err(EnumlabError::UnknownSet { .. })
        ));
    }
}
