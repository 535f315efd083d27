//! Cross-set test suite for enumlab-core.
//!
//! The per-module tests pin individual strings; these check the properties
//! every closed set and matching function must share.

use crate::*;
use strum::{EnumCount, IntoEnumIterator};

fn assert_raw_round_trip<T: RawValued>() {
    for variant in T::iter() {
        assert_eq!(
            T::from_raw(variant.raw_value()),
            Some(variant),
            "{}::{} does not round-trip",
            T::SET_NAME,
            variant.name()
        );
    }
}

fn assert_total<T, R>(f: impl Fn(T) -> R)
where
    T: ClosedSet,
    R: ToString,
{
    for variant in T::iter() {
        assert!(
            !f(variant).to_string().is_empty(),
            "{}::{} maps to an empty result",
            T::SET_NAME,
            variant.name()
        );
    }
}

fn assert_names_unique<T: ClosedSet>() {
    let names: Vec<_> = T::iter().map(ClosedSet::name).collect();
    for (i, name) in names.iter().enumerate() {
        assert!(!names[..i].contains(name), "{} declared twice", name);
    }
}

// Property: every matching function is total and never empty
#[test]
fn test_matching_functions_are_total() {
    assert_total(course_name);
    assert_total(course_kind);
    assert_total(is_mobile_course);
    assert_total(weekday_name);
    assert_total(is_it_finally_weekend);
    assert_total(help);
    assert_total(month_position);
}

// Property: raw value -> variant -> raw value for every raw-valued set
#[test]
fn test_raw_round_trip_all_sets() {
    assert_raw_round_trip::<Face>();
    assert_raw_round_trip::<Emoticon>();
    assert_raw_round_trip::<WeekdayIndex>();
    assert_raw_round_trip::<WeekdayNumber>();
    assert_raw_round_trip::<CardinalDirection>();
    assert_raw_round_trip::<Month>();
}

// Property: unknown raw values produce absence, never a default variant
#[test]
fn test_unmatched_raw_is_absent() {
    assert_eq!(Face::from_raw(""), None);
    assert_eq!(Emoticon::from_raw(":-|"), None);
    assert_eq!(WeekdayIndex::from_raw(i64::MAX), None);
    assert_eq!(WeekdayNumber::from_raw(8), None);
    assert_eq!(CardinalDirection::from_raw("North"), None);
    assert_eq!(Month::from_raw(-3), None);
}

// Property: implicit integer raw values climb by one from their start
#[test]
fn test_implicit_sequences() {
    verify_int_assignment::<WeekdayIndex>().unwrap();
    verify_int_assignment::<WeekdayNumber>().unwrap();
    verify_int_assignment::<Month>().unwrap();

    let numbers: Vec<i64> = WeekdayNumber::iter().map(RawValued::raw_value).collect();
    assert_eq!(numbers, implicit_int_raw_values(1, WeekdayNumber::COUNT));

    for (index, number) in WeekdayIndex::iter().zip(WeekdayNumber::iter()) {
        assert_eq!(index.raw_value() + 1, number.raw_value());
        assert_eq!(index.name(), number.name());
    }
}

// Property: equality is by variant, however the value was built
#[test]
fn test_equality_ignores_construction_path() {
    let by_literal = Month::March;
    let by_name = Month::from_name("March").unwrap();
    let by_raw = Month::from_raw(3).unwrap();
    let by_text = Month::from_raw_str("3").unwrap().unwrap();
    assert_eq!(by_literal, by_name);
    assert_eq!(by_name, by_raw);
    assert_eq!(by_raw, by_text);
    assert_ne!(by_raw, Month::from_raw(4).unwrap());

    assert_eq!(Emoticon::from_name("Sad"), Emoticon::from_raw(":-("));
}

#[test]
fn test_construction_by_name() {
    assert_eq!(Weekday::from_name("Sunday"), Some(Weekday::Sunday));
    assert_eq!(Weekday::from_name("sunday"), None);
    assert!(matches!(
        FirstQuarterCourse::parse_name("Haskell"),
        Err(EnumlabError::UnknownVariant {
            set: "FirstQuarterCourse",
            ..
        })
    ));
}

#[test]
fn test_variant_names_unique() {
    assert_names_unique::<FirstQuarterCourse>();
    assert_names_unique::<Weekday>();
    assert_names_unique::<Face>();
    assert_names_unique::<Emoticon>();
    assert_names_unique::<CardinalDirection>();
    assert_names_unique::<Month>();
}

// Scenario: workdays share one arm, Saturday and Sunday each have their own
#[test]
fn test_weekend_scenario() {
    let lines: Vec<String> = Weekday::iter().map(is_it_finally_weekend).collect();
    assert_eq!(lines[0], "Monday is a regular workday.");
    assert_eq!(lines[4], "Friday is a regular workday.");
    assert_eq!(lines[5], "Wuhuuuu, it's SATURDAYYYYYY.");
    assert_eq!(lines[6], "It's a weekend day.");

    let weekend: Vec<_> = Weekday::iter().filter(|d| d.is_in(&WEEKEND)).collect();
    assert_eq!(weekend, vec![Weekday::Saturday, Weekday::Sunday]);
}

// Scenario: ordinal suffixes for the first four months
#[test]
fn test_month_scenario() {
    let lines: Vec<String> = (1..=4)
        .filter_map(Month::from_raw)
        .map(month_position)
        .collect();
    assert_eq!(
        lines,
        vec![
            "January is the 1st month of the year",
            "February is the 2nd month of the year",
            "March is the 3rd month of the year",
            "April is the 4th month of the year",
        ]
    );
}

// Full transcript: both pages in default order
#[test]
fn test_default_transcript() {
    let config = EnumlabConfig::default();
    let text = render_pages_plain(&run_pages(&config.pages()));
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 20);
    assert_eq!(lines[0], "these two are different");
    assert_eq!(lines[6], "Face::Happy raw value: Happy");
    assert_eq!(
        lines[10],
        "This direction South (↓) does not help the ship to get home."
    );
    assert_eq!(lines[19], "Emoticon with raw value 8-): Nerd");
}

#[test]
fn test_coverage_covers_every_variant() {
    for report in audit_all().unwrap() {
        let covered: usize = report.branches.iter().map(|b| b.variants.len()).sum();
        assert_eq!(covered, report.variant_count, "{}", report.function);
    }
}
