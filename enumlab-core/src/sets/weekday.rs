//! Days of the week, with and without raw values.
//!
//! - [`Weekday`]: identity only
//! - [`WeekdayIndex`]: implicit integer raw values starting at 0
//! - [`WeekdayNumber`]: implicit integer raw values starting at 1
//!
//! The integer variants use `#[repr(i64)]` discriminants, which count up
//! by one from the first variant exactly like the implicit raw-value rule.

use strum::{Display, EnumCount, EnumIter, FromRepr, IntoStaticStr};

use crate::closed_set::{ClosedSet, RawAssignment, RawValued};

/// A day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount, IntoStaticStr)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl ClosedSet for Weekday {
    const SET_NAME: &'static str = "Weekday";
}

/// Saturday and Sunday.
pub const WEEKEND: [Weekday; 2] = [Weekday::Saturday, Weekday::Sunday];

/// A day of the week keyed by a zero-based index.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount, IntoStaticStr, FromRepr,
)]
#[repr(i64)]
pub enum WeekdayIndex {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl ClosedSet for WeekdayIndex {
    const SET_NAME: &'static str = "WeekdayIndex";
}

impl RawValued for WeekdayIndex {
    type Raw = i64;
    const ASSIGNMENT: RawAssignment = RawAssignment::ImplicitInt { start: 0 };

    fn raw_value(self) -> i64 {
        self as i64
    }

    fn from_raw(raw: i64) -> Option<Self> {
        Self::from_repr(raw)
    }
}

/// A day of the week keyed by its 1-based number.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount, IntoStaticStr, FromRepr,
)]
#[repr(i64)]
pub enum WeekdayNumber {
    Monday = 1,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl ClosedSet for WeekdayNumber {
    const SET_NAME: &'static str = "WeekdayNumber";
}

impl RawValued for WeekdayNumber {
    type Raw = i64;
    const ASSIGNMENT: RawAssignment = RawAssignment::ImplicitInt { start: 1 };

    fn raw_value(self) -> i64 {
        self as i64
    }

    fn from_raw(raw: i64) -> Option<Self> {
        Self::from_repr(raw)
    }
}

/// Names the day.
pub fn weekday_name(day: Weekday) -> String {
    format!("This weekday is called {}", day)
}

/// Workday, Saturday, or Sunday.
///
/// Saturday and Sunday get separate arms with different wording, so this
/// is a three-way split rather than a weekend check.
pub fn is_it_finally_weekend(day: Weekday) -> String {
    match day {
        Weekday::Monday
        | Weekday::Tuesday
        | Weekday::Wednesday
        | Weekday::Thursday
        | Weekday::Friday => format!("{} is a regular workday.", day),
        Weekday::Saturday => "Wuhuuuu, it's SATURDAYYYYYY.".to_string(),
        Weekday::Sunday => "It's a weekend day.".to_string(),
    }
}
