//! Months of the year with explicit raw values 1 through 12.

use strum::{Display, EnumCount, EnumIter, FromRepr, IntoStaticStr};

use crate::closed_set::{ClosedSet, RawAssignment, RawValued};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount, IntoStaticStr, FromRepr,
)]
#[repr(i64)]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

impl ClosedSet for Month {
    const SET_NAME: &'static str = "Month";
}

impl RawValued for Month {
    type Raw = i64;
    const ASSIGNMENT: RawAssignment = RawAssignment::ExplicitInt;

    fn raw_value(self) -> i64 {
        self as i64
    }

    fn from_raw(raw: i64) -> Option<Self> {
        Self::from_repr(raw)
    }
}

/// English ordinal suffix for a month's number.
fn ordinal_suffix(month: Month) -> &'static str {
    match month {
        Month::January => "st",
        Month::February => "nd",
        Month::March => "rd",
        // Every other month takes "th"; deliberate catch-all.
        _ => "th",
    }
}

/// Where the month falls in the year, e.g. "March is the 3rd month of the year".
pub fn month_position(month: Month) -> String {
    format!(
        "{} is the {}{} month of the year",
        month,
        month.raw_value(),
        ordinal_suffix(month)
    )
}
