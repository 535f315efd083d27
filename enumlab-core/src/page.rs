//! The lesson pages as ordered scripts.
//!
//! Each page is a fixed list of statements. Running a page evaluates them
//! top to bottom and collects one output line per statement, so the order
//! of [`PageOutput::lines`] is the statement order.

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr};
use tracing::info;

use crate::closed_set::{ClosedSet, RawValued};
use crate::error::{EnumlabError, EnumlabResult};
use crate::sets::{
    compare_courses, course_kind, course_name, help, is_it_finally_weekend, is_mobile_course,
    month_position, weekday_name, CardinalDirection, Emoticon, Face, FirstQuarterCourse, Month,
    Weekday, WeekdayIndex, WeekdayNumber,
};

/// A lesson page.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    /// Plain enums, equality, `match` with bundled arms
    ControlFlow,
    /// Raw values, implicit and explicit, and lookups
    RawValues,
}

impl ClosedSet for Page {
    const SET_NAME: &'static str = "Page";
}

impl Page {
    /// Parses a page name such as `control-flow`.
    pub fn parse(name: &str) -> EnumlabResult<Self> {
        Self::from_name(name).ok_or_else(|| EnumlabError::unknown_page(name))
    }

    /// Evaluates the page's statements in order.
    pub fn run(self) -> PageOutput {
        let lines = match self {
            Self::ControlFlow => control_flow(),
            Self::RawValues => raw_values(),
        };
        info!(page = self.name(), lines = lines.len(), "ran page");
        PageOutput { page: self, lines }
    }
}

/// Lines printed by one page.
#[derive(Debug, Clone, Serialize)]
pub struct PageOutput {
    pub page: Page,
    pub lines: Vec<String>,
}

/// Runs `pages` in the given order.
pub fn run_pages(pages: &[Page]) -> Vec<PageOutput> {
    pages.iter().map(|p| p.run()).collect()
}

fn control_flow() -> Vec<String> {
    let mut out = Vec::new();

    let course1 = FirstQuarterCourse::Python;
    let course2: FirstQuarterCourse = FirstQuarterCourse::Frontend;
    out.push(compare_courses(course1, course2).to_string());

    out.push(format!("The course is called: {}", course_name(course1)));
    out.push(format!("The course is of type: {}", course_kind(course1)));
    out.push(format!(
        "The course is a mobile course: {}",
        is_mobile_course(course1)
    ));

    out.push(weekday_name(Weekday::Tuesday));
    out.push(is_it_finally_weekend(Weekday::Saturday));

    out
}

fn describe_raw<T: RawValued>(variant: T) -> String {
    format!(
        "{}::{} raw value: {}",
        T::SET_NAME,
        variant.name(),
        variant.raw_value()
    )
}

fn describe_lookup<T: RawValued>(raw: T::Raw) -> String {
    let found = T::from_raw(raw).map_or("not found", ClosedSet::name);
    format!("{} with raw value {}: {}", T::SET_NAME, raw, found)
}

fn raw_values() -> Vec<String> {
    let mut out = vec![
        describe_raw(Face::Happy),
        describe_raw(Emoticon::Happy),
        describe_raw(WeekdayIndex::Monday),
        describe_raw(WeekdayNumber::Monday),
        help(CardinalDirection::South),
    ];

    for month in [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::November,
    ] {
        out.push(month_position(month));
    }

    out.push(describe_lookup::<Month>(3));
    out.push(describe_lookup::<Month>(13));
    out.push(describe_lookup::<Emoticon>("8-)"));

    out
}
