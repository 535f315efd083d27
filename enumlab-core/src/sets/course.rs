//! First-quarter technical courses.
//!
//! A `String` field would accept any course name; the enum only admits
//! the five courses that actually run, so an invalid course cannot be
//! constructed in the first place.

use strum::{Display, EnumCount, EnumIter, IntoStaticStr};

use crate::closed_set::ClosedSet;

/// The courses offered in the first quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount, IntoStaticStr)]
pub enum FirstQuarterCourse {
    Python,
    Frontend,
    Ruby,
    IosAdvanced,
    IosAccelerated,
}

impl ClosedSet for FirstQuarterCourse {
    const SET_NAME: &'static str = "FirstQuarterCourse";
}

/// Courses taught on iOS.
pub const MOBILE: [FirstQuarterCourse; 2] = [
    FirstQuarterCourse::IosAdvanced,
    FirstQuarterCourse::IosAccelerated,
];

/// Full catalogue title of a course.
pub fn course_name(course: FirstQuarterCourse) -> &'static str {
    match course {
        FirstQuarterCourse::Python => "Back-end Web: API Services with Python & Flask",
        FirstQuarterCourse::Frontend => "Front-end Web: Interactive Websites with JavaScript",
        FirstQuarterCourse::Ruby => "Full-stack development with Ruby",
        FirstQuarterCourse::IosAdvanced => "Advanced Topics in iOS & Swift",
        FirstQuarterCourse::IosAccelerated => "Mobile Apps with iOS & Swift",
    }
}

/// Platform a course targets, grouping several courses per arm.
pub fn course_kind(course: FirstQuarterCourse) -> &'static str {
    match course {
        FirstQuarterCourse::Python | FirstQuarterCourse::Frontend | FirstQuarterCourse::Ruby => {
            "Web"
        }
        FirstQuarterCourse::IosAccelerated | FirstQuarterCourse::IosAdvanced => "Mobile",
    }
}

/// Whether a course is a mobile course.
pub fn is_mobile_course(course: FirstQuarterCourse) -> bool {
    match course {
        FirstQuarterCourse::IosAdvanced | FirstQuarterCourse::IosAccelerated => true,
        // Catch-all on purpose: a course added later counts as non-mobile
        // without touching this function. The compiler will not flag it.
        _ => false,
    }
}

/// Equality check phrased the way the lesson prints it.
pub fn compare_courses(a: FirstQuarterCourse, b: FirstQuarterCourse) -> &'static str {
    if a == b {
        "these two are the same"
    } else {
        "these two are different"
    }
}
