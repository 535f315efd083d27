//! enumlab-core: closed value sets and exhaustive matching, as lesson pages.
//!
//! The crate models small enumerations (courses, weekdays, faces, cardinal
//! directions, months) and the functions that `match` over them. Two lesson
//! pages evaluate those functions in a fixed order and produce the lines a
//! reader sees.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use enumlab_core::prelude::*;
//!
//! for output in run_pages(&Page::variants()) {
//!     for line in &output.lines {
//!         println!("{}", line);
//!     }
//! }
//!
//! assert_eq!(Month::from_raw(4), Some(Month::April));
//! assert_eq!(Month::from_raw(0), None);
//! ```
//!
//! # Module Organization
//!
//! - [`closed_set`]: `ClosedSet` / `RawValued` traits and the implicit raw-value rule
//! - [`sets`]: the lesson's sets and matching functions
//! - [`coverage`]: run-time exhaustiveness audit of matching functions
//! - [`page`]: the lesson pages as ordered scripts
//! - [`report`]: plain and JSON output
//! - [`config`]: `enumlab.toml` loading
//! - [`error`]: typed errors

pub mod closed_set;
pub mod config;
pub mod coverage;
pub mod error;
pub mod logging;
pub mod page;
pub mod prelude;
pub mod report;
pub mod sets;

// ============================================================================
// Explicit Re-exports
// ============================================================================

// Error types
pub use error::{EnumlabError, EnumlabResult, IoResultExt};

// Closed set abstraction
pub use closed_set::{
    implicit_int_raw_values, verify_int_assignment, ClosedSet, RawAssignment, RawScalar,
    RawValued,
};

// Configuration
pub use config::{load_config, load_config_file, EnumlabConfig, OutputConfig, OutputFormat};

// Coverage audit
pub use coverage::{audit, audit_all, Branch, CoverageReport};

// Logging
pub use logging::{init_structured_logging, log_error, log_info, log_warn};

// Pages
pub use page::{run_pages, Page, PageOutput};

// Reporting
pub use report::{
    print_catalog_json, print_catalog_plain, print_coverage_json, print_coverage_plain,
    print_lookup_json, print_lookup_plain, print_pages_json, print_pages_plain,
    render_catalog_plain, render_coverage_plain, render_lookup_plain, render_pages_plain,
};

// Sets and matching functions
pub use sets::{
    catalog, compare_courses, course_kind, course_name, help, is_it_finally_weekend,
    is_mobile_course, lookup_raw, month_position, weekday_name, CardinalDirection, Emoticon,
    Face, FirstQuarterCourse, Month, SetListing, VariantListing, Weekday, WeekdayIndex,
    WeekdayNumber, HOMEWARD, MOBILE, WEEKEND,
};

#[cfg(test)]
mod tests;
