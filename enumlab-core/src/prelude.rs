//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use enumlab_core::prelude::*;
//! ```

// Closed set traits
pub use crate::closed_set::{ClosedSet, RawAssignment, RawValued};
pub use crate::error::{EnumlabError, EnumlabResult};

// The lesson sets
pub use crate::sets::{
    CardinalDirection, Emoticon, Face, FirstQuarterCourse, Month, Weekday, WeekdayIndex,
    WeekdayNumber,
};

// Pages and audits
pub use crate::coverage::{audit, audit_all, CoverageReport};
pub use crate::page::{run_pages, Page, PageOutput};

// Configuration
pub use crate::config::{load_config, EnumlabConfig, OutputFormat};

// Iteration over variants
pub use strum::{EnumCount, IntoEnumIterator};
