//! Exhaustiveness audit for matching functions.
//!
//! `match` without a wildcard already forces every variant to be handled at
//! compile time. The audit re-checks the other half of the contract at run
//! time: every variant produces a non-empty result. It also groups variants
//! by shared result, which shows how the arms of a match were bundled.
//!
//! ```text
//! course_kind(FirstQuarterCourse)
//!   Web     <- Python, Frontend, Ruby
//!   Mobile  <- IosAdvanced, IosAccelerated
//! ```

use serde::Serialize;
use tracing::{debug, info};

use crate::closed_set::ClosedSet;
use crate::error::{EnumlabError, EnumlabResult};
use crate::sets::{
    compare_courses, course_kind, course_name, help, is_it_finally_weekend, is_mobile_course,
    month_position, weekday_name, FirstQuarterCourse,
};

/// Variants that share one result.
#[derive(Debug, Clone, Serialize)]
pub struct Branch {
    pub result: String,
    pub variants: Vec<&'static str>,
}

/// Outcome of auditing one matching function.
#[derive(Debug, Clone, Serialize)]
pub struct CoverageReport {
    pub set: &'static str,
    pub function: String,
    pub variant_count: usize,
    /// Branches in order of first appearance
    pub branches: Vec<Branch>,
}

impl CoverageReport {
    /// Whether every variant got its own result.
    pub fn is_one_to_one(&self) -> bool {
        self.branches.len() == self.variant_count
    }

    /// Branches covering more than one variant.
    pub fn grouped(&self) -> impl Iterator<Item = &Branch> {
        self.branches.iter().filter(|b| b.variants.len() > 1)
    }
}

/// Applies `f` to every variant of `T` and groups the results.
///
/// Fails with [`EnumlabError::EmptyBranch`] on the first variant whose
/// result renders as an empty string.
pub fn audit<T, R, F>(function: &str, f: F) -> EnumlabResult<CoverageReport>
where
    T: ClosedSet,
    R: ToString,
    F: Fn(T) -> R,
{
    let mut branches: Vec<Branch> = Vec::new();
    let mut variant_count = 0;

    for variant in T::iter() {
        variant_count += 1;
        let result = f(variant).to_string();
        if result.is_empty() {
            return Err(EnumlabError::EmptyBranch {
                set: T::SET_NAME,
                function: function.to_string(),
                variant: variant.name(),
            });
        }

        match branches.iter_mut().find(|b| b.result == result) {
            Some(branch) => branch.variants.push(variant.name()),
            None => branches.push(Branch {
                result,
                variants: vec![variant.name()],
            }),
        }
    }

    debug!(
        set = T::SET_NAME,
        function = %function,
        variants = variant_count,
        branches = branches.len(),
        "audited matching function"
    );

    Ok(CoverageReport {
        set: T::SET_NAME,
        function: function.to_string(),
        variant_count,
        branches,
    })
}

/// Audits every matching function in the lesson.
pub fn audit_all() -> EnumlabResult<Vec<CoverageReport>> {
    let reports = vec![
        audit("course_name", course_name)?,
        audit("course_kind", course_kind)?,
        audit("is_mobile_course", is_mobile_course)?,
        audit("compare_courses(Python, _)", |c: FirstQuarterCourse| {
            compare_courses(FirstQuarterCourse::Python, c)
        })?,
        audit("weekday_name", weekday_name)?,
        audit("is_it_finally_weekend", is_it_finally_weekend)?,
        audit("help", help)?,
        audit("month_position", month_position)?,
    ];

    info!(functions = reports.len(), "coverage audit passed");
    Ok(reports)
}
