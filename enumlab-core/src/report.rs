//! Output formatting - plaintext and JSON.
//!
//! Plain page output is exactly the page lines, one per line, with no
//! headers, so running every page reproduces the lesson transcript.

use serde::Serialize;
use serde_json::json;

use crate::coverage::CoverageReport;
use crate::page::PageOutput;
use crate::sets::SetListing;

/// Renders page lines in statement order.
pub fn render_pages_plain(outputs: &[PageOutput]) -> String {
    let mut out = String::new();
    for line in outputs.iter().flat_map(|o| &o.lines) {
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Renders an exhaustiveness audit as an indented tree.
pub fn render_coverage_plain(reports: &[CoverageReport]) -> String {
    let mut out = String::new();
    for report in reports {
        out.push_str(&format!(
            "{}({}): {} variants, {} branches\n",
            report.function,
            report.set,
            report.variant_count,
            report.branches.len()
        ));
        for branch in &report.branches {
            out.push_str(&format!(
                "  {} <- {}\n",
                branch.result,
                branch.variants.join(", ")
            ));
        }
    }
    out
}

/// Renders the set catalog.
pub fn render_catalog_plain(sets: &[SetListing]) -> String {
    let mut out = String::new();
    for set in sets {
        match set.raw {
            Some(assignment) => out.push_str(&format!("{} ({})\n", set.name, assignment)),
            None => out.push_str(&format!("{}\n", set.name)),
        }
        for variant in &set.variants {
            match &variant.raw {
                Some(raw) => out.push_str(&format!("  {} = {}\n", variant.name, raw)),
                None => out.push_str(&format!("  {}\n", variant.name)),
            }
        }
    }
    out
}

/// Renders a raw-value lookup result.
pub fn render_lookup_plain(set: &str, raw: &str, found: Option<&str>) -> String {
    match found {
        Some(name) => format!("{}::{}\n", set, name),
        None => format!("{} has no variant with raw value {}: not found\n", set, raw),
    }
}

fn print_json_value<T: Serialize + std::fmt::Debug>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("[WARN] JSON serialization failed: {}", e);
            println!("{:?}", value);
        }
    }
}

pub fn print_pages_plain(outputs: &[PageOutput]) {
    print!("{}", render_pages_plain(outputs));
}

pub fn print_pages_json(outputs: &[PageOutput]) {
    print_json_value(&json!({ "pages": outputs }));
}

pub fn print_coverage_plain(reports: &[CoverageReport]) {
    print!("{}", render_coverage_plain(reports));
}

pub fn print_coverage_json(reports: &[CoverageReport]) {
    print_json_value(&json!({ "coverage": reports }));
}

pub fn print_catalog_plain(sets: &[SetListing]) {
    print!("{}", render_catalog_plain(sets));
}

pub fn print_catalog_json(sets: &[SetListing]) {
    print_json_value(&json!({ "sets": sets }));
}

pub fn print_lookup_plain(set: &str, raw: &str, found: Option<&str>) {
    print!("{}", render_lookup_plain(set, raw, found));
}

pub fn print_lookup_json(set: &str, raw: &str, found: Option<&str>) {
    print_json_value(&json!({ "set": set, "raw": raw, "variant": found }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coverage::audit;
    use crate::page::Page;
    use crate::sets::{catalog, course_kind};

    #[test]
    fn test_pages_plain_is_bare_lines() {
        let text = render_pages_plain(&[Page::ControlFlow.run()]);
        assert!(text.starts_with("these two are different\n"));
        assert!(text.ends_with("Wuhuuuu, it's SATURDAYYYYYY.\n"));
        assert_eq!(text.lines().count(), 6);
    }

    #[test]
    fn test_coverage_plain() {
        let report = audit("course_kind", course_kind).unwrap();
        let text = render_coverage_plain(&[report]);
        assert!(text.contains("course_kind(FirstQuarterCourse): 5 variants, 2 branches"));
        assert!(text.contains("  Mobile <- IosAdvanced, IosAccelerated"));
    }

    #[test]
    fn test_catalog_plain() {
        let text = render_catalog_plain(&catalog());
        assert!(text.contains("Month (explicit integer)\n  January = 1\n"));
        assert!(text.contains("WeekdayIndex (implicit integer from 0)"));
        assert!(text.contains("Weekday\n  Monday\n"));
    }

    #[test]
    fn test_lookup_plain() {
        assert_eq!(render_lookup_plain("Month", "3", Some("March")), "Month::March\n");
        assert!(render_lookup_plain("Month", "13", None).ends_with("not found\n"));
    }

    #[test]
    fn test_pages_json_shape() {
        let value = json!({ "pages": [Page::RawValues.run()] });
        assert_eq!(value["pages"][0]["page"], "raw-values");
        assert_eq!(value["pages"][0]["lines"][2], "WeekdayIndex::Monday raw value: 0");
    }
}
