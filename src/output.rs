//! CLI output formatting.
//!
//! Each command has a `format_*` function returning `Vec<String>` (pure, no
//! I/O, unit-testable) and a `print_*` wrapper that writes to stdout. The
//! primary line per page is its semantic identity — display title and output
//! file — with skipped substitutions shown as indented context lines.
//!
//! ```text
//! Projects → projects.html
//! Photo Gallery → gallery.html
//!     Skipped: navbar (marker not found in template)
//! Media Output → media.html
//!
//! Derived 3 pages from works.html
//! ```

use crate::derive::DeriveReport;
use crate::pages::{ItemType, PageSpec};
use serde::Serialize;
use std::path::Path;

/// Machine-readable form of a `check` run, one entry per page.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub source: String,
    pub pages: Vec<PageCheck>,
    /// True when every substitution found its marker on every page.
    pub ok: bool,
}

#[derive(Debug, Serialize)]
pub struct PageCheck {
    pub page: &'static str,
    pub title: &'static str,
    pub item_type: ItemType,
    pub applied: Vec<&'static str>,
    pub skipped: Vec<&'static str>,
}

impl CheckReport {
    pub fn new(source: &Path, results: &[(&'static PageSpec, DeriveReport)]) -> Self {
        let pages: Vec<PageCheck> = results
            .iter()
            .map(|(spec, report)| PageCheck {
                page: spec.file_name,
                title: spec.title,
                item_type: spec.item_type,
                applied: report.applied.clone(),
                skipped: report.skipped.clone(),
            })
            .collect();
        let ok = pages.iter().all(|p| p.skipped.is_empty());
        CheckReport {
            source: source.display().to_string(),
            pages,
            ok,
        }
    }
}

fn page_lines(spec: &PageSpec, report: &DeriveReport) -> Vec<String> {
    let mut lines = vec![format!("{} → {}", spec.title, spec.file_name)];
    for stage in &report.skipped {
        lines.push(format!(
            "    Skipped: {stage} (marker not found in template)"
        ));
    }
    lines
}

pub fn format_build_output(
    source: &Path,
    results: &[(&'static PageSpec, DeriveReport)],
) -> Vec<String> {
    let mut lines = Vec::new();
    for (spec, report) in results {
        lines.extend(page_lines(spec, report));
    }
    lines.push(String::new());
    lines.push(format!(
        "Derived {} pages from {}",
        results.len(),
        source.display()
    ));
    lines
}

pub fn print_build_output(source: &Path, results: &[(&'static PageSpec, DeriveReport)]) {
    for line in format_build_output(source, results) {
        println!("{line}");
    }
}

pub fn format_check_output(report: &CheckReport) -> Vec<String> {
    let mut lines = Vec::new();
    for page in &report.pages {
        lines.push(format!(
            "{} → {} ({} applied, {} skipped)",
            page.title,
            page.page,
            page.applied.len(),
            page.skipped.len()
        ));
        for stage in &page.skipped {
            lines.push(format!(
                "    Skipped: {stage} (marker not found in template)"
            ));
        }
    }
    lines.push(String::new());
    if report.ok {
        lines.push(format!(
            "{}: all substitution markers present",
            report.source
        ));
    } else {
        lines.push(format!(
            "{}: template drifted from the expected markers",
            report.source
        ));
    }
    lines
}

pub fn print_check_output(report: &CheckReport) {
    for line in format_check_output(report) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::PAGES;

    fn complete_report() -> DeriveReport {
        DeriveReport {
            applied: vec!["title", "navbar"],
            skipped: vec![],
        }
    }

    #[test]
    fn build_output_one_line_per_page_plus_summary() {
        let results: Vec<_> = PAGES.iter().map(|s| (s, complete_report())).collect();
        let lines = format_build_output(Path::new("works.html"), &results);
        assert_eq!(lines[0], "Projects → projects.html");
        assert_eq!(lines[1], "Photo Gallery → gallery.html");
        assert_eq!(lines[2], "Media Output → media.html");
        assert_eq!(lines.last().unwrap(), "Derived 3 pages from works.html");
    }

    #[test]
    fn skipped_stages_shown_as_indented_context() {
        let report = DeriveReport {
            applied: vec!["title"],
            skipped: vec!["navbar"],
        };
        let results = vec![(&PAGES[0], report)];
        let lines = format_build_output(Path::new("works.html"), &results);
        assert_eq!(
            lines[1],
            "    Skipped: navbar (marker not found in template)"
        );
    }

    #[test]
    fn check_report_ok_only_when_nothing_skipped() {
        let results: Vec<_> = PAGES.iter().map(|s| (s, complete_report())).collect();
        let report = CheckReport::new(Path::new("works.html"), &results);
        assert!(report.ok);

        let degraded = vec![(
            &PAGES[0],
            DeriveReport {
                applied: vec![],
                skipped: vec!["title"],
            },
        )];
        let report = CheckReport::new(Path::new("works.html"), &degraded);
        assert!(!report.ok);
        let lines = format_check_output(&report);
        assert!(lines.last().unwrap().contains("drifted"));
    }

    #[test]
    fn check_report_serializes_item_type_lowercase() {
        let results: Vec<_> = PAGES.iter().map(|s| (s, complete_report())).collect();
        let report = CheckReport::new(Path::new("works.html"), &results);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains(r#""item_type":"project""#));
        assert!(json.contains(r#""item_type":"gallery""#));
        assert!(json.contains(r#""item_type":"output""#));
    }
}
