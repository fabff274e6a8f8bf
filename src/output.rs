//! CLI output formatting for every subcommand.
//!
//! Output is a content inventory first and a file list second: each entity
//! leads with its positional index and title, with paths and details on
//! indented context lines.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! About
//!     YoonSuh Lee, 27
//!         Backend Engineer
//!
//! Experience
//! 001 Acme (Backend Engineer)
//!     2021 - Present
//!
//! Education
//! 001 Seoul National University
//!     Bachelor, Computer Science
//!
//! Skills
//! 001 Backend (3 skills)
//!
//! Projects
//! 001 Payments Platform (4 technologies)
//!     Id: payments
//!
//! Awards
//! 001 AWS Solutions Architect
//!     Certification, Amazon
//!
//! Config
//!     config.toml
//!     assets/
//!
//! Data version: 3f9a1c02b7de
//! ```
//!
//! ## Build
//!
//! ```text
//! Pages
//!     index.html
//!     admin/index.html
//!     404.html
//!     style.css
//!
//! Data
//!     data/about.json
//!     ...
//!
//! Built site with 5 resources, 2 assets (data version 3f9a1c02b7de)
//! ```
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::i18n::Language;
use crate::render::awards::kind_label;
use crate::site::{ASSETS_DIR, BuildReport, Content};
use std::path::{Path, PathBuf};

// ============================================================================
// Shared helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// `1 skill`, `3 skills`.
fn counted(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Index + title, with an optional parenthesized detail.
fn entity_header(index: usize, title: &str, detail: Option<&str>) -> String {
    match detail {
        Some(d) => format!("{} {} ({})", format_index(index), title, d),
        None => format!("{} {}", format_index(index), title),
    }
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

fn section(lines: &mut Vec<String>, title: &str) {
    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(title.to_string());
}

// ============================================================================
// check
// ============================================================================

/// Inventory of a validated content directory.
pub fn format_check(content: &Content, source_root: &Path) -> Vec<String> {
    let bundle = &content.bundle;
    let mut lines = Vec::new();

    section(&mut lines, "About");
    let about = &bundle.about;
    lines.push(format!("{}{}, {}", indent(1), about.name, about.age));
    lines.push(format!("{}{}", indent(2), truncate_desc(&about.headline, 60)));

    section(&mut lines, "Experience");
    for (i, job) in bundle.experience.work.iter().enumerate() {
        lines.push(entity_header(i + 1, &job.company, Some(&job.position)));
        lines.push(format!("{}{}", indent(1), job.period));
    }

    if !bundle.experience.education.is_empty() {
        section(&mut lines, "Education");
        for (i, edu) in bundle.experience.education.iter().enumerate() {
            lines.push(entity_header(i + 1, &edu.institution, None));
            lines.push(format!("{}{}, {}", indent(1), edu.degree, edu.major));
        }
    }

    section(&mut lines, "Skills");
    for (i, category) in bundle.skills.categories.iter().enumerate() {
        let detail = counted(category.skills.len(), "skill", "skills");
        lines.push(entity_header(i + 1, &category.name, Some(&detail)));
    }

    section(&mut lines, "Projects");
    for (i, project) in bundle.projects.projects.iter().enumerate() {
        let detail = counted(project.technologies.len(), "technology", "technologies");
        lines.push(entity_header(i + 1, &project.title, Some(&detail)));
        lines.push(format!("{}Id: {}", indent(1), project.id));
    }

    section(&mut lines, "Awards");
    for (i, award) in bundle.awards.awards.iter().enumerate() {
        lines.push(entity_header(i + 1, &award.title, None));
        lines.push(format!(
            "{}{}, {}",
            indent(1),
            kind_label(award.kind).pick(Language::En),
            award.issuer
        ));
    }

    section(&mut lines, "Config");
    if source_root.join("config.toml").exists() {
        lines.push(format!("{}config.toml", indent(1)));
    }
    if source_root.join(ASSETS_DIR).is_dir() {
        lines.push(format!("{}{}/", indent(1), ASSETS_DIR));
    }

    lines.push(String::new());
    lines.push(format!("Data version: {}", content.fingerprint));
    lines
}

pub fn print_check(content: &Content, source_root: &Path) {
    for line in format_check(content, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// build
// ============================================================================

pub fn format_build(report: &BuildReport) -> Vec<String> {
    let mut lines = Vec::new();

    section(&mut lines, "Pages");
    for page in &report.pages {
        lines.push(format!("{}{}", indent(1), page.display()));
    }

    section(&mut lines, "Data");
    for file in &report.data {
        lines.push(format!("{}{}", indent(1), file.display()));
    }

    lines.push(String::new());
    lines.push(format!(
        "Built site with {}, {} (data version {})",
        counted(report.data.len(), "resource", "resources"),
        counted(report.assets.len(), "asset", "assets"),
        report.fingerprint
    ));
    lines
}

pub fn print_build(report: &BuildReport) {
    for line in format_build(report) {
        println!("{}", line);
    }
}

// ============================================================================
// export / unpack
// ============================================================================

pub fn format_export(path: &Path) -> Vec<String> {
    vec![format!("Exported data bundle → {}", path.display())]
}

pub fn print_export(path: &Path) {
    for line in format_export(path) {
        println!("{}", line);
    }
}

pub fn format_unpack(bundle: &Path, written: &[PathBuf]) -> Vec<String> {
    let mut lines = vec![format!("Unpacked {}", bundle.display())];
    for path in written {
        lines.push(format!("{}{}", indent(1), path.display()));
    }
    lines
}

pub fn print_unpack(bundle: &Path, written: &[PathBuf]) {
    for line in format_unpack(bundle, written) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::tests::sample;
    use crate::config::SiteConfig;
    use tempfile::TempDir;

    fn content() -> Content {
        Content {
            config: SiteConfig::default(),
            bundle: sample(),
            fingerprint: "abc123def456".into(),
        }
    }

    #[test]
    fn truncate_desc_short() {
        assert_eq!(truncate_desc("Short text", 40), "Short text");
    }

    #[test]
    fn truncate_desc_exact() {
        let text = "a".repeat(40);
        assert_eq!(truncate_desc(&text, 40), text);
    }

    #[test]
    fn truncate_desc_long() {
        let text = "a".repeat(50);
        let expected = format!("{}...", "a".repeat(40));
        assert_eq!(truncate_desc(&text, 40), expected);
    }

    #[test]
    fn truncate_desc_counts_characters() {
        assert_eq!(truncate_desc("백엔드 개발자", 3), "백엔드...");
    }

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(100), "100");
    }

    #[test]
    fn counted_pluralizes() {
        assert_eq!(counted(1, "skill", "skills"), "1 skill");
        assert_eq!(counted(0, "skill", "skills"), "0 skills");
        assert_eq!(counted(2, "technology", "technologies"), "2 technologies");
    }

    #[test]
    fn check_lists_entities_by_position() {
        let tmp = TempDir::new().unwrap();
        let lines = format_check(&content(), tmp.path());
        assert_eq!(lines[0], "About");
        assert!(lines.contains(&"001 Backend (1 skill)".to_string()));
        assert!(lines.contains(&"003 Project p3 (1 technology)".to_string()));
        assert!(lines.contains(&"    Id: p2".to_string()));
        assert!(lines.contains(&"001 AWS Solutions Architect".to_string()));
        assert_eq!(lines.last().unwrap(), "Data version: abc123def456");
    }

    #[test]
    fn check_lists_config_sources_that_exist() {
        let tmp = TempDir::new().unwrap();
        let bare = format_check(&content(), tmp.path());
        assert!(!bare.contains(&"    config.toml".to_string()));

        std::fs::write(tmp.path().join("config.toml"), "").unwrap();
        std::fs::create_dir(tmp.path().join("assets")).unwrap();
        let lines = format_check(&content(), tmp.path());
        assert!(lines.contains(&"    config.toml".to_string()));
        assert!(lines.contains(&"    assets/".to_string()));
    }

    #[test]
    fn build_summary() {
        let report = BuildReport {
            pages: vec!["index.html".into(), "404.html".into()],
            data: vec!["data/about.json".into()],
            assets: vec![],
            fingerprint: "abc".into(),
        };
        let lines = format_build(&report);
        assert_eq!(lines[0], "Pages");
        assert_eq!(lines[1], "    index.html");
        assert_eq!(
            lines.last().unwrap(),
            "Built site with 1 resource, 0 assets (data version abc)"
        );
    }

    #[test]
    fn unpack_lists_written_files() {
        let lines = format_unpack(
            Path::new("portfolio_data.json"),
            &[PathBuf::from("content/data/about.json")],
        );
        assert_eq!(lines[0], "Unpacked portfolio_data.json");
        assert_eq!(lines[1], "    content/data/about.json");
    }
}
