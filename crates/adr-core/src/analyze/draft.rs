//! Draft ADRs seeded from a [`CodebaseReport`].

use super::patterns::{DesignPattern, FileCategory};
use super::CodebaseReport;
use crate::template::{GeneratedAdr, Template};
use chrono::NaiveDate;

/// Files listed per category before the remainder is summarised.
const FILES_SHOWN: usize = 3;
/// Commits quoted in the draft context.
const COMMITS_SHOWN: usize = 5;

pub fn generate_draft(topic: &str, report: &CodebaseReport, date: NaiveDate) -> GeneratedAdr {
    Template::new(topic, &[], date)
        .with_section("Context", context(topic, report))
        .with_section("Proposed Design", PROPOSED_DESIGN)
        .with_section("Considerations", CONSIDERATIONS)
        .with_section("Decision", DECISION)
        .with_section(
            "References",
            "*   [Technology Documentation](URL)\n*   [Design Pattern References](URL)",
        )
        .render()
}

fn context(topic: &str, report: &CodebaseReport) -> String {
    let stack = &report.stack;
    let mut out = format!(
        "This ADR documents the architectural decision regarding {topic}.\n\
         The analysis of the existing codebase reveals the following context:\n\n\
         **Technology Stack Detected:**\n\
         - Languages: {}\n\
         - Frameworks: {}\n\
         - Databases: {}\n\n\
         **Key File Patterns:**\n{}\n\n\
         **Design Patterns Identified:**\n{}\n\n",
        join_or_none(&stack.languages),
        join_or_none(&stack.frameworks),
        join_or_none(&stack.databases),
        format_file_patterns(&report.file_patterns),
        format_design_patterns(&report.design_patterns),
    );

    if !report.history.is_empty() {
        out.push_str("**Related Commits:**\n");
        for commit in report.history.iter().take(COMMITS_SHOWN) {
            out.push_str(&format!("- {}: {}\n", commit.hash, commit.message));
        }
        out.push('\n');
    }

    out.push_str(
        "This decision is architecturally significant because it affects the overall \
         system structure and maintainability.",
    );
    out
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None detected".to_string()
    } else {
        items.join(", ")
    }
}

fn format_file_patterns(categories: &[FileCategory]) -> String {
    let mut lines = Vec::new();
    for cat in categories.iter().filter(|c| !c.files.is_empty()) {
        let shown: Vec<_> = cat.files.iter().take(FILES_SHOWN).map(String::as_str).collect();
        lines.push(format!("- {}: {}", capitalize(&cat.category), shown.join(", ")));
        if cat.files.len() > FILES_SHOWN {
            lines.push(format!(
                "  ... and {} more files",
                cat.files.len() - FILES_SHOWN
            ));
        }
    }
    if lines.is_empty() {
        "- No significant patterns detected".to_string()
    } else {
        lines.join("\n")
    }
}

fn format_design_patterns(patterns: &[DesignPattern]) -> String {
    if patterns.is_empty() {
        return "- No specific design patterns identified".to_string();
    }
    patterns
        .iter()
        .map(|p| format!("- {}: {}", p.pattern, p.description))
        .collect::<Vec<_>>()
        .join("\n")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

const PROPOSED_DESIGN: &str = "\
Based on the current implementation, the following design approach has been adopted:

TODO: Detail the specific design decisions made
- How the current implementation addresses the requirements
- Key architectural patterns and principles followed
- Integration points with other system components";

const CONSIDERATIONS: &str = "\
**Alternatives considered:**
TODO: Document what other approaches were evaluated
- Alternative1: Description and why it was not chosen
- Alternative2: Description of trade-offs

**Current Implementation Analysis:**
- Strengths identified in the existing code
- Potential areas for improvement
- Technical debt or constraints observed";

const DECISION: &str = "\
TODO: Document the final decision and rationale

**Implementation Details:**
- Key architectural choices made
- How this decision aligns with system goals
- Performance and scalability considerations

**Future Considerations:**
- Potential evolution of this approach
- When this decision might need reconsideration
- Related architectural decisions that may be needed";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::git::CommitSummary;
    use crate::analyze::stack::TechStack;
    use crate::validate::{validate_text, ValidationIssue};

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 2).unwrap()
    }

    #[test]
    fn empty_report_draft() {
        let draft = generate_draft("Session Storage", &CodebaseReport::default(), day());
        assert_eq!(draft.filename, "session-storage.md");
        assert!(draft.body.starts_with("# Session Storage\n"));
        assert!(draft.body.contains("regarding Session Storage."));
        assert!(draft.body.contains("- Languages: None detected"));
        assert!(draft.body.contains("- No significant patterns detected"));
        assert!(draft.body.contains("- No specific design patterns identified"));
        assert!(draft.body.contains("[pending](TODO) 2025-01-02"));
        assert!(!draft.body.contains("**Related Commits:**"));
    }

    #[test]
    fn draft_has_all_headers_but_open_todos() {
        let draft = generate_draft("Caching", &CodebaseReport::default(), day());
        assert_eq!(
            validate_text(&draft.body),
            vec![ValidationIssue::UnresolvedPlaceholder]
        );
    }

    #[test]
    fn report_details_are_rendered() {
        let report = CodebaseReport {
            stack: TechStack {
                languages: vec!["Rust".into(), "Python".into()],
                databases: vec!["Redis".into()],
                ..Default::default()
            },
            file_patterns: vec![FileCategory {
                category: "api".into(),
                files: (1..=5).map(|i| format!("api/r{i}.rs")).collect(),
            }],
            design_patterns: vec![DesignPattern {
                pattern: "Adapter".into(),
                files: vec!["src/adapter.rs".into()],
                description: "Adapter pattern for interface compatibility".into(),
            }],
            history: vec![CommitSummary {
                hash: "abc1234".into(),
                message: "Refactor cache".into(),
            }],
        };
        let body = generate_draft("Caching", &report, day()).body;
        assert!(body.contains("- Languages: Rust, Python"));
        assert!(body.contains("- Frameworks: None detected"));
        assert!(body.contains("- Databases: Redis"));
        assert!(body.contains("- Api: api/r1.rs, api/r2.rs, api/r3.rs\n  ... and 2 more files"));
        assert!(body.contains("- Adapter: Adapter pattern for interface compatibility"));
        assert!(body.contains("**Related Commits:**\n- abc1234: Refactor cache"));
    }
}
