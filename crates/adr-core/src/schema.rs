//! The ADR section schema.
//!
//! Every document is the same nine sections in the same order. The template
//! renderer, the interactive collector and the validator all read this table;
//! a placeholder marker is always `TODO: <prompt>` for the section's prompt, so
//! the text the collector searches for is exactly the text the template wrote.

/// Literal marker for unfinished content. Its presence anywhere fails validation.
pub const PLACEHOLDER_MARKER: &str = "TODO:";

/// Submitter line used when none are supplied.
pub const DEFAULT_SUBMITTER: &str = "[Your Name] ([Your Organization])";

/// Line that ends free-text entry for one section in interactive mode.
pub const SENTINEL: &str = "END";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionBody {
    /// One bullet per submitter.
    Submitters,
    /// A single pending entry stamped with the generation date.
    ChangeLog,
    /// Static text, optionally led by a `TODO: <prompt>` placeholder line.
    Text {
        prompt: Option<&'static str>,
        guidance: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub name: &'static str,
    pub body: SectionBody,
}

impl Section {
    pub fn header(&self) -> String {
        format!("### {}", self.name)
    }

    pub fn prompt(&self) -> Option<&'static str> {
        match self.body {
            SectionBody::Text { prompt, .. } => prompt,
            _ => None,
        }
    }

    /// The placeholder line written by the template, e.g. `TODO: Document ...`.
    pub fn marker(&self) -> Option<String> {
        self.prompt()
            .map(|p| format!("{PLACEHOLDER_MARKER} {p}"))
    }

    /// Default body text for `Text` sections; `None` for generated sections.
    pub fn default_text(&self) -> Option<String> {
        match self.body {
            SectionBody::Text { prompt, guidance } => {
                let mut out = String::new();
                if let Some(p) = prompt {
                    out.push_str(PLACEHOLDER_MARKER);
                    out.push(' ');
                    out.push_str(p);
                    if !guidance.is_empty() {
                        out.push_str("\n\n");
                    }
                }
                out.push_str(guidance);
                Some(out)
            }
            _ => None,
        }
    }
}

pub const SECTIONS: [Section; 9] = [
    Section {
        name: "Submitters",
        body: SectionBody::Submitters,
    },
    Section {
        name: "Change Log",
        body: SectionBody::ChangeLog,
    },
    Section {
        name: "Referenced Use Case(s)",
        body: SectionBody::Text {
            prompt: Some("List relevant requirements or user stories."),
            guidance: "*   [Use Case Name](URL)",
        },
    },
    Section {
        name: "Context",
        body: SectionBody::Text {
            prompt: Some("Describe the architectural significance and high-level design approach."),
            guidance: "\
- What problem needs to be solved?
- Why is this decision architecturally significant?
- What is the high-level design approach?",
        },
    },
    Section {
        name: "Proposed Design",
        body: SectionBody::Text {
            prompt: Some("Detail the proposed design without implementation specifics."),
            guidance: "\
**Services/modules to be impacted:**
- Service1: What changes are needed
- Service2: What components are affected

**New services/modules to be added:**
- NewService: Description of new component

**Model and DTO impact:**
- DataModel1: Changes to data structures
- DTO1: API data transfer object modifications

**API impact:**
- API changes: New/modified/deprecated endpoints
- Integration points: How different components interact

**Configuration impact:**
- Configuration sections: New config requirements
- Environment variables: Runtime configuration needs

**DevOps impact:**
- Deployment: Changes to deployment processes
- Monitoring: New monitoring and alerting requirements",
        },
    },
    Section {
        name: "Considerations",
        body: SectionBody::Text {
            prompt: Some("Document alternatives, concerns, and how they were resolved."),
            guidance: "\
**Alternatives considered:**
- Alternative1: Description and why it was rejected
- Alternative2: Description and trade-offs

**Concerns addressed:**
- Concern1: How the issue was resolved
- Concern2: Mitigation strategies implemented

**Issues resolved:**
- Issue1: Resolution approach
- Issue2: How conflicts were managed",
        },
    },
    Section {
        name: "Decision",
        body: SectionBody::Text {
            prompt: Some("Document the final decision and any remaining work."),
            guidance: "\
**Implementation details:**
- Key implementation decisions and caveats
- Future considerations and deferred work

**Requirements not satisfied:**
- Any requirements that cannot be met with this approach
- Limitations and constraints",
        },
    },
    Section {
        name: "Other Related ADRs",
        body: SectionBody::Text {
            prompt: None,
            guidance: "*   [Related ADR Title](URL) - Relevance description",
        },
    },
    Section {
        name: "References",
        body: SectionBody::Text {
            prompt: None,
            guidance: "*   [Title](URL) - Additional documentation",
        },
    },
];

/// Sections offered for free-text entry, in the order they are asked.
pub const INTERACTIVE_SECTIONS: [&str; 4] = [
    "Context",
    "Referenced Use Case(s)",
    "Considerations",
    "Decision",
];

pub fn section(name: &str) -> Option<&'static Section> {
    SECTIONS.iter().find(|s| s.name == name)
}

pub fn interactive_sections() -> impl Iterator<Item = &'static Section> {
    INTERACTIVE_SECTIONS.iter().filter_map(|name| section(name))
}
