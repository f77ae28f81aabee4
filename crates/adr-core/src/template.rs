//! ADR text generation and filename derivation.

use crate::paths::ADR_EXTENSION;
use crate::schema::{Section, SectionBody, DEFAULT_SUBMITTER, SECTIONS};
use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::collections::HashMap;

/// A rendered document and the filename it should be stored under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedAdr {
    pub filename: String,
    pub body: String,
}

/// Derive the storage filename for a title.
///
/// Lowercases, turns spaces into dashes, drops anything that is not an ASCII
/// letter, digit or dash, then appends `.md`. Distinct titles may collide
/// (`"A/B"` and `"AB"` both give `ab.md`); an empty title gives `.md`.
pub fn title_to_filename(title: &str) -> String {
    let slug: String = title
        .to_lowercase()
        .replace(' ', "-")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect();
    format!("{slug}.{ADR_EXTENSION}")
}

/// Display title for a stored file: dashes become spaces, words are title-cased.
/// Accepts either a bare stem or a filename ending in `.md`.
pub fn filename_to_title(filename: &str) -> String {
    let stem = filename
        .strip_suffix(&format!(".{ADR_EXTENSION}"))
        .unwrap_or(filename);
    title_case(&stem.replace('-', " "))
}

/// Uppercase every letter that follows a non-letter, lowercase the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

/// Build the canonical template for `title`, stamped with today's local date.
pub fn generate_template(title: &str, submitters: &[String]) -> GeneratedAdr {
    generate_template_on(title, submitters, Local::now().date_naive())
}

/// Same as [`generate_template`] with an explicit change-log date.
pub fn generate_template_on(title: &str, submitters: &[String], date: NaiveDate) -> GeneratedAdr {
    Template::new(title, submitters, date).render()
}

/// Renderer over the section schema. Section bodies can be overridden by name;
/// headers and their order always come from the schema.
#[derive(Debug, Clone)]
pub struct Template {
    title: String,
    submitters: Vec<String>,
    date: NaiveDate,
    overrides: HashMap<&'static str, String>,
}

impl Template {
    pub fn new(title: impl Into<String>, submitters: &[String], date: NaiveDate) -> Self {
        let submitters = if submitters.is_empty() {
            vec![DEFAULT_SUBMITTER.to_string()]
        } else {
            submitters.to_vec()
        };
        Self {
            title: title.into(),
            submitters,
            date,
            overrides: HashMap::new(),
        }
    }

    /// Replace the body of section `name`. Unknown names are ignored.
    pub fn with_section(mut self, name: &str, body: impl Into<String>) -> Self {
        if let Some(section) = SECTIONS.iter().find(|s| s.name == name) {
            self.overrides.insert(section.name, body.into());
        }
        self
    }

    pub fn render(&self) -> GeneratedAdr {
        let mut blocks = Vec::with_capacity(SECTIONS.len() + 1);
        blocks.push(format!("# {}", self.title));

        for section in &SECTIONS {
            let body = match self.overrides.get(section.name) {
                Some(text) => text.clone(),
                None => self.default_body(section),
            };
            blocks.push(format!("{}\n{}", section.header(), body));
        }

        let mut body = blocks.join("\n\n");
        body.push('\n');

        GeneratedAdr {
            filename: title_to_filename(&self.title),
            body,
        }
    }

    fn default_body(&self, section: &Section) -> String {
        match section.body {
            SectionBody::Submitters => self
                .submitters
                .iter()
                .map(|s| format!("*   {s}"))
                .collect::<Vec<_>>()
                .join("\n"),
            SectionBody::ChangeLog => {
                format!("*   [pending](TODO) {}", self.date.format("%Y-%m-%d"))
            }
            SectionBody::Text { .. } => section.default_text().unwrap_or_default(),
        }
    }
}
