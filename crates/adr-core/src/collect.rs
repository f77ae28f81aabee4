//! Interactive replacement of placeholder sections.

use crate::error::Result;
use crate::schema::{interactive_sections, Section, SENTINEL};
use std::io::{BufRead, Write};

/// Supplies free-text lines for a section.
pub trait SectionSource {
    /// Lines entered for `section`. An empty vec leaves the placeholder untouched.
    fn read_section(&mut self, section: &Section) -> Result<Vec<String>>;
}

/// Line-oriented prompt over any reader/writer pair.
///
/// Entry for a section ends at a line equal to `END` (surrounding whitespace
/// ignored) or at end of input. Once input is exhausted every later section
/// collects nothing.
pub struct PromptCollector<R, W> {
    input: R,
    output: W,
    exhausted: bool,
}

impl<R: BufRead, W: Write> PromptCollector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            exhausted: false,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

impl<R: BufRead, W: Write> SectionSource for PromptCollector<R, W> {
    fn read_section(&mut self, section: &Section) -> Result<Vec<String>> {
        if self.exhausted {
            return Ok(Vec::new());
        }

        writeln!(self.output, "\n{}:", section.name)?;
        if let Some(prompt) = section.prompt() {
            writeln!(self.output, "Prompt: {prompt}")?;
        }
        writeln!(
            self.output,
            "Enter your text (type '{SENTINEL}' on a new line when finished):"
        )?;
        self.output.flush()?;

        let mut lines = Vec::new();
        let mut buf = String::new();
        loop {
            buf.clear();
            if self.input.read_line(&mut buf)? == 0 {
                tracing::debug!(section = section.name, "input exhausted");
                self.exhausted = true;
                break;
            }
            let line = buf.trim_end_matches(['\n', '\r']);
            if line.trim() == SENTINEL {
                break;
            }
            lines.push(line.to_string());
        }
        Ok(lines)
    }
}

/// Ask `source` for each interactive section in order and splice the answers
/// over the first occurrence of that section's `TODO: <prompt>` marker.
pub fn collect_and_apply(body: &str, source: &mut dyn SectionSource) -> Result<String> {
    let mut body = body.to_string();
    for section in interactive_sections() {
        let lines = source.read_section(section)?;
        if lines.is_empty() {
            continue;
        }
        let Some(marker) = section.marker() else {
            continue;
        };
        if !body.contains(&marker) {
            tracing::warn!(section = section.name, "placeholder not found, input discarded");
            continue;
        }
        body = body.replacen(&marker, &lines.join("\n"), 1);
    }
    Ok(body)
}
