use crate::output::print_json;
use adr_core::analyze::{generate_draft, CodebaseAnalyzer, DEFAULT_HISTORY_LIMIT};
use anyhow::Context as _;
use clap::ValueEnum;
use std::path::{Path, PathBuf};

/// Commits printed in the history section.
const HISTORY_SHOWN: usize = 10;
/// Files printed per design pattern.
const FILES_SHOWN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Analysis {
    Stack,
    Patterns,
    History,
    All,
}

impl Analysis {
    fn includes(self, other: Analysis) -> bool {
        self == Analysis::All || self == other
    }
}

pub struct AnalyzeArgs {
    pub path: PathBuf,
    pub topic: Option<String>,
    pub output: Option<PathBuf>,
    pub analyze: Analysis,
    pub commit: Option<String>,
    pub json: bool,
}

pub fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    if !args.path.is_dir() {
        anyhow::bail!("not a directory: {}", args.path.display());
    }
    let analyzer = CodebaseAnalyzer::new(&args.path);

    if let Some(rev) = &args.commit {
        return commit(&analyzer, rev, args.json);
    }

    let mut json = serde_json::Map::new();

    if args.analyze.includes(Analysis::Stack) {
        let stack = analyzer.detect_stack().context("stack detection failed")?;
        if args.json {
            json.insert("stack".into(), serde_json::to_value(&stack)?);
        } else {
            println!("Technology Stack Analysis:");
            for (label, items) in stack.categories() {
                if !items.is_empty() {
                    println!("  {label}: {}", items.join(", "));
                }
            }
            println!();
        }
    }

    if args.analyze.includes(Analysis::Patterns) {
        let patterns = analyzer
            .design_patterns()
            .context("design pattern analysis failed")?;
        if args.json {
            json.insert("design_patterns".into(), serde_json::to_value(&patterns)?);
        } else {
            println!("Design Patterns Analysis:");
            for p in &patterns {
                println!("  {}: {} files", p.pattern, p.files.len());
                for file in p.files.iter().take(FILES_SHOWN) {
                    println!("    - {file}");
                }
                if p.files.len() > FILES_SHOWN {
                    println!("    ... and {} more files", p.files.len() - FILES_SHOWN);
                }
            }
            println!();
        }
    }

    if args.analyze.includes(Analysis::History) {
        let history = analyzer.history(DEFAULT_HISTORY_LIMIT);
        if args.json {
            json.insert("history".into(), serde_json::to_value(&history)?);
        } else {
            println!("Architectural Commit History:");
            for c in history.iter().take(HISTORY_SHOWN) {
                println!("  {}: {}", c.hash, c.message);
            }
            println!();
        }
    }

    if let Some(topic) = &args.topic {
        let report = analyzer.report().context("codebase analysis failed")?;
        let draft = generate_draft(topic, &report, chrono::Local::now().date_naive());

        match &args.output {
            Some(out) => {
                write_draft(out, &draft.body)?;
                if args.json {
                    json.insert("draft_path".into(), serde_json::to_value(out)?);
                } else {
                    println!("ADR draft written to: {}", out.display());
                }
            }
            None if args.json => {
                json.insert("draft".into(), serde_json::to_value(&draft)?);
            }
            None => {
                println!("Generated ADR Draft:");
                println!("{}", "=".repeat(50));
                println!("{}", draft.body);
            }
        }
    }

    if args.json {
        print_json(&json)?;
    }
    Ok(())
}

fn commit(analyzer: &CodebaseAnalyzer, rev: &str, json: bool) -> anyhow::Result<()> {
    let detail = analyzer.commit(rev);
    if json {
        return print_json(&detail);
    }
    match detail {
        Some(c) => {
            println!("Commit Analysis:");
            println!("Hash: {}", c.hash);
            println!("Message: {}", c.message);
            println!("Author: {}", c.author);
            println!("Date: {}", c.date);
            println!("Files changed: {}", c.files_changed.join(", "));
            println!("Architectural: {}", c.is_architectural);
        }
        None => println!("Commit not found or git not available"),
    }
    Ok(())
}

fn write_draft(path: &Path, body: &str) -> anyhow::Result<()> {
    adr_core::io::atomic_write(path, body.as_bytes())
        .with_context(|| format!("failed to write draft to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_includes_everything() {
        for a in [Analysis::Stack, Analysis::Patterns, Analysis::History] {
            assert!(Analysis::All.includes(a));
            assert!(a.includes(a));
        }
        assert!(!Analysis::Stack.includes(Analysis::History));
    }
}
