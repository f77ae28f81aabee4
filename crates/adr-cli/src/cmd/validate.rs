use super::Context;
use crate::output::print_json;
use adr_core::validate::{validate, ValidationIssue};
use anyhow::Context as _;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct FileResult {
    path: PathBuf,
    valid: bool,
    errors: Vec<String>,
    issues: Vec<ValidationIssue>,
}

impl FileResult {
    fn new(path: &Path, issues: Vec<ValidationIssue>) -> Self {
        Self {
            path: path.to_path_buf(),
            valid: issues.is_empty(),
            errors: issues.iter().map(ToString::to_string).collect(),
            issues,
        }
    }
}

/// Validation problems are reported, never turned into a failing exit status.
pub fn run(ctx: &Context, file: Option<PathBuf>) -> anyhow::Result<()> {
    match file {
        Some(path) => validate_one(ctx, &path),
        None => validate_all(ctx),
    }
}

fn validate_one(ctx: &Context, path: &Path) -> anyhow::Result<()> {
    let result = FileResult::new(path, validate(path));

    if ctx.json {
        return print_json(&result);
    }

    if result.valid {
        println!("✓ {} is valid!", path.display());
    } else {
        println!("✗ Validation errors in {}:", path.display());
        for error in &result.errors {
            println!("   - {error}");
        }
    }
    Ok(())
}

fn validate_all(ctx: &Context) -> anyhow::Result<()> {
    let config = ctx.config()?;
    let store = ctx.store(&config);
    let reports = store
        .validate_all()
        .with_context(|| format!("failed to read {}", store.dir().display()))?;

    if ctx.json {
        let results: Vec<_> = reports
            .into_iter()
            .map(|r| FileResult::new(&r.entry.path, r.issues))
            .collect();
        return print_json(&results);
    }

    if reports.is_empty() {
        println!("No ADRs found in {}", store.dir().display());
    }

    let mut all_valid = true;
    for report in &reports {
        if report.is_valid() {
            println!("✓ {}", report.entry.filename);
        } else {
            all_valid = false;
            println!("✗ {}", report.entry.filename);
            for issue in &report.issues {
                println!("   - {issue}");
            }
        }
    }

    println!();
    if all_valid {
        println!("All ADRs are valid!");
    } else {
        println!("Some ADRs have validation errors.");
    }
    Ok(())
}
