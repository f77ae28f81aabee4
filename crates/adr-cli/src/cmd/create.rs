use super::Context;
use crate::output::print_json;
use adr_core::collect::PromptCollector;
use adr_core::template::title_to_filename;
use anyhow::Context as _;
use std::io::Write;

/// Usage errors reported by `main` as `Error: <message>` with a non-zero exit.
#[derive(Debug, PartialEq, Eq)]
pub enum CreateExit {
    MissingTitle,
}

impl CreateExit {
    pub fn exit_code(&self) -> i32 {
        match self {
            CreateExit::MissingTitle => 1,
        }
    }
}

impl std::fmt::Display for CreateExit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreateExit::MissingTitle => write!(f, "--title is required for create command"),
        }
    }
}

impl std::error::Error for CreateExit {}

pub fn run(
    ctx: &Context,
    title: Option<String>,
    submitters: Vec<String>,
    interactive: bool,
) -> anyhow::Result<()> {
    let Some(title) = title else {
        return Err(CreateExit::MissingTitle.into());
    };

    let config = ctx.config()?;
    let store = ctx.store(&config);
    let submitters = if submitters.is_empty() {
        config.submitters.clone()
    } else {
        submitters
    };

    let created = if interactive {
        let filename = title_to_filename(&title);
        // Prompts go to stderr in JSON mode so stdout stays parseable.
        let prompts: Box<dyn Write> = if ctx.json {
            eprintln!("Creating ADR: {title}");
            Box::new(std::io::stderr())
        } else {
            println!("Creating ADR: {title}");
            println!("Filename: {filename}");
            println!("Path: {}", store.path_for(&filename).display());
            Box::new(std::io::stdout())
        };
        let mut collector = PromptCollector::new(std::io::stdin().lock(), prompts);
        store.create(&title, &submitters, Some(&mut collector))
    } else {
        store.create(&title, &submitters, None)
    }
    .with_context(|| format!("failed to create ADR '{title}'"))?;

    if ctx.json {
        return print_json(&created);
    }

    if created.overwritten {
        println!("Replaced existing file: {}", created.path.display());
    }
    println!("ADR created: {}", created.path.display());
    println!();
    println!("Next steps:");
    println!("1. Edit the ADR: {}", created.path.display());
    println!("2. Fill in all sections and remove TODO items");
    println!("3. Review with stakeholders");
    println!("4. Update change log when approved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_title_is_a_typed_exit() {
        let dir = TempDir::new().unwrap();
        let ctx = Context {
            root: dir.path().to_path_buf(),
            output: None,
            json: false,
        };
        let err = run(&ctx, None, Vec::new(), false).unwrap_err();
        let exit = err.downcast_ref::<CreateExit>().unwrap();
        assert_eq!(*exit, CreateExit::MissingTitle);
        assert_eq!(exit.exit_code(), 1);
        assert_eq!(exit.to_string(), "--title is required for create command");
        assert!(!dir.path().join("docs/adr").exists());
    }
}
