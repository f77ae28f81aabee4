use super::Context;
use crate::output::{print_json, print_table};
use anyhow::Context as _;

pub fn run(ctx: &Context) -> anyhow::Result<()> {
    let config = ctx.config()?;
    let store = ctx.store(&config);
    let entries = store
        .list()
        .with_context(|| format!("failed to list {}", store.dir().display()))?;

    if ctx.json {
        return print_json(&entries);
    }

    if entries.is_empty() {
        println!("No ADRs found in {}", store.dir().display());
        return Ok(());
    }

    println!("Architecture Decision Records in {}:", store.dir().display());
    println!();
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|e| {
            vec![
                e.title.clone(),
                e.filename.clone(),
                e.modified.format("%Y-%m-%d %H:%M").to_string(),
                e.path.display().to_string(),
            ]
        })
        .collect();
    print_table(&["TITLE", "FILE", "MODIFIED", "PATH"], &rows);
    Ok(())
}
