use adr_cli::cmd::analyze::{self, Analysis, AnalyzeArgs};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "adr-analyze",
    about = "Inspect a codebase and its git history to seed Architecture Decision Records",
    version
)]
struct Cli {
    /// Path to the codebase directory
    #[arg(long, default_value = ".")]
    path: PathBuf,

    /// Topic for draft ADR generation
    #[arg(long)]
    topic: Option<String>,

    /// File to write the generated draft to (default: print it)
    #[arg(long)]
    output: Option<PathBuf>,

    /// What to analyze
    #[arg(long, value_enum, default_value_t = Analysis::All)]
    analyze: Analysis,

    /// Analyze a single commit and exit
    #[arg(long)]
    commit: Option<String>,

    /// Output as JSON
    #[arg(long, short = 'j')]
    json: bool,
}

fn main() {
    let cli = Cli::parse();
    adr_cli::init_tracing();

    let result = analyze::run(AnalyzeArgs {
        path: cli.path,
        topic: cli.topic,
        output: cli.output,
        analyze: cli.analyze,
        commit: cli.commit,
        json: cli.json,
    });

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
