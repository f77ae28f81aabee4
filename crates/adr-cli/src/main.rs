use adr_cli::cmd::{self, Context};
use adr_cli::root;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "adr",
    about = "Scaffold, list and validate Architecture Decision Records",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .adr.yaml or .git/)
    #[arg(long, global = true, env = "ADR_ROOT")]
    root: Option<PathBuf>,

    /// Directory holding ADR files (default: output_dir from .adr.yaml, else docs/adr,
    /// resolved against the project root rather than the current directory)
    #[arg(long, global = true, env = "ADR_OUTPUT")]
    output: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new ADR from the template
    Create {
        /// ADR title; also determines the filename
        #[arg(long)]
        title: Option<String>,

        /// Submitters in the form 'Name (Organization)'
        #[arg(long, num_args = 1..)]
        submitters: Vec<String>,

        /// Prompt for the Context, Referenced Use Case(s), Considerations and Decision sections
        #[arg(long)]
        interactive: bool,
    },

    /// List ADRs, most recently modified first
    List,

    /// Check ADRs for missing sections and unfinished TODO items
    Validate {
        /// Validate a single file instead of the whole ADR directory
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    adr_cli::init_tracing();

    let ctx = Context {
        root: root::resolve_root(cli.root.as_deref()),
        output: cli.output,
        json: cli.json,
    };

    let result = match cli.command {
        Commands::Create {
            title,
            submitters,
            interactive,
        } => cmd::create::run(&ctx, title, submitters, interactive),
        Commands::List => cmd::list::run(&ctx),
        Commands::Validate { file } => cmd::validate::run(&ctx, file),
    };

    if let Err(e) = result {
        if let Some(exit) = e.downcast_ref::<cmd::create::CreateExit>() {
            eprintln!("Error: {exit}");
            std::process::exit(exit.exit_code());
        }
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
