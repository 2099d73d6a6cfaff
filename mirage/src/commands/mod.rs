mod check;
mod completions;
mod generate;
mod inspect;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use inspect::InspectCommand;

/// Extension trait for exiting on metadata errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for mirage_metadata::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "mirage")]
#[command(version)]
#[command(about = "Project a host object model into TypeScript declarations")]
pub(crate) struct Cli {
    /// Log engine decisions at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Inspect(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate TypeScript declarations from mirage.toml
    Generate(GenerateCommand),

    /// Validate mirage.toml without generating code
    Check(CheckCommand),

    /// Show the projection graph and the pipeline that builds it
    Inspect(InspectCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
