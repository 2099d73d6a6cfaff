use std::path::{Path, PathBuf};

use clap::Args;
use eyre::Result;
use mirage_codegen::ProjectionOptions;
use mirage_metadata::Metadata;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to mirage.toml (defaults to ./mirage.toml)
    #[arg(short, long, default_value = "mirage.toml")]
    pub metadata: PathBuf,

    /// Declarations file (overrides [output] path)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Subclass stubs file, written only when missing (overrides [output] stubs)
    #[arg(long)]
    pub stubs: Option<PathBuf>,

    /// Render documentation as JSDoc comments
    #[arg(long)]
    pub comments: bool,

    /// Leave out the prelude of runtime helper types
    #[arg(long)]
    pub no_prelude: bool,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let metadata = Metadata::from_file(&self.metadata).unwrap_or_exit();
        let options = self.options(&metadata);

        let report = ops::generate(
            metadata,
            options,
            GenerateOptions {
                output_dir: Path::new("."),
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }

    /// The `[output]` table with command-line overrides applied.
    fn options(&self, metadata: &Metadata) -> ProjectionOptions {
        let mut options = ProjectionOptions::from_metadata(metadata);
        if let Some(output) = &self.output {
            options.output = output.clone();
        }
        if let Some(stubs) = &self.stubs {
            options.stubs = Some(stubs.clone());
        }
        options.comments |= self.comments;
        if self.no_prelude {
            options.prelude = false;
        }
        options
    }
}
