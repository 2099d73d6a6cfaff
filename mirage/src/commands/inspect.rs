use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use mirage_codegen::ProjectionOptions;
use mirage_metadata::Metadata;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InspectCommand {
    /// Path to mirage.toml (defaults to ./mirage.toml)
    #[arg(short, long, default_value = "mirage.toml")]
    pub metadata: PathBuf,

    /// Print the projection graph as JSON
    #[arg(long)]
    pub json: bool,

    /// Write a JSON snapshot of the pipeline state after each phase to this directory
    #[arg(long, value_name = "DIR")]
    pub snapshots: Option<PathBuf>,
}

impl InspectCommand {
    pub fn run(&self) -> Result<()> {
        let metadata = Metadata::from_file(&self.metadata).unwrap_or_exit();
        let options = ProjectionOptions::from_metadata(&metadata);

        let report = ops::inspect(metadata, options, &self.metadata, self.snapshots.as_deref())?;
        if self.json {
            let json = serde_json::to_string_pretty(&report.graph)
                .wrap_err("Failed to serialize the projection graph")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        Ok(())
    }
}
