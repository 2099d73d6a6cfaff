use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use mirage_metadata::Metadata;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to mirage.toml (defaults to ./mirage.toml)
    #[arg(short, long, default_value = "mirage.toml")]
    pub metadata: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let metadata = Metadata::from_file(&self.metadata).unwrap_or_exit();

        let report = ops::check(metadata, &self.metadata)?;
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
