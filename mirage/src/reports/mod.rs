//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod inspect;
mod output;
mod summary;

pub use check::CheckReport;
pub use generate::{GenerateReport, GenerationResult, PreviewFile, WrittenResult};
pub use inspect::{ClassInfo, InspectReport, LintInfo, NamespaceInfo, PhaseInfo};
pub use output::{Report, TerminalOutput};
pub use summary::GraphSummary;
