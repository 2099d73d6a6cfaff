//! Compilation pipeline for type projection.
//!
//! A [`Pipeline`] runs the projection as explicit phases over a shared
//! [`CompilationContext`]:
//!
//! - `validate`: lints over the metadata, errors stop the run
//! - `build`: the graph builder walks every discovered root
//! - `aggregate`: the service endpoint is synthesized
//!
//! Plugins are called before and after each phase, and every phase reports
//! non-fatal issues as [`Diagnostic`]s.
//!
//! # Example
//!
//! ```ignore
//! use mirage_codegen::{ProjectionOptions, pipeline::Pipeline};
//!
//! let options = ProjectionOptions::from_metadata(&metadata);
//! let ctx = Pipeline::new().run(metadata, options)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("warning: {}", diag.message);
//! }
//! let graph = ctx.graph()?;
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;
mod snapshot;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use plugin::Plugin;
pub use runner::Pipeline;
pub use snapshot::{PhaseSnapshot, SnapshotPlugin};
