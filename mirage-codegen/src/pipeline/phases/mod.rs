//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - runs lints over the metadata
//! - [`BuildPhase`] - walks the discovered roots into a projection graph
//! - [`AggregatePhase`] - synthesizes the service endpoint

mod aggregate;
mod build;
mod validate;

pub use aggregate::AggregatePhase;
pub use build::BuildPhase;
pub use validate::{
    DuplicateMemberLint, IdentifierNamingLint, Lint, LintInfo, MarkerPlacementLint,
    MissingRouteLint, UnresolvedReferenceLint, ValidatePhase,
};
