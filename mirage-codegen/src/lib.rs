//! The type projection engine of the mirage type projector.
//!
//! This crate turns a parsed [`mirage_metadata::Metadata`] into a
//! [`mirage_ir::ProjectionGraph`]; target language generators render the graph.
//!
//! # Module Organization
//!
//! - [`registry`] - the closed table of well-known host types
//! - [`mapper`] - host type expressions to target type nodes
//! - [`graph_builder`] - the memoized walk from roots to class nodes
//! - [`classify`] - property variant and method shape decisions
//! - [`endpoint`] - the service endpoint aggregator
//! - [`pipeline`] - phases, lints, plugins and diagnostics
//! - [`builder`] - language-agnostic code building blocks
//! - [`language`] - the generator trait and naming rules
//! - [`testing`] - test utilities (feature-gated)

pub mod builder;
pub mod classify;
pub mod docs;
pub mod endpoint;
pub mod graph_builder;
pub mod language;
pub mod mapper;
mod options;
pub mod pipeline;
pub mod registry;
pub mod route;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use options::ProjectionOptions;
