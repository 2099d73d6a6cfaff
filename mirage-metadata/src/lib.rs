// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Host object model for the mirage type projector.
//!
//! A metadata file (`mirage.toml`) describes the boundary assembly and the
//! host types visible to it: their kind, base type, markers and members.

mod error;
mod host_type;
mod marker;
mod metadata;
mod types;

pub use error::{Error, Result, SourceContext};
pub use host_type::{HostType, TypeExprError};
pub use marker::{Marked, Marker, MarkerTarget};
pub use metadata::{AssemblyConfig, Metadata, OutputConfig, RootKind};
pub use types::{
    ConstantDecl, ConstructorDecl, EnumMember, HttpVerb, MethodDecl, ParamDecl, PropertyDecl,
    TypeDecl, TypeKind, simple_name,
};
