//! The TypeScript render tree.
//!
//! One renderable per node kind. Each borrows its node from the
//! [`ProjectionGraph`](mirage_ir::ProjectionGraph) and produces
//! [`CodeFragment`](mirage_codegen::builder::CodeFragment)s; none of them
//! contributes to the reference pass.

mod class;
mod constructor;
mod endpoint;
mod enumeration;
mod interface;
mod method;
mod namespace;
mod param;
mod prelude;
mod property;
mod statement;
mod stub;

pub use class::Class;
pub use constructor::Constructor;
pub use endpoint::Endpoint;
pub use enumeration::Enum;
pub use interface::Interface;
pub use method::Method;
pub use namespace::{Namespace, declaration};
pub use param::{Param, param_list};
pub use prelude::Prelude;
pub use property::{Property, assignment, inline_declaration, object_literal};
pub use statement::statement;
pub use stub::{Stub, StubBlock, needs_stub};
