//! TypeScript renderer for the mirage type projector.
//!
//! This crate turns a [`ProjectionGraph`](mirage_ir::ProjectionGraph) into
//! TypeScript declarations: one `namespace` block per host namespace, then the
//! service endpoint.
//!
//! # Usage
//!
//! ```ignore
//! use mirage_codegen::{ProjectionOptions, language::LanguageCodegen, pipeline::Pipeline};
//! use mirage_codegen_typescript::Generator;
//! use mirage_metadata::Metadata;
//!
//! let metadata = Metadata::from_file("mirage.toml")?;
//! let options = ProjectionOptions::from_metadata(&metadata);
//! let ctx = Pipeline::new().run(metadata, options)?;
//! let generator = Generator::from_context(ctx)?;
//!
//! // Preview files without writing
//! let files = generator.preview();
//!
//! // Write files under a directory
//! let result = generator.generate(Path::new("."))?;
//! ```
//!
//! # Generated Output
//!
//! - the declarations file (`[output].path`): a header, the runtime prelude,
//!   the namespaces and the endpoint; overwritten on every run
//! - the stubs file (`[output].stubs`, optional): `class Name extends NameBase {}`
//!   for every class rendered under its `Base` name; written only if missing

mod code_file;
mod generator;

pub mod ast;
pub mod files;

pub use code_file::CodeFile;
pub use generator::Generator;
pub use mirage_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
