//! The metadata root: boundary assembly, output configuration and declared types.

mod lookup;
mod parse;

use std::path::PathBuf;

use indexmap::IndexMap;
pub use lookup::RootKind;
use serde::Deserialize;

use crate::TypeDecl;

fn default_controller_base() -> String {
    "ControllerBase".to_string()
}

fn default_true() -> bool {
    true
}

/// The assembly being projected.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssemblyConfig {
    /// Boundary assembly name.
    pub name: String,
    /// Satellite assemblies projected together with the boundary assembly.
    #[serde(default)]
    pub include: Vec<String>,
    /// Base type whose subclasses are web services.
    #[serde(default = "default_controller_base")]
    pub controller_base: String,
}

/// Where and how to write the projection.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Declarations file (defaults to `<assembly>.ts`).
    pub path: Option<PathBuf>,
    /// Subclass stubs file, written only when missing.
    pub stubs: Option<PathBuf>,
    /// Emit documentation as JSDoc.
    #[serde(default)]
    pub comments: bool,
    /// Emit the prelude of runtime helper types.
    #[serde(default = "default_true")]
    pub prelude: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: None,
            stubs: None,
            comments: false,
            prelude: true,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawMetadata {
    assembly: AssemblyConfig,
    #[serde(default)]
    output: OutputConfig,
    #[serde(default)]
    types: Vec<TypeDecl>,
}

/// Root of a metadata file.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RawMetadata")]
pub struct Metadata {
    pub assembly: AssemblyConfig,
    pub output: OutputConfig,
    pub types: Vec<TypeDecl>,
    /// Qualified name -> position in `types` (first declaration wins).
    by_name: IndexMap<String, usize>,
    /// Simple name -> positions in `types`.
    by_simple_name: IndexMap<String, Vec<usize>>,
}

impl From<RawMetadata> for Metadata {
    fn from(raw: RawMetadata) -> Self {
        let mut by_name = IndexMap::new();
        let mut by_simple_name: IndexMap<String, Vec<usize>> = IndexMap::new();

        for (i, ty) in raw.types.iter().enumerate() {
            by_name.entry(ty.name.clone()).or_insert(i);
            by_simple_name
                .entry(ty.simple_name().to_string())
                .or_default()
                .push(i);
        }

        Self {
            assembly: raw.assembly,
            output: raw.output,
            types: raw.types,
            by_name,
            by_simple_name,
        }
    }
}

impl Metadata {
    /// The declarations file path, defaulting to `<assembly>.ts`.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}.ts", self.assembly.name)))
    }
}
