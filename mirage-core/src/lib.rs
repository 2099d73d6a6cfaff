//! Core utilities and types for mirage.
//!
//! This crate provides the string helpers and file-writing rules shared by
//! the metadata loader, the projection engine and the generators.

mod file;
mod utils;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// String utilities
pub use utils::{
    lower_first, quote_single, strip_suffix_ignore_case, to_camel_case, to_pascal_case,
    toml_value_to_string,
};
