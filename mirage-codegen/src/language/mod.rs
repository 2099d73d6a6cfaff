//! Language-specific abstractions.
//!
//! - [`LanguageCodegen`] - the trait a target language generator implements
//! - [`NamingConvention`] - identifier rules and reserved words
//! - [`GenerateResult`] - what a generation run wrote
//! - [`PreviewFile`] - a generated file held in memory

mod naming;
mod traits;

pub use naming::{NamingConvention, TYPESCRIPT};
pub use traits::{GenerateResult, LanguageCodegen, PreviewFile};
