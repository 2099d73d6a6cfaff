//! Runtime helper types the declarations refer to.

use mirage_codegen::builder::{CodeFragment, Renderable};

const PRELUDE: &[&str] = &[
    "interface Type { Name: string; FullName: string; Parent: string; }",
    "type Nullable<T> = T | null;",
    "type ByRef<T> = { value: T };",
    "type IEnumerable<T> = Iterable<T>;",
    "type ApiResult = any;",
    "type DataTable = any;",
];

/// Declarations of `Type`, `Nullable<T>`, `ByRef<T>`, `IEnumerable<T>`, `ApiResult` and `DataTable`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Prelude;

impl Renderable for Prelude {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        PRELUDE.iter().map(|line| CodeFragment::line(*line)).collect()
    }
}
