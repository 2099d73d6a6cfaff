//! Indentation configuration for emitted declarations.

/// One indent level of generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(&'static str);

impl Indent {
    /// 2-space indentation, the TypeScript convention.
    pub const TYPESCRIPT: Self = Self("  ");

    /// The string for one indent level.
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}
