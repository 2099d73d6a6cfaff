//! Graph counts shared by several reports.

use super::output::Output;

/// What a projection graph renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphSummary {
    /// Namespaces with at least one declaration.
    pub namespaces: usize,
    /// Rendered classes, interfaces and enums.
    pub classes: usize,
    /// Web and socket service classes.
    pub services: usize,
    /// Qualified name of the synthesized endpoint.
    pub endpoint: Option<String>,
}

impl GraphSummary {
    pub(crate) fn render(&self, out: &mut dyn Output) {
        out.key_value("Namespaces", &self.namespaces.to_string());
        out.key_value("Declarations", &self.classes.to_string());
        out.key_value("Services", &self.services.to_string());
        if let Some(endpoint) = &self.endpoint {
            out.key_value("Endpoint", endpoint);
        }
    }
}
