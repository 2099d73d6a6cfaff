//! Check command report data structures.

use std::path::PathBuf;

use super::{
    GraphSummary,
    output::{Output, Report},
};

/// Report data from metadata validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the metadata file.
    pub config_path: PathBuf,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
    /// What the projection would render; absent when a lint failed.
    pub summary: Option<GraphSummary>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.warning(&format!("error: {}", error));
        }

        for warning in &self.warnings {
            out.warning(&format!("warning: {}", warning));
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() || !self.infos.is_empty() {
            out.newline();
        }

        if !self.is_valid() {
            out.warning(&format!(
                "{} has {} error{}",
                self.config_path.display(),
                self.errors.len(),
                if self.errors.len() == 1 { "" } else { "s" }
            ));
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        if let Some(summary) = &self.summary {
            out.newline();
            summary.render(out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_invalid_report() {
        let report = CheckReport {
            config_path: PathBuf::from("mirage.toml"),
            errors: vec!["[validate] bad".into()],
            warnings: Vec::new(),
            infos: Vec::new(),
            summary: None,
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert!(!report.is_valid());
        assert_eq!(
            out.lines,
            vec!["error: [validate] bad", "", "mirage.toml has 1 error"]
        );
    }

    #[test]
    fn test_valid_report_with_summary() {
        let report = CheckReport {
            config_path: PathBuf::from("mirage.toml"),
            errors: Vec::new(),
            warnings: Vec::new(),
            infos: vec!["[validate] no route".into()],
            summary: Some(GraphSummary {
                namespaces: 2,
                classes: 3,
                services: 1,
                endpoint: Some("Contoso.Endpoint".into()),
            }),
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        let text = out.text();
        assert!(text.starts_with("info: [validate] no route\n\n✓ mirage.toml is valid"));
        assert!(text.ends_with("Services: 1\nEndpoint: Contoso.Endpoint"));
    }
}
