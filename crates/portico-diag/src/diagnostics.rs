//! Accumulator for validation findings.

use std::fmt;

use serde::Serialize;

use crate::issue::{Issue, Warning};

/// Collects every finding of a validation run instead of stopping at the
/// first.
///
/// Stages push into one shared accumulator so the final report covers the
/// whole input. Repeated findings are dropped on insertion; the first
/// occurrence keeps its position, so report order follows input order.
#[derive(Debug, Default, Serialize)]
pub struct Diagnostics {
    errors: Vec<Issue>,
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Create an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a validation failure. Duplicates of an already recorded
    /// issue are ignored.
    pub fn error(&mut self, issue: Issue) {
        if !self.errors.contains(&issue) {
            self.errors.push(issue);
        }
    }

    /// Record a non-fatal finding. Duplicates are ignored.
    pub fn warn(&mut self, warning: Warning) {
        if !self.warnings.contains(&warning) {
            self.warnings.push(warning);
        }
    }

    /// True once at least one error has been recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Recorded errors in first-occurrence order.
    #[must_use]
    pub fn errors(&self) -> &[Issue] {
        &self.errors
    }

    /// Recorded warnings in first-occurrence order.
    #[must_use]
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Number of recorded errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// True when no errors have been recorded. Warnings do not count.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Final verdict: the collected warnings when validation passed, the
    /// accumulator itself when it did not.
    pub fn into_result(self) -> Result<Vec<Warning>, Self> {
        if self.errors.is_empty() {
            Ok(self.warnings)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.len() == 1 {
            return write!(f, "{}", self.errors[0]);
        }
        write!(f, "{} validation errors", self.errors.len())?;
        for error in &self.errors {
            write!(f, "\n  {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostics {}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn missing(path: &str) -> Issue {
        Issue::MissingField { path: path.into() }
    }

    #[test]
    fn test_new_has_no_errors() {
        let diag = Diagnostics::new();

        assert!(!diag.has_errors());
        assert!(diag.is_empty());
        assert_eq!(diag.len(), 0);
    }

    #[test]
    fn test_error_records_issue() {
        let mut diag = Diagnostics::new();

        diag.error(missing("title"));

        assert!(diag.has_errors());
        assert_eq!(diag.errors(), [missing("title")]);
    }

    #[test]
    fn test_error_deduplicates_keeping_first_occurrence() {
        let mut diag = Diagnostics::new();

        diag.error(missing("title"));
        diag.error(missing("url"));
        diag.error(missing("title"));

        assert_eq!(diag.errors(), [missing("title"), missing("url")]);
    }

    #[test]
    fn test_warnings_do_not_count_as_errors() {
        let mut diag = Diagnostics::new();

        diag.warn(Warning::EmptyCategory {
            sidebar: "docs".to_owned(),
            path: crate::TreePath::new(),
            label: "Drafts".to_owned(),
        });

        assert!(!diag.has_errors());
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);
    }

    #[test]
    fn test_into_result_ok_yields_warnings() {
        let mut diag = Diagnostics::new();
        diag.warn(Warning::EmptyCategory {
            sidebar: "docs".to_owned(),
            path: crate::TreePath::new(),
            label: "Drafts".to_owned(),
        });

        let warnings = diag.into_result().unwrap();

        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_into_result_err_keeps_errors() {
        let mut diag = Diagnostics::new();
        diag.error(missing("title"));

        let err = diag.into_result().unwrap_err();

        assert_eq!(err.errors(), [missing("title")]);
    }

    #[test]
    fn test_display_single_error_is_bare() {
        let mut diag = Diagnostics::new();
        diag.error(missing("title"));

        assert_eq!(diag.to_string(), "missing required field `title`");
    }

    #[test]
    fn test_display_multiple_errors_lists_each() {
        let mut diag = Diagnostics::new();
        diag.error(missing("title"));
        diag.error(missing("url"));

        let display = diag.to_string();

        assert!(display.starts_with("2 validation errors"));
        assert!(display.contains("missing required field `title`"));
        assert!(display.contains("missing required field `url`"));
    }

    #[test]
    fn test_serializes_errors_and_warnings() {
        let mut diag = Diagnostics::new();
        diag.error(missing("title"));

        let json = serde_json::to_value(&diag).unwrap();

        assert_eq!(json["errors"][0]["kind"], "missing_field");
        assert!(json["warnings"].as_array().unwrap().is_empty());
    }
}
