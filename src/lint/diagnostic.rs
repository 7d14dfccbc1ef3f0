//! Lint diagnostic messages.
//!
//! A [`LintDiagnostic`] names the rule that fired, how serious it is, and
//! optionally where in the data it points: a program rule, a catalog
//! course, or an equivalency entry.

use std::fmt;

use super::rule::{RuleId, Severity};

/// Where in the data set a diagnostic points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// A program, optionally one of its rules (numbered from 1).
    Program { id: String, rule: Option<usize> },
    /// A catalog course.
    Course(String),
    /// An entry of the equivalency map.
    Equivalency(String),
}

impl Location {
    /// A rule of a program, `index` counted from 0.
    pub fn rule(program: &str, index: usize) -> Self {
        Location::Program {
            id: program.to_string(),
            rule: Some(index + 1),
        }
    }

    /// A whole program.
    pub fn program(id: &str) -> Self {
        Location::Program {
            id: id.to_string(),
            rule: None,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Program { id, rule: Some(n) } => write!(f, "programs: {}, rule {}", id, n),
            Location::Program { id, rule: None } => write!(f, "programs: {}", id),
            Location::Course(code) => write!(f, "catalog: {}", code),
            Location::Equivalency(code) => write!(f, "equivalencies: {}", code),
        }
    }
}

/// A diagnostic message produced by a lint rule.
#[derive(Debug, Clone)]
pub struct LintDiagnostic {
    /// The rule that produced this diagnostic.
    pub rule_id: RuleId,
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Optional data location.
    pub location: Option<Location>,
    /// Optional suggestion for fixing the issue.
    pub suggestion: Option<String>,
}

impl LintDiagnostic {
    /// Create a new diagnostic.
    pub fn new(rule_id: RuleId, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            rule_id,
            severity,
            message: message.into(),
            location: None,
            suggestion: None,
        }
    }

    /// Point this diagnostic at a place in the data.
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Add a fix suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_creation() {
        let diag = LintDiagnostic::new(RuleId::new("test-rule"), Severity::Error, "Test message");

        assert_eq!(diag.rule_id, RuleId::new("test-rule"));
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.message, "Test message");
        assert!(diag.suggestion.is_none());
        assert!(diag.location.is_none());
    }

    #[test]
    fn diagnostic_builder_pattern() {
        let diag = LintDiagnostic::new(RuleId::new("test"), Severity::Warning, "Test message")
            .with_location(Location::rule("Economics", 0))
            .with_suggestion("Fix it like this");

        assert_eq!(diag.location, Some(Location::rule("Economics", 0)));
        assert_eq!(diag.suggestion.as_deref(), Some("Fix it like this"));
    }

    #[test]
    fn rule_locations_count_from_one() {
        assert_eq!(
            Location::rule("Economics", 2).to_string(),
            "programs: Economics, rule 3"
        );
        assert_eq!(Location::program("Economics").to_string(), "programs: Economics");
        assert_eq!(Location::Course("ECON 102".into()).to_string(), "catalog: ECON 102");
        assert_eq!(
            Location::Equivalency("MATH110".into()).to_string(),
            "equivalencies: MATH110"
        );
    }
}
