//! Human-readable output formatter.
//!
//! Formats lint diagnostics for terminal display with optional color support.

use std::io::Write;

use console::Style;

use super::LintFormatter;
use crate::lint::{LintDiagnostic, Severity};

/// Formats lint output for human consumption.
pub struct HumanFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn severity_prefix(&self, severity: Severity) -> String {
        let text = severity.to_string();
        if !self.use_color {
            return text;
        }
        let style = match severity {
            Severity::Hint => Style::new().cyan(),
            Severity::Warning => Style::new().yellow().bold(),
            Severity::Error => Style::new().red().bold(),
        };
        style.force_styling(true).apply_to(text).to_string()
    }
}

impl LintFormatter for HumanFormatter {
    fn format<W: Write>(
        &self,
        diagnostics: &[LintDiagnostic],
        writer: &mut W,
    ) -> std::io::Result<()> {
        for diag in diagnostics {
            // Header line: error[rule-id]: message
            writeln!(
                writer,
                "{}[{}]: {}",
                self.severity_prefix(diag.severity),
                diag.rule_id.0,
                diag.message
            )?;

            if let Some(ref location) = diag.location {
                writeln!(writer, "  --> {}", location)?;
            }

            if let Some(ref suggestion) = diag.suggestion {
                writeln!(writer, "   = help: {}", suggestion)?;
            }

            writeln!(writer)?;
        }

        let error_count = diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count();
        let warning_count = diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count();

        if error_count > 0 || warning_count > 0 {
            writeln!(
                writer,
                "Found {} error(s) and {} warning(s)",
                error_count, warning_count
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::{Location, RuleId};

    fn render(formatter: &HumanFormatter, diagnostics: &[LintDiagnostic]) -> String {
        let mut output = Vec::new();
        formatter.format(diagnostics, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn formats_error_diagnostic() {
        let diagnostics = vec![LintDiagnostic::new(
            RuleId::new("test-rule"),
            Severity::Error,
            "Test error message",
        )
        .with_location(Location::rule("Economics", 1))];

        let output = render(&HumanFormatter::new(false), &diagnostics);
        assert!(output.contains("error[test-rule]: Test error message"));
        assert!(output.contains("  --> programs: Economics, rule 2"));
    }

    #[test]
    fn formats_hint_diagnostic() {
        let diagnostics = vec![LintDiagnostic::new(
            RuleId::new("test-rule"),
            Severity::Hint,
            "Test hint message",
        )];

        let output = render(&HumanFormatter::new(false), &diagnostics);
        assert!(output.contains("hint[test-rule]"));
    }

    #[test]
    fn formats_summary_line() {
        let diagnostics = vec![
            LintDiagnostic::new(RuleId::new("r1"), Severity::Error, "err"),
            LintDiagnostic::new(RuleId::new("r2"), Severity::Warning, "warn"),
            LintDiagnostic::new(RuleId::new("r3"), Severity::Warning, "warn2"),
        ];

        let output = render(&HumanFormatter::new(false), &diagnostics);
        assert!(output.contains("Found 1 error(s) and 2 warning(s)"));
    }

    #[test]
    fn formats_suggestion() {
        let diagnostics = vec![
            LintDiagnostic::new(RuleId::new("test-rule"), Severity::Warning, "Test message")
                .with_suggestion("Try this instead"),
        ];

        let output = render(&HumanFormatter::new(false), &diagnostics);
        assert!(output.contains("= help: Try this instead"));
    }

    #[test]
    fn color_wraps_severity() {
        let diagnostics = vec![LintDiagnostic::new(
            RuleId::new("r"),
            Severity::Error,
            "err",
        )];

        let output = render(&HumanFormatter::new(true), &diagnostics);
        assert!(output.contains("\u{1b}["));
        assert!(output.contains("[r]: err"));
    }

    #[test]
    fn no_summary_when_only_hints() {
        let diagnostics = vec![LintDiagnostic::new(RuleId::new("r"), Severity::Hint, "h")];

        let output = render(&HumanFormatter::new(false), &diagnostics);
        assert!(!output.contains("Found"));
    }
}
