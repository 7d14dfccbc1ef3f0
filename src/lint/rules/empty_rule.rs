//! Rules that can never contribute a gap.

use crate::catalog::normalize_code;
use crate::config::DataSet;
use crate::lint::{LintDiagnostic, LintRule, Location, RuleId, Severity};
use crate::program::{Rule, RuleCourse};

/// Detects rules that are met by every student, usually a sign of a
/// scraping or transformation problem upstream.
pub struct EmptyRuleRule;

impl EmptyRuleRule {
    fn message(rule: &Rule) -> Option<String> {
        match rule {
            Rule::AllOf { courses, .. } if !lists_any(courses) => {
                Some("Required-course rule lists no courses".to_string())
            }
            Rule::SubsetOf { credits_needed, .. } if *credits_needed <= 0.0 => {
                Some("Subset rule needs no credits".to_string())
            }
            Rule::DynamicSubset {
                credits_needed,
                constraints,
                ..
            } if *credits_needed <= 0.0 && constraints.primary_pool.min_credits <= 0.0 => {
                Some("Dynamic subset rule needs no credits".to_string())
            }
            Rule::GroupOption { groups, .. } if groups.is_empty() => {
                Some("Group rule has no options".to_string())
            }
            Rule::GroupOption { groups, .. } => groups
                .iter()
                .enumerate()
                .find(|(_, g)| !lists_any(&g.courses))
                .map(|(i, g)| {
                    let label = g
                        .name
                        .clone()
                        .unwrap_or_else(|| format!("Option {}", i + 1));
                    format!("Group option '{}' lists no courses", label)
                }),
            _ => None,
        }
    }
}

fn lists_any(courses: &[RuleCourse]) -> bool {
    courses.iter().any(|c| !normalize_code(&c.code).is_empty())
}

impl LintRule for EmptyRuleRule {
    fn id(&self) -> RuleId {
        RuleId::new("empty-rule")
    }

    fn name(&self) -> &str {
        "Empty Rule"
    }

    fn description(&self) -> &str {
        "Detects rules that every student already satisfies"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, data: &DataSet) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();
        for program in &data.programs {
            for (index, rule) in program.rules.iter().enumerate() {
                if let Some(message) = Self::message(rule) {
                    diagnostics.push(
                        LintDiagnostic::new(self.id(), self.default_severity(), message)
                            .with_location(Location::rule(&program.id, index))
                            .with_suggestion("This rule always adds 0 gap credits"),
                    );
                }
            }
        }
        diagnostics
    }
}
