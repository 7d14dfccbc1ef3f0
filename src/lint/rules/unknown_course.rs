//! Program courses missing from the catalog.

use std::collections::HashSet;

use crate::catalog::normalize_code;
use crate::config::DataSet;
use crate::lint::{LintDiagnostic, LintRule, Location, RuleId, Severity};
use crate::program::Rule;

/// Detects program rules that list courses the catalog does not know.
///
/// Such courses are priced at their rule weight and have no prerequisite
/// chain, so gaps involving them may be understated.
pub struct UnknownCourseRule;

impl LintRule for UnknownCourseRule {
    fn id(&self) -> RuleId {
        RuleId::new("unknown-course")
    }

    fn name(&self) -> &str {
        "Unknown Course"
    }

    fn description(&self) -> &str {
        "Detects program courses that are not in any catalog"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, data: &DataSet) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();

        for program in &data.programs {
            let mut reported = HashSet::new();
            for (index, rule) in program.rules.iter().enumerate() {
                for code in rule_codes(rule) {
                    let key = normalize_code(code);
                    if key.is_empty() || data.catalog.contains(&key) || !reported.insert(key) {
                        continue;
                    }
                    diagnostics.push(
                        LintDiagnostic::new(
                            self.id(),
                            self.default_severity(),
                            format!("'{}' is not in the catalog", code.trim()),
                        )
                        .with_location(Location::rule(&program.id, index))
                        .with_suggestion(
                            "Add it to a catalog file or correct the code; until then its \
                             credits come from the rule and its prerequisites are unknown",
                        ),
                    );
                }
            }
        }

        diagnostics
    }
}

fn rule_codes(rule: &Rule) -> Vec<&str> {
    match rule {
        Rule::AllOf { courses, .. } | Rule::SubsetOf { courses, .. } => {
            courses.iter().map(|c| c.code.as_str()).collect()
        }
        Rule::DynamicSubset { constraints, .. } => constraints
            .secondary_pool
            .courses
            .iter()
            .map(String::as_str)
            .collect(),
        Rule::GroupOption { groups, .. } => groups
            .iter()
            .flat_map(|g| g.courses.iter().map(|c| c.code.as_str()))
            .collect(),
        Rule::Unknown => Vec::new(),
    }
}
