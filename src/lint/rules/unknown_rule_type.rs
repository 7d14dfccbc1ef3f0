//! Rules of a kind the engine cannot evaluate.

use crate::config::DataSet;
use crate::lint::{LintDiagnostic, LintRule, Location, RuleId, Severity};
use crate::program::Rule;

/// Detects rules whose `type` tag is not recognized.
pub struct UnknownRuleTypeRule;

impl LintRule for UnknownRuleTypeRule {
    fn id(&self) -> RuleId {
        RuleId::new("unknown-rule-type")
    }

    fn name(&self) -> &str {
        "Unknown Rule Type"
    }

    fn description(&self) -> &str {
        "Detects rules with an unrecognized type, which add no credits"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, data: &DataSet) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();
        for program in &data.programs {
            for (index, rule) in program.rules.iter().enumerate() {
                if matches!(rule, Rule::Unknown) {
                    diagnostics.push(
                        LintDiagnostic::new(
                            self.id(),
                            self.default_severity(),
                            "Rule has an unrecognized type and is ignored",
                        )
                        .with_location(Location::rule(&program.id, index))
                        .with_suggestion(
                            "Use one of: all, subset, dynamic_subset, group_option",
                        ),
                    );
                }
            }
        }
        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::rules::test_support::{data, programs};

    #[test]
    fn flags_unknown_tags() {
        let data = data(
            vec![],
            programs(
                r#"[{"id": "Economics", "type": "Majors", "rules": [
                    {"type": "all", "courses": []},
                    {"type": "elective_block", "courses": []}
                ]}]"#,
            ),
        );
        let diagnostics = UnknownRuleTypeRule.check(&data);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Error);
        assert_eq!(diagnostics[0].location, Some(Location::rule("Economics", 1)));
    }

    #[test]
    fn known_tags_pass() {
        let data = data(
            vec![],
            programs(
                r#"[{"id": "Economics", "type": "Majors", "rules": [
                    {"type": "subset", "credits_needed": 3, "courses": []},
                    {"type": "group_option", "groups": []}
                ]}]"#,
            ),
        );
        assert!(UnknownRuleTypeRule.check(&data).is_empty());
    }
}
