//! Equivalency entries that point nowhere.

use crate::config::DataSet;
use crate::lint::{LintDiagnostic, LintRule, Location, RuleId, Severity};

/// Detects equivalency entries with no usable equivalents and
/// equivalents that are not catalog courses.
pub struct DanglingEquivalencyRule;

impl LintRule for DanglingEquivalencyRule {
    fn id(&self) -> RuleId {
        RuleId::new("dangling-equivalency")
    }

    fn name(&self) -> &str {
        "Dangling Equivalency"
    }

    fn description(&self) -> &str {
        "Detects equivalencies that reference courses outside the catalog"
    }

    fn default_severity(&self) -> Severity {
        Severity::Hint
    }

    fn check(&self, data: &DataSet) -> Vec<LintDiagnostic> {
        let mut entries: Vec<_> = data.equivalencies.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        let mut diagnostics = Vec::new();
        for (code, entry) in entries {
            if entry.equivalents.is_empty() {
                diagnostics.push(
                    LintDiagnostic::new(
                        self.id(),
                        self.default_severity(),
                        format!("{} declares no usable equivalents", code),
                    )
                    .with_location(Location::Equivalency(code.clone())),
                );
                continue;
            }
            for equivalent in &entry.equivalents {
                if data.catalog.contains(equivalent) {
                    continue;
                }
                diagnostics.push(
                    LintDiagnostic::new(
                        self.id(),
                        self.default_severity(),
                        format!("Equivalent {} of {} is not in the catalog", equivalent, code),
                    )
                    .with_location(Location::Equivalency(code.clone()))
                    .with_suggestion(
                        "Students holding it still satisfy the prerequisite; check the code is current",
                    ),
                );
            }
        }
        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Equivalency, EquivalencyMap};
    use crate::lint::rules::test_support::{course, data};

    fn equivalency(equivalents: &[&str]) -> Equivalency {
        Equivalency {
            equivalents: equivalents.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn flags_uncatalogued_equivalents() {
        let mut data = data(vec![course("MATH 140", 4.0, "")], vec![]);
        data.equivalencies = EquivalencyMap::from_entries(vec![(
            "MATH 110".to_string(),
            equivalency(&["MATH 140", "MATH 140H"]),
        )]);

        let diagnostics = DanglingEquivalencyRule.check(&data);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "Equivalent MATH140H of MATH110 is not in the catalog"
        );
        assert_eq!(diagnostics[0].severity, Severity::Hint);
    }

    #[test]
    fn flags_self_only_entries() {
        let mut data = data(vec![], vec![]);
        data.equivalencies = EquivalencyMap::from_entries(vec![(
            "STAT 200".to_string(),
            equivalency(&["stat 200"]),
        )]);

        let diagnostics = DanglingEquivalencyRule.check(&data);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "STAT200 declares no usable equivalents");
    }
}
