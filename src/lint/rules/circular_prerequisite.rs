//! Circular prerequisite detection.
//!
//! Cost resolution stops at a course already on the current path, so a
//! cycle never hangs the engine. It does make chain costs depend on which
//! course the walk starts from, which is worth knowing about.

use std::collections::HashSet;

use crate::config::DataSet;
use crate::lint::{LintDiagnostic, LintRule, Location, RuleId, Severity};
use crate::prereq::PrerequisiteGraph;

/// Detects courses that are (transitively) their own prerequisite.
pub struct CircularPrerequisiteRule;

impl LintRule for CircularPrerequisiteRule {
    fn id(&self) -> RuleId {
        RuleId::new("circular-prerequisite")
    }

    fn name(&self) -> &str {
        "Circular Prerequisite"
    }

    fn description(&self) -> &str {
        "Detects cycles in catalog prerequisite text"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, data: &DataSet) -> Vec<LintDiagnostic> {
        let graph = PrerequisiteGraph::from_catalog(&data.catalog);
        let mut reported = HashSet::new();
        let mut diagnostics = Vec::new();

        for cycle in graph.find_cycles() {
            // Report each set of courses once, whichever course the walk hit first
            let cycle_key = {
                let mut sorted = cycle.clone();
                sorted.sort();
                sorted.dedup();
                sorted.join(",")
            };
            if !reported.insert(cycle_key) {
                continue;
            }

            let path: Vec<&str> = cycle
                .iter()
                .map(|code| {
                    data.catalog
                        .get(code)
                        .map(|c| c.display_code.as_str())
                        .unwrap_or(code.as_str())
                })
                .collect();

            diagnostics.push(
                LintDiagnostic::new(
                    self.id(),
                    self.default_severity(),
                    format!("Circular prerequisite: {}", path.join(" -> ")),
                )
                .with_location(Location::Course(path[0].to_string()))
                .with_suggestion("Check the prerequisite text of these courses"),
            );
        }

        diagnostics
    }
}
