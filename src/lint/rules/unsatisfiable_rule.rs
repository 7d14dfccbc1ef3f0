//! Rules that ask for more credits than they offer.

use std::collections::HashSet;

use crate::catalog::{normalize_code, Catalog};
use crate::config::DataSet;
use crate::gap::format_credits;
use crate::lint::{LintDiagnostic, LintRule, Location, RuleId, Severity};
use crate::program::{PoolConstraints, Rule, RuleCourse};

/// Detects subset rules whose course pool cannot add up to the credits
/// they require.
///
/// Only closed pools are checked. A dynamic subset with departments in
/// its primary pool is open-ended and always passes.
pub struct UnsatisfiableRuleRule;

impl UnsatisfiableRuleRule {
    fn listed_credits(courses: &[RuleCourse], catalog: &Catalog) -> f64 {
        let mut seen = HashSet::new();
        courses
            .iter()
            .filter(|c| {
                let key = normalize_code(&c.code);
                !key.is_empty() && seen.insert(key)
            })
            .map(|c| catalog.credits_or(&c.code, c.credits))
            .sum()
    }

    fn secondary_credits(constraints: &PoolConstraints, catalog: &Catalog) -> f64 {
        let mut seen = HashSet::new();
        constraints
            .secondary_pool
            .courses
            .iter()
            .filter(|code| {
                let key = normalize_code(code);
                !key.is_empty() && seen.insert(key)
            })
            .map(|code| catalog.credits(code))
            .sum()
    }

    fn message(rule: &Rule, catalog: &Catalog) -> Option<String> {
        match rule {
            Rule::SubsetOf {
                credits_needed,
                courses,
                ..
            } => {
                let available = Self::listed_credits(courses, catalog);
                (*credits_needed > available).then(|| {
                    format!(
                        "Subset rule needs {} credits but its courses offer only {}",
                        format_credits(*credits_needed),
                        format_credits(available)
                    )
                })
            }
            Rule::DynamicSubset {
                credits_needed,
                constraints,
                ..
            } => {
                let pool = &constraints.primary_pool;
                let open = pool.departments.iter().any(|d| !d.trim().is_empty())
                    && pool.level_min() <= pool.level_max();
                if open {
                    return None;
                }
                if pool.min_credits > 0.0 {
                    return Some(format!(
                        "Dynamic subset rule needs {} primary-pool credits but the pool matches no courses",
                        format_credits(pool.min_credits)
                    ));
                }
                let available = Self::secondary_credits(constraints, catalog);
                (*credits_needed > available).then(|| {
                    format!(
                        "Dynamic subset rule needs {} credits but its listed courses offer only {}",
                        format_credits(*credits_needed),
                        format_credits(available)
                    )
                })
            }
            _ => None,
        }
    }
}

impl LintRule for UnsatisfiableRuleRule {
    fn id(&self) -> RuleId {
        RuleId::new("unsatisfiable-rule")
    }

    fn name(&self) -> &str {
        "Unsatisfiable Rule"
    }

    fn description(&self) -> &str {
        "Detects subset rules that need more credits than their courses offer"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, data: &DataSet) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();
        for program in &data.programs {
            for (index, rule) in program.rules.iter().enumerate() {
                if let Some(message) = Self::message(rule, &data.catalog) {
                    diagnostics.push(
                        LintDiagnostic::new(self.id(), self.default_severity(), message)
                            .with_location(Location::rule(&program.id, index))
                            .with_suggestion("No student can complete this program as written"),
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
    use crate::lint::rules::test_support::{course, data, programs};

    fn messages(courses: Vec<crate::catalog::Course>, rules: &str) -> Vec<String> {
        let json = format!(r#"[{{"id": "Test", "type": "Minors", "rules": {}}}]"#, rules);
        UnsatisfiableRuleRule
            .check(&data(courses, programs(&json)))
            .into_iter()
            .map(|d| d.message)
            .collect()
    }

    #[test]
    fn flags_short_subset_pool() {
        let found = messages(
            vec![],
            r#"[{"type": "subset", "credits_needed": 9, "courses": [{"code": "ART 1"}, {"code": "ART 2"}]}]"#,
        );
        assert_eq!(
            found,
            vec!["Subset rule needs 9 credits but its courses offer only 6"]
        );
    }

    #[test]
    fn catalog_credits_override_rule_weights() {
        let found = messages(
            vec![course("ART 1", 4.0, ""), course("ART 2", 4.0, "")],
            r#"[{"type": "subset", "credits_needed": 8, "courses": [{"code": "ART 1"}, {"code": "ART 2"}]}]"#,
        );
        assert!(found.is_empty());
    }

    #[test]
    fn duplicate_listings_count_once() {
        let found = messages(
            vec![],
            r#"[{"type": "subset", "credits_needed": 6, "courses": [{"code": "ART 1"}, {"code": "art1"}]}]"#,
        );
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn open_dynamic_pools_pass() {
        let found = messages(
            vec![],
            r#"[{"type": "dynamic_subset", "credits_needed": 30,
                 "constraints": {"primary_pool": {"departments": ["ECON"], "level_min": 400}}}]"#,
        );
        assert!(found.is_empty());
    }

    #[test]
    fn flags_closed_dynamic_pools() {
        let found = messages(
            vec![],
            r#"[{"type": "dynamic_subset", "credits_needed": 6,
                 "constraints": {"primary_pool": {"departments": [], "min_credits_needed": 3}}},
                {"type": "dynamic_subset", "credits_needed": 9,
                 "constraints": {"secondary_pool": {"courses": ["FIN 301"]}}}]"#,
        );
        assert_eq!(found.len(), 2);
        assert!(found[0].contains("primary-pool"));
        assert!(found[1].contains("offer only 3"));
    }

    #[test]
    fn inverted_level_range_is_closed() {
        let found = messages(
            vec![],
            r#"[{"type": "dynamic_subset", "credits_needed": 3,
                 "constraints": {"primary_pool": {"departments": ["ECON"], "level_min": 500, "level_max": 400, "min_credits_needed": 3}}}]"#,
        );
        assert_eq!(found.len(), 1);
    }
}
