//! Tiered prerequisite satisfaction.

use serde::Serialize;

use crate::catalog::{normalize_code, parse_course_code, EquivalencyMap};
use crate::student::CourseHistory;

use super::hierarchy::HierarchyConfig;

/// Why a prerequisite counts as met.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "tier", content = "via", rename_all = "snake_case")]
pub enum SatisfiedBy {
    /// The course itself is held.
    Exact,
    /// A declared equivalent is held.
    Equivalency(String),
    /// A higher-level course in the same department is held.
    Hierarchy(String),
}

/// Decides whether a history meets a single prerequisite code.
///
/// Tiers are tried in order and the first match wins:
///
/// 1. exact match on the normalized code
/// 2. a declared equivalent is held
/// 3. a same-department course at or above the required level (plus the
///    configured difference) is held, when the hierarchy rule is enabled
///
/// Codes that do not parse into department and number only get tier 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct SatisfactionChecker<'a> {
    equivalencies: Option<&'a EquivalencyMap>,
    hierarchy: Option<&'a HierarchyConfig>,
}

impl<'a> SatisfactionChecker<'a> {
    /// Create a checker from optional equivalency and hierarchy data.
    pub fn new(
        equivalencies: Option<&'a EquivalencyMap>,
        hierarchy: Option<&'a HierarchyConfig>,
    ) -> Self {
        Self {
            equivalencies,
            hierarchy,
        }
    }

    /// A checker that only accepts exact matches.
    pub fn exact_only() -> Self {
        Self::default()
    }

    /// Whether `history` satisfies the `required` prerequisite.
    pub fn satisfies(&self, required: &str, history: &CourseHistory) -> bool {
        self.satisfied_by(required, history).is_some()
    }

    /// The tier that satisfies `required`, if any.
    pub fn satisfied_by(&self, required: &str, history: &CourseHistory) -> Option<SatisfiedBy> {
        let code = normalize_code(required);
        if code.is_empty() {
            return None;
        }
        if history.contains(&code) {
            return Some(SatisfiedBy::Exact);
        }

        let parsed = parse_course_code(&code)?;

        if let Some(equivalencies) = self.equivalencies {
            if let Some(held) = equivalencies
                .equivalents_of(&code)
                .iter()
                .find(|equivalent| history.contains(equivalent))
            {
                return Some(SatisfiedBy::Equivalency(held.clone()));
            }
        }

        let hierarchy = self.hierarchy.filter(|h| h.allows_same_department())?;
        if parsed.number == 0 {
            return None;
        }
        let threshold = parsed
            .number
            .saturating_add(hierarchy.minimum_level_difference);

        history
            .iter()
            .find(|held| {
                parse_course_code(&held.code)
                    .is_some_and(|h| h.department == parsed.department && h.number >= threshold)
            })
            .map(|held| SatisfiedBy::Hierarchy(held.code.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Equivalency;

    fn equivalencies() -> EquivalencyMap {
        EquivalencyMap::from_entries([(
            "MATH 110".to_string(),
            Equivalency {
                equivalents: vec!["MATH 140".to_string()],
                ..Default::default()
            },
        )])
    }

    #[test]
    fn exact_match_always_satisfies() {
        let history = CourseHistory::from_codes(["ECON 102"]);
        let checker = SatisfactionChecker::exact_only();
        assert_eq!(checker.satisfied_by("econ102", &history), Some(SatisfiedBy::Exact));
        assert!(!checker.satisfies("ECON 104", &history));
    }

    #[test]
    fn exact_match_applies_to_unparsable_codes() {
        let history = CourseHistory::from_codes(["101ABC"]);
        let hierarchy = HierarchyConfig::same_department(0);
        let checker = SatisfactionChecker::new(None, Some(&hierarchy));
        assert!(checker.satisfies("101 abc", &history));
        assert!(!checker.satisfies("102ABC", &history));
    }

    #[test]
    fn equivalency_satisfies_with_hierarchy_disabled() {
        let map = equivalencies();
        let history = CourseHistory::from_codes(["MATH 140"]);
        let checker = SatisfactionChecker::new(Some(&map), None);
        assert_eq!(
            checker.satisfied_by("MATH 110", &history),
            Some(SatisfiedBy::Equivalency("MATH140".to_string()))
        );
    }

    #[test]
    fn hierarchy_only_fires_when_enabled() {
        let history = CourseHistory::from_codes(["ECON 302"]);

        let disabled = HierarchyConfig::default();
        let checker = SatisfactionChecker::new(None, Some(&disabled));
        assert!(!checker.satisfies("ECON 102", &history));

        let enabled = HierarchyConfig::same_department(0);
        let checker = SatisfactionChecker::new(None, Some(&enabled));
        assert_eq!(
            checker.satisfied_by("ECON 102", &history),
            Some(SatisfiedBy::Hierarchy("ECON302".to_string()))
        );
    }

    #[test]
    fn hierarchy_respects_level_difference_and_department() {
        let history = CourseHistory::from_codes(["ECON 150", "MATH 400"]);
        let config = HierarchyConfig::same_department(100);
        let checker = SatisfactionChecker::new(None, Some(&config));
        assert!(!checker.satisfies("ECON 102", &history));
        assert!(checker.satisfies("MATH 300", &history));
        assert!(!checker.satisfies("STAT 100", &history));
    }

    #[test]
    fn hierarchy_does_not_accept_lower_levels() {
        let history = CourseHistory::from_codes(["ECON 102"]);
        let config = HierarchyConfig::same_department(0);
        let checker = SatisfactionChecker::new(None, Some(&config));
        assert!(!checker.satisfies("ECON 302", &history));
    }

    #[test]
    fn exact_wins_over_other_tiers() {
        let map = equivalencies();
        let config = HierarchyConfig::same_department(0);
        let history = CourseHistory::from_codes(["MATH 140", "MATH 110"]);
        let checker = SatisfactionChecker::new(Some(&map), Some(&config));
        assert_eq!(checker.satisfied_by("MATH 110", &history), Some(SatisfiedBy::Exact));
    }

    #[test]
    fn empty_history_never_satisfies() {
        let map = equivalencies();
        let config = HierarchyConfig::same_department(0);
        let checker = SatisfactionChecker::new(Some(&map), Some(&config));
        assert!(!checker.satisfies("MATH 110", &CourseHistory::new()));
        assert!(!checker.satisfies("", &CourseHistory::new()));
    }
}
