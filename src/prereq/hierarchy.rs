//! Departmental hierarchy settings (`hierarchy_rules` in the config).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// When a higher-level course in the same department may stand in for a
/// lower-level prerequisite.
///
/// Everything defaults to off: an absent `hierarchy_rules` section never
/// lets one course substitute for another.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct HierarchyConfig {
    /// Master switch.
    pub enabled: bool,

    /// Allow same-department, higher-numbered courses to satisfy.
    pub same_department_higher_level: bool,

    /// How many levels above the requirement the held course must be.
    pub minimum_level_difference: u32,
}

impl HierarchyConfig {
    /// Settings with the same-department rule switched on.
    pub fn same_department(minimum_level_difference: u32) -> Self {
        Self {
            enabled: true,
            same_department_higher_level: true,
            minimum_level_difference,
        }
    }

    /// Whether the same-department rule applies at all.
    pub fn allows_same_department(&self) -> bool {
        self.enabled && self.same_department_higher_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_disabled() {
        let config = HierarchyConfig::default();
        assert!(!config.allows_same_department());
        assert_eq!(config.minimum_level_difference, 0);
    }

    #[test]
    fn both_switches_are_required() {
        let yaml = "enabled: false\nsame_department_higher_level: true\n";
        let config: HierarchyConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(!config.allows_same_department());

        let yaml = "enabled: true\nsame_department_higher_level: false\n";
        let config: HierarchyConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(!config.allows_same_department());

        assert!(HierarchyConfig::same_department(0).allows_same_department());
    }

    #[test]
    fn partial_section_fills_defaults() {
        let config: HierarchyConfig = serde_yaml::from_str("enabled: true").unwrap();
        assert!(config.enabled);
        assert!(!config.same_department_higher_level);
    }
}
