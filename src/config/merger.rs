//! Deep merge for layered YAML configuration.
//!
//! `.degreegap/config.local.yml` is laid over `.degreegap/config.yml`.
//!
//! # Merge Rules
//!
//! - Mappings are merged recursively
//! - Sequences are replaced entirely (a local `catalogs:` list replaces the
//!   project list)
//! - Null values in the overlay delete the key from the base
//! - Scalars in the overlay replace the base

use serde_yaml::Value;

/// Deep merge two YAML values; `overlay` wins at every conflict.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut result = base_map.clone();

            for (key, overlay_value) in overlay_map {
                if overlay_value.is_null() {
                    result.remove(key);
                } else if let Some(base_value) = base_map.get(key) {
                    result.insert(key.clone(), deep_merge(base_value, overlay_value));
                } else {
                    result.insert(key.clone(), overlay_value.clone());
                }
            }

            Value::Mapping(result)
        }

        (_, overlay) => overlay.clone(),
    }
}

/// Merge configs in order; later layers take precedence.
pub fn merge_configs(configs: &[Value]) -> Value {
    configs
        .iter()
        .fold(Value::Mapping(Default::default()), |acc, config| {
            deep_merge(&acc, config)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn local_override_changes_one_setting() {
        let base = yaml(
            r#"
hierarchy_rules:
  enabled: true
  same_department_higher_level: true
  minimum_level_difference: 0
"#,
        );
        let overlay = yaml(
            r#"
hierarchy_rules:
  minimum_level_difference: 100
"#,
        );

        let result = deep_merge(&base, &overlay);

        assert_eq!(result["hierarchy_rules"]["minimum_level_difference"], 100);
        assert_eq!(result["hierarchy_rules"]["enabled"], true);
    }

    #[test]
    fn catalog_lists_are_replaced() {
        let base = yaml(
            r#"
catalogs:
  - data/gened.json
  - data/master.json
"#,
        );
        let overlay = yaml(
            r#"
catalogs:
  - data/test_catalog.json
"#,
        );

        let result = deep_merge(&base, &overlay);
        let catalogs = result["catalogs"].as_sequence().unwrap();

        assert_eq!(catalogs.len(), 1);
        assert_eq!(catalogs[0], "data/test_catalog.json");
    }

    #[test]
    fn null_removes_inherited_value() {
        let base = yaml(
            r#"
data:
  programs: data/programs.json
  equivalencies: data/equivalencies.json
"#,
        );
        let overlay = yaml(
            r#"
data:
  equivalencies: null
"#,
        );

        let result = deep_merge(&base, &overlay);

        assert!(result["data"].get("equivalencies").is_none());
        assert_eq!(result["data"]["programs"], "data/programs.json");
    }

    #[test]
    fn empty_overlay_returns_base_unchanged() {
        let base = yaml("recommend:\n  top_n: 15\n");
        let result = deep_merge(&base, &yaml("{}"));
        assert_eq!(result["recommend"]["top_n"], 15);
    }

    #[test]
    fn scalar_overlay_replaces_mapping_base() {
        let base = yaml("settings:\n  default_output: quiet\n");
        let result = deep_merge(&base, &yaml("settings: off\n"));
        assert_eq!(result["settings"], "off");
    }

    #[test]
    fn merge_configs_applies_layers_in_order() {
        let configs = vec![
            yaml("recommend:\n  top_n: 15\n  interest_filter: Minor\n"),
            yaml("recommend:\n  top_n: 5\n"),
            yaml("recommend:\n  interest_filter: Certificate\n"),
        ];

        let result = merge_configs(&configs);

        assert_eq!(result["recommend"]["top_n"], 5);
        assert_eq!(result["recommend"]["interest_filter"], "Certificate");
    }

    #[test]
    fn merge_empty_configs_returns_empty() {
        let result = merge_configs(&[]);
        assert!(result.as_mapping().unwrap().is_empty());
    }
}
