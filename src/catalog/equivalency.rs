//! Declared course equivalencies.
//!
//! An equivalency says "holding any of these courses counts as holding
//! that one" for prerequisite purposes. The map is produced upstream
//! (transfer-credit tables, generated or curated lists) and is consumed
//! read-only here.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::code::normalize_code;
use super::course::null_as_default;

/// Equivalents and provenance for one course.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Equivalency {
    /// Codes that substitute for the keyed course.
    #[serde(deserialize_with = "null_as_default")]
    pub equivalents: Vec<String>,

    /// Why the equivalency exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Whether a script generated this entry.
    pub auto_generated: bool,

    /// Match kind ("exact", "or_pattern", "hierarchy", ...).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub match_type: Option<String>,
}

/// Normalized course code to its declared equivalents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EquivalencyMap {
    entries: HashMap<String, Equivalency>,
}

impl EquivalencyMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw file entries, normalizing keys and equivalents.
    ///
    /// Blank keys and blank equivalents are dropped. When two raw keys
    /// normalize to the same code their equivalent lists are combined.
    pub fn from_entries(raw: impl IntoIterator<Item = (String, Equivalency)>) -> Self {
        let mut map = Self::new();
        for (code, entry) in raw {
            map.insert(&code, entry);
        }
        map
    }

    /// Insert one entry.
    pub fn insert(&mut self, code: &str, mut entry: Equivalency) {
        let key = normalize_code(code);
        if key.is_empty() {
            return;
        }
        entry.equivalents = entry
            .equivalents
            .iter()
            .map(normalize_code)
            .filter(|c| !c.is_empty() && *c != key)
            .collect();

        match self.entries.get_mut(&key) {
            Some(existing) => {
                for equivalent in entry.equivalents {
                    if !existing.equivalents.contains(&equivalent) {
                        existing.equivalents.push(equivalent);
                    }
                }
            }
            None => {
                self.entries.insert(key, entry);
            }
        }
    }

    /// Normalized equivalents of a course, empty when none are declared.
    pub fn equivalents_of(&self, code: &str) -> &[String] {
        self.entries
            .get(&normalize_code(code))
            .map(|e| e.equivalents.as_slice())
            .unwrap_or(&[])
    }

    /// Full entry for a course.
    pub fn get(&self, code: &str) -> Option<&Equivalency> {
        self.entries.get(&normalize_code(code))
    }

    /// Iterate over `(normalized code, entry)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Equivalency)> {
        self.entries.iter()
    }

    /// Number of courses with declared equivalents.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no equivalencies are declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(equivalents: &[&str]) -> Equivalency {
        Equivalency {
            equivalents: equivalents.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn keys_and_equivalents_are_normalized() {
        let map = EquivalencyMap::from_entries(vec![(
            "MATH 140".to_string(),
            entry(&["MATH 140A", "math 140b"]),
        )]);
        assert_eq!(map.equivalents_of("MATH140"), ["MATH140A", "MATH140B"]);
    }

    #[test]
    fn unknown_code_has_no_equivalents() {
        let map = EquivalencyMap::new();
        assert!(map.equivalents_of("ECON 102").is_empty());
    }

    #[test]
    fn blank_and_self_references_are_dropped() {
        let map = EquivalencyMap::from_entries(vec![
            ("".to_string(), entry(&["ECON 102"])),
            ("ECON 104".to_string(), entry(&["", "ECON 104", "ECON 102"])),
        ]);
        assert_eq!(map.len(), 1);
        assert_eq!(map.equivalents_of("ECON104"), ["ECON102"]);
    }

    #[test]
    fn duplicate_keys_merge_equivalents() {
        let map = EquivalencyMap::from_entries(vec![
            ("ENGL 15".to_string(), entry(&["ENGL 30"])),
            ("ENGL15".to_string(), entry(&["ENGL 30", "ESL 15"])),
        ]);
        assert_eq!(map.equivalents_of("ENGL 15"), ["ENGL30", "ESL15"]);
    }

    #[test]
    fn deserializes_provenance_fields() {
        let json = r#"{
            "equivalents": ["MATH 140A"],
            "reason": "Course equivalency",
            "auto_generated": true,
            "type": "exact"
        }"#;
        let parsed: Equivalency = serde_json::from_str(json).unwrap();
        assert!(parsed.auto_generated);
        assert_eq!(parsed.match_type.as_deref(), Some("exact"));
        assert_eq!(parsed.reason.as_deref(), Some("Course equivalency"));
    }
}
