//! Rule registry for managing lint rules.
//!
//! The [`RuleRegistry`] stores all available lint rules and provides
//! methods for registering, retrieving, iterating over, and running them.

use std::collections::HashMap;

use super::diagnostic::LintDiagnostic;
use super::rule::{LintRule, RuleId};
use super::rules::{
    CircularPrerequisiteRule, DanglingEquivalencyRule, EmptyRuleRule, UnknownCourseRule,
    UnknownRuleTypeRule, UnsatisfiableRuleRule,
};
use crate::config::DataSet;

/// Registry of all available lint rules.
pub struct RuleRegistry {
    rules: HashMap<RuleId, Box<dyn LintRule>>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Create a registry with all built-in rules.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(CircularPrerequisiteRule));
        registry.register(Box::new(UnknownCourseRule));
        registry.register(Box::new(EmptyRuleRule));
        registry.register(Box::new(UnsatisfiableRuleRule));
        registry.register(Box::new(UnknownRuleTypeRule));
        registry.register(Box::new(DanglingEquivalencyRule));
        registry
    }

    /// Register a lint rule.
    pub fn register(&mut self, rule: Box<dyn LintRule>) {
        self.rules.insert(rule.id(), rule);
    }

    /// Get a rule by ID.
    pub fn get(&self, id: &RuleId) -> Option<&dyn LintRule> {
        self.rules.get(id).map(|r| r.as_ref())
    }

    /// Iterate over all rules.
    pub fn iter(&self) -> impl Iterator<Item = &dyn LintRule> {
        self.rules.values().map(|r| r.as_ref())
    }

    /// Run every rule, most severe diagnostics first.
    ///
    /// Rules run in id order and the sort is stable, so output is
    /// deterministic for the same data.
    pub fn check(&self, data: &DataSet) -> Vec<LintDiagnostic> {
        let mut rules: Vec<&dyn LintRule> = self.iter().collect();
        rules.sort_by_key(|r| r.id());

        let mut diagnostics: Vec<LintDiagnostic> =
            rules.iter().flat_map(|rule| rule.check(data)).collect();
        diagnostics.sort_by(|a, b| b.severity.cmp(&a.severity));

        tracing::debug!(
            "Ran {} lint rules: {} diagnostics",
            rules.len(),
            diagnostics.len()
        );
        diagnostics
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
