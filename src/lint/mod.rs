//! Data validation and linting.
//!
//! The lint system checks a loaded [`DataSet`](crate::config::DataSet)
//! for problems that would silently skew gap calculations: prerequisite
//! cycles, courses missing from the catalog, rules that can never be met.
//!
//! # Overview
//!
//! - **Rules** - Individual checks ([`LintRule`] trait)
//! - **Registry** - Collection of available rules ([`RuleRegistry`])
//! - **Diagnostics** - Issue reports with severity and suggestions ([`LintDiagnostic`])
//! - **Formatters** - Human and JSON output ([`LintFormatter`])
//!
//! # Example
//!
//! ```
//! use degreegap::config::DataSet;
//! use degreegap::lint::{RuleRegistry, RuleId, Severity};
//!
//! let registry = RuleRegistry::with_builtins();
//! assert!(registry.get(&RuleId::new("circular-prerequisite")).is_some());
//!
//! let diagnostics = registry.check(&DataSet::default());
//! assert!(diagnostics.is_empty());
//!
//! assert!(Severity::Hint < Severity::Warning);
//! assert!(Severity::Warning < Severity::Error);
//! ```

pub mod diagnostic;
pub mod output;
pub mod registry;
pub mod rule;
pub mod rules;
pub mod schema;

pub use diagnostic::{LintDiagnostic, Location};
pub use output::{HumanFormatter, JsonFormatter, LintFormatter, OutputFormat};
pub use registry::RuleRegistry;
pub use rule::{LintRule, RuleId, Severity};
pub use rules::{
    CircularPrerequisiteRule, DanglingEquivalencyRule, EmptyRuleRule, UnknownCourseRule,
    UnknownRuleTypeRule, UnsatisfiableRuleRule,
};
pub use schema::{SchemaGenerator, SchemaTarget};
