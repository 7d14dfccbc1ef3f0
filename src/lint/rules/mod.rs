//! Built-in lint rules.
//!
//! Each rule checks one kind of problem in the loaded data.

pub mod circular_prerequisite;
pub mod dangling_equivalency;
pub mod empty_rule;
pub mod unknown_course;
pub mod unknown_rule_type;
pub mod unsatisfiable_rule;

pub use circular_prerequisite::CircularPrerequisiteRule;
pub use dangling_equivalency::DanglingEquivalencyRule;
pub use empty_rule::EmptyRuleRule;
pub use unknown_course::UnknownCourseRule;
pub use unknown_rule_type::UnknownRuleTypeRule;
pub use unsatisfiable_rule::UnsatisfiableRuleRule;
