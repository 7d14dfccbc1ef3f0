//! Prerequisite resolution.
//!
//! - [`parser`] - free-text prerequisites to a [`LogicTree`]
//! - [`hierarchy`] - same-department substitution settings
//! - [`satisfy`] - exact / equivalency / hierarchy satisfaction tiers
//! - [`cost`] - recursive minimum-cost prerequisite chains
//! - [`graph`] - catalog-wide prerequisite graph and cycle detection

pub mod cost;
pub mod graph;
pub mod hierarchy;
pub mod parser;
pub mod satisfy;

pub use cost::{Chain, ChainStatus, CostResolver};
pub use graph::PrerequisiteGraph;
pub use hierarchy::HierarchyConfig;
pub use parser::{clean_prerequisites_for_display, LogicTree};
pub use satisfy::{SatisfactionChecker, SatisfiedBy};
