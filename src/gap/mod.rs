//! Program gap calculation.
//!
//! [`GapCalculator`] walks a program's rules against a student profile and
//! reports how many credits remain, which requirement lines are still
//! open, and a per-rule breakdown.

pub mod calculator;
pub mod dynamic;
pub mod report;

pub use calculator::GapCalculator;
pub use dynamic::{dynamic_gap, pool_credits, PoolCredits};
pub use report::{format_credits, GapResult, MissingItem, MissingStatus, RuleReport};
