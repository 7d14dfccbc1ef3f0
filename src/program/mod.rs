//! Academic programs and their requirement rules.
//!
//! A [`Program`] is an ordered list of [`Rule`]s. Rules are a closed set of
//! kinds (see [`Rule`]); anything else in the data loads as
//! [`Rule::Unknown`] and is ignored during evaluation.

pub mod schema;

pub use schema::{
    CourseGroup, PoolConstraints, PrimaryPool, Program, ProgramType, Rule, RuleCourse,
    SecondaryPool, DEFAULT_LEVEL_MAX,
};
