//! Program recommendations.
//!
//! [`Evaluator`] measures each program against a student and
//! [`rank`] orders the results: smallest gap first, then most overlap,
//! then most triple-dip opportunities.

pub mod evaluate;
pub mod ranking;

pub use evaluate::{
    Evaluator, ProgramEvaluation, RecommendOptions, Recommendation, DEFAULT_INTEREST_FILTER,
    DEFAULT_TOP_N,
};
pub use ranking::{compare, rank};
