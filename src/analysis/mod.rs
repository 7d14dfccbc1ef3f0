//! Per-program analyses that run beside the gap calculation.
//!
//! - [`overlap`] - courses the student already has toward a program
//! - [`triple_dip`] - program courses that also meet gen-ed needs

pub mod overlap;
pub mod triple_dip;

pub use overlap::{overlap, Overlap};
pub use triple_dip::{find_opportunities, Opportunity};
