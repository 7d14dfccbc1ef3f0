//! degreegap - how far is a student from finishing a program?
//!
//! degreegap reads a course catalog, a set of academic program rules, and
//! a student's completed courses, then reports the remaining credits for
//! each program, the cheapest prerequisite path to any course, and the
//! courses that would count toward several requirements at once.
//!
//! # Modules
//!
//! - [`catalog`] - Course codes, catalog records, and equivalencies
//! - [`program`] - Program and requirement rule definitions
//! - [`student`] - Course histories and student profiles
//! - [`prereq`] - Prerequisite parsing, satisfaction, and chain costs
//! - [`gap`] - Per-rule gap calculation
//! - [`analysis`] - Overlap counting and triple-dip detection
//! - [`recommend`] - Program evaluation and ranking
//! - [`config`] - Configuration and data file loading
//! - [`lint`] - Data quality checks and JSON Schema generation
//! - [`cli`] - Command-line interface and argument parsing
//! - [`ui`] - Terminal output
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use degreegap::catalog::{Catalog, Course};
//! use degreegap::prereq::{CostResolver, SatisfactionChecker};
//! use degreegap::student::CourseHistory;
//!
//! let catalog: Catalog = vec![
//!     Course { display_code: "ECON 102".into(), credits: Some(3.0), ..Default::default() },
//!     Course {
//!         display_code: "ECON 302".into(),
//!         credits: Some(3.0),
//!         raw_prerequisites: "ECON 102".into(),
//!         ..Default::default()
//!     },
//! ]
//! .into_iter()
//! .collect();
//!
//! let resolver = CostResolver::new(&catalog, SatisfactionChecker::exact_only());
//! assert_eq!(resolver.cost("ECON 302", &CourseHistory::new(), None), 6.0);
//! ```

pub mod analysis;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod gap;
pub mod lint;
pub mod prereq;
pub mod program;
pub mod recommend;
pub mod student;
pub mod ui;

pub use error::{DegreeGapError, Result};
