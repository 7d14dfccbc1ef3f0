//! Course catalog primitives.
//!
//! - [`code`] - course code normalization and department/number parsing
//! - [`course`] - catalog course records and credit parsing
//! - [`equivalency`] - declared course equivalencies
//! - [`store`] - the [`Catalog`] lookup itself

pub mod code;
pub mod course;
pub mod equivalency;
pub mod store;

pub use code::{normalize_code, parse_course_code, CourseNumber};
pub use course::{parse_credits, Course, DEFAULT_CREDITS};
pub use equivalency::{Equivalency, EquivalencyMap};
pub use store::Catalog;
