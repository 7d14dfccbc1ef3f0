//! Student-side inputs: course histories and profiles.

pub mod history;
pub mod profile;

pub use history::{CourseHistory, HeldCourse};
pub use profile::{prescribed_major_courses, StudentProfile};
