//! The course catalog: courses keyed by normalized code.

use std::collections::HashMap;

use super::code::normalize_code;
use super::course::{Course, DEFAULT_CREDITS};

/// Immutable lookup of courses by normalized code.
///
/// Built once from one or more catalog sources. When two sources define
/// the same normalized code, the one inserted last wins.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: HashMap<String, Course>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a course under `code` (any spelling).
    ///
    /// When the record has no display code, the key is used for display.
    /// Returns `false` when the code normalizes to nothing.
    pub fn insert(&mut self, code: &str, mut course: Course) -> bool {
        let key = normalize_code(code);
        if key.is_empty() {
            return false;
        }
        if course.display_code.trim().is_empty() {
            course.display_code = code.trim().to_string();
        }
        course.normalized_code = key.clone();
        self.courses.insert(key, course);
        true
    }

    /// Insert a course keyed by its own display code.
    pub fn insert_course(&mut self, course: Course) -> bool {
        let code = course.display_code.clone();
        self.insert(&code, course)
    }

    /// Layer another catalog on top of this one; `overlay` wins on conflicts.
    pub fn extend(&mut self, overlay: Catalog) {
        self.courses.extend(overlay.courses);
    }

    /// Look up a course by any spelling of its code.
    pub fn get(&self, code: &str) -> Option<&Course> {
        self.courses.get(&normalize_code(code))
    }

    /// Whether a course exists in the catalog.
    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Catalog credits for a course, or `default` when absent or unusable.
    pub fn credits_or(&self, code: &str, default: f64) -> f64 {
        self.get(code).map_or(default, |c| c.credits_or(default))
    }

    /// Catalog credits with the standard three-credit fallback.
    pub fn credits(&self, code: &str) -> f64 {
        self.credits_or(code, DEFAULT_CREDITS)
    }

    /// Raw prerequisite text, empty when the course is unknown.
    pub fn raw_prerequisites(&self, code: &str) -> &str {
        self.get(code).map_or("", |c| c.raw_prerequisites.as_str())
    }

    /// Iterate over all courses.
    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }

    /// Number of courses.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

impl FromIterator<Course> for Catalog {
    fn from_iter<I: IntoIterator<Item = Course>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for course in iter {
            catalog.insert_course(course);
        }
        catalog
    }
}
