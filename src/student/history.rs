//! Ordered, de-duplicated course histories.

use std::collections::HashSet;

use crate::catalog::normalize_code;

/// A course the student holds, in canonical and display form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeldCourse {
    /// Normalized code used for every comparison.
    pub code: String,
    /// First spelling seen for this course ("ECON 102").
    pub display: String,
}

/// Courses a student holds, in first-seen order.
///
/// Codes are normalized on the way in; spellings that normalize to the
/// same code ("ECON102", "ECON 102") collapse to one entry that keeps the
/// first spelling for display. Codes that normalize to nothing are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseHistory {
    entries: Vec<HeldCourse>,
    index: HashSet<String>,
}

impl CourseHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a history from raw course codes.
    ///
    /// ```
    /// use degreegap::student::CourseHistory;
    ///
    /// let history = CourseHistory::from_codes(["ECON 102", "econ102", "", "MATH 140"]);
    /// assert_eq!(history.len(), 2);
    /// assert!(history.contains("ECON102"));
    /// ```
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut history = Self::new();
        for code in codes {
            history.push(code.as_ref());
        }
        history
    }

    /// Add a course; returns `false` if it was blank or already held.
    pub fn push(&mut self, raw: &str) -> bool {
        let code = normalize_code(raw);
        if code.is_empty() || self.index.contains(&code) {
            return false;
        }
        self.index.insert(code.clone());
        self.entries.push(HeldCourse {
            code,
            display: raw.trim().to_string(),
        });
        true
    }

    /// Whether the course (any spelling) is held.
    pub fn contains(&self, code: &str) -> bool {
        self.index.contains(&normalize_code(code))
    }

    /// Held courses in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &HeldCourse> {
        self.entries.iter()
    }

    /// Normalized codes in first-seen order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.code.as_str())
    }

    /// This history followed by every course of `other` not already held.
    pub fn union(&self, other: &CourseHistory) -> CourseHistory {
        let mut merged = self.clone();
        for entry in &other.entries {
            if merged.index.insert(entry.code.clone()) {
                merged.entries.push(entry.clone());
            }
        }
        merged
    }

    /// Number of distinct courses.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no courses are held.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for CourseHistory {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_codes(iter)
    }
}
