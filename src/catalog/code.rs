//! Course code normalization.
//!
//! Course identifiers arrive from transcripts, catalogs, and rule files in
//! many shapes ("ECON 102", "econ102", "ECON\u{a0}102"). Every comparison in
//! the engine goes through [`normalize_code`] so those spellings collapse to
//! one canonical key.
//!
//! Numbers are not zero-padded: "MATH 21" and "MATH 021" stay distinct.

use regex::Regex;
use std::sync::LazyLock;

/// Leading department letters followed by the course number.
static COURSE_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z]+)(\d+)").expect("COURSE_NUMBER_REGEX must compile"));

/// Canonicalize a course code for comparison.
///
/// Keeps ASCII letters and digits, upper-cased. Whitespace (including
/// non-breaking spaces) and every separator are removed. Total and
/// idempotent: `normalize_code("")` is `""`.
///
/// # Example
///
/// ```
/// use degreegap::catalog::normalize_code;
///
/// assert_eq!(normalize_code("econ 102"), "ECON102");
/// assert_eq!(normalize_code("MKTG\u{a0}301W"), "MKTG301W");
/// assert_eq!(normalize_code(""), "");
/// ```
pub fn normalize_code(raw: impl AsRef<str>) -> String {
    raw.as_ref()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Department and numeric level of a course code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CourseNumber {
    /// Department prefix, upper-case ("ECON").
    pub department: String,
    /// Course number without suffix letters (302 for "ECON 302W").
    pub number: u32,
}

/// Split a course code into department and number.
///
/// Returns `None` when the normalized code does not start with letters
/// followed by digits, or the number does not fit in a `u32`.
pub fn parse_course_code(code: &str) -> Option<CourseNumber> {
    let normalized = normalize_code(code);
    let caps = COURSE_NUMBER_REGEX.captures(&normalized)?;
    let number = caps[2].parse().ok()?;
    Some(CourseNumber {
        department: caps[1].to_string(),
        number,
    })
}
