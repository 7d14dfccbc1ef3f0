//! Prerequisite text parsing.
//!
//! Catalog prerequisite statements are free text such as
//! `"Enforced Prerequisite at Enrollment: ECON 102 or ECON 104; MATH 110"`.
//! [`LogicTree::parse`] turns them into an AND-list of OR-groups.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// A course code as written in prerequisite text ("ECON 102", "MKTG 301W").
static COURSE_CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Z]{2,5}\s+\d{1,4}[A-Z]?").expect("COURSE_CODE_REGEX must compile")
});

/// Separators between AND-groups.
static AND_SPLIT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" AND | and |;").expect("AND_SPLIT_REGEX must compile"));

/// The literal word `None`, which marks a course without prerequisites.
static NONE_WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bNone\b").expect("NONE_WORD_REGEX must compile"));

const CONCURRENT_LABEL: &str = "Enforced Concurrent at Enrollment:";
const PREREQUISITE_LABEL: &str = "Enforced Prerequisite at Enrollment:";
const RECOMMENDED_MARKER: &str = "Recommended Preparation";

/// Parsed prerequisites: every group must be satisfied, and a group is
/// satisfied by any one of its codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LogicTree {
    groups: Vec<Vec<String>>,
}

impl LogicTree {
    /// Parse raw catalog prerequisite text.
    ///
    /// Text that is empty or mentions `None` has no prerequisites.
    /// Concurrent requirements are treated as ordinary AND-groups and
    /// recommended preparation is ignored. Codes keep their written form;
    /// duplicates within a group are dropped and empty groups are skipped.
    ///
    /// ```
    /// use degreegap::prereq::LogicTree;
    ///
    /// let tree = LogicTree::parse("ECON 102 or ECON 104; MATH 110");
    /// assert_eq!(tree.groups().len(), 2);
    /// assert_eq!(tree.groups()[0], vec!["ECON 102", "ECON 104"]);
    /// ```
    pub fn parse(raw: &str) -> Self {
        if raw.trim().is_empty() || NONE_WORD_REGEX.is_match(raw) {
            return Self::default();
        }

        let text = raw
            .replace(CONCURRENT_LABEL, " AND ")
            .replace(PREREQUISITE_LABEL, "");
        let text = match text.find(RECOMMENDED_MARKER) {
            Some(idx) => &text[..idx],
            None => text.as_str(),
        };

        let mut groups = Vec::new();
        for part in AND_SPLIT_REGEX.split(text) {
            let mut group: Vec<String> = Vec::new();
            for m in COURSE_CODE_REGEX.find_iter(part) {
                let code = m.as_str().to_string();
                if !group.contains(&code) {
                    group.push(code);
                }
            }
            if !group.is_empty() {
                groups.push(group);
            }
        }

        Self { groups }
    }

    /// The AND-list of OR-groups, in text order.
    pub fn groups(&self) -> &[Vec<String>] {
        &self.groups
    }

    /// Every code mentioned, group by group.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().flatten().map(String::as_str)
    }

    /// Whether there are no prerequisites.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl fmt::Display for LogicTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.groups.is_empty() {
            return f.write_str("(none)");
        }
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                f.write_str(" AND ")?;
            }
            if group.len() > 1 {
                write!(f, "({})", group.join(" OR "))?;
            } else {
                f.write_str(&group[0])?;
            }
        }
        Ok(())
    }
}

/// Prerequisite text suitable for showing to a student.
///
/// Returns `None` for placeholder values the scraper leaves behind
/// (empty, `None`, `[]`, `['None']`), otherwise the trimmed text.
pub fn clean_prerequisites_for_display(raw: &str) -> Option<String> {
    let text = raw.trim();
    if text.is_empty()
        || text == "[]"
        || text == "['None']"
        || text.eq_ignore_ascii_case("none")
    {
        return None;
    }
    Some(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_none_have_no_groups() {
        assert!(LogicTree::parse("").is_empty());
        assert!(LogicTree::parse("   ").is_empty());
        assert!(LogicTree::parse("None").is_empty());
        assert!(LogicTree::parse("Prerequisite: None required").is_empty());
    }

    #[test]
    fn splits_on_and_separators() {
        let tree = LogicTree::parse("ECON 102 AND MATH 110 and STAT 200; ACCTG 211");
        assert_eq!(
            tree.groups(),
            &[
                vec!["ECON 102".to_string()],
                vec!["MATH 110".to_string()],
                vec!["STAT 200".to_string()],
                vec!["ACCTG 211".to_string()],
            ]
        );
    }

    #[test]
    fn or_alternatives_stay_in_one_group() {
        let tree = LogicTree::parse("MATH 110 or MATH 140 or MATH 110");
        assert_eq!(tree.groups(), &[vec!["MATH 110".to_string(), "MATH 140".to_string()]]);
    }

    #[test]
    fn enrollment_labels_are_handled() {
        let tree = LogicTree::parse(
            "Enforced Prerequisite at Enrollment: ECON 102 Enforced Concurrent at Enrollment: STAT 200",
        );
        assert_eq!(
            tree.groups(),
            &[vec!["ECON 102".to_string()], vec!["STAT 200".to_string()]]
        );
    }

    #[test]
    fn recommended_preparation_is_ignored() {
        let tree = LogicTree::parse("ECON 302 Recommended Preparation: ECON 490");
        assert_eq!(tree.groups(), &[vec!["ECON 302".to_string()]]);
    }

    #[test]
    fn suffix_letters_are_kept() {
        let tree = LogicTree::parse("MKTG 301W");
        assert_eq!(tree.groups(), &[vec!["MKTG 301W".to_string()]]);
    }

    #[test]
    fn groups_without_codes_are_dropped() {
        let tree = LogicTree::parse("fifth-semester standing; ECON 102");
        assert_eq!(tree.groups(), &[vec!["ECON 102".to_string()]]);
    }

    #[test]
    fn display_joins_groups() {
        let tree = LogicTree::parse("ECON 102 or ECON 104; MATH 110");
        assert_eq!(tree.to_string(), "(ECON 102 OR ECON 104) AND MATH 110");
        assert_eq!(LogicTree::default().to_string(), "(none)");
    }

    #[test]
    fn display_text_filters_placeholders() {
        assert_eq!(clean_prerequisites_for_display(""), None);
        assert_eq!(clean_prerequisites_for_display("None"), None);
        assert_eq!(clean_prerequisites_for_display("none"), None);
        assert_eq!(clean_prerequisites_for_display("[]"), None);
        assert_eq!(clean_prerequisites_for_display("['None']"), None);
        assert_eq!(
            clean_prerequisites_for_display("  ECON 102  "),
            Some("ECON 102".to_string())
        );
    }
}
