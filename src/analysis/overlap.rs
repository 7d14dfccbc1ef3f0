//! Courses a student already has toward a program.

use std::collections::HashSet;

use serde::Serialize;

use crate::catalog::{normalize_code, parse_course_code};
use crate::program::{Program, Rule};
use crate::student::StudentProfile;

/// Held courses that a program lists or pools.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Overlap {
    pub count: usize,
    /// Display codes, de-duplicated by normalized code in first-seen order.
    pub courses: Vec<String>,
}

#[derive(Default)]
struct Collector {
    seen: HashSet<String>,
    courses: Vec<String>,
}

impl Collector {
    fn add(&mut self, display: &str) {
        let key = normalize_code(display);
        if !key.is_empty() && self.seen.insert(key) {
            self.courses.push(display.trim().to_string());
        }
    }
}

/// Count the program's courses that the student holds or the major covers.
///
/// Listed courses are reported in the program's spelling. Courses matched
/// by a dynamic primary pool are reported in the student's spelling.
pub fn overlap(program: &Program, profile: &StudentProfile) -> Overlap {
    let held = profile.effective();
    let mut found = Collector::default();

    for rule in &program.rules {
        match rule {
            Rule::AllOf { courses, .. } | Rule::SubsetOf { courses, .. } => {
                for course in courses.iter().filter(|c| held.contains(&c.code)) {
                    found.add(&course.code);
                }
            }
            Rule::DynamicSubset { constraints, .. } => {
                for course in held.iter() {
                    let in_pool = parse_course_code(&course.code).is_some_and(|p| {
                        constraints.primary_pool.includes(&p.department, p.number)
                    });
                    if in_pool {
                        found.add(&course.display);
                    }
                }
                for code in constraints
                    .secondary_pool
                    .courses
                    .iter()
                    .filter(|c| held.contains(c))
                {
                    found.add(code);
                }
            }
            Rule::GroupOption { groups, .. } => {
                for course in groups
                    .iter()
                    .flat_map(|g| &g.courses)
                    .filter(|c| held.contains(&c.code))
                {
                    found.add(&course.code);
                }
            }
            Rule::Unknown => {}
        }
    }

    Overlap {
        count: found.courses.len(),
        courses: found.courses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::{
        CourseGroup, PoolConstraints, PrimaryPool, ProgramType, RuleCourse, SecondaryPool,
    };
    use crate::student::CourseHistory;

    fn profile(history: &[&str], major: &[&str]) -> StudentProfile {
        StudentProfile::new(
            CourseHistory::from_codes(history),
            CourseHistory::from_codes(major),
            Vec::<String>::new(),
        )
    }

    fn program(rules: Vec<Rule>) -> Program {
        Program {
            id: "Economics".to_string(),
            program_type: ProgramType::Minors,
            url: None,
            rules,
        }
    }

    #[test]
    fn spelling_variants_collapse() {
        let prog = program(vec![
            Rule::AllOf {
                name: None,
                courses: vec![RuleCourse::new("ECON 102", 3.0)],
            },
            Rule::SubsetOf {
                name: None,
                credits_needed: 3.0,
                courses: vec![RuleCourse::new("ECON102", 3.0)],
            },
        ]);
        let result = overlap(&prog, &profile(&["ECON102"], &[]));
        assert_eq!(result.count, 1);
        assert_eq!(result.courses, vec!["ECON 102"]);
    }

    #[test]
    fn major_courses_count() {
        let prog = program(vec![Rule::AllOf {
            name: None,
            courses: vec![RuleCourse::new("MGMT 301", 3.0), RuleCourse::new("MKTG 301W", 3.0)],
        }]);
        let result = overlap(&prog, &profile(&[], &["MKTG 301W"]));
        assert_eq!(result.courses, vec!["MKTG 301W"]);
    }

    #[test]
    fn dynamic_pools_use_history_spelling_then_rule_spelling() {
        let prog = program(vec![Rule::DynamicSubset {
            name: None,
            credits_needed: 6.0,
            constraints: PoolConstraints {
                primary_pool: PrimaryPool {
                    departments: vec!["ECON".to_string()],
                    level_min: Some(400),
                    level_max: Some(499),
                    min_credits: 3.0,
                },
                secondary_pool: SecondaryPool {
                    courses: vec!["FIN 301".to_string(), "ECON 471".to_string()],
                },
            },
        }]);
        let result = overlap(&prog, &profile(&["econ 471", "FIN301", "ECON 302"], &[]));
        assert_eq!(result.courses, vec!["econ 471", "FIN 301"]);
        assert_eq!(result.count, 2);
    }

    #[test]
    fn group_courses_count() {
        let prog = program(vec![Rule::GroupOption {
            name: None,
            groups: vec![
                CourseGroup {
                    name: None,
                    courses: vec![RuleCourse::new("ACCTG 211", 4.0)],
                },
                CourseGroup {
                    name: None,
                    courses: vec![RuleCourse::new("ACCTG 151", 3.0)],
                },
            ],
        }]);
        let result = overlap(&prog, &profile(&["ACCTG 151"], &[]));
        assert_eq!(result.courses, vec!["ACCTG 151"]);
    }

    #[test]
    fn nothing_held_means_no_overlap() {
        let prog = program(vec![Rule::AllOf {
            name: None,
            courses: vec![RuleCourse::new("ECON 102", 3.0)],
        }]);
        assert_eq!(overlap(&prog, &profile(&[], &[])), Overlap::default());
    }
}
