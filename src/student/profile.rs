//! What the engine knows about one student.

use crate::program::{Program, Rule};

use super::history::CourseHistory;

/// Completed courses, major-prescribed courses, and outstanding gen-ed needs.
///
/// Major courses count toward most requirements but are tracked apart from
/// the completed history so that required-course reports can say a course
/// is covered by the major rather than already taken.
#[derive(Debug, Clone, Default)]
pub struct StudentProfile {
    history: CourseHistory,
    major_courses: CourseHistory,
    effective: CourseHistory,
    gen_ed_needs: Vec<String>,
}

impl StudentProfile {
    /// Create a profile from completed courses, major-prescribed courses,
    /// and gen-ed needs.
    ///
    /// Needs are trimmed; blank and repeated needs are dropped.
    pub fn new<I, S>(history: CourseHistory, major_courses: CourseHistory, gen_ed_needs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let effective = history.union(&major_courses);
        let mut needs: Vec<String> = Vec::new();
        for need in gen_ed_needs {
            let need = need.as_ref().trim();
            if !need.is_empty() && !needs.iter().any(|n| n == need) {
                needs.push(need.to_string());
            }
        }
        Self {
            history,
            major_courses,
            effective,
            gen_ed_needs: needs,
        }
    }

    /// Create a profile, looking up the major's prescribed courses.
    ///
    /// An empty or unknown major contributes no courses.
    pub fn for_major<I, S>(
        history: CourseHistory,
        major: &str,
        programs: &[Program],
        gen_ed_needs: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(history, prescribed_major_courses(major, programs), gen_ed_needs)
    }

    /// Courses the student has completed.
    pub fn history(&self) -> &CourseHistory {
        &self.history
    }

    /// Courses prescribed by the student's major.
    pub fn major_courses(&self) -> &CourseHistory {
        &self.major_courses
    }

    /// Completed courses followed by major courses.
    pub fn effective(&self) -> &CourseHistory {
        &self.effective
    }

    /// Outstanding gen-ed needs, de-duplicated in input order.
    pub fn gen_ed_needs(&self) -> &[String] {
        &self.gen_ed_needs
    }
}

/// Required (`all`) courses of the named major.
///
/// The major is matched case-insensitively by id among programs of type
/// `Majors`. Returns an empty history when there is no such major.
pub fn prescribed_major_courses(major: &str, programs: &[Program]) -> CourseHistory {
    let major = major.trim();
    if major.is_empty() {
        return CourseHistory::new();
    }

    let Some(program) = programs
        .iter()
        .find(|p| p.is_major() && p.id.eq_ignore_ascii_case(major))
    else {
        tracing::debug!("No major named '{}'; no prescribed courses", major);
        return CourseHistory::new();
    };

    let mut courses = CourseHistory::new();
    for rule in &program.rules {
        if let Rule::AllOf { courses: required, .. } = rule {
            for course in required {
                courses.push(&course.code);
            }
        }
    }
    courses
}
