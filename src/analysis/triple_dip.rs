//! Program courses that also meet outstanding gen-ed needs.

use std::collections::HashSet;

use serde::Serialize;

use crate::catalog::{normalize_code, Catalog};
use crate::program::Program;

/// A program course that counts toward one or more gen-ed needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Opportunity {
    /// Catalog display code.
    pub course: String,
    pub title: String,
    /// Needs the course meets, in the order the needs were given.
    pub matches: Vec<String>,
}

/// Find program courses carrying any of the student's gen-ed `needs`.
///
/// Looks at every course the program lists (dynamic primary pools are
/// open-ended and skipped). Courses missing from the catalog are ignored.
pub fn find_opportunities(program: &Program, needs: &[String], catalog: &Catalog) -> Vec<Opportunity> {
    if needs.is_empty() {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let mut opportunities = Vec::new();
    for code in program.listed_codes() {
        let key = normalize_code(code);
        if key.is_empty() || !seen.insert(key) {
            continue;
        }
        let Some(course) = catalog.get(code) else {
            continue;
        };
        let matches: Vec<String> = needs
            .iter()
            .filter(|need| course.has_gen_ed(need))
            .cloned()
            .collect();
        if !matches.is_empty() {
            opportunities.push(Opportunity {
                course: course.display_code.clone(),
                title: course.title.clone(),
                matches,
            });
        }
    }
    opportunities
}
