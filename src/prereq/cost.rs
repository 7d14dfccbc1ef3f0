//! Minimum-cost prerequisite chains.
//!
//! The cost of a course is the credits a student would still have to earn
//! to take it: the course itself plus, for each AND-group of its
//! prerequisites, the cheapest alternative in that group, recursively.
//! Anything the student already satisfies costs nothing.

use std::collections::HashSet;

use serde::Serialize;

use crate::catalog::{normalize_code, Catalog, DEFAULT_CREDITS};
use crate::student::CourseHistory;

use super::parser::LogicTree;
use super::satisfy::SatisfactionChecker;

/// How a node of a resolved chain was priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChainStatus {
    /// Already satisfied by the history; costs nothing.
    Satisfied,
    /// Appeared again on its own prerequisite path; costs nothing.
    Cycle,
    /// Not in the catalog; costs its fallback credits, prerequisites unknown.
    Uncatalogued,
    /// Must be taken, along with the chosen prerequisites.
    Required,
}

/// The cheapest way to reach one course.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chain {
    /// Course code as printed in the catalog, or as requested.
    pub code: String,
    /// Credits charged for this course alone.
    pub credits: f64,
    pub status: ChainStatus,
    /// The chosen alternative for each AND-group, in text order.
    pub prerequisites: Vec<Chain>,
    /// Resolver calls spent on this subtree, including discarded alternatives.
    pub visits: usize,
}

impl Chain {
    fn leaf(code: String, credits: f64, status: ChainStatus) -> Self {
        Self {
            code,
            credits,
            status,
            prerequisites: Vec::new(),
            visits: 1,
        }
    }

    /// Total credits for the course and its chosen prerequisites.
    pub fn total(&self) -> f64 {
        self.credits + self.prerequisites.iter().map(Chain::total).sum::<f64>()
    }

    /// Courses that must be taken, prerequisites before dependents.
    ///
    /// A course reached along several branches is listed once.
    pub fn courses_to_take(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut order = Vec::new();
        self.collect_post_order(&mut seen, &mut order);
        order
    }

    fn collect_post_order<'s>(&'s self, seen: &mut HashSet<String>, order: &mut Vec<&'s str>) {
        for prereq in &self.prerequisites {
            prereq.collect_post_order(seen, order);
        }
        if matches!(self.status, ChainStatus::Required | ChainStatus::Uncatalogued)
            && seen.insert(normalize_code(&self.code))
        {
            order.push(self.code.as_str());
        }
    }
}

/// Computes minimum prerequisite chains against a catalog.
///
/// Cycles are cut per path: a course already being resolved higher up the
/// current path costs nothing the second time, but may be priced normally
/// on a sibling branch. Results are not memoized.
#[derive(Debug, Clone, Copy)]
pub struct CostResolver<'a> {
    catalog: &'a Catalog,
    checker: SatisfactionChecker<'a>,
}

impl<'a> CostResolver<'a> {
    /// Create a resolver over a catalog with the given satisfaction rules.
    pub fn new(catalog: &'a Catalog, checker: SatisfactionChecker<'a>) -> Self {
        Self { catalog, checker }
    }

    /// Credits needed to complete `code`, including missing prerequisites.
    ///
    /// `fallback` prices the course when the catalog has no credit value;
    /// without it three credits are assumed.
    pub fn cost(&self, code: &str, history: &CourseHistory, fallback: Option<f64>) -> f64 {
        self.resolve(code, history, fallback).total()
    }

    /// The cheapest chain for `code`.
    pub fn resolve(&self, code: &str, history: &CourseHistory, fallback: Option<f64>) -> Chain {
        let mut path = HashSet::new();
        self.walk(code, history, fallback, &mut path)
    }

    fn walk(
        &self,
        code: &str,
        history: &CourseHistory,
        fallback: Option<f64>,
        path: &mut HashSet<String>,
    ) -> Chain {
        let key = normalize_code(code);
        let course = self.catalog.get(&key);
        let label = course
            .map(|c| c.display_code.clone())
            .unwrap_or_else(|| code.trim().to_string());

        if self.checker.satisfies(code, history) {
            return Chain::leaf(label, 0.0, ChainStatus::Satisfied);
        }
        if path.contains(&key) {
            tracing::debug!("Prerequisite cycle through {}; cutting path", label);
            return Chain::leaf(label, 0.0, ChainStatus::Cycle);
        }

        let Some(course) = course else {
            let credits = fallback.unwrap_or(DEFAULT_CREDITS);
            return Chain::leaf(label, credits, ChainStatus::Uncatalogued);
        };

        let credits = course
            .credits
            .or(fallback)
            .unwrap_or(DEFAULT_CREDITS);
        let tree = LogicTree::parse(&course.raw_prerequisites);

        path.insert(key.clone());
        let mut visits = 1;
        let mut prerequisites = Vec::with_capacity(tree.groups().len());
        for group in tree.groups() {
            let mut best: Option<Chain> = None;
            for option in group {
                let candidate = self.walk(option, history, None, path);
                visits += candidate.visits;
                if best.as_ref().is_none_or(|b| candidate.total() < b.total()) {
                    best = Some(candidate);
                }
            }
            prerequisites.extend(best);
        }
        path.remove(&key);

        Chain {
            code: label,
            credits,
            status: ChainStatus::Required,
            prerequisites,
            visits,
        }
    }
}
