//! Evaluating programs for one student.

use serde::Serialize;

use crate::analysis::{find_opportunities, overlap, Opportunity};
use crate::config::DataSet;
use crate::gap::{GapCalculator, MissingItem, RuleReport};
use crate::program::{Program, ProgramType};
use crate::student::StudentProfile;

use super::ranking::rank;

/// Programs shown by default.
pub const DEFAULT_TOP_N: usize = 15;

/// Program type filter applied by default.
pub const DEFAULT_INTEREST_FILTER: &str = "Minor";

/// Everything computed for one program.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgramEvaluation {
    pub id: String,
    pub program_type: ProgramType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_url: Option<String>,
    pub gap_credits: f64,
    pub missing_courses: Vec<MissingItem>,
    pub rules: Vec<RuleReport>,
    pub optimizations: Vec<Opportunity>,
    pub optimization_count: usize,
    pub overlap_count: usize,
    pub overlap_courses: Vec<String>,
}

/// Filtering and truncation for [`Evaluator::recommend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendOptions {
    /// Case-insensitive substring of the program type; empty keeps all.
    pub interest_filter: String,
    pub top_n: usize,
}

impl Default for RecommendOptions {
    fn default() -> Self {
        Self {
            interest_filter: DEFAULT_INTEREST_FILTER.to_string(),
            top_n: DEFAULT_TOP_N,
        }
    }
}

/// Ranked programs for one student.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// Programs that passed the filter and were evaluated.
    pub count: usize,
    /// The best `top_n` of them, best first.
    pub recommendations: Vec<ProgramEvaluation>,
}

/// Runs the gap, overlap, and triple-dip analyses over a [`DataSet`].
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    data: &'a DataSet,
    calculator: GapCalculator<'a>,
}

impl<'a> Evaluator<'a> {
    /// Create an evaluator over loaded data.
    pub fn new(data: &'a DataSet) -> Self {
        Self {
            data,
            calculator: GapCalculator::new(&data.catalog, data.checker()),
        }
    }

    /// The gap calculator this evaluator uses.
    pub fn calculator(&self) -> &GapCalculator<'a> {
        &self.calculator
    }

    /// Evaluate one program.
    pub fn evaluate(&self, program: &Program, profile: &StudentProfile) -> ProgramEvaluation {
        let gap = self.calculator.calculate(program, profile);
        let overlap = overlap(program, profile);
        let optimizations =
            find_opportunities(program, profile.gen_ed_needs(), &self.data.catalog);

        ProgramEvaluation {
            id: program.id.clone(),
            program_type: program.program_type,
            program_url: program.url.clone(),
            gap_credits: gap.total_gap_credits,
            missing_courses: gap.missing,
            rules: gap.rules,
            optimization_count: optimizations.len(),
            optimizations,
            overlap_count: overlap.count,
            overlap_courses: overlap.courses,
        }
    }

    /// Evaluate every program matching the filter and keep the best.
    pub fn recommend(&self, profile: &StudentProfile, options: &RecommendOptions) -> Recommendation {
        let mut evaluations: Vec<ProgramEvaluation> = self
            .data
            .programs
            .iter()
            .filter(|p| p.program_type.matches_filter(&options.interest_filter))
            .map(|p| self.evaluate(p, profile))
            .collect();

        let count = evaluations.len();
        tracing::debug!(
            "Evaluated {} programs matching '{}'",
            count,
            options.interest_filter
        );

        rank(&mut evaluations);
        evaluations.truncate(options.top_n);

        Recommendation {
            count,
            recommendations: evaluations,
        }
    }
}
