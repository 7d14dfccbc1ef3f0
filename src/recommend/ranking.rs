//! Ordering of evaluated programs.

use std::cmp::Ordering;

use super::evaluate::ProgramEvaluation;

/// Best first: smallest gap, then most overlap, then most triple-dips.
pub fn compare(a: &ProgramEvaluation, b: &ProgramEvaluation) -> Ordering {
    a.gap_credits
        .total_cmp(&b.gap_credits)
        .then_with(|| b.overlap_count.cmp(&a.overlap_count))
        .then_with(|| b.optimization_count.cmp(&a.optimization_count))
}

/// Sort evaluations best first; ties keep their input order.
pub fn rank(evaluations: &mut [ProgramEvaluation]) {
    evaluations.sort_by(compare);
}
