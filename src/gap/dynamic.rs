//! Dynamic subset rules: a department/level pool plus a listed pool.

use crate::catalog::{normalize_code, parse_course_code, Catalog};
use crate::program::PoolConstraints;
use crate::student::CourseHistory;

use super::report::{format_credits, MissingItem};

/// Credits a student has toward each pool of a dynamic subset rule.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PoolCredits {
    pub primary: f64,
    pub secondary: f64,
}

/// Sort held courses into the primary and secondary pools.
///
/// A course counts toward the primary pool when its department and number
/// fall in the pool; otherwise toward the secondary pool when listed there.
/// Codes that do not parse count toward neither. Credits come from the
/// catalog, three when unknown.
pub fn pool_credits(
    constraints: &PoolConstraints,
    held: &CourseHistory,
    catalog: &Catalog,
) -> PoolCredits {
    let secondary: Vec<String> = constraints
        .secondary_pool
        .courses
        .iter()
        .map(normalize_code)
        .collect();

    let mut credits = PoolCredits::default();
    for course in held.iter() {
        let Some(parsed) = parse_course_code(&course.code) else {
            continue;
        };
        if constraints
            .primary_pool
            .includes(&parsed.department, parsed.number)
        {
            credits.primary += catalog.credits(&course.code);
        } else if secondary.contains(&course.code) {
            credits.secondary += catalog.credits(&course.code);
        }
    }
    credits
}

/// Gap credits and report lines for a dynamic subset rule.
pub fn dynamic_gap(
    credits_needed: f64,
    constraints: &PoolConstraints,
    held: &CourseHistory,
    catalog: &Catalog,
) -> (f64, Vec<MissingItem>) {
    let pool = &constraints.primary_pool;
    let have = pool_credits(constraints, held, catalog);

    let missing_primary = (pool.min_credits - have.primary).max(0.0);
    let residual = (credits_needed - (have.primary + have.secondary) - missing_primary).max(0.0);
    let gap = missing_primary + residual;

    let mut items = Vec::new();
    if missing_primary > 0.0 {
        let departments: Vec<&str> = pool.departments.iter().take(3).map(String::as_str).collect();
        items.push(
            MissingItem::missing(format!(
                "Need {} cr: {}-level {}...",
                format_credits(missing_primary),
                pool.level_min(),
                departments.join(", ")
            ))
            .with_credits(missing_primary),
        );
    }
    if residual > 0.0 {
        items.push(
            MissingItem::missing(format!(
                "Need {} cr: any option from the list",
                format_credits(residual)
            ))
            .with_credits(residual),
        );
    }
    (gap, items)
}
