//! Per-rule gap calculation.

use crate::catalog::{normalize_code, Catalog};
use crate::prereq::{clean_prerequisites_for_display, CostResolver, SatisfactionChecker};
use crate::program::{CourseGroup, Program, Rule, RuleCourse};
use crate::student::StudentProfile;

use super::dynamic::dynamic_gap;
use super::report::{format_credits, GapResult, MissingItem, MissingStatus, RuleReport};

/// How many subset options are named in a report line.
const SUBSET_PREVIEW: usize = 3;

/// Gap contribution of one rule.
struct RuleGap {
    credits: f64,
    items: Vec<MissingItem>,
    chosen_option: Option<String>,
}

impl RuleGap {
    fn new(credits: f64, items: Vec<MissingItem>) -> Self {
        Self {
            credits,
            items,
            chosen_option: None,
        }
    }
}

/// Measures how far a student is from completing a program.
///
/// Required courses (`all` rules) match exactly. Group options price each
/// missing course with its full prerequisite chain, so equivalency and
/// hierarchy rules apply there.
#[derive(Debug, Clone, Copy)]
pub struct GapCalculator<'a> {
    catalog: &'a Catalog,
    resolver: CostResolver<'a>,
}

impl<'a> GapCalculator<'a> {
    /// Create a calculator over a catalog with the given satisfaction rules.
    pub fn new(catalog: &'a Catalog, checker: SatisfactionChecker<'a>) -> Self {
        Self {
            catalog,
            resolver: CostResolver::new(catalog, checker),
        }
    }

    /// Gap credits, outstanding lines, and a per-rule breakdown.
    pub fn calculate(&self, program: &Program, profile: &StudentProfile) -> GapResult {
        let mut result = GapResult::default();

        for rule in &program.rules {
            let gap = match rule {
                Rule::AllOf { courses, .. } => self.all_of(courses, profile),
                Rule::SubsetOf {
                    credits_needed,
                    courses,
                    ..
                } => self.subset_of(*credits_needed, courses, profile),
                Rule::DynamicSubset {
                    credits_needed,
                    constraints,
                    ..
                } => {
                    let (credits, items) =
                        dynamic_gap(*credits_needed, constraints, profile.effective(), self.catalog);
                    RuleGap::new(credits, items)
                }
                Rule::GroupOption { groups, .. } => self.group_option(groups, profile),
                Rule::Unknown => {
                    tracing::warn!(
                        "Program '{}' has a rule of unknown type; it adds no credits",
                        program.id
                    );
                    RuleGap::new(0.0, Vec::new())
                }
            };

            let credits = gap.credits.max(0.0);
            result.total_gap_credits += credits;
            result.missing.extend(gap.items);
            result.rules.push(RuleReport {
                name: rule.name().map(str::to_string),
                kind: rule.kind(),
                gap_credits: credits,
                chosen_option: gap.chosen_option,
            });
        }

        tracing::debug!(
            "{}: {} gap credits across {} rules",
            program.id,
            result.total_gap_credits,
            result.rules.len()
        );
        result
    }

    fn prereqs_for(&self, code: &str) -> Option<String> {
        clean_prerequisites_for_display(self.catalog.raw_prerequisites(code))
    }

    fn all_of(&self, courses: &[RuleCourse], profile: &StudentProfile) -> RuleGap {
        let mut gap = RuleGap::new(0.0, Vec::new());
        for course in courses {
            let code = course.code.trim();
            if normalize_code(code).is_empty() || profile.history().contains(code) {
                continue;
            }
            if profile.major_courses().contains(code) {
                gap.items.push(MissingItem::major_covered(code));
                continue;
            }
            gap.credits += course.credits;
            gap.items.push(
                MissingItem::missing(code)
                    .with_prereqs(self.prereqs_for(code))
                    .with_credits(course.credits),
            );
        }
        gap
    }

    fn subset_of(
        &self,
        credits_needed: f64,
        courses: &[RuleCourse],
        profile: &StudentProfile,
    ) -> RuleGap {
        let mut earned = 0.0;
        let mut options: Vec<String> = Vec::new();
        for course in courses {
            let code = course.code.trim();
            if normalize_code(code).is_empty() {
                continue;
            }
            if profile.effective().contains(code) {
                earned += self.catalog.credits_or(code, course.credits);
            } else {
                options.push(code.to_string());
            }
        }

        let remaining = (credits_needed - earned).max(0.0);
        if remaining <= 0.0 {
            return RuleGap::new(0.0, Vec::new());
        }

        let mut preview = options
            .iter()
            .take(SUBSET_PREVIEW)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        if options.len() > SUBSET_PREVIEW {
            preview.push_str("...");
        }
        let item = MissingItem {
            text: format!(
                "Select {} credits from: {}",
                format_credits(remaining),
                preview
            ),
            status: MissingStatus::SubsetMissing,
            prereqs: None,
            credits: Some(remaining),
            options: Some(options),
        };
        RuleGap::new(remaining, vec![item])
    }

    fn group_option(&self, groups: &[CourseGroup], profile: &StudentProfile) -> RuleGap {
        let held = profile.effective();

        // (index, cost, courses with a nonzero cost)
        let mut best: Option<(usize, f64, Vec<&str>)> = None;
        for (index, group) in groups.iter().enumerate() {
            let mut cost = 0.0;
            let mut needed = Vec::new();
            for course in &group.courses {
                let code = course.code.trim();
                if normalize_code(code).is_empty() || held.contains(code) {
                    continue;
                }
                let course_cost = self.resolver.cost(code, held, Some(course.credits));
                cost += course_cost;
                // Courses met through an equivalent or higher-level course cost nothing and are not listed.
                if course_cost > 0.0 {
                    needed.push(code);
                }
            }
            if best.as_ref().is_none_or(|(_, b, _)| cost < *b) {
                best = Some((index, cost, needed));
            }
        }

        let Some((index, cost, needed)) = best else {
            return RuleGap::new(0.0, Vec::new());
        };

        let chosen = groups[index]
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Option {}", index + 1));

        let mut items = Vec::new();
        if cost > 0.0 {
            let prereqs = needed.first().and_then(|code| self.prereqs_for(code));
            items.push(
                MissingItem::missing(format!("Take: {}", needed.join(" + ")))
                    .with_prereqs(prereqs)
                    .with_credits(cost),
            );
        }

        RuleGap {
            credits: cost,
            items,
            chosen_option: Some(chosen),
        }
    }
}
