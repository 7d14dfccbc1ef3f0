//! Gap calculation results.

use serde::Serialize;

/// Why a requirement line appears in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingStatus {
    /// The course or credits still need to be earned.
    Missing,
    /// Credits still needed from a subset pool.
    SubsetMissing,
    /// Required by the program but already prescribed by the major.
    MajorCovered,
}

impl MissingStatus {
    /// Label used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            MissingStatus::Missing => "missing",
            MissingStatus::SubsetMissing => "subset_missing",
            MissingStatus::MajorCovered => "major_covered",
        }
    }
}

/// One outstanding (or major-covered) requirement line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissingItem {
    pub text: String,
    pub status: MissingStatus,
    /// Catalog prerequisite text for the course, when there is any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prereqs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credits: Option<f64>,
    /// Every unmet option of a subset rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl MissingItem {
    /// A plain missing line.
    pub fn missing(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            status: MissingStatus::Missing,
            prereqs: None,
            credits: None,
            options: None,
        }
    }

    /// A required course the major already prescribes.
    pub fn major_covered(code: &str) -> Self {
        Self {
            text: format!("{} (Covered by Major)", code),
            status: MissingStatus::MajorCovered,
            ..Self::missing("")
        }
    }

    /// Attach prerequisite display text.
    pub fn with_prereqs(mut self, prereqs: Option<String>) -> Self {
        self.prereqs = prereqs;
        self
    }

    /// Attach a credit value.
    pub fn with_credits(mut self, credits: f64) -> Self {
        self.credits = Some(credits);
        self
    }
}

/// Per-rule summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Rule tag (`all`, `subset`, `dynamic_subset`, `group_option`, `unknown`).
    pub kind: &'static str,
    pub gap_credits: f64,
    /// Winning group of a group-option rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chosen_option: Option<String>,
}

/// Outcome of measuring one program against one student.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GapResult {
    /// Sum of every rule's gap; never negative.
    pub total_gap_credits: f64,
    /// Outstanding lines, in rule order.
    pub missing: Vec<MissingItem>,
    /// One entry per rule, in rule order.
    pub rules: Vec<RuleReport>,
}

impl GapResult {
    /// Whether nothing remains.
    pub fn is_complete(&self) -> bool {
        self.total_gap_credits <= 0.0
    }
}

/// Render a credit amount without a trailing `.0` for whole numbers.
///
/// ```
/// use degreegap::gap::format_credits;
///
/// assert_eq!(format_credits(3.0), "3");
/// assert_eq!(format_credits(1.5), "1.5");
/// ```
pub fn format_credits(credits: f64) -> String {
    if credits.fract() == 0.0 && credits.is_finite() {
        format!("{}", credits as i64)
    } else {
        format!("{}", credits)
    }
}
