//! Program and requirement-rule definitions.
//!
//! These structs map to the programs JSON file. Every field tolerates
//! being absent, `null`, or of the wrong JSON type: numbers default to
//! zero and lists to empty, so a partially filled rule evaluates instead
//! of failing to load.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::catalog::course::{deserialize_credits, lenient, DEFAULT_CREDITS};

/// Highest course level assumed when a pool leaves `level_max` open.
pub const DEFAULT_LEVEL_MAX: u32 = 999;

/// An academic program and its requirement rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Program {
    /// Program name, also its identifier ("Economics").
    #[serde(deserialize_with = "lenient")]
    #[schemars(with = "String")]
    pub id: String,

    /// Majors, Minors, or Certificates.
    #[serde(rename = "type", deserialize_with = "lenient")]
    #[schemars(with = "ProgramType")]
    pub program_type: ProgramType,

    /// Bulletin page for the program.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    #[schemars(with = "Option<String>")]
    pub url: Option<String>,

    /// Requirement rules; their gaps are summed.
    #[serde(deserialize_with = "lenient")]
    #[schemars(with = "Vec<Rule>")]
    pub rules: Vec<Rule>,
}

impl Program {
    /// Whether this program is a major.
    pub fn is_major(&self) -> bool {
        self.program_type == ProgramType::Majors
    }

    /// Every course code the program lists, in rule order.
    ///
    /// Covers required lists, subset pools, group options, and dynamic
    /// secondary pools. Primary pools are open-ended and not included.
    /// Codes are returned as written; duplicates are kept.
    pub fn listed_codes(&self) -> Vec<&str> {
        let mut codes = Vec::new();
        for rule in &self.rules {
            match rule {
                Rule::AllOf { courses, .. } | Rule::SubsetOf { courses, .. } => {
                    codes.extend(courses.iter().map(|c| c.code.as_str()));
                }
                Rule::DynamicSubset { constraints, .. } => {
                    codes.extend(constraints.secondary_pool.courses.iter().map(String::as_str));
                }
                Rule::GroupOption { groups, .. } => {
                    for group in groups {
                        codes.extend(group.courses.iter().map(|c| c.code.as_str()));
                    }
                }
                Rule::Unknown => {}
            }
        }
        codes
    }
}

/// Kind of academic program.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ProgramType {
    Majors,
    Minors,
    Certificates,
    /// Any other label in the data, or none at all.
    #[default]
    #[serde(other)]
    Other,
}

impl ProgramType {
    /// Label as written in the data files.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgramType::Majors => "Majors",
            ProgramType::Minors => "Minors",
            ProgramType::Certificates => "Certificates",
            ProgramType::Other => "Other",
        }
    }

    /// Case-insensitive substring match ("minor" matches `Minors`).
    ///
    /// An empty filter matches every type.
    pub fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.trim().to_lowercase();
        filter.is_empty() || self.as_str().to_lowercase().contains(&filter)
    }
}

impl std::fmt::Display for ProgramType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A requirement rule within a program.
///
/// Deserialization never fails: a rule without a string `type`, or one
/// whose fields cannot be read at all, becomes [`Rule::Unknown`].
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Rule {
    /// Every listed course is required.
    #[serde(rename = "all")]
    AllOf {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default)]
        courses: Vec<RuleCourse>,
    },

    /// Earn `credits_needed` from any of the listed courses.
    #[serde(rename = "subset")]
    SubsetOf {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default)]
        credits_needed: f64,
        #[serde(default)]
        courses: Vec<RuleCourse>,
    },

    /// Earn `credits_needed` from a department/level pool plus a list.
    DynamicSubset {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default)]
        credits_needed: f64,
        #[serde(default)]
        constraints: PoolConstraints,
    },

    /// Complete any one of several course groups.
    GroupOption {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default)]
        groups: Vec<CourseGroup>,
    },

    /// A rule kind this engine does not know; contributes nothing.
    #[serde(other)]
    Unknown,
}

impl<'de> Deserialize<'de> for Rule {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        if !value.get("type").is_some_and(serde_json::Value::is_string) {
            tracing::debug!("Rule without a type tag; ignoring it");
            return Ok(Rule::Unknown);
        }
        Ok(serde_json::from_value::<RuleRecord>(value)
            .map(Rule::from)
            .unwrap_or(Rule::Unknown))
    }
}

/// Wire form of [`Rule`], read once the tag is known to be a string.
#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum RuleRecord {
    #[serde(rename = "all")]
    AllOf {
        #[serde(default, deserialize_with = "lenient")]
        name: Option<String>,
        #[serde(default, deserialize_with = "lenient")]
        courses: Vec<RuleCourse>,
    },
    #[serde(rename = "subset")]
    SubsetOf {
        #[serde(default, deserialize_with = "lenient")]
        name: Option<String>,
        #[serde(default, deserialize_with = "deserialize_credit_total")]
        credits_needed: f64,
        #[serde(default, deserialize_with = "lenient")]
        courses: Vec<RuleCourse>,
    },
    DynamicSubset {
        #[serde(default, deserialize_with = "lenient")]
        name: Option<String>,
        #[serde(default, deserialize_with = "deserialize_credit_total")]
        credits_needed: f64,
        #[serde(default, deserialize_with = "lenient")]
        constraints: PoolConstraints,
    },
    GroupOption {
        #[serde(default, deserialize_with = "lenient")]
        name: Option<String>,
        #[serde(default, deserialize_with = "lenient")]
        groups: Vec<CourseGroup>,
    },
    #[serde(other)]
    Unknown,
}

impl From<RuleRecord> for Rule {
    fn from(record: RuleRecord) -> Self {
        match record {
            RuleRecord::AllOf { name, courses } => Rule::AllOf { name, courses },
            RuleRecord::SubsetOf {
                name,
                credits_needed,
                courses,
            } => Rule::SubsetOf {
                name,
                credits_needed,
                courses,
            },
            RuleRecord::DynamicSubset {
                name,
                credits_needed,
                constraints,
            } => Rule::DynamicSubset {
                name,
                credits_needed,
                constraints,
            },
            RuleRecord::GroupOption { name, groups } => Rule::GroupOption { name, groups },
            RuleRecord::Unknown => Rule::Unknown,
        }
    }
}

impl Rule {
    /// Rule name from the data, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            Rule::AllOf { name, .. }
            | Rule::SubsetOf { name, .. }
            | Rule::DynamicSubset { name, .. }
            | Rule::GroupOption { name, .. } => name.as_deref(),
            Rule::Unknown => None,
        }
    }

    /// Tag used for this rule kind in the data files.
    pub fn kind(&self) -> &'static str {
        match self {
            Rule::AllOf { .. } => "all",
            Rule::SubsetOf { .. } => "subset",
            Rule::DynamicSubset { .. } => "dynamic_subset",
            Rule::GroupOption { .. } => "group_option",
            Rule::Unknown => "unknown",
        }
    }
}

/// A course entry inside a rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RuleCourse {
    /// Course code as written in the bulletin.
    #[serde(default, deserialize_with = "lenient")]
    #[schemars(with = "String")]
    pub code: String,

    /// Credit weight; three when absent.
    #[serde(default = "default_rule_credits", deserialize_with = "deserialize_rule_credits")]
    #[schemars(with = "f64")]
    pub credits: f64,
}

impl RuleCourse {
    /// Create a rule course entry.
    pub fn new(code: impl Into<String>, credits: f64) -> Self {
        Self {
            code: code.into(),
            credits,
        }
    }
}

/// Pools for a dynamic subset rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PoolConstraints {
    /// Department and level-range pool.
    #[serde(deserialize_with = "lenient")]
    #[schemars(with = "PrimaryPool")]
    pub primary_pool: PrimaryPool,

    /// Explicitly listed courses.
    #[serde(deserialize_with = "lenient")]
    #[schemars(with = "SecondaryPool")]
    pub secondary_pool: SecondaryPool,
}

/// Courses matched by department and an inclusive level range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PrimaryPool {
    /// Department prefixes ("ECON", "FIN").
    #[serde(deserialize_with = "lenient")]
    #[schemars(with = "Vec<String>")]
    pub departments: Vec<String>,

    /// Lowest course number counted; zero when absent.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    #[schemars(with = "Option<u32>")]
    pub level_min: Option<u32>,

    /// Highest course number counted; 999 when absent.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    #[schemars(with = "Option<u32>")]
    pub level_max: Option<u32>,

    /// Minimum credits that must come from this pool.
    #[serde(rename = "min_credits_needed", deserialize_with = "deserialize_credit_total")]
    #[schemars(with = "f64")]
    pub min_credits: f64,
}

impl PrimaryPool {
    /// Inclusive lower level bound.
    pub fn level_min(&self) -> u32 {
        self.level_min.unwrap_or(0)
    }

    /// Inclusive upper level bound.
    pub fn level_max(&self) -> u32 {
        self.level_max.unwrap_or(DEFAULT_LEVEL_MAX)
    }

    /// Whether a department/number pair falls in this pool.
    pub fn includes(&self, department: &str, number: u32) -> bool {
        self.departments
            .iter()
            .any(|d| d.trim().eq_ignore_ascii_case(department))
            && (self.level_min()..=self.level_max()).contains(&number)
    }
}

/// Explicitly enumerated courses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SecondaryPool {
    /// Course codes as written.
    #[serde(deserialize_with = "lenient")]
    #[schemars(with = "Vec<String>")]
    pub courses: Vec<String>,
}

/// One mutually exclusive option of a group rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CourseGroup {
    /// Option label ("Option A").
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    #[schemars(with = "Option<String>")]
    pub name: Option<String>,

    /// Courses that make up this option.
    #[serde(deserialize_with = "lenient")]
    #[schemars(with = "Vec<RuleCourse>")]
    pub courses: Vec<RuleCourse>,
}

fn default_rule_credits() -> f64 {
    DEFAULT_CREDITS
}

fn deserialize_rule_credits<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_credits(deserializer)?.unwrap_or(DEFAULT_CREDITS))
}

fn deserialize_credit_total<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_credits(deserializer)?.unwrap_or(0.0))
}
