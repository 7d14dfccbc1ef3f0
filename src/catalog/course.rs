//! Course records as they appear in catalog files.

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Deserializer, Serialize};

/// Credit value assumed when neither the catalog nor a rule says otherwise.
pub const DEFAULT_CREDITS: f64 = 3.0;

/// A single catalog course.
///
/// Field names follow the catalog JSON files (`courseCode`,
/// `prerequisites_raw`, `genEdAttributes`, ...). The normalized key is
/// filled in by [`Catalog`](super::Catalog) when the course is inserted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Course {
    /// Canonical lookup key (see [`normalize_code`](super::normalize_code)).
    #[serde(skip)]
    pub normalized_code: String,

    /// Code as printed in the catalog ("ECON 102").
    #[serde(rename = "courseCode", deserialize_with = "null_as_default")]
    pub display_code: String,

    /// Course title.
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,

    /// Credit hours; ranges resolve to their lower bound.
    #[serde(
        deserialize_with = "deserialize_credits",
        skip_serializing_if = "Option::is_none"
    )]
    pub credits: Option<f64>,

    /// Free-text prerequisite statement from the catalog.
    #[serde(rename = "prerequisites_raw", deserialize_with = "null_as_default")]
    pub raw_prerequisites: String,

    /// General-education attribute tags ("GH", "GS", ...).
    #[serde(rename = "genEdAttributes", deserialize_with = "lenient")]
    pub gen_ed_attributes: Vec<String>,

    /// Cultural-diversity attribute tags ("US", "IL", ...).
    #[serde(rename = "culturalAttributes", deserialize_with = "lenient")]
    pub cultural_attributes: Vec<String>,

    /// Program the scraper found this course under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_program: Option<String>,
}

impl Course {
    /// Credit hours, or `default` when the catalog has no usable value.
    pub fn credits_or(&self, default: f64) -> f64 {
        self.credits.unwrap_or(default)
    }

    /// Whether the course carries the given gen-ed attribute.
    pub fn has_gen_ed(&self, tag: &str) -> bool {
        self.gen_ed_attributes.iter().any(|a| a == tag)
    }
}

/// Parse a credit value such as `"3"`, `"3.0"`, or `"3-4"`.
///
/// Ranges resolve to their lower bound. Anything unparsable is `None`.
///
/// ```
/// use degreegap::catalog::parse_credits;
///
/// assert_eq!(parse_credits("3-4"), Some(3.0));
/// assert_eq!(parse_credits("var"), None);
/// ```
pub fn parse_credits(text: &str) -> Option<f64> {
    let lower = text.split('-').next()?.trim();
    lower.parse::<f64>().ok().filter(|c| c.is_finite() && *c >= 0.0)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCredits {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Accept credits as a number, a string, or null.
pub(crate) fn deserialize_credits<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawCredits>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawCredits::Number(n)) if n.is_finite() && n >= 0.0 => Some(n),
        Some(RawCredits::Number(_)) => None,
        Some(RawCredits::Text(t)) => parse_credits(&t),
        Some(RawCredits::Other(_)) | None => None,
    })
}

/// Treat an explicit JSON `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize a value, falling back to its default when it is null or of
/// the wrong shape (`"courses": "ECON 102"` where a list is expected).
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}
