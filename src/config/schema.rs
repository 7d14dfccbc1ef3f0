//! Configuration schema definitions for degreegap.
//!
//! These structs map to `.degreegap/config.yml`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::prereq::HierarchyConfig;
use crate::recommend::{DEFAULT_INTEREST_FILTER, DEFAULT_TOP_N};

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DegreeGapConfig {
    /// Where the catalog, programs, and equivalency files live
    pub data: DataPaths,

    /// Departmental substitution for prerequisites
    pub hierarchy_rules: HierarchyConfig,

    /// Recommendation defaults
    pub recommend: RecommendSettings,

    /// Global settings
    pub settings: Settings,
}

/// Data file locations, relative to the project root.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DataPaths {
    /// Program rules file
    pub programs: PathBuf,

    /// Catalog files, loaded in order; later files win per course
    pub catalogs: Vec<PathBuf>,

    /// Course equivalency file (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equivalencies: Option<PathBuf>,
}

/// Defaults for the `recommend` command.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RecommendSettings {
    /// How many programs to show
    pub top_n: usize,

    /// Program type filter ("Minor", "Certificate", "" for all)
    pub interest_filter: String,
}

impl Default for RecommendSettings {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            interest_filter: DEFAULT_INTEREST_FILTER.to_string(),
        }
    }
}

/// Global settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Settings {
    /// Default output mode: verbose, normal, quiet, silent
    pub default_output: OutputMode,
}

/// Output verbosity mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    #[default]
    Normal,
    Quiet,
    Silent,
}
