//! Configuration and data loading for degreegap.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//! - Validation in [`validator`]
//! - Catalog, program, and equivalency files in [`data`]
//!
//! # Example
//!
//! ```
//! use degreegap::config::{load_merged_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".degreegap");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(
//!     dir.join("config.yml"),
//!     "data:\n  programs: programs.json\n  catalogs: [catalog.json]\n",
//! )
//! .unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.recommend.top_n, 15);
//! ```
//!
//! # Configuration File Locations
//!
//! Configuration is merged in this order:
//! 1. Project config (`.degreegap/config.yml`)
//! 2. Local overrides (`.degreegap/config.local.yml`)

pub mod data;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use data::{
    load_catalog, load_catalog_file, load_equivalencies, load_programs, resolve_path, DataSet,
};
pub use loader::{
    find_project_root, load_config, load_config_file, load_config_value, load_merged_config,
    parse_config, project_config_path, ConfigPaths, CONFIG_DIR,
};
pub use merger::{deep_merge, merge_configs};
pub use schema::{DataPaths, DegreeGapConfig, OutputMode, RecommendSettings, Settings};
pub use validator::{validate, validate_config, ValidationError};
