//! JSON Schema generation for the data and configuration files.
//!
//! Schemas are derived with `schemars` from the same types the loaders
//! deserialize into, so they cannot drift from what is accepted.

use std::str::FromStr;

use schemars::{schema_for, Schema};
use serde_json::{json, Value};

use crate::config::DegreeGapConfig;
use crate::program::Program;

/// Which file a schema describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemaTarget {
    /// The programs rules file.
    #[default]
    Programs,
    /// `.degreegap/config.yml`.
    Config,
}

impl FromStr for SchemaTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "programs" => Ok(SchemaTarget::Programs),
            "config" => Ok(SchemaTarget::Config),
            other => Err(format!("unknown schema '{}' (expected programs or config)", other)),
        }
    }
}

/// Generates JSON Schema documents.
pub struct SchemaGenerator;

impl SchemaGenerator {
    /// Create a new schema generator.
    pub fn new() -> Self {
        Self
    }

    /// Schema for the programs file: a list of programs.
    pub fn programs(&self) -> Value {
        Self::titled(
            schema_for!(Vec<Program>),
            "degreegap programs",
            "Academic programs and their requirement rules",
        )
    }

    /// Schema for the project configuration file.
    pub fn config(&self) -> Value {
        Self::titled(
            schema_for!(DegreeGapConfig),
            "degreegap configuration",
            "Project configuration for degreegap",
        )
    }

    /// Schema for the given target.
    pub fn generate(&self, target: SchemaTarget) -> Value {
        match target {
            SchemaTarget::Programs => self.programs(),
            SchemaTarget::Config => self.config(),
        }
    }

    /// Generate the schema as a pretty-printed JSON string.
    pub fn generate_string(&self, target: SchemaTarget) -> String {
        serde_json::to_string_pretty(&self.generate(target)).unwrap_or_default()
    }

    fn titled(schema: Schema, title: &str, description: &str) -> Value {
        let mut value = schema.to_value();
        if let Some(object) = value.as_object_mut() {
            object.insert("title".to_string(), json!(title));
            object.insert("description".to_string(), json!(description));
        }
        value
    }
}

impl Default for SchemaGenerator {
    fn default() -> Self {
        Self::new()
    }
}
