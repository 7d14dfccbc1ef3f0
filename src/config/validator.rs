//! Configuration validation rules.
//!
//! - At least one catalog file must be configured
//! - The programs file must be configured
//! - `recommend.top_n` must be at least 1

use crate::config::schema::DegreeGapConfig;
use crate::error::{DegreeGapError, Result};

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Config key the error is about
    pub field: String,
}

impl ValidationError {
    fn new(rule: &str, field: &str, message: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            message: message.into(),
            field: field.to_string(),
        }
    }
}

/// Validate a configuration and return all errors.
pub fn validate_config(config: &DegreeGapConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.data.catalogs.is_empty() {
        errors.push(ValidationError::new(
            "missing-catalog",
            "data.catalogs",
            "At least one catalog file must be listed under data.catalogs",
        ));
    }
    for (i, path) in config.data.catalogs.iter().enumerate() {
        if path.as_os_str().is_empty() {
            errors.push(ValidationError::new(
                "empty-path",
                "data.catalogs",
                format!("data.catalogs[{}] is an empty path", i),
            ));
        }
    }

    if config.data.programs.as_os_str().is_empty() {
        errors.push(ValidationError::new(
            "missing-programs",
            "data.programs",
            "data.programs must name the program rules file",
        ));
    }

    if config.recommend.top_n == 0 {
        errors.push(ValidationError::new(
            "invalid-top-n",
            "recommend.top_n",
            "recommend.top_n must be at least 1",
        ));
    }

    errors
}

/// Validate and return Result (for convenience).
///
/// # Errors
///
/// Returns `ConfigValidationError` if any validation rules fail.
pub fn validate(config: &DegreeGapConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(DegreeGapError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
