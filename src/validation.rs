//! Input validation utilities
//!
//! Job names flow verbatim into generated filenames and Python identifiers,
//! so callers are warned about names that will produce broken artifacts.
//! Validation never blocks the pipeline: per the framework contract, bad
//! names pass through unsanitized and surface in the generated text.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum length for job names
pub const MAX_JOB_NAME_LENGTH: usize = 255;

/// Errors that can occur during input validation.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
pub enum ValidationError {
    /// Input is empty when a value is required
    #[error("{0} cannot be empty")]
    Empty(&'static str),

    /// Input exceeds maximum allowed length
    #[error("{field} exceeds maximum length (max: {max}, got: {actual})")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    /// Input contains invalid characters
    #[error("{field} contains invalid characters: {reason}")]
    InvalidCharacters { field: &'static str, reason: String },
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validate a job name.
///
/// # Rules
///
/// - Must not be empty
/// - Must not exceed 255 characters
/// - Must start with a letter or underscore
/// - May contain letters, digits, and underscores
///
/// # Examples
///
/// ```
/// use egress_sdk::validation::validate_job_name;
///
/// assert!(validate_job_name("daily_egress").is_ok());
/// assert!(validate_job_name("_job2").is_ok());
/// assert!(validate_job_name("").is_err());
/// assert!(validate_job_name("2024 report").is_err());
/// ```
pub fn validate_job_name(name: &str) -> ValidationResult<()> {
    if name.is_empty() {
        return Err(ValidationError::Empty("job name"));
    }

    if name.len() > MAX_JOB_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "job name",
            max: MAX_JOB_NAME_LENGTH,
            actual: name.len(),
        });
    }

    let mut chars = name.chars();
    let first = chars.next().unwrap_or('_');
    if !first.is_ascii_alphabetic() && first != '_' {
        return Err(ValidationError::InvalidCharacters {
            field: "job name",
            reason: "must start with a letter or underscore".to_string(),
        });
    }

    if let Some(bad) = name.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '_') {
        return Err(ValidationError::InvalidCharacters {
            field: "job name",
            reason: format!("'{}' is not valid in an identifier", bad),
        });
    }

    Ok(())
}
