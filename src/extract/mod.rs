//! Extraction functionality
//!
//! Turns raw legacy script text into structured records:
//! - [`SqlConfig`]: source tables, columns, destination, concatenated SQL
//! - [`ExecutionConfig`]: control lines plus fixed scheduling defaults
//!
//! Extraction is total: malformed or SQL-free input degrades to empty or
//! default values rather than failing.

pub mod bteq;

use crate::models::{ExecutionConfig, SqlConfig};

pub use bteq::ScriptExtractor;

/// Result of one extraction pass over a script.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[must_use = "extraction results should be turned into artifacts or inspected"]
pub struct Extraction {
    /// Normalized SQL description
    pub sql: SqlConfig,
    /// Execution descriptor (job name still the configured placeholder;
    /// callers assign the real name from the upload)
    pub execution: ExecutionConfig,
}
