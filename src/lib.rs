//! Egress SDK - converts legacy egress scripts into scheduled export jobs
//!
//! Provides a two-stage, pure text-transformation pipeline:
//! - Extraction: raw script text (e.g. a Teradata BTEQ job) into structured
//!   records describing the SQL, source tables, destination and control logic
//! - Generation: structured records into derived artifacts (export script,
//!   orchestration definition, JSON descriptors)
//!
//! Presentation concerns (upload handling, rendering, downloads) are left to
//! embedding applications; see [`session::EgressSession`] for the one-upload
//! entry point they drive.

pub mod auth;
pub mod extract;
pub mod generate;
pub mod models;
pub mod session;
pub mod validation;

// Re-export commonly used types
pub use auth::AccessGate;
pub use extract::{Extraction, ScriptExtractor};
pub use generate::{DagGenerator, ExportJobGenerator};
pub use models::{
    ExecutionConfig, ExecutionDefaults, GeneratedArtifact, SourceTable, SqlConfig, TargetEntry,
};
pub use session::{EgressSession, SessionError};
pub use validation::{ValidationError, ValidationResult, validate_job_name};
