//! Record types shared between extraction and generation
//!
//! Field declaration order is significant: the JSON artifacts are serialized
//! with `serde_json::to_string_pretty`, so key order in the output follows
//! the struct definitions here.

pub mod execution;
pub mod sql_config;

pub use execution::{ExecutionConfig, ExecutionDefaults};
pub use sql_config::{SourceTable, SqlConfig, TargetEntry};

/// A generated text artifact plus its suggested download filename.
///
/// Write-once: has no identity beyond its content and filename.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct GeneratedArtifact {
    /// Suggested filename for download/persistence
    pub filename: String,
    /// Artifact text content
    pub content: String,
}

impl GeneratedArtifact {
    pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }

    /// Write the artifact into `dir` under its suggested filename.
    ///
    /// Convenience for front-ends that persist the bundle to disk; the
    /// library pipeline itself never performs I/O.
    pub fn write_to(&self, dir: &std::path::Path) -> std::io::Result<std::path::PathBuf> {
        let path = dir.join(&self.filename);
        std::fs::write(&path, &self.content)?;
        Ok(path)
    }
}
