//! Request-scoped egress session
//!
//! One session per upload: decode the script, extract the records, render
//! the artifact bundle. All state is owned by the session value; nothing is
//! shared between sessions or retained afterwards.

use std::path::Path;

use crate::extract::{Extraction, ScriptExtractor};
use crate::generate::{DagGenerator, ExportJobGenerator};
use crate::models::{ExecutionConfig, ExecutionDefaults, GeneratedArtifact, SqlConfig};
use crate::validation::validate_job_name;

/// Error during session construction or artifact rendering
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Uploaded bytes were not valid UTF-8 text. Recoverable: the caller
    /// should prompt for a different upload.
    #[error("undecodable input: uploaded content is not valid UTF-8 text")]
    UndecodableInput,

    /// JSON rendering of a record failed
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// One upload's worth of extraction state and generated output.
#[derive(Debug, Clone)]
pub struct EgressSession {
    job_name: String,
    raw_script: String,
    extraction: Extraction,
}

impl EgressSession {
    /// Build a session from an uploaded file's name and raw bytes.
    ///
    /// The job name is the file's base name without extension. Returns
    /// [`SessionError::UndecodableInput`] when the bytes are not UTF-8; the
    /// session itself is never left in a broken state.
    pub fn from_upload(
        file_name: &str,
        bytes: &[u8],
        defaults: ExecutionDefaults,
    ) -> Result<Self, SessionError> {
        let text = std::str::from_utf8(bytes).map_err(|_| SessionError::UndecodableInput)?;
        let job_name = Path::new(file_name)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(file_name)
            .to_string();
        Ok(Self::from_script(&job_name, text, defaults))
    }

    /// Build a session from already-decoded script text.
    pub fn from_script(job_name: &str, script: &str, defaults: ExecutionDefaults) -> Self {
        if let Err(e) = validate_job_name(job_name) {
            // Bad names are passed through unsanitized; the generated
            // artifacts will simply carry them.
            tracing::warn!("job name validation warning: {}", e);
        }

        let extractor = ScriptExtractor::with_defaults(defaults);
        let mut extraction = extractor.extract(script);
        extraction.execution.job_name = job_name.to_string();

        Self {
            job_name: job_name.to_string(),
            raw_script: script.to_string(),
            extraction,
        }
    }

    /// Job name derived from the upload.
    pub fn job_name(&self) -> &str {
        &self.job_name
    }

    /// The decoded script text as uploaded.
    pub fn raw_script(&self) -> &str {
        &self.raw_script
    }

    /// Extracted SQL config record.
    pub fn sql_config(&self) -> &SqlConfig {
        &self.extraction.sql
    }

    /// Extracted execution descriptor.
    pub fn execution_config(&self) -> &ExecutionConfig {
        &self.extraction.execution
    }

    /// Filename of the generated export script.
    pub fn export_script_name(&self) -> String {
        format!("{}_export.py", self.job_name)
    }

    /// Render the full artifact bundle for this session.
    ///
    /// Always five artifacts, in a fixed order: SQL config JSON, raw SQL
    /// text, execution descriptor JSON, export script, DAG definition.
    pub fn artifacts(&self) -> Result<Vec<GeneratedArtifact>, SessionError> {
        let sql = self.sql_config();
        let execution = self.execution_config();

        let sql_config_json = serde_json::to_string_pretty(sql)
            .map_err(|e| SessionError::Serialization(e.to_string()))?;
        let execution_json = serde_json::to_string_pretty(execution)
            .map_err(|e| SessionError::Serialization(e.to_string()))?;

        let export_script_name = self.export_script_name();
        let export_script =
            ExportJobGenerator::new().generate(&sql.sql_logic, sql.destination());
        let dag = DagGenerator::new().generate(&self.job_name, &export_script_name, execution);

        Ok(vec![
            GeneratedArtifact::new("sql_config.json", sql_config_json),
            GeneratedArtifact::new("egress_query.sql", sql.sql_logic.clone()),
            GeneratedArtifact::new("execution.json", execution_json),
            GeneratedArtifact::new(export_script_name, export_script),
            GeneratedArtifact::new(format!("{}_dag.py", self.job_name), dag),
        ])
    }
}
