//! SQL config record inferred from an uploaded script

use serde::{Deserialize, Serialize};

/// One source table reference found in the script's SQL blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceTable {
    /// Table name as written after `FROM` (may be schema-qualified)
    pub table: String,
    /// Column expressions selected in the script.
    ///
    /// This is the flattened global column list, not the columns of this
    /// table alone: the source heuristic does not partition the `SELECT`
    /// lists back per table, and every entry carries the same list. Kept
    /// deliberately for parity with previously generated configs.
    pub columns: Vec<String>,
}

/// Export destination entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetEntry {
    /// Output file path for the exported data
    pub destination: String,
}

/// Normalized SQL description of an egress script.
///
/// Serialized as `sql_config.json`; field order here is the JSON key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SqlConfig {
    /// Source tables in order of first appearance; empty when no `FROM`
    /// clause matched
    pub source_schema: Vec<SourceTable>,
    /// Single-element target description
    pub target_schema: Vec<TargetEntry>,
    /// All matched SQL statements, space-joined and trimmed
    pub sql_logic: String,
}

impl SqlConfig {
    /// The export destination path.
    ///
    /// Always present: extraction fills in the configured fallback when the
    /// script carries no export directive.
    pub fn destination(&self) -> &str {
        self.target_schema
            .first()
            .map(|t| t.destination.as_str())
            .unwrap_or_default()
    }
}
