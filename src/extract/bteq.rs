//! Legacy egress script extraction
//!
//! Pattern-based extraction of SQL statements and control logic from BTEQ-style
//! scripts. This is heuristic by contract, not a SQL parser: it keeps the exact
//! matching behavior of the legacy framework so regenerated configs stay
//! byte-compatible with previously produced ones.
//!
//! Known limits of the heuristic (all deliberate):
//! - A SQL block is anything from a `SELECT` keyword to the next `;`, so
//!   statements containing `;` inside string literals split early.
//! - Column lists are flattened globally, not partitioned per table.
//! - The control-line filter is a plain substring test with no awareness of
//!   comments or string literals.

use super::Extraction;
use crate::models::{ExecutionConfig, ExecutionDefaults, SourceTable, SqlConfig, TargetEntry};
use once_cell::sync::Lazy;
use regex::Regex;

// Static regex patterns compiled once for performance
static RE_SQL_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)SELECT\s+.*?;").expect("Invalid regex"));
static RE_FROM_TABLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)FROM\s+([A-Za-z0-9_.]+)").expect("Invalid regex"));
static RE_SELECT_COLUMNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)SELECT\s+(.*?)\s+FROM").expect("Invalid regex"));
static RE_EXPORT_FILE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)EXPORT\s+FILE\s*=\s*['"]([^'"]+)['"]"#).expect("Invalid regex")
});

/// Script extractor - pulls SQL and control logic out of legacy egress scripts
#[derive(Debug, Clone, Default)]
pub struct ScriptExtractor {
    /// Fallback values used when the script gives no better answer
    pub defaults: ExecutionDefaults,
}

impl ScriptExtractor {
    /// Create an extractor with the legacy framework's default fallbacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with custom fallback values.
    pub fn with_defaults(defaults: ExecutionDefaults) -> Self {
        Self { defaults }
    }

    /// Extract structured records from raw script text.
    ///
    /// Total over all inputs: no SQL match yields an empty `sql_logic` and an
    /// empty `source_schema`, a missing export directive falls back to the
    /// configured destination, and a script with no control lines yields an
    /// empty `execution_condition`.
    ///
    /// Matches are collected in source order, so identical input always
    /// produces structurally identical records.
    ///
    /// # Example
    ///
    /// ```rust
    /// use egress_sdk::extract::ScriptExtractor;
    ///
    /// let extractor = ScriptExtractor::new();
    /// let result = extractor.extract("SELECT id FROM users; if err then .quit 1;");
    /// assert_eq!(result.sql.source_schema[0].table, "users");
    /// assert_eq!(result.sql.sql_logic, "SELECT id FROM users;");
    /// assert_eq!(result.execution.execution_condition, vec!["if err then .quit 1;"]);
    /// ```
    pub fn extract(&self, script: &str) -> Extraction {
        let sql_blocks: Vec<&str> = RE_SQL_BLOCK.find_iter(script).map(|m| m.as_str()).collect();
        let non_sql = RE_SQL_BLOCK.replace_all(script, "");
        let non_sql = non_sql.trim();

        if sql_blocks.is_empty() {
            tracing::warn!("no SQL statements matched; emitting empty SQL config");
        }

        let joined = sql_blocks.join(" ");

        let source_tables: Vec<String> = RE_FROM_TABLE
            .captures_iter(&joined)
            .map(|cap| cap[1].to_string())
            .collect();

        // Global flattened column list: every SELECT list, comma-split and
        // trimmed, not partitioned back per table.
        let columns_flat: Vec<String> = RE_SELECT_COLUMNS
            .captures_iter(&joined)
            .flat_map(|cap| {
                cap[1]
                    .split(',')
                    .map(|col| col.trim().to_string())
                    .collect::<Vec<_>>()
            })
            .collect();

        let destination = RE_EXPORT_FILE
            .captures(script)
            .map(|cap| cap[1].to_string())
            .unwrap_or_else(|| self.defaults.fallback_destination.clone());

        let sql_config = SqlConfig {
            source_schema: source_tables
                .into_iter()
                .map(|table| SourceTable {
                    table,
                    columns: columns_flat.clone(),
                })
                .collect(),
            target_schema: vec![TargetEntry { destination }],
            sql_logic: joined.trim().to_string(),
        };

        // Heuristic control-line filter: substring test only, may both over-
        // and under-select.
        let execution_condition: Vec<String> = non_sql
            .lines()
            .filter(|line| {
                let lowered = line.to_lowercase();
                lowered.contains("if") || lowered.contains(".quit")
            })
            .map(|line| line.trim().to_string())
            .collect();

        let execution = ExecutionConfig {
            job_name: self.defaults.job_name.clone(),
            execution_condition,
            command_logic: self.defaults.command_logic.clone(),
            schedule: self.defaults.schedule.clone(),
            retries: self.defaults.retries,
            delay_minutes: self.defaults.delay_minutes,
        };

        Extraction {
            sql: sql_config,
            execution,
        }
    }
}
