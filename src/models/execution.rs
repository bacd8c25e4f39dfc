//! Execution descriptor and its fixed defaults

use serde::{Deserialize, Serialize};

/// Execution descriptor for a parsed egress job.
///
/// Serialized as `execution.json`; field order here is the JSON key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// Job identifier, normally the uploaded file's base name
    pub job_name: String,
    /// Non-SQL control lines (conditionals, `.quit` handling), trimmed, in
    /// source order
    pub execution_condition: Vec<String>,
    /// Command the legacy job ran
    pub command_logic: String,
    /// Cron schedule expression
    pub schedule: String,
    /// Retry count for the orchestrated job
    pub retries: u32,
    /// Minutes between retries
    pub delay_minutes: u32,
}

/// Fixed fallback values used when the script gives no better answer.
///
/// Overridable by the embedding application; `Default` matches the legacy
/// framework's constants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionDefaults {
    /// Placeholder job name used until the caller assigns one
    pub job_name: String,
    /// Command line recorded in the execution descriptor
    pub command_logic: String,
    /// Cron schedule for the generated orchestration definition
    pub schedule: String,
    /// Retry count for the generated orchestration definition
    pub retries: u32,
    /// Minutes between retries
    pub delay_minutes: u32,
    /// Destination path used when the script has no export directive
    pub fallback_destination: String,
}

impl Default for ExecutionDefaults {
    fn default() -> Self {
        Self {
            job_name: "parsed_egress_job".to_string(),
            command_logic: "bteq < job.bteq".to_string(),
            schedule: "0 3 * * *".to_string(),
            retries: 1,
            delay_minutes: 5,
            fallback_destination: "/tmp/output.csv".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_legacy_constants() {
        let defaults = ExecutionDefaults::default();
        assert_eq!(defaults.command_logic, "bteq < job.bteq");
        assert_eq!(defaults.schedule, "0 3 * * *");
        assert_eq!(defaults.retries, 1);
        assert_eq!(defaults.delay_minutes, 5);
        assert_eq!(defaults.fallback_destination, "/tmp/output.csv");
    }

    #[test]
    fn test_execution_config_key_order() {
        let config = ExecutionConfig {
            job_name: "job".to_string(),
            execution_condition: vec![],
            command_logic: "bteq < job.bteq".to_string(),
            schedule: "0 3 * * *".to_string(),
            retries: 1,
            delay_minutes: 5,
        };
        let json = serde_json::to_string_pretty(&config).unwrap();
        let job_pos = json.find("\"job_name\"").unwrap();
        let cond_pos = json.find("\"execution_condition\"").unwrap();
        let delay_pos = json.find("\"delay_minutes\"").unwrap();
        assert!(job_pos < cond_pos);
        assert!(cond_pos < delay_pos);
    }
}
