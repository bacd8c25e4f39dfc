//! End-to-end pipeline tests: script in, artifact bundle out

use egress_sdk::models::ExecutionDefaults;
use egress_sdk::session::{EgressSession, SessionError};

const SAMPLE_SCRIPT: &str = "SELECT id FROM users; if err then .quit 1;";

#[test]
fn test_end_to_end_extraction() {
    let session =
        EgressSession::from_upload("legacy_job.bteq", SAMPLE_SCRIPT.as_bytes(), ExecutionDefaults::default())
            .unwrap();

    let sql = session.sql_config();
    assert_eq!(sql.source_schema.len(), 1);
    assert_eq!(sql.source_schema[0].table, "users");
    assert_eq!(sql.source_schema[0].columns, vec!["id"]);
    assert_eq!(sql.sql_logic, "SELECT id FROM users;");
    assert_eq!(sql.destination(), "/tmp/output.csv");

    let exec = session.execution_config();
    assert_eq!(exec.job_name, "legacy_job");
    assert_eq!(exec.execution_condition, vec!["if err then .quit 1;"]);
}

#[test]
fn test_bundle_has_five_artifacts_with_fixed_names() {
    let session = EgressSession::from_script("legacy_job", SAMPLE_SCRIPT, ExecutionDefaults::default());
    let artifacts = session.artifacts().unwrap();

    let names: Vec<&str> = artifacts.iter().map(|a| a.filename.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "sql_config.json",
            "egress_query.sql",
            "execution.json",
            "legacy_job_export.py",
            "legacy_job_dag.py"
        ]
    );
}

#[test]
fn test_sql_config_json_shape_and_key_order() {
    let session = EgressSession::from_script("legacy_job", SAMPLE_SCRIPT, ExecutionDefaults::default());
    let artifacts = session.artifacts().unwrap();
    let json = &artifacts[0].content;

    // 2-space indentation, keys in declaration order
    assert!(json.contains("  \"source_schema\": ["));
    let source_pos = json.find("\"source_schema\"").unwrap();
    let target_pos = json.find("\"target_schema\"").unwrap();
    let logic_pos = json.find("\"sql_logic\"").unwrap();
    assert!(source_pos < target_pos && target_pos < logic_pos);

    let parsed: serde_json::Value = serde_json::from_str(json).unwrap();
    assert_eq!(parsed["source_schema"][0]["table"], "users");
    assert_eq!(parsed["target_schema"][0]["destination"], "/tmp/output.csv");
}

#[test]
fn test_execution_json_carries_control_lines_and_defaults() {
    let session = EgressSession::from_script("legacy_job", SAMPLE_SCRIPT, ExecutionDefaults::default());
    let artifacts = session.artifacts().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&artifacts[2].content).unwrap();

    assert_eq!(parsed["job_name"], "legacy_job");
    assert_eq!(parsed["execution_condition"][0], "if err then .quit 1;");
    assert_eq!(parsed["command_logic"], "bteq < job.bteq");
    assert_eq!(parsed["schedule"], "0 3 * * *");
    assert_eq!(parsed["retries"], 1);
    assert_eq!(parsed["delay_minutes"], 5);
}

#[test]
fn test_generated_scripts_reference_each_other() {
    let session = EgressSession::from_script("legacy_job", SAMPLE_SCRIPT, ExecutionDefaults::default());
    let artifacts = session.artifacts().unwrap();

    let export_script = &artifacts[3].content;
    assert!(export_script.contains("query = \"\"\"SELECT id FROM users;\"\"\""));
    assert!(export_script.contains("to_csv(\"/tmp/output.csv\""));

    let dag = &artifacts[4].content;
    assert!(dag.contains("dag_id=\"legacy_job_dag\""));
    assert!(dag.contains("os.path.exists(\"legacy_job_export.py\")"));
}

#[test]
fn test_undecodable_upload_is_reported_not_panicked() {
    let result = EgressSession::from_upload(
        "job.bteq",
        &[0x00, 0x9f, 0xff, 0xfe],
        ExecutionDefaults::default(),
    );
    assert!(matches!(result, Err(SessionError::UndecodableInput)));
}

#[test]
fn test_sql_free_script_still_yields_full_bundle() {
    let session =
        EgressSession::from_script("empty_job", ".logon host/user,pass\n.quit 0;", ExecutionDefaults::default());
    let artifacts = session.artifacts().unwrap();

    assert_eq!(artifacts.len(), 5);
    assert_eq!(artifacts[1].content, "");
    let parsed: serde_json::Value = serde_json::from_str(&artifacts[0].content).unwrap();
    assert_eq!(parsed["source_schema"].as_array().unwrap().len(), 0);
}

#[test]
fn test_artifacts_write_to_directory() {
    let dir = tempfile::tempdir().unwrap();
    let session = EgressSession::from_script("legacy_job", SAMPLE_SCRIPT, ExecutionDefaults::default());

    for artifact in session.artifacts().unwrap() {
        let path = artifact.write_to(dir.path()).unwrap();
        assert!(path.exists());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), artifact.content);
    }
}
