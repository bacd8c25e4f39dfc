//! Orchestration definition generation
//!
//! Renders the Airflow DAG that schedules the generated export job: a
//! precondition task checks the export script exists, and only then a
//! dependent task runs it as a subprocess.

use crate::models::ExecutionConfig;

/// Orchestration definition (DAG) generator
pub struct DagGenerator;

impl DagGenerator {
    /// Create a new DAG generator instance
    pub fn new() -> Self {
        Self
    }

    /// Render the DAG definition for a job.
    ///
    /// # Arguments
    ///
    /// * `job_name` - job identifier; becomes the `{job_name}_dag` dag id.
    ///   Not sanitized: illegal identifier characters pass through into the
    ///   generated text.
    /// * `export_script_ref` - path of the export script the DAG invokes
    /// * `exec_config` - schedule, retries and retry delay, copied verbatim
    pub fn generate(
        &self,
        job_name: &str,
        export_script_ref: &str,
        exec_config: &ExecutionConfig,
    ) -> String {
        format!(
            r#"from airflow import DAG
from airflow.operators.python import PythonOperator
from airflow.operators.python import ShortCircuitOperator
from datetime import datetime, timedelta
import os
import subprocess

def check_export_exists():
    return os.path.exists("{export_script_ref}")

def execute_export_job():
    subprocess.run("python {export_script_ref}", shell=True, check=True)

default_args = {{
    'owner': 'airflow',
    'retries': {retries},
    'retry_delay': timedelta(minutes={delay_minutes})
}}

with DAG(
    dag_id="{job_name}_dag",
    default_args=default_args,
    schedule_interval="{schedule}",
    start_date=datetime(2024, 1, 1),
    catchup=False
) as dag:

    check_file = ShortCircuitOperator(
        task_id="check_export_script",
        python_callable=check_export_exists
    )

    run_export = PythonOperator(
        task_id="run_export_job",
        python_callable=execute_export_job
    )

    check_file >> run_export"#,
            retries = exec_config.retries,
            delay_minutes = exec_config.delay_minutes,
            schedule = exec_config.schedule,
        )
    }
}

impl Default for DagGenerator {
    fn default() -> Self {
        Self::new()
    }
}
