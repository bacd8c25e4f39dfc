//! Generation functionality
//!
//! Renders fixed-template text artifacts from extracted records:
//! - Export job script (Python, BigQuery to CSV)
//! - Orchestration definition (Airflow DAG)
//!
//! Both renderers are pure string substitution and total over their inputs.

pub mod dag;
pub mod export_job;

pub use dag::DagGenerator;
pub use export_job::ExportJobGenerator;
