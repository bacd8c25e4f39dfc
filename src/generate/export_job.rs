//! Export job script generation
//!
//! Renders the standalone Python script that runs the extracted SQL against
//! BigQuery and writes the result to the destination CSV.

/// Export job script generator
pub struct ExportJobGenerator;

impl ExportJobGenerator {
    /// Create a new export job generator instance
    pub fn new() -> Self {
        Self
    }

    /// Render the export script for the given SQL and destination path.
    ///
    /// `sql_logic` is embedded inside a triple-quoted Python string literal
    /// and `destination` inside double quotes; both are escaped so the
    /// generated script stays syntactically valid even when the inputs
    /// contain the template's own delimiters. Escaping is the identity on
    /// delimiter-free inputs, keeping parity with previously generated
    /// scripts.
    pub fn generate(&self, sql_logic: &str, destination: &str) -> String {
        let sql = escape_for_triple_quote(sql_logic);
        let dest = destination.replace('"', "\\\"");

        format!(
            r#"from google.cloud import bigquery
import pandas as pd

client = bigquery.Client()
query = """{sql}"""
df = client.query(query).to_dataframe()
df.to_csv("{dest}", index=False)
print("Export complete: {dest}")"#
        )
    }
}

impl Default for ExportJobGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape text for embedding in a Python triple-quoted string literal.
///
/// A lone `"` inside the literal is harmless; only a `"""` run, or a
/// trailing `"` colliding with the closing delimiter, breaks the generated
/// script. Both get backslash-escaped.
fn escape_for_triple_quote(text: &str) -> String {
    let mut out = text.replace("\"\"\"", "\\\"\\\"\\\"");
    if out.ends_with('"') && !out.ends_with("\\\"") {
        out.pop();
        out.push_str("\\\"");
    }
    out
}
