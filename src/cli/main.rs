//! CLI binary entry point for egress-cli
//!
//! Thin front-end over the SDK: reads a legacy egress script, runs one
//! session, and writes the generated artifact bundle to an output directory.
//! Stands in for whatever upload UI an embedding application provides.

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use egress_sdk::models::ExecutionDefaults;
use egress_sdk::{AccessGate, EgressSession};

/// Environment variable holding the shared access secret. When unset, the
/// gate is disabled.
const PASSWORD_ENV: &str = "EGRESS_CLI_PASSWORD";

#[derive(Parser)]
#[command(name = "egress-cli")]
#[command(about = "Convert legacy egress scripts into scheduled export jobs")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the artifact bundle from an egress script
    Generate {
        /// Input script file (.bteq, .sql, .txt, ...)
        input: PathBuf,
        /// Output directory for the generated artifacts
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
        /// Shared access secret (required when EGRESS_CLI_PASSWORD is set)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Print the extracted SQL config as JSON without writing files
    Inspect {
        /// Input script file
        input: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            out,
            password,
        } => handle_generate(&input, &out, password.as_deref()),
        Commands::Inspect { input } => handle_inspect(&input),
    }
}

fn check_gate(password: Option<&str>) -> anyhow::Result<()> {
    match std::env::var(PASSWORD_ENV) {
        Ok(secret) => {
            let gate = AccessGate::new(secret);
            match password {
                Some(candidate) if gate.verify(candidate) => Ok(()),
                _ => bail!("incorrect or missing password (see {})", PASSWORD_ENV),
            }
        }
        Err(_) => Ok(()),
    }
}

fn build_session(input: &PathBuf) -> anyhow::Result<EgressSession> {
    let bytes = std::fs::read(input)
        .with_context(|| format!("failed to read input script {}", input.display()))?;
    let file_name = input
        .file_name()
        .and_then(|n| n.to_str())
        .context("input path has no usable file name")?;
    EgressSession::from_upload(file_name, &bytes, ExecutionDefaults::default())
        .context("failed to start session")
}

fn handle_generate(input: &PathBuf, out: &PathBuf, password: Option<&str>) -> anyhow::Result<()> {
    check_gate(password)?;

    let session = build_session(input)?;
    let artifacts = session.artifacts()?;

    std::fs::create_dir_all(out)
        .with_context(|| format!("failed to create output directory {}", out.display()))?;

    for artifact in &artifacts {
        let path = artifact
            .write_to(out)
            .with_context(|| format!("failed to write {}", artifact.filename))?;
        println!("wrote {}", path.display());
    }

    Ok(())
}

fn handle_inspect(input: &PathBuf) -> anyhow::Result<()> {
    let session = build_session(input)?;
    println!("{}", serde_json::to_string_pretty(session.sql_config())?);
    Ok(())
}
