//! Model command implementation.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use aqisense_core::AqiModel;

pub fn cmd_model_init(path: &PathBuf) -> Result<()> {
    let artifact = serde_json::to_string_pretty(AqiModel::demo().artifact())
        .context("Failed to serialize demo model artifact")?;
    fs::write(path, artifact)
        .with_context(|| format!("Failed to write model artifact to {}", path.display()))?;
    println!("Demo model artifact written to {}", path.display());
    Ok(())
}

pub fn cmd_model_inspect(model: &AqiModel) -> Result<()> {
    println!("{}", model.describe());
    Ok(())
}

/// Dispatch for `aqisense model <action>`.
pub fn cmd_model(action: &crate::cli::ModelAction, model: Option<AqiModel>) -> Result<()> {
    match action {
        crate::cli::ModelAction::Init { path } => cmd_model_init(path),
        crate::cli::ModelAction::Inspect => {
            let model = model.context(
                "No model to inspect. Pass --model <PATH>, set AQISENSE_MODEL, or use --demo",
            )?;
            cmd_model_inspect(&model)
        }
    }
}
