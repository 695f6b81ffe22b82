use std::io;

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use aqisense_core::AqiModel;

mod cli;
mod commands;
mod config;
mod format;
mod tui;
mod util;

use cli::{Cli, Commands, ModelAction};
use commands::{PredictArgs, cmd_config, cmd_model, cmd_predict, cmd_scale};
use config::Config;
use format::FormatOptions;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle completions command early (before tracing init)
    if let Commands::Completions { shell } = cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "aqisense", &mut io::stdout());
        return Ok(());
    }

    // When quiet mode is enabled, suppress info-level logging
    let filter = if cli.quiet {
        EnvFilter::new("warn")
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("Ignoring unreadable config: {e}");
        Config::default()
    });
    let opts = FormatOptions::new(cli.no_color || config.no_color);

    match &cli.command {
        Commands::Predict {
            reading,
            date,
            hour,
            format,
            no_header,
        } => {
            let model = resolve_model(&cli, &config)?;
            cmd_predict(
                model,
                PredictArgs {
                    reading: reading.clone(),
                    date: date.clone(),
                    hour: *hour,
                    format: *format,
                    output: cli.output.clone(),
                },
                &opts.with_no_header(*no_header),
            )
        }
        Commands::Tui => {
            let model = resolve_model(&cli, &config)?;
            tui::run(model)
        }
        Commands::Scale { format } => cmd_scale(*format, cli.output.as_ref(), &opts),
        Commands::Model { action } => {
            let model = match action {
                ModelAction::Inspect => Some(resolve_model(&cli, &config)?),
                ModelAction::Init { .. } => None,
            };
            cmd_model(action, model)
        }
        Commands::Config { action } => cmd_config(action),
        Commands::Completions { .. } => unreachable!(),
    }
}

/// Resolve the model to use: `--demo` wins, then `--model` / `AQISENSE_MODEL`
/// (clap merges those), then the configured default path.
fn resolve_model(cli: &Cli, config: &Config) -> Result<AqiModel> {
    if cli.demo {
        return Ok(AqiModel::demo());
    }
    let path = cli.model.as_ref().or(config.model.as_ref());
    match path {
        Some(path) => AqiModel::load(path)
            .with_context(|| format!("Failed to load model from {}", path.display())),
        None => bail!(
            "No model specified. Pass --model <PATH>, set AQISENSE_MODEL, \
             configure a default with 'aqisense config set model <PATH>', \
             or use --demo"
        ),
    }
}
