//! Scale command implementation.

use std::path::PathBuf;

use anyhow::{Result, bail};

use aqisense_core::AqiScale;

use crate::cli::OutputFormat;
use crate::format::{FormatOptions, format_scale_json, format_scale_text};
use crate::util::write_output;

pub fn cmd_scale(
    format: OutputFormat,
    output: Option<&PathBuf>,
    opts: &FormatOptions,
) -> Result<()> {
    let scale = AqiScale::default();
    let content = match format {
        OutputFormat::Text => format_scale_text(&scale, opts),
        OutputFormat::Json => format_scale_json(&scale, opts)?,
        OutputFormat::Csv => bail!("CSV output is not supported for the scale command"),
    };
    write_output(output, &content)
}
