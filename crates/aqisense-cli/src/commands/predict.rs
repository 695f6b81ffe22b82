//! Predict command implementation.

use std::path::PathBuf;

use anyhow::Result;

use aqisense_core::{AqiModel, Predictor, Submission};
use aqisense_store::HistoryStore;

use crate::cli::{OutputFormat, ReadingArgs};
use crate::format::{
    FormatOptions, format_prediction_csv, format_prediction_json, format_prediction_text,
};
use crate::util::{parse_date, today, write_output};

/// Resolved arguments for one prediction run.
pub struct PredictArgs {
    pub reading: ReadingArgs,
    pub date: Option<String>,
    pub hour: u8,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

pub fn cmd_predict(model: AqiModel, args: PredictArgs, opts: &FormatOptions) -> Result<()> {
    let date = match args.date.as_deref() {
        Some(s) => parse_date(s)?,
        None => today(),
    };

    let submission = Submission {
        measurement: args.reading.to_measurement(),
        date,
        hour: args.hour,
    };

    let predictor = Predictor::new(model);
    let prediction = predictor.predict(&submission);

    // A one-shot invocation is a session of one record.
    let mut history = HistoryStore::new();
    history.append(prediction.record);

    let content = match args.format {
        OutputFormat::Text => format_prediction_text(&prediction, opts),
        OutputFormat::Json => format_prediction_json(&prediction, opts)?,
        OutputFormat::Csv => format_prediction_csv(&prediction, opts)?,
    };

    write_output(args.output.as_ref(), &content)
}
