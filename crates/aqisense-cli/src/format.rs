//! Output formatting utilities for text, JSON, and CSV output.

use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;

use aqisense_core::{AqiScale, GaugeSpec, Prediction};
use aqisense_types::{AqiCategory, PredictionRecord};

use crate::util::format_date;

/// Width of the text gauge bar in characters.
const GAUGE_WIDTH: usize = 50;

/// Formatting options for output.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Disable colored output.
    pub no_color: bool,
    /// Omit header row in CSV output.
    pub no_header: bool,
    /// Use compact JSON output (no pretty-printing).
    pub compact: bool,
}

impl FormatOptions {
    pub fn new(no_color: bool) -> Self {
        Self {
            no_color,
            no_header: false,
            compact: false,
        }
    }

    /// Create with no_header option for CSV output.
    pub fn with_no_header(mut self, no_header: bool) -> Self {
        self.no_header = no_header;
        self
    }

    /// Serialize value to JSON string, respecting compact option.
    pub fn as_json<T: Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.compact {
            serde_json::to_string(value)?
        } else {
            serde_json::to_string_pretty(value)?
        };
        Ok(json + "\n")
    }
}

/// Colorize text with a category's display color.
pub fn category_colored(text: &str, category: AqiCategory, no_color: bool) -> String {
    if no_color {
        text.to_string()
    } else {
        let (r, g, b) = category.rgb();
        format!("{}", text.truecolor(r, g, b))
    }
}

/// Render a gauge as a one-line colored bar with a needle marker.
///
/// The bar spans the full axis; each cell is colored by the band it falls
/// in, and the needle position is marked on the line above.
#[must_use]
pub fn format_gauge_text(gauge: &GaugeSpec, no_color: bool) -> String {
    let needle = ((gauge.fill_ratio() * GAUGE_WIDTH as f64) as usize).min(GAUGE_WIDTH - 1);

    let mut marker = String::new();
    marker.push_str(&" ".repeat(needle));
    marker.push('▼');

    let mut bar = String::new();
    for i in 0..GAUGE_WIDTH {
        let axis_value = (i as f64 + 0.5) / GAUGE_WIDTH as f64 * gauge.axis_max;
        let band = gauge
            .bands
            .iter()
            .find(|b| axis_value >= b.lower && axis_value <= b.upper);
        let cell = if i <= needle { '█' } else { '░' };
        match band {
            Some(band) if !no_color => {
                let (r, g, b) = band.category.rgb();
                bar.push_str(&format!("{}", cell.truecolor(r, g, b)));
            }
            _ => bar.push(cell),
        }
    }

    format!(
        "  {marker}\n  {bar}\n  0{:>width$}\n",
        gauge.axis_max,
        width = GAUGE_WIDTH - 1
    )
}

// ============================================================================
// Prediction formatting
// ============================================================================

#[must_use]
pub fn format_prediction_text(prediction: &Prediction, opts: &FormatOptions) -> String {
    let record = &prediction.record;
    let gauge = prediction.gauge();

    let mut output = String::new();
    output.push_str(&format!(
        "Date:      {} {:02}:00\n",
        format_date(record.date),
        record.hour
    ));
    output.push_str(&format!(
        "AQI:       {}\n",
        category_colored(&format!("{:.1}", record.aqi), record.category, opts.no_color)
    ));
    output.push_str(&format!(
        "Category:  {}\n",
        category_colored(record.category.label(), record.category, opts.no_color)
    ));
    output.push_str(&format!("           {}\n", record.category.description()));
    output.push('\n');
    output.push_str(&format_gauge_text(&gauge, opts.no_color));
    output
}

/// Serializable view of a prediction for JSON output.
#[derive(Debug, Serialize)]
struct PredictionJson<'a> {
    date: String,
    hour: u8,
    aqi: f64,
    category: &'a str,
    color: &'a str,
    description: &'a str,
}

pub fn format_prediction_json(prediction: &Prediction, opts: &FormatOptions) -> Result<String> {
    let record = &prediction.record;
    opts.as_json(&PredictionJson {
        date: format_date(record.date),
        hour: record.hour,
        aqi: record.aqi,
        category: record.category.label(),
        color: record.category.color_hex(),
        description: record.category.description(),
    })
}

pub fn format_prediction_csv(prediction: &Prediction, opts: &FormatOptions) -> Result<String> {
    let csv = aqisense_store::export_csv_string(std::slice::from_ref(&prediction.record))?;
    if opts.no_header {
        Ok(csv.lines().skip(1).map(|l| format!("{l}\n")).collect())
    } else {
        Ok(csv)
    }
}

// ============================================================================
// History formatting
// ============================================================================

#[must_use]
pub fn format_history_text(records: &[PredictionRecord], opts: &FormatOptions) -> String {
    use tabled::builder::Builder;

    if records.is_empty() {
        return "No predictions recorded this session.\n".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(["Date", "Heure", "AQI", "Qualité"]);
    for record in records {
        builder.push_record([
            format_date(record.date),
            format!("{}", record.hour),
            format!("{:.1}", record.aqi),
            category_colored(record.category.label(), record.category, opts.no_color),
        ]);
    }

    let mut table = builder.build();
    table.with(tabled::settings::Style::sharp());
    format!("{table}\n")
}

// ============================================================================
// Scale formatting
// ============================================================================

#[must_use]
pub fn format_scale_text(scale: &AqiScale, opts: &FormatOptions) -> String {
    use tabled::builder::Builder;

    let mut builder = Builder::default();
    builder.push_record(["Range", "Category", "Color"]);

    let mut lower = 0.0_f64;
    for category in AqiCategory::ALL {
        let range = match scale.upper_bound(category) {
            Some(upper) => {
                let row = format!("{lower:.0} - {upper:.0}");
                lower = upper;
                row
            }
            None => format!("> {lower:.0}"),
        };
        builder.push_record([
            range,
            category_colored(category.label(), category, opts.no_color),
            category.color_hex().to_string(),
        ]);
    }

    let mut table = builder.build();
    table.with(tabled::settings::Style::sharp());
    format!("{table}\n")
}

/// Serializable view of one scale tier for JSON output.
#[derive(Debug, Serialize)]
struct ScaleTierJson<'a> {
    category: &'a str,
    upper_bound: Option<f64>,
    color: &'a str,
    description: &'a str,
}

pub fn format_scale_json(scale: &AqiScale, opts: &FormatOptions) -> Result<String> {
    let tiers: Vec<ScaleTierJson<'_>> = AqiCategory::ALL
        .iter()
        .map(|&category| ScaleTierJson {
            category: category.label(),
            upper_bound: scale.upper_bound(category),
            color: category.color_hex(),
            description: category.description(),
        })
        .collect();
    opts.as_json(&tiers)
}
