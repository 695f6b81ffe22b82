use std::ops::RangeInclusive;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use aqisense_types::Measurement;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}

#[derive(Parser)]
#[command(name = "aqisense")]
#[command(author, version, about = "Predict the global air quality index from pollutant and weather measurements", long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Write output to a file instead of stdout
    #[arg(short, long, global = true, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to a model artifact (JSON)
    #[arg(short, long, global = true, env = "AQISENSE_MODEL", value_name = "FILE")]
    pub model: Option<PathBuf>,

    /// Use the built-in demo model instead of a trained artifact
    #[arg(long, global = true)]
    pub demo: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Predict the AQI for a single set of measurements
    Predict {
        #[command(flatten)]
        reading: ReadingArgs,

        /// Measurement date (YYYY-MM-DD, defaults to today)
        #[arg(long, value_name = "DATE")]
        date: Option<String>,

        /// Hour of the day (0-23)
        #[arg(long, default_value_t = 12, value_parser = clap::value_parser!(u8).range(0..=23))]
        hour: u8,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Omit the header row from CSV output
        #[arg(long)]
        no_header: bool,
    },

    /// Launch the interactive terminal dashboard
    Tui,

    /// Show the AQI classification scale
    Scale {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Model artifact management
    Model {
        #[command(subcommand)]
        action: ModelAction,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ModelAction {
    /// Write the demo model artifact to a file
    Init {
        /// Destination path for the artifact
        path: PathBuf,
    },
    /// Describe the resolved model artifact
    Inspect,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key
        #[arg(value_enum)]
        key: ConfigKey,
        /// New value
        value: String,
    },
    /// Print the configuration file path
    Path,
    /// Create a default configuration file
    Init,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigKey {
    /// Default model artifact path
    Model,
    /// Disable colored output
    NoColor,
}

/// One flag per measurement, each bounded to its valid range and
/// defaulting to the form defaults.
#[derive(Debug, Clone, clap::Args)]
pub struct ReadingArgs {
    /// PM2.5 concentration in µg/m³
    #[arg(long, default_value_t = 25.0, value_parser = parse_pm25)]
    pub pm25: f64,

    /// PM10 concentration in µg/m³
    #[arg(long, default_value_t = 35.0, value_parser = parse_pm10)]
    pub pm10: f64,

    /// NO₂ concentration in ppb
    #[arg(long, default_value_t = 30.0, value_parser = parse_no2)]
    pub no2: f64,

    /// CO concentration in ppm
    #[arg(long, default_value_t = 1.0, value_parser = parse_co)]
    pub co: f64,

    /// SO₂ concentration in ppb
    #[arg(long, default_value_t = 20.0, value_parser = parse_so2)]
    pub so2: f64,

    /// O₃ concentration in ppb
    #[arg(long, default_value_t = 30.0, value_parser = parse_o3)]
    pub o3: f64,

    /// Temperature in °C
    #[arg(long, default_value_t = 24.0, value_parser = parse_temperature, allow_negative_numbers = true)]
    pub temperature: f64,

    /// Relative humidity in %
    #[arg(long, default_value_t = 50.0, value_parser = parse_humidity)]
    pub humidity: f64,

    /// Wind speed in m/s
    #[arg(long, default_value_t = 3.0, value_parser = parse_wind_speed)]
    pub wind_speed: f64,

    /// Rainfall in mm
    #[arg(long, default_value_t = 0.0, value_parser = parse_rainfall)]
    pub rainfall: f64,
}

impl ReadingArgs {
    pub fn to_measurement(&self) -> Measurement {
        Measurement {
            pm25: self.pm25,
            pm10: self.pm10,
            no2: self.no2,
            co: self.co,
            so2: self.so2,
            o3: self.o3,
            temperature: self.temperature,
            humidity: self.humidity,
            wind_speed: self.wind_speed,
            rainfall: self.rainfall,
        }
    }
}

fn parse_in_range(s: &str, name: &str, range: &RangeInclusive<f64>) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number for {name}"))?;
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(format!(
            "{name} must be between {} and {} (got {value})",
            range.start(),
            range.end()
        ))
    }
}

fn parse_pm25(s: &str) -> Result<f64, String> {
    parse_in_range(s, "PM2.5", &Measurement::PM25_RANGE)
}

fn parse_pm10(s: &str) -> Result<f64, String> {
    parse_in_range(s, "PM10", &Measurement::PM10_RANGE)
}

fn parse_no2(s: &str) -> Result<f64, String> {
    parse_in_range(s, "NO2", &Measurement::NO2_RANGE)
}

fn parse_co(s: &str) -> Result<f64, String> {
    parse_in_range(s, "CO", &Measurement::CO_RANGE)
}

fn parse_so2(s: &str) -> Result<f64, String> {
    parse_in_range(s, "SO2", &Measurement::SO2_RANGE)
}

fn parse_o3(s: &str) -> Result<f64, String> {
    parse_in_range(s, "O3", &Measurement::O3_RANGE)
}

fn parse_temperature(s: &str) -> Result<f64, String> {
    parse_in_range(s, "temperature", &Measurement::TEMPERATURE_RANGE)
}

fn parse_humidity(s: &str) -> Result<f64, String> {
    parse_in_range(s, "humidity", &Measurement::HUMIDITY_RANGE)
}

fn parse_wind_speed(s: &str) -> Result<f64, String> {
    parse_in_range(s, "wind speed", &Measurement::WIND_SPEED_RANGE)
}

fn parse_rainfall(s: &str) -> Result<f64, String> {
    parse_in_range(s, "rainfall", &Measurement::RAINFALL_RANGE)
}
