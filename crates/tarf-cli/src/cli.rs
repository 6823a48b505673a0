//! CLI argument definitions for the accident-risk forecaster.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tarf",
    version,
    about = "Traffic Accident Risk Forecaster - feature preparation and prediction",
    long_about = "Prepare historical traffic-violation batches for model training\n\
                  and run single live-query risk predictions against trained artifacts."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean a raw violation CSV and derive model features from it.
    Prepare(PrepareArgs),

    /// Predict accident risk for one live query.
    Predict(PredictArgs),

    /// List the weather-code catalog and supported categorical values.
    Codes,
}

#[derive(Parser)]
pub struct PrepareArgs {
    /// Path to the raw violation CSV.
    #[arg(value_name = "INPUT_CSV")]
    pub input: PathBuf,

    /// Output path for the feature CSV (default: <INPUT_CSV>.features.csv).
    #[arg(long = "output-path", value_name = "PATH")]
    pub output_path: Option<PathBuf>,

    /// Keep only these state codes (default: every supported state).
    #[arg(long = "states", value_delimiter = ',')]
    pub states: Vec<String>,

    /// Fail instead of skipping records that cannot be parsed.
    #[arg(long = "fail-on-faults")]
    pub fail_on_faults: bool,
}

#[derive(Parser)]
pub struct PredictArgs {
    /// Path to the trained estimator artifact.
    #[arg(long = "model", value_name = "PATH")]
    pub model: PathBuf,

    /// Path to the model column schema artifact.
    #[arg(long = "columns", value_name = "PATH")]
    pub columns: PathBuf,

    /// State code, e.g. PA.
    #[arg(long)]
    pub state: String,

    /// Vehicle type label (e.g. "Automobile") or training token.
    #[arg(long)]
    pub vehicle: String,

    /// Gender label (e.g. "Male") or training token.
    #[arg(long)]
    pub gender: String,

    /// Air temperature in degrees Celsius.
    #[arg(long, allow_negative_numbers = true)]
    pub temperature: f64,

    #[arg(long, default_value_t = 0.0)]
    pub precipitation: f64,

    #[arg(long, default_value_t = 0.0)]
    pub snowfall: f64,

    /// Wind speed in km/h.
    #[arg(long, default_value_t = 0.0)]
    pub windspeed: f64,

    /// Hour of day 0-23 (default: current local hour).
    #[arg(long)]
    pub hour: Option<u32>,

    /// WMO weather code from the live weather source.
    #[arg(long = "weather-code", default_value_t = 0)]
    pub weather_code: i64,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn predict_accepts_negative_temperature() {
        let cli = Cli::try_parse_from([
            "tarf",
            "predict",
            "--model",
            "m.json",
            "--columns",
            "c.json",
            "--state",
            "PA",
            "--vehicle",
            "Automobile",
            "--gender",
            "Male",
            "--temperature",
            "-3.5",
        ])
        .unwrap();
        match cli.command {
            Command::Predict(args) => assert_eq!(args.temperature, -3.5),
            _ => panic!("expected predict command"),
        }
    }
}
