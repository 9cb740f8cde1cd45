//! CLI argument definitions via clap derive.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{error::ErrorKind, Parser};

use super::CliError;
use crate::domain::TimeSlot;
use crate::telemetry::LogFormat;

pub const USAGE: &str = "predict-energy <hour> <day> <weekend>";

/// Positionals are kept as raw strings so that integer parsing and range
/// checks report the exact constraint that was violated.
#[derive(Debug, Parser)]
#[command(
    name = "predict-energy",
    about = "Estimate energy consumption (kWh) for an hour of the week",
    version,
    override_usage = USAGE,
    allow_negative_numbers = true
)]
pub struct Cli {
    /// Hour of day (0-23)
    #[arg(value_name = "HOUR")]
    pub hour: String,

    /// Day of week (1-7)
    #[arg(value_name = "DAY")]
    pub day: String,

    /// 1 on weekends, 0 otherwise
    #[arg(value_name = "WEEKEND")]
    pub weekend: String,

    /// Trailing values beyond the third; ignored.
    #[arg(hide = true)]
    pub extra: Vec<String>,

    /// Directory holding model.json, scaler.json and features.json.
    #[arg(long, value_name = "DIR")]
    pub artifact_dir: Option<PathBuf>,

    /// Additional TOML config layer.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Diagnostic format on stderr.
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub log_format: Option<LogFormat>,
}

/// Parse argv (program name first). Missing positionals map to
/// [`CliError::InvalidArgumentCount`].
pub fn parse<I, T>(args: I) -> Result<Cli, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|err| match err.kind() {
        ErrorKind::MissingRequiredArgument => CliError::InvalidArgumentCount,
        _ => CliError::Clap(err),
    })
}

impl Cli {
    /// Parse all three integers, then range-check them.
    pub fn time_slot(&self) -> Result<TimeSlot, CliError> {
        let hour = parse_int("hour", &self.hour)?;
        let day = parse_int("day", &self.day)?;
        let weekend = parse_int("weekend", &self.weekend)?;

        TimeSlot::new(hour, day, weekend)
            .map_err(|err| CliError::InvalidArgumentValue(err.to_string()))
    }
}

fn parse_int(name: &str, raw: &str) -> Result<i64, CliError> {
    raw.trim().parse::<i64>().map_err(|_| {
        CliError::InvalidArgumentValue(format!("invalid literal for {name}: '{raw}'"))
    })
}
