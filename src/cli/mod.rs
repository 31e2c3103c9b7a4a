use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use ampcap::config::DEFAULT_TARGET_DAYS;
use ampcap::{ColumnSchema, DurationSource, EstimatorConfig, LoadOptions};

mod config;
mod estimate;
mod inspect;

pub use config::Config;

/// ampcap - Battery capacity from logged current draw
#[derive(Parser)]
#[command(name = "ampcap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Derive the measurement window from the data.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum DurationFromArg {
    /// Last minus first value of the time column
    TimeSpan,
    /// Last minus first timestamp
    WallClock,
}

impl From<DurationFromArg> for DurationSource {
    fn from(arg: DurationFromArg) -> Self {
        match arg {
            DurationFromArg::TimeSpan => DurationSource::TimeSpan,
            DurationFromArg::WallClock => DurationSource::WallClock,
        }
    }
}

/// Report output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Flags shared by every command that reads a current log.
#[derive(Args, Debug, Default, Clone)]
pub struct LoadArgs {
    /// Load settings from a TOML config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Lines to discard before the header row (default: 1)
    #[arg(long, value_name = "N")]
    skip_rows: Option<usize>,

    /// Maximum number of data rows to read
    #[arg(long, value_name = "N")]
    max_rows: Option<usize>,

    /// Field delimiter (default: ',')
    #[arg(long, value_name = "CHAR")]
    delimiter: Option<char>,

    /// chrono layout of the timestamp column (default: auto-detect)
    #[arg(long, value_name = "FORMAT")]
    timestamp_format: Option<String>,

    /// Name of the timestamp column
    #[arg(long, value_name = "NAME")]
    timestamp_column: Option<String>,

    /// Name of the elapsed time column
    #[arg(long, value_name = "NAME")]
    time_column: Option<String>,

    /// Name of the current column
    #[arg(long, value_name = "NAME")]
    current_column: Option<String>,
}

impl LoadArgs {
    /// Read the config file named by `--config`, or an empty one.
    fn file_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::from_file(path),
            None => Ok(Config::default()),
        }
    }

    /// Merge flags over the config file over built-in defaults.
    fn load_options(&self, file: &Config) -> Result<LoadOptions> {
        let defaults = LoadOptions::default();
        let input = &file.input;

        let delimiter = match self.delimiter.or(input.delimiter) {
            Some(c) if c.is_ascii() => c as u8,
            Some(c) => bail!("Delimiter must be a single ASCII character, got '{c}'"),
            None => defaults.delimiter,
        };

        let schema = ColumnSchema {
            timestamp: pick(&self.timestamp_column, &input.timestamp_column)
                .unwrap_or(defaults.schema.timestamp),
            time: pick(&self.time_column, &input.time_column).unwrap_or(defaults.schema.time),
            current: pick(&self.current_column, &input.current_column)
                .unwrap_or(defaults.schema.current),
        };

        Ok(LoadOptions {
            skip_rows: self
                .skip_rows
                .or(input.skip_rows)
                .unwrap_or(defaults.skip_rows),
            max_rows: self.max_rows.or(input.max_rows),
            delimiter,
            timestamp_format: pick(&self.timestamp_format, &input.timestamp_format),
            schema,
        })
    }

    /// Build the estimator config: flags, then the `[estimate]` section, then defaults.
    fn estimator_config(
        &self,
        input: &Path,
        file: &Config,
        duration: Option<DurationSource>,
        days: Option<f64>,
    ) -> Result<EstimatorConfig> {
        let duration = match duration {
            Some(d) => d,
            None => file.estimate.duration()?.unwrap_or_default(),
        };
        let target_days = days
            .or(file.estimate.target_days)
            .unwrap_or(DEFAULT_TARGET_DAYS);

        Ok(EstimatorConfig {
            input_path: input.to_path_buf(),
            load: self.load_options(file)?,
            duration,
            target_days,
        })
    }
}

fn pick(flag: &Option<String>, file: &Option<String>) -> Option<String> {
    flag.clone().or_else(|| file.clone())
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate average current and required battery capacity
    Estimate {
        /// Current log (CSV)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        #[command(flatten)]
        load: LoadArgs,

        /// Fixed measurement window in seconds
        #[arg(short = 'd', long, value_name = "SECONDS", conflicts_with = "duration_from")]
        duration: Option<f64>,

        /// Derive the measurement window from the data (default: time-span)
        #[arg(long, value_enum)]
        duration_from: Option<DurationFromArg>,

        /// Desired autonomy in days (default: 7)
        #[arg(long, value_name = "DAYS")]
        days: Option<f64>,

        /// Report format
        #[arg(short = 'f', long, default_value = "text", value_enum)]
        format: OutputFormat,

        /// Write the report to a file instead of stdout
        #[arg(short = 'o', long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show the columns, row count and current range of a log
    Inspect {
        /// Current log (CSV)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        #[command(flatten)]
        load: LoadArgs,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Estimate {
            input,
            load,
            duration,
            duration_from,
            days,
            format,
            output,
        } => {
            let duration = match (duration, duration_from) {
                (Some(seconds), _) => Some(DurationSource::Fixed(seconds)),
                (None, Some(from)) => Some(from.into()),
                (None, None) => None,
            };
            estimate::run(&input, &load, duration, days, format, output.as_deref())
        }
        Commands::Inspect { input, load } => inspect::run(&input, &load),
    }
}

/// Fail early with a readable message when the input is missing.
fn require_file(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("Input file does not exist: {}", path.display());
    }
    Ok(())
}
