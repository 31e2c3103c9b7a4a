//! # Current Log Loader
//!
//! Reads a delimited current log into a [`SampleTable`].
//!
//! ## File Layout
//!
//! ```text
//! Logger v2.1, serial 0042            <- metadata line(s), skipped
//! DateTime,Time (sec),Amps (mA)       <- header row
//! 2024-09-16 15:56:10,0,12.5          <- data rows (at most max_rows)
//! 2024-09-16 15:56:11,1,12.7
//! ```
//!
//! The header must name every column in the [`ColumnSchema`]; extra columns
//! are ignored. Each data row must carry a parseable timestamp and finite
//! numbers in the time and current columns.

mod error;
mod timestamp;

#[cfg(test)]
mod tests;

pub use error::LoadError;
pub use timestamp::{parse_timestamp, BUILTIN_FORMATS};

use log::{debug, info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::model::{Sample, SampleTable};
use crate::schema::ColumnSchema;

/// Options controlling how a current log is read
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOptions {
    /// Lines to discard before the header row
    pub skip_rows: usize,
    /// Maximum number of data rows to read (`None` reads all)
    pub max_rows: Option<usize>,
    /// Field delimiter
    pub delimiter: u8,
    /// Explicit chrono layout for the timestamp column
    pub timestamp_format: Option<String>,
    /// Required column names
    pub schema: ColumnSchema,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            skip_rows: 1,
            max_rows: None,
            delimiter: b',',
            timestamp_format: None,
            schema: ColumnSchema::default(),
        }
    }
}

/// Load a current log from a file.
pub fn load_samples<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<SampleTable, LoadError> {
    let path = path.as_ref();
    debug!("Opening current log {}", path.display());
    let file = File::open(path)?;
    let table = load_samples_from_reader(BufReader::new(file), options)?;
    info!("Loaded {} samples from {}", table.len(), path.display());
    Ok(table)
}

/// Load a current log from any buffered reader.
pub fn load_samples_from_reader<R: BufRead>(
    mut reader: R,
    options: &LoadOptions,
) -> Result<SampleTable, LoadError> {
    // Metadata lines are discarded unparsed, so they need not be UTF-8
    let mut line = Vec::new();
    for _ in 0..options.skip_rows {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            return Err(LoadError::MissingHeader {
                skipped: options.skip_rows,
            });
        }
        debug!(
            "Skipped leading line: {}",
            String::from_utf8_lossy(&line).trim_end()
        );
    }

    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .flexible(true)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if headers.is_empty() {
        return Err(LoadError::MissingHeader {
            skipped: options.skip_rows,
        });
    }
    let schema = &options.schema;
    let idx = schema.resolve(headers.iter())?;
    debug!(
        "Resolved columns: timestamp={} time={} current={}",
        idx.timestamp, idx.time, idx.current
    );

    let limit = options.max_rows.unwrap_or(usize::MAX);
    let mut samples = Vec::new();

    for (i, result) in csv_reader.records().take(limit).enumerate() {
        let record = result?;
        let row = i + 1;

        let raw_ts = field(&record, idx.timestamp, row, &schema.timestamp)?;
        let timestamp = parse_timestamp(raw_ts, options.timestamp_format.as_deref()).ok_or_else(
            || LoadError::InvalidTimestamp {
                row,
                value: raw_ts.to_string(),
            },
        )?;

        let time_s = parse_number(field(&record, idx.time, row, &schema.time)?, row, &schema.time)?;
        let current_ma = parse_number(
            field(&record, idx.current, row, &schema.current)?,
            row,
            &schema.current,
        )?;

        samples.push(Sample {
            timestamp,
            time_s,
            current_ma,
        });
    }

    if let Some(max) = options.max_rows {
        if samples.len() < max {
            debug!("Row cap {} not reached, read {} rows", max, samples.len());
        }
    }

    let table = SampleTable::from_samples(samples);
    if table.backwards_steps() > 0 {
        warn!(
            "Time column steps backwards {} time(s); integral will include negative intervals",
            table.backwards_steps()
        );
    }

    Ok(table)
}

fn field<'r>(
    record: &'r csv::StringRecord,
    col: usize,
    row: usize,
    column: &str,
) -> Result<&'r str, LoadError> {
    record.get(col).ok_or_else(|| LoadError::MissingField {
        row,
        column: column.to_string(),
    })
}

fn parse_number(value: &str, row: usize, column: &str) -> Result<f64, LoadError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| LoadError::InvalidNumber {
            row,
            column: column.to_string(),
            value: value.to_string(),
        })
}
