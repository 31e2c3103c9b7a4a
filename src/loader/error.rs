/// Errors that can occur while loading a current log
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// I/O error opening or reading the file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A data row is too short to contain a required column
    #[error("Row {row}: no value for column '{column}'")]
    MissingField {
        /// 1-based data row number
        row: usize,
        /// Column name
        column: String,
    },

    /// A numeric column holds something that is not a finite number
    #[error("Row {row}: '{value}' in column '{column}' is not a finite number")]
    InvalidNumber {
        /// 1-based data row number
        row: usize,
        /// Column name
        column: String,
        /// Raw cell text
        value: String,
    },

    /// The timestamp column could not be parsed
    #[error("Row {row}: unrecognized timestamp '{value}'")]
    InvalidTimestamp {
        /// 1-based data row number
        row: usize,
        /// Raw cell text
        value: String,
    },

    /// The file ended before the header row
    #[error("No header row after skipping {skipped} line(s)")]
    MissingHeader {
        /// Number of leading lines skipped
        skipped: usize,
    },
}
