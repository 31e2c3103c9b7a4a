//! Column contract for current logs.
//!
//! The logger writes one metadata line, then a header row naming its columns,
//! then data rows. Only three columns are read; any others are ignored.

use crate::loader::LoadError;

/// Default column names written by the current logger
pub mod columns {
    /// Wall-clock timestamp column
    pub const TIMESTAMP: &str = "DateTime";
    /// Elapsed time column (seconds)
    pub const TIME: &str = "Time (sec)";
    /// Measured current column (milliamps)
    pub const CURRENT: &str = "Amps (mA)";
}

/// Names of the three required columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    /// Timestamp column name
    pub timestamp: String,
    /// Elapsed time column name (seconds)
    pub time: String,
    /// Current column name (milliamps)
    pub current: String,
}

impl Default for ColumnSchema {
    fn default() -> Self {
        Self {
            timestamp: columns::TIMESTAMP.to_string(),
            time: columns::TIME.to_string(),
            current: columns::CURRENT.to_string(),
        }
    }
}

/// Positions of the required columns within a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndices {
    /// Index of the timestamp column
    pub timestamp: usize,
    /// Index of the elapsed time column
    pub time: usize,
    /// Index of the current column
    pub current: usize,
}

impl ColumnSchema {
    /// Locate each required column in `headers`.
    ///
    /// Header names are compared after trimming surrounding whitespace.
    /// The first missing column is reported by name.
    pub fn resolve<'a, I>(&self, headers: I) -> Result<ColumnIndices, LoadError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let headers: Vec<&str> = headers.into_iter().map(str::trim).collect();
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| *h == name.trim())
                .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
        };

        Ok(ColumnIndices {
            timestamp: find(&self.timestamp)?,
            time: find(&self.time)?,
            current: find(&self.current)?,
        })
    }
}
