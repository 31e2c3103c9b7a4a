//! Human- and machine-readable estimate reports.

use serde::Serialize;
use std::fmt;

#[cfg(feature = "colorized_output")]
use console::style;

use crate::estimate::{DurationSource, Estimate};
use crate::model::TableSummary;

/// Relative gap between a fixed window and the logged span that earns a note
pub const DURATION_MISMATCH_TOLERANCE: f64 = 0.05;

/// Complete result of a capacity estimate
#[derive(Debug, Clone, Serialize)]
pub struct EstimateReport {
    /// Path of the current log
    pub source: String,
    /// Statistics of the loaded samples
    pub summary: TableSummary,
    /// Where the averaging window came from
    pub duration_source: DurationSource,
    /// The estimate itself
    pub estimate: Estimate,
    /// Things the reader should double-check
    pub notes: Vec<String>,
}

impl EstimateReport {
    /// Assemble a report, deriving notes from the summary and estimate.
    pub fn new(
        source: impl Into<String>,
        summary: TableSummary,
        duration_source: DurationSource,
        estimate: Estimate,
    ) -> Self {
        let mut notes = Vec::new();

        if summary.backwards_steps > 0 {
            notes.push(format!(
                "time column steps backwards {} time(s)",
                summary.backwards_steps
            ));
        }

        if let (DurationSource::Fixed(fixed), Some(span)) = (duration_source, summary.time_span_s) {
            if span > 0.0 && ((fixed - span) / span).abs() > DURATION_MISMATCH_TOLERANCE {
                notes.push(format!(
                    "fixed duration {:.1} s differs from logged span {:.1} s",
                    fixed, span
                ));
            }
        }

        if estimate.average_current_ma < 0.0 {
            notes.push("average current is negative".to_string());
        }

        Self {
            source: source.into(),
            summary,
            duration_source,
            estimate,
            notes,
        }
    }

    /// Required capacity in milliamp-hours
    pub fn required_capacity_mah(&self) -> f64 {
        self.estimate.required_capacity_mah()
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Format the report with colors (requires console feature)
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            let e = &self.estimate;
            let mut output = String::new();

            output.push_str(&format!("{}\n", style("Battery Capacity Estimate").bold().cyan()));
            output.push_str(&format!("{}\n", style("=========================").cyan()));
            output.push_str(&format!("{}: {}\n", style("File").bold(), self.source));
            output.push_str(&format!("{}: {}\n\n", style("Samples").bold(), self.summary));

            output.push_str(&format!("  Charge:            {:.3} mA·s\n", e.charge_mas));
            output.push_str(&format!(
                "  Duration:          {:.3} s ({})\n",
                e.duration_s, self.duration_source
            ));
            output.push_str(&format!(
                "  Average current:   {} mA\n",
                style(format!("{:.4}", e.average_current_ma)).green()
            ));
            output.push_str(&format!(
                "  Target:            {} days ({} h)\n",
                e.target_days, e.target_hours
            ));
            output.push_str(&format!(
                "  {} {} Ah ({:.1} mAh)\n",
                style("Required capacity:").bold(),
                style(format!("{:.4}", e.required_capacity_ah)).green().bold(),
                e.required_capacity_mah()
            ));

            if !self.notes.is_empty() {
                output.push('\n');
                for note in &self.notes {
                    output.push_str(&format!("{}: {}\n", style("NOTE").yellow().bold(), note));
                }
            }

            output
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            format!("{}", self)
        }
    }
}

impl fmt::Display for EstimateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let e = &self.estimate;
        writeln!(f, "Battery Capacity Estimate")?;
        writeln!(f, "=========================")?;
        writeln!(f, "File: {}", self.source)?;
        writeln!(f, "Samples: {}", self.summary)?;
        writeln!(f)?;
        writeln!(f, "  Charge:            {:.3} mA·s", e.charge_mas)?;
        writeln!(f, "  Duration:          {:.3} s ({})", e.duration_s, self.duration_source)?;
        writeln!(f, "  Average current:   {:.4} mA", e.average_current_ma)?;
        writeln!(f, "  Target:            {} days ({} h)", e.target_days, e.target_hours)?;
        writeln!(
            f,
            "  Required capacity: {:.4} Ah ({:.1} mAh)",
            e.required_capacity_ah,
            e.required_capacity_mah()
        )?;

        if !self.notes.is_empty() {
            writeln!(f)?;
            for note in &self.notes {
                writeln!(f, "NOTE: {}", note)?;
            }
        }

        Ok(())
    }
}
