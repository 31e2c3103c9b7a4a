use anyhow::{Context, Result};
use log::info;
use std::path::Path;

use ampcap::DurationSource;

use super::{require_file, LoadArgs, OutputFormat};

/// Estimate average current and required battery capacity
pub fn run(
    input: &Path,
    load: &LoadArgs,
    duration: Option<DurationSource>,
    days: Option<f64>,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    require_file(input)?;

    let file = load.file_config()?;
    let config = load.estimator_config(input, &file, duration, days)?;

    info!("Battery Capacity Estimate");
    info!("=========================");
    info!("Input:       {}", input.display());
    info!("Skip rows:   {}", config.load.skip_rows);
    match config.load.max_rows {
        Some(max) => info!("Max rows:    {}", max),
        None => info!("Max rows:    all"),
    }
    info!("Duration:    {}", config.duration);
    info!("Target days: {}", config.target_days);

    let report = ampcap::run(&config)
        .with_context(|| format!("Estimate failed for {}", input.display()))?;

    match output {
        Some(path) => {
            let text = match format {
                OutputFormat::Text => report.to_string(),
                OutputFormat::Json => report.to_json().context("Failed to serialize report")?,
            };
            std::fs::write(path, text)
                .with_context(|| format!("Failed to write report: {}", path.display()))?;
            info!("Report written to {}", path.display());
        }
        None => match format {
            OutputFormat::Text => print!("{}", report.format_colored()),
            OutputFormat::Json => {
                println!("{}", report.to_json().context("Failed to serialize report")?)
            }
        },
    }

    Ok(())
}
