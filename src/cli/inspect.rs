use anyhow::{Context, Result};
use std::path::Path;

use ampcap::load_samples;

use super::{require_file, LoadArgs};

/// Display information about a current log
pub fn run(input: &Path, load: &LoadArgs) -> Result<()> {
    require_file(input)?;

    let file = load.file_config()?;
    let options = load.load_options(&file)?;
    let table = load_samples(input, &options)
        .with_context(|| format!("Failed to load {}", input.display()))?;
    let summary = table.summary();

    println!("Current Log Information");
    println!("=======================");
    println!("File: {}", input.display());
    println!();

    println!("Columns:");
    println!("  Timestamp: {}", options.schema.timestamp);
    println!("  Time:      {}", options.schema.time);
    println!("  Current:   {}", options.schema.current);
    println!();

    println!("Samples:");
    println!("  Rows read: {}", summary.sample_count);
    if let Some(max) = options.max_rows {
        println!("  Row cap:   {}", max);
    }
    if let (Some(first), Some(last)) = (summary.first_timestamp, summary.last_timestamp) {
        println!("  First:     {}", first);
        println!("  Last:      {}", last);
    }
    if let Some(span) = summary.time_span_s {
        println!("  Time span: {:.3} s", span);
    }
    if let Some(span) = summary.wall_clock_span_s {
        println!("  Clock span: {:.3} s", span);
    }
    if summary.backwards_steps > 0 {
        println!("  Backwards time steps: {}", summary.backwards_steps);
    }
    println!();

    if let (Some(min), Some(max), Some(mean)) = (
        summary.min_current_ma,
        summary.max_current_ma,
        summary.mean_sample_current_ma,
    ) {
        println!("Current (mA):");
        println!("  Min:  {:.4}", min);
        println!("  Max:  {:.4}", max);
        println!("  Mean: {:.4}", mean);
    }

    // Charge needs at least two samples; skip quietly for shorter logs
    if let Ok(charge) = table.charge_mas() {
        println!("  Charge: {:.3} mA·s", charge);
    }

    Ok(())
}
