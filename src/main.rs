//! # ampcap
//!
//! Command-line tool that sizes a battery from a logged current-draw trace.
//!
//! ## Usage
//!
//! ```bash
//! # Size a battery for a week of operation
//! ampcap estimate AMP.CSV --days 7
//!
//! # Reproduce a fixed measurement window and row cap
//! ampcap estimate AMP.CSV --max-rows 12990 --duration 12997
//!
//! # Machine-readable output
//! ampcap estimate AMP.CSV --format json --output estimate.json
//!
//! # Check what the loader sees
//! ampcap inspect AMP.CSV
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
