//! MCS trace plotting CLI
//!
//! Reads an LTE MAC-layer simulation trace and renders a scatter plot
//! comparing MCS over time between the two cells involved in a handover.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};

use mcs_plot::{load_trace, render_scatter, PlotConfig};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input trace file path
    #[arg(long = "fileName", default_value = "DlMacStats.txt")]
    file_name: PathBuf,

    /// Output PNG path
    #[arg(long = "plotName", default_value = "mcs.png")]
    plot_name: PathBuf,

    /// Plot title text
    #[arg(long, default_value = "LTE handover MCS")]
    title: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    let config = PlotConfig {
        file_name: cli.file_name,
        plot_name: cli.plot_name,
        title: cli.title,
    };

    info!("Reading trace from {}", config.file_name.display());
    let series = load_trace(&config.file_name)?;

    if series.cell1.is_empty() {
        println!("No data points found, exiting...");
        std::process::exit(1);
    }

    info!(
        "Collected {} cell-1 and {} cell-2 points",
        series.cell1.len(),
        series.cell2.len()
    );
    render_scatter(&series, &config)?;

    Ok(())
}
