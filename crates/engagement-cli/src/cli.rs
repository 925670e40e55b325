//! CLI argument definitions using clap.

use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// Engagement: validate a subscription user export and classify engagement.
///
/// With no arguments, reads netflix_users.csv and writes
/// enriched_netflix_data.csv using the 2025-03-25 reference date.
#[derive(Parser)]
#[command(name = "engagement")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the user export (CSV)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output path for enriched records
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Date that days-inactive is measured from (YYYY-MM-DD)
    #[arg(short, long, value_name = "DATE")]
    pub reference_date: Option<NaiveDate>,

    /// JSON configuration file (paths, reference date, plan thresholds)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Also write invalid entries to this JSON file
    #[arg(long, value_name = "FILE")]
    pub invalid_report: Option<PathBuf>,

    /// Input field delimiter
    #[arg(short, long)]
    pub delimiter: Option<char>,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
