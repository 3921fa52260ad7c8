//! Command implementations for WXC CLI.
//!
//! Runs the page's fetch → filter → derive pipeline natively and writes the
//! result as CSV or as Chart.js configurations.

use clap::{Args, Subcommand};
use wxc_data::DateRange;
use wxc_utils::dates::default_range;

pub mod charts;
pub mod pipeline;
pub mod query;

/// Calendar-day bounds shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct RangeArgs {
    /// First day to keep, YYYY-MM-DD (default: 7 days ago)
    #[arg(short = 's', long)]
    pub start: Option<String>,

    /// Last day to keep, YYYY-MM-DD (default: today)
    #[arg(short = 'e', long)]
    pub end: Option<String>,
}

impl RangeArgs {
    /// Fill unset bounds from the default last-week range.
    pub fn resolve(&self) -> DateRange {
        let (default_start, default_end) = default_range();
        DateRange::new(
            self.start.clone().unwrap_or(default_start),
            self.end.clone().unwrap_or(default_end),
        )
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch the hourly forecast and write the filtered observations with derived metrics as CSV
    Query {
        #[command(flatten)]
        range: RangeArgs,

        /// Output CSV path (default: stdout)
        #[arg(short = 'o', long)]
        output: Option<String>,
    },

    /// Fetch the hourly forecast and write the four chart configurations as JSON
    Charts {
        #[command(flatten)]
        range: RangeArgs,

        /// Output JSON path (default: stdout)
        #[arg(short = 'o', long)]
        output: Option<String>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Query { range, output } => {
            query::run_query(&range.resolve(), output.as_deref()).await
        }
        Command::Charts { range, output } => {
            charts::run_charts(&range.resolve(), output.as_deref()).await
        }
    }
}
