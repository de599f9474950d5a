use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use corrmat_client::{Interval, PriceField};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Sets the level of tracing
    #[arg(long, default_value = "INFO", ignore_case = true)]
    pub trace: TraceLevel,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prompt for tickers, field, dates and interval in a loop.
    Interactive,

    /// Evaluate a single correlation table and exit.
    Once {
        /// Comma-separated tickers, ending with a comma, e.g. "AAPL,TSLA,"
        #[arg(long)]
        tickers: String,

        /// Price field to correlate
        #[arg(long, default_value = "Close")]
        field: PriceField,

        /// First date of the window (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,

        /// Last date of the window, inclusive (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,

        /// Sampling interval
        #[arg(long, default_value = "1d")]
        interval: Interval,

        /// Also write the table to a .csv file
        #[arg(long)]
        export: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TraceLevel {
    DEBUG,
    INFO,
    WARN,
    ERROR,
}
