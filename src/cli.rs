use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Aion calendar elapsed-day calculator.
#[derive(Parser)]
#[command(name = "aion", version, about = "Calendar elapsed-day calculator")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Compute the offset day count since a calendar date.
    Since(SinceArgs),
    /// Show the year/month/day span between a calendar date and today.
    Period(PeriodArgs),
}

/// Arguments for the `since` subcommand.
#[derive(clap::Args)]
pub struct SinceArgs {
    /// Day of the month (1..=31).
    pub day: u8,

    /// Month (1..=12).
    pub month: u8,

    /// Year.
    pub year: i32,

    /// Evaluate against this date instead of the system clock (YYYY-MM-DD).
    #[arg(long, value_name = "DATE")]
    pub as_of: Option<NaiveDate>,
}

/// Arguments for the `period` subcommand.
#[derive(clap::Args)]
pub struct PeriodArgs {
    /// Day of the month (1..=31).
    pub day: u8,

    /// Month (1..=12).
    pub month: u8,

    /// Year.
    pub year: i32,

    /// Evaluate against this date instead of the system clock (YYYY-MM-DD).
    #[arg(long, value_name = "DATE")]
    pub as_of: Option<NaiveDate>,
}
