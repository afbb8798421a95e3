//! Period command: year/month/day span between a date and the clock date.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use aion_calendar::{Clock, ElapsedPeriod, SystemClock, gregorian_date};

use crate::cli::PeriodArgs;

/// Run the `period` subcommand.
pub fn run(args: PeriodArgs) -> Result<()> {
    let _cmd = info_span!("period").entered();

    let target = gregorian_date(args.year, args.month, args.day).with_context(|| {
        format!(
            "invalid target date {:04}-{:02}-{:02}",
            args.year, args.month, args.day
        )
    })?;
    let as_of = args.as_of.unwrap_or_else(|| SystemClock.today());

    let period = ElapsedPeriod::between(target, as_of);
    info!(%target, %as_of, "period decomposed");
    println!("{}y {}m {}d", period.years(), period.months(), period.days());
    Ok(())
}
