//! Since command: offset day count for a target calendar date.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use aion_calendar::{FixedClock, SystemClock, days_since};

use crate::cli::SinceArgs;

/// Run the `since` subcommand.
pub fn run(args: SinceArgs) -> Result<()> {
    let _cmd = info_span!("since").entered();

    let result = match args.as_of {
        Some(as_of) => days_since(args.day, args.month, args.year, &FixedClock(as_of)),
        None => days_since(args.day, args.month, args.year, &SystemClock),
    }
    .with_context(|| {
        format!(
            "cannot compute day count for {:04}-{:02}-{:02}",
            args.year, args.month, args.day
        )
    })?;

    info!(result, "offset day count computed");
    println!("{result}");
    Ok(())
}
