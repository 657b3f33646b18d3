use chrono::Utc;
use clap::Args;

use crate::cli::timeword::{eval_expression, TimeFormat};

/// Print a UTC instant, optionally offset by a relative-time expression
#[derive(Args)]
pub struct TimeCommand {
    /// Time expression: `now`, or an amount and a timeword like `3hours later`
    #[clap(value_name = "EXPRESSION", num_args = 1..=2, required = true)]
    pub expression: Vec<String>,

    /// Print a unix timestamp instead of ISO-8601
    #[clap(long, action = clap::ArgAction::SetTrue)]
    pub unix: bool,
}

pub fn execute(args: &TimeCommand) -> Result<(), anyhow::Error> {
    let format = if args.unix {
        TimeFormat::Unix
    } else {
        TimeFormat::Iso
    };

    let instant = eval_expression(&args.expression, Utc::now())?;
    println!("{}", format.format(instant));

    Ok(())
}
