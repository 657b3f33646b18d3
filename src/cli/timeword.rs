use anyhow::{anyhow, bail};
use chrono::{DateTime, Duration, Utc};

use crate::Result;

const FORWARDS_TIMEWORDS: [&str; 4] = ["later", "fromnow", "from-now", "future"];
const BACKWARDS_TIMEWORDS: [&str; 2] = ["ago", "back"];

/// Output flavors for a UTC instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFormat {
    Iso,
    Unix,
}

impl TimeFormat {
    pub fn format(&self, instant: DateTime<Utc>) -> String {
        match self {
            TimeFormat::Iso => instant.format("%Y-%m-%dT%H:%M:%S").to_string(),
            TimeFormat::Unix => instant.timestamp().to_string(),
        }
    }
}

/// Signed offset for expressions like `3hours later` or `1day ago`.
pub fn generate_delta(digits: i64, unit: &str, timeword: &str) -> Result<Duration> {
    let delta = if FORWARDS_TIMEWORDS.contains(&timeword) {
        digits
    } else if BACKWARDS_TIMEWORDS.contains(&timeword) {
        -digits
    } else {
        bail!("Invalid timeword {timeword}")
    };

    let duration = match unit {
        "minutes" | "mins" | "min" | "m" => Duration::try_minutes(delta),
        "hours" | "hrs" | "h" => Duration::try_hours(delta),
        "days" | "dys" | "day" | "d" => Duration::try_days(delta),
        _ => bail!("Invalid unit {unit}"),
    };

    duration.ok_or_else(|| anyhow!("Invalid amount {digits}{unit}, out of range"))
}

/// Splits an amount like `3hours` into its digits and unit suffix.
fn parse_amount(amount: &str) -> Result<(i64, &str)> {
    let split = amount
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(amount.len());
    let (digits, unit) = amount.split_at(split);

    if digits.is_empty() || unit.is_empty() {
        bail!("Invalid time expression {amount}, expected digits followed by a unit");
    }

    Ok((digits.parse()?, unit))
}

/// Evaluates a time expression relative to `now`: either `now` itself or an
/// amount plus a timeword, e.g. `3hours later`, `1day ago`.
pub fn eval_expression(parts: &[String], now: DateTime<Utc>) -> Result<DateTime<Utc>> {
    match parts {
        [word] if word == "now" => Ok(now),
        [amount, timeword] => {
            let (digits, unit) = parse_amount(amount)?;
            let delta = generate_delta(digits, unit, timeword)?;
            now.checked_add_signed(delta)
                .ok_or_else(|| anyhow!("Invalid amount {amount}, out of range"))
        }
        _ => bail!("Invalid time expression, try `now`, `3hours later` or `1day ago`"),
    }
}
