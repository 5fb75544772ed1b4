use argot_common::args::ArgumentMap;
use argot_common::error::{Error, Reason, Result};
use tracing::debug;

use super::Bounds;

/// Validates an integer argument against inclusive bounds. Absent or empty means `0`.
pub fn validate_int(value: Option<&str>, name: &str, bounds: Bounds<i64>) -> Result<i64> {
    let Some(value) = super::present(value) else {
        return Ok(0);
    };

    let int = value
        .trim()
        .parse::<i64>()
        .map_err(|_| Error::invalid(name, value, Reason::NotInteger))?;

    if let Some(low) = bounds.low.filter(|low| int < *low) {
        return Err(Error::invalid(name, value, Reason::BelowMinimum(low.to_string())));
    }
    if let Some(high) = bounds.high.filter(|high| int > *high) {
        return Err(Error::invalid(name, value, Reason::AboveMaximum(high.to_string())));
    }

    debug!("{name} = {int}");
    Ok(int)
}

pub fn validate_int_arg(args: &ArgumentMap, name: &str, bounds: Bounds<i64>) -> Result<i64> {
    validate_int(args.text(name), name, bounds)
}
