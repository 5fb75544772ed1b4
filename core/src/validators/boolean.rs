use argot_common::args::{ArgValue, ArgumentMap};
use argot_common::error::{Error, Reason, Result};

const TRUTHY: &[&str] = &["y", "yes", "1", "on", "enabled"];
const FALSY: &[&str] = &["n", "no", "0", "off", "disabled"];

/// Validates a boolean argument. Absent or empty means `false`.
///
/// Accepts (any case) `y`, `yes`, `1`, `on`, `enabled` and
/// `n`, `no`, `0`, `off`, `disabled`.
pub fn validate_bool(value: Option<&str>, name: &str) -> Result<bool> {
    let Some(value) = super::present(value) else {
        return Ok(false);
    };

    let lower = value.to_ascii_lowercase();
    if FALSY.contains(&lower.as_str()) {
        Ok(false)
    } else if TRUTHY.contains(&lower.as_str()) {
        Ok(true)
    } else {
        Err(Error::invalid(name, value, Reason::NotBoolean))
    }
}

/// Like [`validate_bool`], but a plain flag in `args` is taken as is.
pub fn validate_bool_arg(args: &ArgumentMap, name: &str) -> Result<bool> {
    match args.get(name) {
        Some(ArgValue::Flag(on)) => Ok(*on),
        Some(ArgValue::Text(value)) => validate_bool(Some(value), name),
        None => Ok(false),
    }
}
