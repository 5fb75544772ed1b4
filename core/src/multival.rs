use argot_common::args::ArgumentMap;
use argot_common::error::{Error, Result};

/// Expands a comma-separated argument to exactly `count` values.
///
/// Short lists are padded by repeating their last value, long ones are truncated.
/// An absent value is a [`Error::MissingArgument`].
pub fn expand_multival(value: Option<&str>, name: &str, count: usize) -> Result<Vec<String>> {
    let value = value.ok_or_else(|| Error::missing(name))?;

    let mut parts: Vec<String> = value.split(',').map(str::to_string).collect();
    if let Some(last) = parts.last().cloned() {
        parts.resize(count, last);
    }

    Ok(parts)
}

pub fn expand_multival_arg(args: &ArgumentMap, name: &str, count: usize) -> Result<Vec<String>> {
    expand_multival(args.text(name), name, count)
}
