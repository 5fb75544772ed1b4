use argot_common::args::ArgumentMap;
use argot_common::error::{Error, Reason, Result};

/// Sentinel asking the caller to list the valid choices.
pub const QUERY: &str = "?";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The user passed `?`.
    Query,
    /// A valid choice, lowercased.
    Choice(String),
}

/// Validates `value` against lowercase `choices`, ignoring case.
///
/// With `allow_query`, a bare `?` yields [`Selection::Query`]. Absent or empty means `None`.
pub fn validate_enum(
    value: Option<&str>,
    name: &str,
    choices: &[&str],
    allow_query: bool,
) -> Result<Option<Selection>> {
    let Some(value) = super::present(value) else {
        return Ok(None);
    };

    if allow_query && value == QUERY {
        return Ok(Some(Selection::Query));
    }

    let lower = value.to_lowercase();
    if !choices.contains(&lower.as_str()) {
        return Err(Error::invalid(name, value, Reason::NotAChoice));
    }

    Ok(Some(Selection::Choice(lower)))
}

pub fn validate_enum_arg(
    args: &ArgumentMap,
    name: &str,
    choices: &[&str],
    allow_query: bool,
) -> Result<Option<Selection>> {
    validate_enum(args.text(name), name, choices, allow_query)
}
