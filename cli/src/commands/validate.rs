use argot_core::multival::expand_multival;
use argot_core::naming::NameSet;
use argot_core::service::ServiceResolver;
use argot_core::suffix;
use argot_core::validators::{self, Bounds, NetworkArg, Selection};
use argot_protocols::ServicesDb;
use colored::*;
use tracing::debug;

use crate::terminal::print;

/// Field name reported in validation errors.
const FIELD: &str = "<value>";

pub fn boolean(value: Option<&str>) -> anyhow::Result<()> {
    let on = validators::validate_bool(value, FIELD)?;
    print::field("value", on);
    Ok(())
}

pub fn integer(value: Option<&str>, min: Option<i64>, max: Option<i64>) -> anyhow::Result<()> {
    let bounds = Bounds { low: min, high: max };
    let int = validators::validate_int(value, FIELD, bounds)?;
    print::field("value", int);
    Ok(())
}

pub fn size(
    value: Option<&str>,
    unit: char,
    min: Option<u64>,
    max: Option<u64>,
) -> anyhow::Result<()> {
    let bounds = Bounds { low: min, high: max };
    match suffix::validate_size(value, FIELD, unit, bounds)? {
        Some(bytes) => print::field("bytes", bytes),
        None => print::not_specified(),
    }
    Ok(())
}

pub fn interval(
    value: Option<&str>,
    unit: char,
    min: Option<u64>,
    max: Option<u64>,
) -> anyhow::Result<()> {
    let bounds = Bounds { low: min, high: max };
    match suffix::validate_interval(value, FIELD, unit, bounds)? {
        Some(seconds) => print::field("seconds", seconds),
        None => print::not_specified(),
    }
    Ok(())
}

pub fn choice(value: Option<&str>, choices: &[String], allow_query: bool) -> anyhow::Result<()> {
    let lowered: Vec<String> = choices.iter().map(|c| c.to_lowercase()).collect();
    let choices: Vec<&str> = lowered.iter().map(String::as_str).collect();

    match validators::validate_enum(value, FIELD, &choices, allow_query)? {
        Some(Selection::Choice(choice)) => print::field("value", choice),
        Some(Selection::Query) => {
            for choice in &choices {
                print::print(&format!(" {} {}", "-".bright_black(), choice.green()));
            }
        }
        None => print::not_specified(),
    }
    Ok(())
}

pub fn network(value: Option<&str>) -> anyhow::Result<()> {
    match validators::validate_network(value, FIELD)? {
        Some(NetworkArg::Dhcp) => print::field("mode", "dhcp"),
        Some(NetworkArg::Static(net)) => {
            let (network, netmask) = net.to_dotted();
            print::field("network", network);
            print::field("netmask", netmask);
        }
        None => print::not_specified(),
    }
    Ok(())
}

pub fn service(value: Option<&str>, services: ServicesDb) -> anyhow::Result<()> {
    let resolver = ServiceResolver::new(services);
    let spec = resolver.validate(value, FIELD)?;
    print::field("name", spec.name);
    print::field("value", spec.value);
    print::field("raw", spec.raw);
    Ok(())
}

pub fn multival(value: Option<&str>, count: usize) -> anyhow::Result<()> {
    let values = expand_multival(value, FIELD, count)?;
    for (idx, value) in values.iter().enumerate() {
        print::field(&idx.to_string(), value);
    }
    Ok(())
}

pub fn name(prefix: &str, existing: Vec<String>) -> anyhow::Result<()> {
    let mut names: NameSet = existing.into_iter().collect();
    let name = names.allocate(prefix);
    print::field("name", name);

    let mut in_use: Vec<&str> = names.iter().collect();
    in_use.sort_unstable();
    debug!("names in use: {}", in_use.join(", "));
    Ok(())
}
