use argot_common::args::ArgumentMap;
use argot_common::error::{Error, Reason, Result};
use argot_common::network::{NetworkAddress, parse_cidr};

pub const DHCP: &str = "dhcp";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkArg {
    /// Use dynamic address assignment.
    Dhcp,
    Static(NetworkAddress),
}

/// Validates a network argument: either `dhcp` or `address/bits`.
///
/// Absent or empty means `None`.
pub fn validate_network(value: Option<&str>, name: &str) -> Result<Option<NetworkArg>> {
    let Some(value) = super::present(value) else {
        return Ok(None);
    };

    if value == DHCP {
        return Ok(Some(NetworkArg::Dhcp));
    }

    let network =
        parse_cidr(value).map_err(|_| Error::invalid(name, value, Reason::IllegalNetwork))?;
    Ok(Some(NetworkArg::Static(network)))
}

pub fn validate_network_arg(args: &ArgumentMap, name: &str) -> Result<Option<NetworkArg>> {
    validate_network(args.text(name), name)
}
