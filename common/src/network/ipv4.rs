use std::net::Ipv4Addr;

use crate::error::{AddressKind, Error, Result};

/// Converts a dotted quad (e.g. `10.0.0.1`) to its big-endian integer.
///
/// Exactly four decimal components are required and each must fit an octet.
pub fn inet_aton(s: &str) -> Result<u32> {
    let parts: Vec<&str> = s.split('.').collect();
    if parts.len() != 4 {
        return Err(Error::address(AddressKind::Ip, s));
    }

    let mut octets = [0u8; 4];
    for (octet, part) in octets.iter_mut().zip(&parts) {
        *octet = parse_octet(part).ok_or_else(|| Error::address(AddressKind::Ip, s))?;
    }

    Ok(u32::from(Ipv4Addr::from(octets)))
}

/// Converts an integer to its canonical dotted quad.
pub fn inet_ntoa(addr: u32) -> String {
    Ipv4Addr::from(addr).to_string()
}

fn parse_octet(part: &str) -> Option<u8> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse::<u8>().ok()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
