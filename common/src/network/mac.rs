use pnet::util::MacAddr;

use crate::error::{AddressKind, Error, Result};

const MAC_MASK: u64 = 0xffff_ffff_ffff;

/// Converts a Mac address (`aa:bb:cc:dd:ee:ff`) to a 48-bit integer.
///
/// Six colon-separated two-digit hex octets are required; either case is accepted.
pub fn mac_aton(s: &str) -> Result<u64> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 6 {
        return Err(Error::address(AddressKind::Mac, s));
    }

    parts.iter().try_fold(0u64, |acc, part| -> Result<u64> {
        let octet = parse_hex_octet(part).ok_or_else(|| Error::address(AddressKind::Mac, s))?;
        Ok((acc << 8) | u64::from(octet))
    })
}

/// Converts a 48-bit integer to a lowercase Mac address. Bits above 48 are ignored.
pub fn mac_ntoa(mac: u64) -> String {
    to_mac_addr(mac).to_string()
}

pub fn to_mac_addr(mac: u64) -> MacAddr {
    let b = (mac & MAC_MASK).to_be_bytes();
    MacAddr::new(b[2], b[3], b[4], b[5], b[6], b[7])
}

fn parse_hex_octet(part: &str) -> Option<u8> {
    if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u8::from_str_radix(part, 16).ok()
}
