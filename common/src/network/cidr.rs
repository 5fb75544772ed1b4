//! # CIDR Networks
//!
//! Parses `address/bits` notation into the network it denotes.
//!
//! The address is masked with the prefix, so `192.168.1.10/24` yields the
//! network `192.168.1.0` with netmask `255.255.255.0`.

use std::fmt;
use std::net::Ipv4Addr;

use pnet::ipnetwork::Ipv4Network;

use crate::error::{AddressKind, Error, Result};
use crate::network::ipv4;

/// A masked IPv4 network. `network == address & netmask` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetworkAddress {
    pub network: Ipv4Addr,
    pub netmask: Ipv4Addr,
    pub bits: u8,
}

impl NetworkAddress {
    /// Masks `addr` with a `bits`-long prefix.
    pub fn new(addr: Ipv4Addr, bits: u8) -> Result<Self> {
        let block = Ipv4Network::new(addr, bits)
            .map_err(|_| Error::address(AddressKind::Network, &format!("{addr}/{bits}")))?;

        Ok(Self {
            network: block.network(),
            netmask: block.mask(),
            bits: block.prefix(),
        })
    }

    /// `(network, netmask)` as canonical dotted quads.
    pub fn to_dotted(&self) -> (String, String) {
        (self.network.to_string(), self.netmask.to_string())
    }
}

impl fmt::Display for NetworkAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network, self.bits)
    }
}

/// Netmask with the top `bits` bits set.
pub fn netmask(bits: u8) -> u32 {
    match bits {
        0 => 0,
        b if b >= 32 => u32::MAX,
        b => u32::MAX << (32 - b),
    }
}

/// Parses CIDR notation like "192.168.1.10/24".
pub fn parse_cidr(s: &str) -> Result<NetworkAddress> {
    let illegal = || Error::address(AddressKind::Network, s);

    let Some((addr_str, bits_str)) = s.split_once('/') else {
        return Err(illegal());
    };

    let addr = ipv4::inet_aton(addr_str).map_err(|_| illegal())?;

    let bits = bits_str
        .parse::<u8>()
        .ok()
        .filter(|b| *b <= 32 && bits_str.bytes().all(|c| c.is_ascii_digit()))
        .ok_or_else(illegal)?;

    NetworkAddress::new(Ipv4Addr::from(addr), bits).map_err(|_| illegal())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
