//! IPv4 and hardware address conversions.

pub mod cidr;
pub mod ipv4;
pub mod mac;

pub use cidr::{NetworkAddress, parse_cidr};
pub use ipv4::{inet_aton, inet_ntoa};
pub use mac::{mac_aton, mac_ntoa};
