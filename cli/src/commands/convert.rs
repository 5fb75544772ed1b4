use argot_common::network::{ipv4, mac};

use crate::terminal::print;

pub fn inet_aton(addr: &str) -> anyhow::Result<()> {
    let int = ipv4::inet_aton(addr)?;
    print::field("integer", int);
    Ok(())
}

pub fn inet_ntoa(value: u32) -> anyhow::Result<()> {
    print::field("address", ipv4::inet_ntoa(value));
    Ok(())
}

pub fn mac_aton(addr: &str) -> anyhow::Result<()> {
    let int = mac::mac_aton(addr)?;
    print::field("integer", int);
    Ok(())
}

pub fn mac_ntoa(value: u64) -> anyhow::Result<()> {
    if value > 0xffff_ffff_ffff {
        anyhow::bail!("Mac addresses are 48 bits wide, got {value}");
    }
    print::field("address", mac::mac_ntoa(value));
    Ok(())
}
