//! # Services Database
//!
//! Reads the `/etc/services` format:
//!
//! ```text
//! # name   port/proto   aliases...
//! http     80/tcp       www www-http   # WorldWideWeb HTTP
//! ```
//!
//! Lookups mirror the C library: port-to-name answers the first entry listed
//! for that port regardless of protocol, and name-to-port also matches aliases.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use argot_common::error::{Error, Result};
use tracing::{debug, warn};

pub const SYSTEM_SERVICES_PATH: &str = "/etc/services";

/// Resolves between port numbers and symbolic service names.
///
/// A port-to-name miss is recoverable (callers synthesize a name),
/// a name-to-port miss is not.
pub trait PortNameResolver {
    fn port_to_name(&self, port: u16) -> Option<String>;
    fn name_to_port(&self, name: &str) -> Option<u16>;
}

impl<T: PortNameResolver + ?Sized> PortNameResolver for &T {
    fn port_to_name(&self, port: u16) -> Option<String> {
        (**self).port_to_name(port)
    }

    fn name_to_port(&self, name: &str) -> Option<u16> {
        (**self).name_to_port(name)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ServicesDb {
    by_port: HashMap<u16, String>,
    by_name: HashMap<String, u16>,
}

impl ServicesDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses services data. Malformed lines are skipped.
    pub fn parse(content: &str) -> Self {
        let mut db = Self::new();

        for (lineno, raw) in content.lines().enumerate() {
            let line = raw.split('#').next().unwrap_or_default().trim();
            if line.is_empty() {
                continue;
            }

            match parse_entry(line) {
                Some((name, port, aliases)) => {
                    db.insert(name, port);
                    for alias in aliases {
                        db.by_name.entry(alias.to_string()).or_insert(port);
                    }
                }
                None => debug!("skipping malformed services line {}: {raw}", lineno + 1),
            }
        }

        db
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })?;

        let db = Self::parse(&content);
        debug!("loaded {} services from {}", db.len(), path.display());
        Ok(db)
    }

    /// Loads `path`, or an empty database if it cannot be read.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(db) => db,
            Err(Error::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                warn!("{} not found, service names will not resolve", path.display());
                Self::new()
            }
            Err(e) => {
                warn!("{e}");
                Self::new()
            }
        }
    }

    /// Loads `/etc/services`, or an empty database if it cannot be read.
    pub fn system() -> Self {
        Self::load_or_empty(SYSTEM_SERVICES_PATH)
    }

    /// Registers `name` for `port`. Earlier registrations win.
    pub fn insert(&mut self, name: &str, port: u16) {
        self.by_port.entry(port).or_insert_with(|| name.to_string());
        self.by_name.entry(name.to_string()).or_insert(port);
    }

    /// Number of distinct names, aliases included.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl PortNameResolver for ServicesDb {
    fn port_to_name(&self, port: u16) -> Option<String> {
        self.by_port.get(&port).cloned()
    }

    fn name_to_port(&self, name: &str) -> Option<u16> {
        self.by_name.get(name).copied()
    }
}

fn parse_entry(line: &str) -> Option<(&str, u16, impl Iterator<Item = &str>)> {
    let mut fields = line.split_whitespace();
    let name = fields.next()?;
    let (port, proto) = fields.next()?.split_once('/')?;
    if proto.is_empty() {
        return None;
    }
    let port = port.parse::<u16>().ok()?;
    Some((name, port, fields))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = "\
# Network services, Internet style
tcpmux          1/tcp                           # TCP port service multiplexer
ssh             22/tcp                          # SSH Remote Login Protocol
http            80/tcp          www             # WorldWideWeb HTTP
http            80/udp
kerberos        88/tcp          kerberos5 krb5  # Kerberos v5

bogus           notaport/tcp
noproto         99
https           443/tcp
";

    #[test]
    fn test_port_to_name() {
        let db = ServicesDb::parse(FIXTURE);
        assert_eq!(db.port_to_name(80).as_deref(), Some("http"));
        assert_eq!(db.port_to_name(22).as_deref(), Some("ssh"));
        assert_eq!(db.port_to_name(8080), None);
    }

    #[test]
    fn test_name_to_port_with_aliases() {
        let db = ServicesDb::parse(FIXTURE);
        assert_eq!(db.name_to_port("https"), Some(443));
        assert_eq!(db.name_to_port("www"), Some(80));
        assert_eq!(db.name_to_port("krb5"), Some(88));
        assert_eq!(db.name_to_port("gopher"), None);
    }

    #[test]
    fn test_comments_and_malformed_lines_are_skipped() {
        let db = ServicesDb::parse(FIXTURE);
        assert_eq!(db.name_to_port("bogus"), None);
        assert_eq!(db.name_to_port("noproto"), None);
        assert_eq!(db.name_to_port("#"), None);
        // tcpmux ssh http www kerberos kerberos5 krb5 https
        assert_eq!(db.len(), 8);
    }

    #[test]
    fn test_first_entry_wins() {
        let mut db = ServicesDb::new();
        db.insert("alpha", 1000);
        db.insert("beta", 1000);
        db.insert("alpha", 2000);
        assert_eq!(db.port_to_name(1000).as_deref(), Some("alpha"));
        assert_eq!(db.name_to_port("alpha"), Some(1000));
        assert_eq!(db.name_to_port("beta"), Some(1000));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ServicesDb::load("/nonexistent/argot/services").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_load_or_empty_missing_file() {
        let db = ServicesDb::load_or_empty("/nonexistent/argot/services");
        assert!(db.is_empty());
        assert_eq!(db.name_to_port("http"), None);
    }

    #[test]
    fn test_load_or_empty_reads_file() {
        let path = std::env::temp_dir().join(format!("argot-services-{}", std::process::id()));
        fs::write(&path, FIXTURE).unwrap();
        let db = ServicesDb::load_or_empty(&path);
        fs::remove_file(&path).unwrap();
        assert_eq!(db.name_to_port("ssh"), Some(22));
    }

    #[test]
    fn test_resolver_through_reference() {
        fn lookup(resolver: impl PortNameResolver) -> Option<u16> {
            resolver.name_to_port("ssh")
        }
        let db = ServicesDb::parse(FIXTURE);
        assert_eq!(lookup(&db), Some(22));
    }
}
