//! # Service Arguments
//!
//! A service argument is one of, tried in order:
//!
//! * a port number (`80`), named after the service database or `p-<port>`;
//! * a port range (`100-200`), named `r-<start>+<length>`;
//! * a symbolic service name (`https`), resolved to its port.

use std::fmt;

use argot_common::args::ArgumentMap;
use argot_common::error::{Error, Reason, Result};
use argot_protocols::PortNameResolver;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceValue {
    Port(u16),
    /// Inclusive, `start < end`.
    Range { start: u16, end: u16 },
}

impl fmt::Display for ServiceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Port(port) => write!(f, "{port}"),
            Self::Range { start, end } => write!(f, "{start}-{end}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSpec {
    pub name: String,
    pub value: ServiceValue,
    /// The argument exactly as given.
    pub raw: String,
}

impl ServiceSpec {
    fn new(name: impl Into<String>, value: ServiceValue, raw: &str) -> Self {
        Self {
            name: name.into(),
            value,
            raw: raw.to_string(),
        }
    }
}

/// Service lookups against an injected [`PortNameResolver`].
pub struct ServiceResolver<R> {
    resolver: R,
}

impl<R: PortNameResolver> ServiceResolver<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Service name for `port`, or `port-<port>` if there is none.
    pub fn service_name(&self, port: u16) -> String {
        self.resolver
            .port_to_name(port)
            .unwrap_or_else(|| format!("port-{port}"))
    }

    pub fn service_port(&self, name: &str) -> Result<u16> {
        self.resolver
            .name_to_port(name)
            .ok_or_else(|| Error::UnresolvedService {
                name: name.to_string(),
            })
    }

    /// Validates a service argument. Absent or empty is a [`Error::MissingArgument`].
    pub fn validate(&self, value: Option<&str>, name: &str) -> Result<ServiceSpec> {
        let value = value
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::missing(name))?;

        let spec = if is_digits(value) {
            let port = parse_port(value)
                .ok_or_else(|| Error::invalid(name, value, Reason::IllegalPort))?;
            let service = self
                .resolver
                .port_to_name(port)
                .unwrap_or_else(|| format!("p-{port}"));
            ServiceSpec::new(service, ServiceValue::Port(port), value)
        } else if let Some((start, end)) = split_range(value) {
            let (start, end) = parse_port(start)
                .zip(parse_port(end))
                .filter(|(start, end)| end > start)
                .ok_or_else(|| Error::invalid(name, value, Reason::IllegalPortRange))?;
            let service = format!("r-{start}+{}", end - start);
            ServiceSpec::new(service, ServiceValue::Range { start, end }, value)
        } else {
            let port = self
                .service_port(value)
                .map_err(|_| Error::invalid(name, value, Reason::UnknownService))?;
            ServiceSpec::new(value, ServiceValue::Port(port), value)
        };

        debug!("{name} = {} ({})", spec.name, spec.value);
        Ok(spec)
    }

    pub fn validate_arg(&self, args: &ArgumentMap, name: &str) -> Result<ServiceSpec> {
        self.validate(args.text(name), name)
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// A port in `1..=65535`.
fn parse_port(s: &str) -> Option<u16> {
    s.parse::<u16>().ok().filter(|port| *port >= 1)
}

fn split_range(s: &str) -> Option<(&str, &str)> {
    s.split_once('-')
        .filter(|(start, end)| is_digits(start) && is_digits(end))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
