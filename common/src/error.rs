//! # Validation Errors
//!
//! Every check in the workspace fails fast with one of the variants below.
//! Callers report the message to the user and abort with a non-zero status.

use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A value failed a grammar, bound, or membership check.
    #[error("{reason} for {name}: {value}")]
    InvalidArgument {
        name: String,
        value: String,
        reason: Reason,
    },

    /// A required value was not supplied.
    #[error("missing value for {name}")]
    MissingArgument { name: String },

    #[error("illegal {kind}: {literal}")]
    InvalidAddress { kind: AddressKind, literal: String },

    #[error("unknown service: {name}")]
    UnresolvedService { name: String },

    #[error("failed to read services database at `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn invalid(name: &str, value: &str, reason: Reason) -> Self {
        Self::InvalidArgument {
            name: name.to_string(),
            value: value.to_string(),
            reason,
        }
    }

    pub fn missing(name: &str) -> Self {
        Self::MissingArgument {
            name: name.to_string(),
        }
    }

    pub fn address(kind: AddressKind, literal: &str) -> Self {
        Self::InvalidAddress {
            kind,
            literal: literal.to_string(),
        }
    }

    /// The check that rejected an argument, if this is an `InvalidArgument`.
    pub fn reason(&self) -> Option<&Reason> {
        match self {
            Self::InvalidArgument { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

/// Why a validator rejected a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    NotBoolean,
    NotInteger,
    /// Lower bound, rendered with its unit where one applies.
    BelowMinimum(String),
    AboveMaximum(String),
    IllegalSuffix(char),
    Overflow,
    Malformed,
    NotAChoice,
    IllegalNetwork,
    IllegalPort,
    IllegalPortRange,
    UnknownService,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotBoolean => write!(f, "invalid boolean"),
            Self::NotInteger => write!(f, "invalid integer"),
            Self::BelowMinimum(low) => write!(f, "minimum is {low}"),
            Self::AboveMaximum(high) => write!(f, "maximum is {high}"),
            Self::IllegalSuffix(unit) => write!(f, "illegal suffix '{unit}'"),
            Self::Overflow => write!(f, "value too large"),
            Self::Malformed => write!(f, "invalid value"),
            Self::NotAChoice => write!(f, "invalid choice"),
            Self::IllegalNetwork => write!(f, "invalid network"),
            Self::IllegalPort => write!(f, "illegal port number"),
            Self::IllegalPortRange => write!(f, "illegal port range"),
            Self::UnknownService => write!(f, "unknown service"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    Ip,
    Mac,
    Network,
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Ip => "IP",
            Self::Mac => "Mac",
            Self::Network => "network",
        };
        f.write_str(label)
    }
}
