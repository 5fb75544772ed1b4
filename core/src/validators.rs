//! Argument validators.
//!
//! Absent and empty values are treated alike: each validator documents what
//! it returns for "not specified".

pub mod boolean;
pub mod choice;
pub mod integer;
pub mod network;

pub use boolean::{validate_bool, validate_bool_arg};
pub use choice::{Selection, validate_enum, validate_enum_arg};
pub use integer::{validate_int, validate_int_arg};
pub use network::{NetworkArg, validate_network, validate_network_arg};

/// Optional inclusive bounds on a numeric argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds<T> {
    pub low: Option<T>,
    pub high: Option<T>,
}

impl<T> Bounds<T> {
    pub const fn none() -> Self {
        Self {
            low: None,
            high: None,
        }
    }

    pub const fn new(low: T, high: T) -> Self {
        Self {
            low: Some(low),
            high: Some(high),
        }
    }

    pub const fn at_least(low: T) -> Self {
        Self {
            low: Some(low),
            high: None,
        }
    }

    pub const fn at_most(high: T) -> Self {
        Self {
            low: None,
            high: Some(high),
        }
    }
}

impl<T> Default for Bounds<T> {
    fn default() -> Self {
        Self::none()
    }
}

/// `None` for absent or empty input.
pub(crate) fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
