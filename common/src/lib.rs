//! # Argot Common
//!
//! Types shared by the validators and the command-line front-end:
//!
//! * **[`error`]**: the single error type every check fails with.
//! * **[`args`]**: the flat argument map handed over by the CLI layer.
//! * **[`network`]**: dotted-quad, Mac and CIDR conversions.
//! * **[`config`]**: credentials and flags common to all commands.

pub mod args;
pub mod config;
pub mod error;
pub mod network;

pub use error::{Error, Result};
