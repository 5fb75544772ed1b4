//! # Argot Core
//!
//! Validators that turn raw command-line strings into typed, range-checked
//! values for downstream API calls.
//!
//! * **[`validators`]**: boolean, integer, choice, and network arguments.
//! * **[`suffix`]**: `<number><unit>` quantities (sizes, intervals).
//! * **[`service`]**: ports, port ranges, and symbolic service names.
//! * **[`multival`]**: comma-separated values expanded to a fixed count.
//! * **[`naming`]**: unique `<prefix>-<n>` name allocation.
//! * **[`lookup`]**: name-or-id resolution against a caller's catalog.
//!
//! Every validator has a bare-value form taking `Option<&str>` and an `_arg`
//! form reading the same field from an [`ArgumentMap`].

pub mod lookup;
pub mod multival;
pub mod naming;
pub mod service;
pub mod suffix;
pub mod validators;

pub use argot_common::args::{ArgValue, ArgumentMap};
pub use argot_common::error::{Error, Reason, Result};
