//! # Argot Protocols
//!
//! Service-name lookups. The [`services::PortNameResolver`] trait is the
//! capability the service validator is handed; [`services::ServicesDb`]
//! implements it over `/etc/services`-formatted data.

pub mod services;

pub use services::{PortNameResolver, ServicesDb};
