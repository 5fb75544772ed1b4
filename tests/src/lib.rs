//! Cross-crate tests: validators fed from an argument map, and service
//! resolution against services files on disk.

#[cfg(test)]
mod arguments;
#[cfg(test)]
mod services;
