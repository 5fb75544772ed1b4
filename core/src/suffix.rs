//! # Suffix Quantities
//!
//! Parses `<digits>` or `<digits><unit>` against a table of unit multipliers.
//!
//! * **Size**: `M` (MiB) and `G` (GiB), converted to bytes.
//! * **Interval**: `M` (minutes) and `H` (hours), converted to seconds.
//!
//! Bounds are given in the caller's default unit, so `low = 512` with default
//! unit `M` means 512 MiB.

use argot_common::args::ArgumentMap;
use argot_common::error::{Error, Reason, Result};
use tracing::debug;

use crate::validators::{Bounds, present};

/// Unit characters and their multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixTable {
    units: &'static [(char, u64)],
}

pub const SIZE_SUFFIXES: SuffixTable = SuffixTable::new(&[('M', 1 << 20), ('G', 1 << 30)]);
pub const INTERVAL_SUFFIXES: SuffixTable = SuffixTable::new(&[('M', 60), ('H', 3600)]);

impl SuffixTable {
    pub const fn new(units: &'static [(char, u64)]) -> Self {
        Self { units }
    }

    pub fn multiplier(&self, unit: char) -> Option<u64> {
        self.units
            .iter()
            .find_map(|(u, mult)| (*u == unit).then_some(*mult))
    }

    /// Parses `value`, falling back to `default_unit` when no suffix is given.
    ///
    /// Absent or empty means `None`, which is distinct from zero.
    pub fn parse(
        &self,
        value: Option<&str>,
        name: &str,
        default_unit: char,
        bounds: Bounds<u64>,
    ) -> Result<Option<u64>> {
        let Some(value) = present(value) else {
            return Ok(None);
        };

        let default_mult = self
            .multiplier(default_unit)
            .ok_or_else(|| Error::invalid(name, value, Reason::IllegalSuffix(default_unit)))?;

        let (digits, mult) = match value.chars().next_back() {
            Some(unit) if !unit.is_ascii_digit() => {
                let mult = self
                    .multiplier(unit)
                    .ok_or_else(|| Error::invalid(name, value, Reason::IllegalSuffix(unit)))?;
                (&value[..value.len() - unit.len_utf8()], mult)
            }
            _ => (value, default_mult),
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::invalid(name, value, Reason::Malformed));
        }

        let converted = digits
            .parse::<u64>()
            .ok()
            .and_then(|base| base.checked_mul(mult))
            .ok_or_else(|| Error::invalid(name, value, Reason::Overflow))?;

        if let Some(low) = bounds.low.filter(|low| converted < low.saturating_mul(default_mult)) {
            return Err(Error::invalid(
                name,
                value,
                Reason::BelowMinimum(format!("{low}{default_unit}")),
            ));
        }
        if let Some(high) = bounds
            .high
            .filter(|high| converted > high.saturating_mul(default_mult))
        {
            return Err(Error::invalid(
                name,
                value,
                Reason::AboveMaximum(format!("{high}{default_unit}")),
            ));
        }

        debug!("{name} = {converted}");
        Ok(Some(converted))
    }
}

/// Validates a size in bytes. Supports `M` and `G` suffixes.
pub fn validate_size(
    value: Option<&str>,
    name: &str,
    default_unit: char,
    bounds: Bounds<u64>,
) -> Result<Option<u64>> {
    SIZE_SUFFIXES.parse(value, name, default_unit, bounds)
}

pub fn validate_size_arg(
    args: &ArgumentMap,
    name: &str,
    default_unit: char,
    bounds: Bounds<u64>,
) -> Result<Option<u64>> {
    validate_size(args.text(name), name, default_unit, bounds)
}

/// Validates an interval in seconds. Supports `M` and `H` suffixes.
pub fn validate_interval(
    value: Option<&str>,
    name: &str,
    default_unit: char,
    bounds: Bounds<u64>,
) -> Result<Option<u64>> {
    INTERVAL_SUFFIXES.parse(value, name, default_unit, bounds)
}

pub fn validate_interval_arg(
    args: &ArgumentMap,
    name: &str,
    default_unit: char,
    bounds: Bounds<u64>,
) -> Result<Option<u64>> {
    validate_interval(args.text(name), name, default_unit, bounds)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
