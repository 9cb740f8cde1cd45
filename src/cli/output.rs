//! The stdout line consumed by the calling application.
//!
//! Callers scan stdout for `Predicted energy consumption:` and parse the
//! number after it, so the wording and the one-decimal rendering are fixed.

use std::io::{self, Write};

use crate::domain::EnergyEstimate;

pub const PREFIX: &str = "Predicted energy consumption:";

pub fn format_estimate(estimate: &EnergyEstimate) -> String {
    format!("{PREFIX} {:.1} kWh", estimate.kwh)
}

/// Write the single result line and flush.
pub fn write_estimate<W: Write>(out: &mut W, estimate: &EnergyEstimate) -> io::Result<()> {
    writeln!(out, "{}", format_estimate(estimate))?;
    out.flush()
}
