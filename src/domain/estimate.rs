use serde::{Deserialize, Serialize};
use strum::Display;

/// Which predictor produced an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EstimateSource {
    Model,
    Heuristic,
}

/// Estimated consumption for one time slot, in kWh, rounded to a tenth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyEstimate {
    pub kwh: f64,
    pub source: EstimateSource,
}

impl EnergyEstimate {
    pub fn new(kwh: f64, source: EstimateSource) -> Self {
        Self {
            kwh: round_to_tenth(kwh),
            source,
        }
    }
}

/// Round to one decimal place.
///
/// Rounds the exact binary value once: `52.45` (stored just above the tie)
/// becomes `52.5`, `41.15` (just below) becomes `41.1`.
pub fn round_to_tenth(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}
